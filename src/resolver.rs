use crate::filter::{FilterList, OsArchList};
use crate::platform::Platform;

/// Filter state collected from `--os`, `--arch` and `--osarch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformFilter {
    pub os: FilterList,
    pub arch: FilterList,
    pub os_arch: OsArchList,
}

impl PlatformFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn os_value(&mut self) -> &mut FilterList {
        &mut self.os
    }

    pub fn arch_value(&mut self) -> &mut FilterList {
        &mut self.arch
    }

    pub fn os_arch_value(&mut self) -> &mut OsArchList {
        &mut self.os_arch
    }

    /// Resolve the filters against `supported`.
    ///
    /// With no inclusions at all the whole catalog is the starting point;
    /// otherwise only what the inclusions name. Exclusions are applied last,
    /// so `!foo` beats `foo`. Requested pairs missing from the catalog are
    /// dropped silently.
    pub fn platforms(&self, supported: &[Platform]) -> Vec<Platform> {
        let (include_os, ignore_os) = self.os.partition();
        let (include_arch, ignore_arch) = self.arch.partition();
        let (include_pair, ignore_pair) = self.os_arch.partition();

        let mut prefilter: Vec<Platform> = match (include_os.is_empty(), include_arch.is_empty()) {
            (false, false) => {
                let mut out = Vec::new();
                for os in &include_os {
                    for arch in &include_arch {
                        if let Some(p) = find(supported, os, arch) {
                            out.push(p.clone());
                        }
                    }
                }
                out
            }
            (false, true) => supported
                .iter()
                .filter(|p| include_os.contains(&p.os.as_str()))
                .cloned()
                .collect(),
            (true, false) => supported
                .iter()
                .filter(|p| include_arch.contains(&p.arch.as_str()))
                .cloned()
                .collect(),
            (true, true) if include_pair.is_empty() => supported.to_vec(),
            (true, true) => Vec::new(),
        };

        for pair in include_pair {
            if supported.contains(pair) && !prefilter.contains(pair) {
                prefilter.push(pair.clone());
            }
        }

        prefilter.retain(|p| {
            !ignore_os.contains(&p.os.as_str())
                && !ignore_arch.contains(&p.arch.as_str())
                && !ignore_pair.contains(&p)
        });
        prefilter
    }

    /// Explicitly requested pairs that `supported` does not contain.
    ///
    /// Only combinations named by both an OS and an arch inclusion, or by a
    /// pair inclusion, are reported; single-dimension filters never request
    /// a specific pair.
    pub fn unsupported(&self, supported: &[Platform]) -> Vec<Platform> {
        let (include_os, _) = self.os.partition();
        let (include_arch, _) = self.arch.partition();
        let (include_pair, _) = self.os_arch.partition();

        let mut missing = Vec::new();
        for os in &include_os {
            for arch in &include_arch {
                if find(supported, os, arch).is_none() {
                    missing.push(Platform::new(*os, *arch));
                }
            }
        }
        for pair in include_pair {
            if !supported.contains(pair) && !missing.contains(pair) {
                missing.push(pair.clone());
            }
        }
        missing
    }
}

fn find<'a>(supported: &'a [Platform], os: &str, arch: &str) -> Option<&'a Platform> {
    supported.iter().find(|p| p.os == os && p.arch == arch)
}
