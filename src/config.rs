use crate::error::{PlatformError, Result};
use crate::platform::{default_catalog, Platform};
use anyhow::Context;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const CATALOG_ENV: &str = "PLATSEL_CATALOG";

const CONFIG_FILE_NAMES: &[&str] = &["catalog.json", "catalog.yaml", "catalog.yml"];

/// Where the effective catalog was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Flag(PathBuf),
    Env(PathBuf),
    UserConfig(PathBuf),
    BuiltIn,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Flag(p) => write!(f, "{} (--catalog)", p.display()),
            CatalogSource::Env(p) => write!(f, "{} (${})", p.display(), CATALOG_ENV),
            CatalogSource::UserConfig(p) => write!(f, "{}", p.display()),
            CatalogSource::BuiltIn => f.write_str("built-in"),
        }
    }
}

pub fn user_config_dir() -> Option<PathBuf> {
    let mut dir = dirs::config_dir()?;
    dir.push("platsel");
    Some(dir)
}

/// Pick the catalog source: explicit path, then `$PLATSEL_CATALOG`, then the
/// user config dir, then the built-in list.
pub fn locate_catalog(explicit: Option<&Path>) -> CatalogSource {
    if let Some(path) = explicit {
        return CatalogSource::Flag(path.to_path_buf());
    }
    if let Some(val) = std::env::var_os(CATALOG_ENV) {
        if !val.is_empty() {
            return CatalogSource::Env(PathBuf::from(val));
        }
    }
    if let Some(dir) = user_config_dir() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return CatalogSource::UserConfig(candidate);
            }
        }
    }
    CatalogSource::BuiltIn
}

pub fn load_catalog(source: &CatalogSource) -> Result<Vec<Platform>> {
    match source {
        CatalogSource::Flag(p) | CatalogSource::Env(p) | CatalogSource::UserConfig(p) => {
            load_catalog_file(p)
        }
        CatalogSource::BuiltIn => Ok(default_catalog()),
    }
}

/// Read a list of unique `os/arch` strings; `.json` files use JSON, everything else YAML.
pub fn load_catalog_file(path: &Path) -> Result<Vec<Platform>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read catalog {}", path.display()))?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let platforms: Vec<Platform> = if is_json {
        serde_json::from_str(&data).with_context(|| format!("parse catalog {}", path.display()))?
    } else {
        serde_yaml::from_str(&data).with_context(|| format!("parse catalog {}", path.display()))?
    };
    if platforms.is_empty() {
        return Err(PlatformError::EmptyCatalog(path.to_path_buf()).into());
    }
    for (idx, p) in platforms.iter().enumerate() {
        if platforms[..idx].contains(p) {
            return Err(PlatformError::DuplicatePlatform(p.to_string()))
                .with_context(|| format!("check catalog {}", path.display()));
        }
    }
    Ok(platforms)
}

/// Entries no filter can name, since filter tokens are always lower-cased.
pub fn mixed_case_entries(platforms: &[Platform]) -> Vec<&Platform> {
    platforms
        .iter()
        .filter(|p| p.os != p.os.to_lowercase() || p.arch != p.arch.to_lowercase())
        .collect()
}
