//! Flag accumulators for OS, architecture and OS/arch pair filters.
//!
//! Every occurrence of a filter flag is handed to [`FlagValue::set`], which
//! splits it on whitespace and appends lower-cased tokens the list has not
//! seen yet. A leading `!` marks an exclusion; it is kept in the stored token
//! and only interpreted by the resolver.

use crate::error::Result;
use crate::platform::Platform;
use std::fmt;

/// A stateful flag target: one call per flag occurrence, rendered back for help output.
pub trait FlagValue: fmt::Display {
    fn set(&mut self, raw: &str) -> Result<()>;
}

/// Ordered, de-duplicated, lower-cased names for one dimension (OS or arch).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterList(Vec<String>);

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Split into (included, excluded) names, `!` stripped from the latter.
    pub fn partition(&self) -> (Vec<&str>, Vec<&str>) {
        let mut include = Vec::new();
        let mut exclude = Vec::new();
        for token in &self.0 {
            if let Some(stripped) = token.strip_prefix('!') {
                exclude.push(stripped);
            } else {
                include.push(token.as_str());
            }
        }
        (include, exclude)
    }
}

impl FlagValue for FilterList {
    fn set(&mut self, raw: &str) -> Result<()> {
        for token in raw.split_whitespace() {
            let token = token.to_lowercase();
            if !self.0.contains(&token) {
                self.0.push(token);
            }
        }
        Ok(())
    }
}

impl fmt::Display for FilterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for FilterList {
    /// Builds a list verbatim, without normalizing or de-duplicating.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Whole-pair filters such as `linux/arm64` or `!windows/386`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsArchList(Vec<(bool, Platform)>);

impl OsArchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn partition(&self) -> (Vec<&Platform>, Vec<&Platform>) {
        let mut include = Vec::new();
        let mut exclude = Vec::new();
        for (negated, platform) in &self.0 {
            if *negated {
                exclude.push(platform);
            } else {
                include.push(platform);
            }
        }
        (include, exclude)
    }
}

impl FlagValue for OsArchList {
    fn set(&mut self, raw: &str) -> Result<()> {
        for token in raw.split_whitespace() {
            let token = token.to_lowercase();
            let (negated, body) = match token.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, token.as_str()),
            };
            // Malformed pairs are skipped; the setter never fails.
            let Ok(platform) = body.parse::<Platform>() else {
                continue;
            };
            let entry = (negated, platform);
            if !self.0.contains(&entry) {
                self.0.push(entry);
            }
        }
        Ok(())
    }
}

impl fmt::Display for OsArchList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(negated, p)| if *negated { format!("!{p}") } else { p.to_string() })
            .collect();
        f.write_str(&rendered.join(" "))
    }
}
