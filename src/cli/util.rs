use crate::colors::{colors_enabled, strip_ansi, C_GRAY, C_RESET, C_YELLOW};
use crate::config::mixed_case_entries;
use crate::error::{PlatformError, Result};
use crate::platform::Platform;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = PlatformError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(PlatformError::UnknownFormat(raw.to_string())),
        }
    }
}

pub fn render_platforms(platforms: &[Platform], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Text => {
            platforms.iter().map(|p| p.to_string()).collect::<Vec<_>>().join("\n")
        }
        OutputFormat::Json => serde_json::to_string_pretty(platforms)?,
        OutputFormat::Yaml => serde_yaml::to_string(platforms)?.trim_end().to_string(),
    };
    Ok(out)
}

/// Write a `[platsel]` status line to stderr, uncolored under `NO_COLOR`.
pub fn status(line: &str) {
    if colors_enabled() {
        eprintln!("{line}");
    } else {
        eprintln!("{}", strip_ansi(line));
    }
}

pub fn warn_mixed_case(platforms: &[Platform]) {
    for p in mixed_case_entries(platforms) {
        status(&format!(
            "{C_GRAY}[platsel]{C_RESET} {C_YELLOW}warn{C_RESET} catalog entry {p} is not lower-case; filters cannot select it"
        ));
    }
}
