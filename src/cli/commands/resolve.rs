use crate::cli::util::{render_platforms, status, warn_mixed_case, OutputFormat};
use crate::colors::*;
use crate::config;
use crate::filter::FlagValue;
use crate::resolver::PlatformFilter;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub os: Vec<String>,
    pub arch: Vec<String>,
    pub osarch: Vec<String>,
    pub catalog: Option<PathBuf>,
    pub format: String,
    pub verbose: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            os: Vec::new(),
            arch: Vec::new(),
            osarch: Vec::new(),
            catalog: None,
            format: "text".into(),
            verbose: false,
        }
    }
}

/// Feed every flag occurrence through its accumulator, in command-line order.
pub fn build_filter(opts: &ResolveOptions) -> Result<PlatformFilter> {
    let mut filter = PlatformFilter::new();
    for raw in &opts.os {
        filter.os_value().set(raw)?;
    }
    for raw in &opts.arch {
        filter.arch_value().set(raw)?;
    }
    for raw in &opts.osarch {
        filter.os_arch_value().set(raw)?;
    }
    Ok(filter)
}

pub fn cmd_resolve(opts: ResolveOptions) -> Result<()> {
    let format: OutputFormat = opts.format.parse()?;
    let filter = build_filter(&opts)?;
    let source = config::locate_catalog(opts.catalog.as_deref());
    let supported = config::load_catalog(&source)?;
    warn_mixed_case(&supported);
    let platforms = filter.platforms(&supported);

    if opts.verbose {
        status(&format!("{C_GRAY}[platsel]{C_RESET} catalog: {source}"));
        status(&format!(
            "{gray}[platsel]{reset} os: {dim}{os}{reset} arch: {dim}{arch}{reset} osarch: {dim}{osarch}{reset}",
            gray = C_GRAY,
            dim = C_DIM,
            reset = C_RESET,
            os = filter.os,
            arch = filter.arch,
            osarch = filter.os_arch
        ));
        for missing in filter.unsupported(&supported) {
            status(&format!(
                "{C_GRAY}[platsel]{C_RESET} {C_YELLOW}skip{C_RESET} {missing} is not in the catalog"
            ));
        }
        let color = if platforms.is_empty() { C_RED } else { C_GREEN };
        status(&format!(
            "{gray}[platsel]{reset} {color}{count} of {total}{reset} platforms selected",
            gray = C_GRAY,
            reset = C_RESET,
            count = platforms.len(),
            total = supported.len()
        ));
    }

    // An empty text listing prints nothing rather than a blank line.
    if !platforms.is_empty() || format != OutputFormat::Text {
        println!("{}", render_platforms(&platforms, format)?);
    }
    Ok(())
}
