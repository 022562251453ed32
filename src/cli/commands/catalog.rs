use crate::cli::util::{render_platforms, status, warn_mixed_case, OutputFormat};
use crate::colors::*;
use crate::config;
use anyhow::Result;
use std::path::PathBuf;

pub fn cmd_catalog(catalog: Option<PathBuf>, format: String, verbose: bool) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let source = config::locate_catalog(catalog.as_deref());
    let platforms = config::load_catalog(&source)?;
    warn_mixed_case(&platforms);
    if verbose {
        status(&format!(
            "{gray}[platsel]{reset} catalog: {source} {dim}({count} platforms){reset}",
            gray = C_GRAY,
            dim = C_DIM,
            reset = C_RESET,
            count = platforms.len()
        ));
    }
    println!("{}", render_platforms(&platforms, format)?);
    Ok(())
}
