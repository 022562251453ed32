use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod util;

#[derive(Parser, Debug)]
#[command(
    name = "platsel",
    version,
    about = "Pick cross-compile target platforms from OS and architecture filters",
    long_about = "platsel — resolve OS/arch filters against a catalog of supported platforms.\n\nPrefix a name with '!' to exclude it.\n\nExamples:\n  platsel resolve --os 'linux darwin'\n  platsel resolve --os '!windows' --arch amd64\n  platsel resolve --osarch 'linux/arm64 !darwin/amd64'\n  platsel catalog --format json"
)]
pub struct PlatselCli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the platforms selected by the given filters
    #[command(alias = "r")]
    Resolve {
        /// Space-separated OS names to include, or '!name' to exclude (repeatable)
        #[arg(long = "os", value_name = "LIST")]
        os: Vec<String>,
        /// Space-separated architectures to include, or '!name' to exclude (repeatable)
        #[arg(long = "arch", value_name = "LIST")]
        arch: Vec<String>,
        /// Space-separated os/arch pairs to include, or '!os/arch' to exclude (repeatable)
        #[arg(long = "osarch", value_name = "LIST")]
        osarch: Vec<String>,
        /// Read supported platforms from this JSON or YAML file
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        #[arg(long, short = 'f', default_value = "text")]
        format: String,
        /// Report active filters and dropped pairs on stderr
        #[arg(long, short = 'v')]
        verbose: bool,
    },
    /// Print the effective catalog of supported platforms
    Catalog {
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        #[arg(long, short = 'f', default_value = "text")]
        format: String,
        /// Report the catalog source on stderr
        #[arg(long, short = 'v')]
        verbose: bool,
    },
}

impl PlatselCli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => {
                self.print_help();
                Ok(())
            }
            Some(Commands::Resolve { os, arch, osarch, catalog, format, verbose }) => {
                commands::cmd_resolve(commands::ResolveOptions {
                    os: os.clone(),
                    arch: arch.clone(),
                    osarch: osarch.clone(),
                    catalog: catalog.clone(),
                    format: format.clone(),
                    verbose: *verbose,
                })
            }
            Some(Commands::Catalog { catalog, format, verbose }) => {
                commands::cmd_catalog(catalog.clone(), format.clone(), *verbose)
            }
        }
    }

    fn print_help(&self) {
        println!("platsel - pick cross-compile target platforms\n");
        println!(
            "Commands:\n  resolve [--os LIST] [--arch LIST] [--osarch LIST] [--catalog FILE] [--format text|json|yaml] [--verbose]\n  catalog [--catalog FILE] [--format text|json|yaml] [--verbose]"
        );
    }
}
