use anyhow::Result;
use platsel::cli::PlatselCli;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("platsel error: {:#}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = PlatselCli::parse();
    cli.run()
}
