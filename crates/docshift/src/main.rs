mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use commands::RelocateOptions;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    logging::init(cli.verbose);

    let options = RelocateOptions {
        dry_run: cli.dry_run,
        root_dir: cli.root_dir.as_deref(),
        exclude_dirs: &cli.exclude_dirs,
        config_path: cli.config.as_deref(),
        no_config: cli.no_config,
    };

    commands::Relocate::execute(&options).context("Failed to relocate documentation")?;

    Ok(())
}
