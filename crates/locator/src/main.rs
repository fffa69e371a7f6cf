//! Service Locator - Entry Point
//!
//! Binary entry point for the `locator` authoring tool. Lives in the facade
//! crate so the bundled providers are linked in.

// Force-link locator-providers to ensure linkme registrations are included
extern crate locator_providers;

use clap::Parser;
use locator::cli::{Cli, execute};
use locator_infrastructure::config::ConfigLoader;
use locator_infrastructure::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let stdout = std::io::stdout();
    execute(&cli.command, &config, &mut stdout.lock())?;
    Ok(())
}
