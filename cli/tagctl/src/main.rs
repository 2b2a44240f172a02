//! tagctl - CLI for entity names and tags
//!
//! Converts unit names to tags and back, validates names, and parses tags
//! of any registered kind.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(2);
        }
    };
    logging::init(&config);
    tracing::debug!(?config, "configuration loaded");

    // Run the command
    if let Err(e) = cli.run(config) {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
