//! CLI commands.

mod parse;
mod unit;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{Config, LogFormat};
use crate::output::OutputFormat;

/// tagctl - Convert and validate entity names and tags.
#[derive(Debug, Parser)]
#[command(name = "tagctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (overrides TAGCTL_FORMAT).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log format (overrides TAGCTL_LOG_FORMAT).
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a unit name (mysql/0) to its tag (unit-mysql-0).
    UnitTag(unit::UnitTagCommand),

    /// Convert a unit tag (unit-mysql-0) back to its name (mysql/0).
    UnitName(unit::UnitNameCommand),

    /// Print the service that owns a unit.
    Service(unit::ServiceCommand),

    /// Check whether unit names are valid.
    Validate(validate::ValidateCommand),

    /// Parse tags of any kind.
    Parse(parse::ParseCommand),
}

impl Cli {
    /// Resolve configuration from the environment and this invocation's flags.
    pub fn config(&self) -> Result<Config> {
        Ok(Config::from_env()?.with_overrides(self.format, self.log_format))
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: config.format,
        };

        match self.command {
            Commands::UnitTag(cmd) => cmd.run(&ctx),
            Commands::UnitName(cmd) => cmd.run(&ctx),
            Commands::Service(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Parse(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}
