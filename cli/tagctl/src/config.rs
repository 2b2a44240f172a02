//! Configuration for the CLI.
//!
//! Defaults come from environment variables; command-line flags override
//! them.

use anyhow::Result;
use clap::ValueEnum;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output format for command results.
    pub format: OutputFormat,

    /// Log filter directive (e.g. `warn`, `tagspace_names=debug`).
    pub log_filter: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_filter: "warn".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let format = match lookup("TAGCTL_FORMAT") {
            Some(value) => parse_enum("TAGCTL_FORMAT", value)?,
            None => defaults.format,
        };

        let log_format = match lookup("TAGCTL_LOG_FORMAT") {
            Some(value) => parse_enum("TAGCTL_LOG_FORMAT", value)?,
            None => defaults.log_format,
        };

        let log_filter = lookup("TAGCTL_LOG").unwrap_or(defaults.log_filter);

        Ok(Self {
            format,
            log_filter,
            log_format,
        })
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        log_format: Option<LogFormat>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(log_format) = log_format {
            self.log_format = log_format;
        }
        self
    }
}

fn parse_enum<T: ValueEnum>(var: &'static str, value: String) -> Result<T> {
    T::from_str(&value, true).map_err(|_| CliError::InvalidConfig { var, value }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_from_env_vars() {
        let config = Config::from_lookup(lookup(&[
            ("TAGCTL_FORMAT", "JSON"),
            ("TAGCTL_LOG", "tagspace_names=debug"),
            ("TAGCTL_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter, "tagspace_names=debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_format() {
        let err = Config::from_lookup(lookup(&[("TAGCTL_FORMAT", "yaml")])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidConfig {
                var: "TAGCTL_FORMAT",
                ..
            })
        ));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default().with_overrides(Some(OutputFormat::Json), None);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
