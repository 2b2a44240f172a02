//! Error handling and display for the CLI.

use colored::Colorize;
use tagspace_names::{NameError, TagKind};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{invalid} of {total} names failed validation")]
    ValidationFailed { invalid: usize, total: usize },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(name_err) = err.downcast_ref::<NameError>() {
        return match name_err {
            NameError::InvalidName {
                kind: TagKind::Unit,
                ..
            } => Some("Hint: Unit names look like `mysql/0`: a service name, a slash, and a number."),
            NameError::InvalidName { .. } => None,
            NameError::InvalidTag {
                kind: Some(TagKind::Unit),
                ..
            } => Some("Hint: Unit tags look like `unit-mysql-0`."),
            NameError::InvalidTag { .. } => {
                Some("Hint: Tags look like `{kind}-{id}`, e.g. `unit-mysql-0` or `machine-0`.")
            }
        };
    }

    match err.downcast_ref::<CliError>() {
        Some(CliError::InvalidConfig { .. }) => {
            Some("Hint: Check the TAGCTL_* environment variables.")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagspace_names::UnitTag;

    #[test]
    fn test_hint_for_unit_name() {
        let err = anyhow::Error::new(UnitTag::from_unit_name("mysql").unwrap_err());
        assert!(hint_for(&err).unwrap().contains("mysql/0"));
    }

    #[test]
    fn test_hint_survives_context() {
        use anyhow::Context;

        let result: anyhow::Result<UnitTag> =
            UnitTag::parse("machine-0").context("failed to parse tag");
        let err = result.unwrap_err();
        assert!(hint_for(&err).unwrap().contains("unit-mysql-0"));
    }

    #[test]
    fn test_no_hint_for_validation_summary() {
        let err = anyhow::Error::new(CliError::ValidationFailed {
            invalid: 1,
            total: 2,
        });
        assert_eq!(hint_for(&err), None);
        assert_eq!(err.to_string(), "1 of 2 names failed validation");
    }
}
