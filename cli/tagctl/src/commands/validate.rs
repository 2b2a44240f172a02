//! Unit name validation command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tagspace_names::{is_valid_unit, UnitTag};

use crate::error::CliError;
use crate::output::{print_output, print_success, OutputFormat};

use super::CommandContext;

/// Check whether unit names are valid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Unit names to check.
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Tag", display = "display_option")]
    tag: Option<String>,
}

fn display_option(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("-").to_string()
}

fn validate(names: &[String]) -> Vec<ValidationRow> {
    names
        .iter()
        .map(|name| {
            let valid = is_valid_unit(name);
            let tag = UnitTag::from_unit_name(name).ok().map(|t| t.to_string());
            if !valid {
                tracing::info!(name = %name, "invalid unit name");
            }
            ValidationRow {
                name: name.clone(),
                valid,
                tag,
            }
        })
        .collect()
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = validate(&self.names);
        let invalid = rows.iter().filter(|row| !row.valid).count();

        if invalid == 0 && ctx.format == OutputFormat::Table && rows.len() == 1 {
            print_success(&format!("{} is a valid unit name", rows[0].name));
        } else {
            print_output(&rows, ctx.format);
        }

        if invalid > 0 {
            return Err(CliError::ValidationFailed {
                invalid,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}
