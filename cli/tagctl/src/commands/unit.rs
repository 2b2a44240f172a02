//! Unit name and tag conversion commands.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tagspace_names::{unit_service, UnitTag};

use crate::output::{print_output, OutputFormat};

use super::CommandContext;

/// Convert a unit name to its tag.
#[derive(Debug, Args)]
pub struct UnitTagCommand {
    /// Unit name, e.g. `mysql/0`.
    name: String,
}

/// Convert a unit tag to its name.
#[derive(Debug, Args)]
pub struct UnitNameCommand {
    /// Unit tag, e.g. `unit-mysql-0`.
    tag: String,
}

/// Print the service that owns a unit.
#[derive(Debug, Args)]
pub struct ServiceCommand {
    /// Unit name, e.g. `mysql/0`.
    name: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct UnitView {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Tag")]
    tag: String,

    #[tabled(rename = "Service")]
    service: String,
}

impl From<&UnitTag> for UnitView {
    fn from(tag: &UnitTag) -> Self {
        Self {
            name: tag.id(),
            tag: tag.to_string(),
            service: tag.service().id(),
        }
    }
}

/// Print a bare value in table mode, or the full view in JSON mode.
fn print_unit(view: UnitView, bare: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{bare}"),
        OutputFormat::Json => print_output(&[view], format),
    }
}

impl UnitTagCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let tag = UnitTag::from_unit_name(&self.name)?;
        tracing::debug!(name = %self.name, tag = %tag, "converted unit name");
        let view = UnitView::from(&tag);
        let bare = view.tag.clone();
        print_unit(view, &bare, ctx.format);
        Ok(())
    }
}

impl UnitNameCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let tag = UnitTag::parse(&self.tag)?;
        tracing::debug!(tag = %self.tag, name = %tag.id(), "converted unit tag");
        let view = UnitView::from(&tag);
        let bare = view.name.clone();
        print_unit(view, &bare, ctx.format);
        Ok(())
    }
}

impl ServiceCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let service = unit_service(&self.name)
            .with_context(|| format!("cannot determine service for {:?}", self.name))?;
        let tag = UnitTag::from_unit_name(&self.name)?;
        let view = UnitView::from(&tag);
        print_unit(view, &service, ctx.format);
        Ok(())
    }
}
