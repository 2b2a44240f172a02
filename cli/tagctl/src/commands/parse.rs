//! Tag parsing command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tagspace_names::{parse_tag, Tag, TagKind};

use crate::output::print_output;

use super::CommandContext;

/// Parse tags of any kind.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Tags to parse, e.g. `unit-mysql-0` or `machine-0-lxc-1`.
    #[arg(required = true)]
    tags: Vec<String>,

    /// Require every tag to be of this kind.
    #[arg(long)]
    kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct TagView {
    #[tabled(rename = "Tag")]
    tag: String,

    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Tag> for TagView {
    fn from(tag: &Tag) -> Self {
        Self {
            tag: tag.to_string(),
            kind: tag.kind().to_string(),
            id: tag.id(),
        }
    }
}

impl ParseCommand {
    fn parse_all(&self) -> Result<Vec<TagView>> {
        let expected = match &self.kind {
            Some(kind) => Some(
                TagKind::from_prefix(kind)
                    .with_context(|| format!("unknown tag kind {kind:?}"))?,
            ),
            None => None,
        };

        self.tags
            .iter()
            .map(|s| {
                let tag = parse_tag(s)?;
                if let Some(expected) = expected {
                    if tag.kind() != expected {
                        return Err(tagspace_names::NameError::InvalidTag {
                            tag: s.clone(),
                            kind: Some(expected),
                        }
                        .into());
                    }
                }
                Ok(TagView::from(&tag))
            })
            .collect()
    }

    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let views = self.parse_all()?;
        print_output(&views, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(tags: &[&str], kind: Option<&str>) -> ParseCommand {
        ParseCommand {
            tags: tags.iter().map(|s| s.to_string()).collect(),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_mixed_kinds() {
        let views = cmd(&["unit-mysql-0", "machine-0-lxc-1", "service-wordpress"], None)
            .parse_all()
            .unwrap();
        let kinds: Vec<_> = views.iter().map(|v| v.kind.as_str()).collect();
        assert_eq!(kinds, vec!["unit", "machine", "service"]);
        assert_eq!(views[1].id, "0/lxc/1");
    }

    #[test]
    fn test_parse_enforces_kind() {
        let err = cmd(&["unit-mysql-0", "machine-0"], Some("unit"))
            .parse_all()
            .unwrap_err();
        assert_eq!(err.to_string(), r#""machine-0" is not a valid unit tag"#);
    }

    #[test]
    fn test_parse_unknown_kind_flag() {
        let err = cmd(&["unit-mysql-0"], Some("relation")).parse_all().unwrap_err();
        assert!(err.to_string().contains("unknown tag kind"));
    }

    #[test]
    fn test_parse_invalid_tag() {
        let err = cmd(&["bogus"], None).parse_all().unwrap_err();
        assert_eq!(err.to_string(), r#""bogus" is not a valid tag"#);
    }
}
