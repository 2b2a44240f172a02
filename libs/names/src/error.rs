//! Error types for name and tag parsing.

use thiserror::Error;

use crate::TagKind;

/// Errors that can occur when parsing or validating names and tags.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The human-facing name does not match the grammar for its kind.
    #[error("{name:?} is not a valid {kind} name")]
    InvalidName { kind: TagKind, name: String },

    /// The tag string is malformed, names an unknown kind, or resolves to a
    /// different kind than the one requested.
    #[error("{tag:?} is not a valid {}tag", kind_prefix(.kind))]
    InvalidTag {
        tag: String,
        kind: Option<TagKind>,
    },
}

fn kind_prefix(kind: &Option<TagKind>) -> String {
    kind.map(|k| format!("{k} ")).unwrap_or_default()
}

impl NameError {
    pub(crate) fn invalid_name(kind: TagKind, name: &str) -> Self {
        Self::InvalidName {
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn invalid_tag(tag: &str, kind: Option<TagKind>) -> Self {
        Self::InvalidTag {
            tag: tag.to_string(),
            kind,
        }
    }

    /// Returns true if this error rejects a human-facing name.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, NameError::InvalidName { .. })
    }

    /// Returns true if this error rejects a tag string.
    pub fn is_invalid_tag(&self) -> bool {
        matches!(self, NameError::InvalidTag { .. })
    }

    /// The offending input string.
    pub fn input(&self) -> &str {
        match self {
            NameError::InvalidName { name, .. } => name,
            NameError::InvalidTag { tag, .. } => tag,
        }
    }
}
