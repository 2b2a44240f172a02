//! The polymorphic tag and the kind registry that resolves tag strings.
//!
//! A tag string is `{kind}-{suffix}`. The kind prefix selects a registered
//! constructor, which validates the suffix and builds the concrete tag.

use std::fmt;
use std::str::FromStr;

use crate::{MachineTag, NameError, ServiceTag, UnitTag};

/// Capabilities shared by every concrete tag type.
///
/// `Display` yields the canonical tag string.
pub trait Entity: fmt::Display {
    /// The kind of entity this tag refers to.
    fn kind(&self) -> TagKind;

    /// The human-facing identifier of the entity, e.g. `mysql/0`.
    fn id(&self) -> String;
}

/// Entity kinds known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKind {
    Machine,
    Service,
    Unit,
}

impl TagKind {
    /// Every registered kind.
    pub const ALL: [TagKind; 3] = [TagKind::Machine, TagKind::Service, TagKind::Unit];

    /// The prefix used for this kind in tag strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TagKind::Machine => "machine",
            TagKind::Service => "service",
            TagKind::Unit => "unit",
        }
    }

    /// Resolves a kind prefix, returning `None` for unregistered kinds.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        registration(prefix).map(|r| r.kind)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag of any registered kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Machine(MachineTag),
    Service(ServiceTag),
    Unit(UnitTag),
}

impl Tag {
    /// Returns the kind of the wrapped tag.
    #[must_use]
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Machine(_) => TagKind::Machine,
            Tag::Service(_) => TagKind::Service,
            Tag::Unit(_) => TagKind::Unit,
        }
    }

    /// Returns the human-facing identifier of the wrapped tag.
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Tag::Machine(t) => t.id(),
            Tag::Service(t) => t.id(),
            Tag::Unit(t) => t.id(),
        }
    }
}

impl Entity for Tag {
    fn kind(&self) -> TagKind {
        Tag::kind(self)
    }

    fn id(&self) -> String {
        Tag::id(self)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Machine(t) => fmt::Display::fmt(t, f),
            Tag::Service(t) => fmt::Display::fmt(t, f),
            Tag::Unit(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl FromStr for Tag {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s)
    }
}

impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_tag(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Builds a concrete tag from the suffix that follows `{kind}-`.
type FromSuffix = fn(&str) -> Result<Tag, NameError>;

struct Registration {
    kind: TagKind,
    from_suffix: FromSuffix,
}

static REGISTRY: [Registration; 3] = [
    Registration {
        kind: TagKind::Machine,
        from_suffix: |suffix| MachineTag::from_tag_suffix(suffix).map(Tag::Machine),
    },
    Registration {
        kind: TagKind::Service,
        from_suffix: |suffix| ServiceTag::from_tag_suffix(suffix).map(Tag::Service),
    },
    Registration {
        kind: TagKind::Unit,
        from_suffix: |suffix| UnitTag::from_tag_suffix(suffix).map(Tag::Unit),
    },
];

fn registration(prefix: &str) -> Option<&'static Registration> {
    REGISTRY.iter().find(|r| r.kind.as_str() == prefix)
}

fn split_tag(tag: &str) -> Result<(&'static Registration, &str), NameError> {
    tag.split_once('-')
        .and_then(|(prefix, suffix)| registration(prefix).map(|r| (r, suffix)))
        .ok_or_else(|| {
            tracing::debug!(tag, "rejected tag with unknown kind");
            NameError::invalid_tag(tag, None)
        })
}

/// Returns the kind of a tag string without validating its suffix.
pub fn tag_kind(tag: &str) -> Result<TagKind, NameError> {
    split_tag(tag).map(|(r, _)| r.kind)
}

/// Parses a tag string of any registered kind.
///
/// Only canonical tag strings are accepted: `unit-mysql/0` names a valid
/// unit but is not how that unit's tag is written, so it is rejected.
pub fn parse_tag(tag: &str) -> Result<Tag, NameError> {
    let (registration, suffix) = split_tag(tag)?;

    let parsed = (registration.from_suffix)(suffix).map_err(|err| {
        tracing::debug!(tag, kind = %registration.kind, error = %err, "rejected tag suffix");
        NameError::invalid_tag(tag, Some(registration.kind))
    })?;

    if parsed.to_string() != tag {
        tracing::debug!(tag, canonical = %parsed, "rejected non-canonical tag");
        return Err(NameError::invalid_tag(tag, Some(registration.kind)));
    }

    Ok(parsed)
}

// =============================================================================
// Tests
// =============================================================================
