//! Unit names and tags.
//!
//! A unit name is `{service}/{number}`, e.g. `mysql/0`. Its tag is
//! `unit-{service}-{number}`, e.g. `unit-mysql-0`.

use std::sync::LazyLock;

use regex::Regex;

use crate::macros::impl_tag;
use crate::snippets::{NUMBER_SNIPPET, SERVICE_SNIPPET};
use crate::{NameError, ServiceTag, TagKind};

static VALID_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^({SERVICE_SNIPPET})/{NUMBER_SNIPPET}$"))
        .expect("unit name pattern must compile")
});

/// Returns whether `name` is a valid unit name.
#[must_use]
pub fn is_valid_unit(name: &str) -> bool {
    VALID_UNIT.is_match(name)
}

/// Returns the name of the service that owns the named unit.
pub fn unit_service(unit_name: &str) -> Result<String, NameError> {
    VALID_UNIT
        .captures(unit_name)
        .and_then(|caps| caps.get(1))
        .map(|service| service.as_str().to_string())
        .ok_or_else(|| NameError::invalid_name(TagKind::Unit, unit_name))
}

/// Tag for a single unit of a service.
///
/// Internally holds `{service}-{number}`. Only the last hyphen separates the
/// number, since service names may contain hyphens themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitTag {
    suffix: String,
}

impl_tag!(UnitTag, Unit);

impl UnitTag {
    /// Returns the tag for the unit with the given name.
    pub fn from_unit_name(unit_name: &str) -> Result<Self, NameError> {
        tag_from_unit_name(unit_name).ok_or_else(|| NameError::invalid_name(Self::KIND, unit_name))
    }

    /// Returns the tag for a unit name known to be valid, such as a literal.
    ///
    /// Prefer [`UnitTag::from_unit_name`] for anything that comes from input.
    ///
    /// # Panics
    ///
    /// Panics if `unit_name` is not a valid unit name.
    #[must_use]
    pub fn from_unit_name_or_panic(unit_name: &str) -> Self {
        match Self::from_unit_name(unit_name) {
            Ok(tag) => tag,
            Err(err) => panic!("{err}"),
        }
    }

    pub(crate) fn from_tag_suffix(suffix: &str) -> Result<Self, NameError> {
        Self::from_unit_name(&unit_tag_suffix_to_id(suffix))
    }

    /// Returns the unit name, e.g. `mysql/0`.
    #[must_use]
    pub fn id(&self) -> String {
        unit_tag_suffix_to_id(&self.suffix)
    }

    /// Returns the tag of the service this unit belongs to.
    #[must_use]
    pub fn service(&self) -> ServiceTag {
        let (service, _) = self.split();
        ServiceTag::from_validated(service)
    }

    /// Returns the unit number within its service, as written.
    #[must_use]
    pub fn number(&self) -> &str {
        let (_, number) = self.split();
        number
    }

    fn split(&self) -> (&str, &str) {
        // Construction guarantees a hyphen before the number.
        self.suffix
            .rsplit_once('-')
            .unwrap_or((self.suffix.as_str(), ""))
    }
}

fn tag_from_unit_name(unit_name: &str) -> Option<UnitTag> {
    // Replace only the last "/" with "-".
    let i = unit_name.rfind('/')?;
    if i == 0 || !is_valid_unit(unit_name) {
        return None;
    }
    let suffix = format!("{}-{}", &unit_name[..i], &unit_name[i + 1..]);
    Some(UnitTag { suffix })
}

fn unit_tag_suffix_to_id(suffix: &str) -> String {
    // Replace only the last "-" with "/", as service names may contain
    // hyphens.
    match suffix.rfind('-') {
        Some(i) if i > 0 => format!("{}/{}", &suffix[..i], &suffix[i + 1..]),
        _ => suffix.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
