//! Service names and tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::macros::impl_tag;
use crate::snippets::SERVICE_SNIPPET;
use crate::{NameError, TagKind};

static VALID_SERVICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{SERVICE_SNIPPET}$")).expect("service name pattern must compile")
});

/// Returns whether `name` is a valid service name.
#[must_use]
pub fn is_valid_service(name: &str) -> bool {
    VALID_SERVICE.is_match(name)
}

/// Tag for a service, e.g. `service-wordpress`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceTag {
    suffix: String,
}

impl_tag!(ServiceTag, Service);

impl ServiceTag {
    /// Returns the tag for the service with the given name.
    pub fn new(name: &str) -> Result<Self, NameError> {
        if !is_valid_service(name) {
            return Err(NameError::invalid_name(TagKind::Service, name));
        }
        Ok(Self::from_validated(name))
    }

    /// Caller guarantees `name` already matched the service grammar.
    pub(crate) fn from_validated(name: &str) -> Self {
        Self {
            suffix: name.to_string(),
        }
    }

    pub(crate) fn from_tag_suffix(suffix: &str) -> Result<Self, NameError> {
        Self::new(suffix)
    }

    /// Returns the service name.
    #[must_use]
    pub fn id(&self) -> String {
        self.suffix.clone()
    }

    /// Returns the service name without allocating.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_names() {
        for name in ["wordpress", "my-sql", "a", "x1", "foo-2bar"] {
            assert!(is_valid_service(name), "expected {name:?} to be valid");
        }
        for name in ["", "1abc", "my_sql", "MySQL", "foo-", "-foo", "foo-2", "foo--bar"] {
            assert!(!is_valid_service(name), "expected {name:?} to be invalid");
        }
    }

    #[test]
    fn test_service_tag() {
        let tag = ServiceTag::new("my-sql").unwrap();
        assert_eq!(tag.to_string(), "service-my-sql");
        assert_eq!(tag.id(), "my-sql");
        assert_eq!(tag.name(), "my-sql");
        assert_eq!(ServiceTag::parse("service-my-sql").unwrap(), tag);
    }

    #[test]
    fn test_service_tag_invalid() {
        let err = ServiceTag::new("foo-2").unwrap_err();
        assert_eq!(err.to_string(), r#""foo-2" is not a valid service name"#);

        let err = ServiceTag::parse("unit-mysql-0").unwrap_err();
        assert_eq!(err.to_string(), r#""unit-mysql-0" is not a valid service tag"#);
    }
}
