//! Machine ids and tags.
//!
//! A machine id is a number, optionally followed by nested container
//! segments: `0`, `0/lxc/1`, `0/lxc/1/kvm/0`. Every `/` becomes `-` in the
//! tag, so `0/lxc/1` is tagged `machine-0-lxc-1`.

use std::sync::LazyLock;

use regex::Regex;

use crate::macros::impl_tag;
use crate::snippets::MACHINE_SNIPPET;
use crate::{NameError, TagKind};

static VALID_MACHINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{MACHINE_SNIPPET}$")).expect("machine id pattern must compile")
});

/// Returns whether `id` is a valid machine id.
#[must_use]
pub fn is_valid_machine(id: &str) -> bool {
    VALID_MACHINE.is_match(id)
}

/// Tag for a machine or container.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MachineTag {
    suffix: String,
}

impl_tag!(MachineTag, Machine);

impl MachineTag {
    /// Returns the tag for the machine with the given id.
    pub fn new(id: &str) -> Result<Self, NameError> {
        if !is_valid_machine(id) {
            return Err(NameError::invalid_name(TagKind::Machine, id));
        }
        Ok(Self {
            suffix: id.replace('/', "-"),
        })
    }

    pub(crate) fn from_tag_suffix(suffix: &str) -> Result<Self, NameError> {
        Self::new(&suffix.replace('-', "/"))
    }

    /// Returns the machine id, e.g. `0/lxc/1`.
    #[must_use]
    pub fn id(&self) -> String {
        self.suffix.replace('-', "/")
    }

    /// Returns whether this tag refers to a container rather than a host.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.suffix.contains('-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_ids() {
        for id in ["0", "42", "0/lxc/1", "1/kvm/0/lxc/12"] {
            assert!(is_valid_machine(id), "expected {id:?} to be valid");
        }
        for id in ["", "01", "a", "0/lxc", "0/lxc/01", "0/LXC/1", "0-lxc-1", "/0"] {
            assert!(!is_valid_machine(id), "expected {id:?} to be invalid");
        }
    }

    #[test]
    fn test_machine_tag() {
        let tag = MachineTag::new("0/lxc/1").unwrap();
        assert_eq!(tag.to_string(), "machine-0-lxc-1");
        assert_eq!(tag.id(), "0/lxc/1");
        assert!(tag.is_container());
        assert!(!MachineTag::new("3").unwrap().is_container());
    }

    #[test]
    fn test_parse_machine_tag() {
        let tag = MachineTag::parse("machine-0-lxc-1").unwrap();
        assert_eq!(tag, MachineTag::new("0/lxc/1").unwrap());

        let err = MachineTag::parse("unit-mysql-0").unwrap_err();
        assert_eq!(err.to_string(), r#""unit-mysql-0" is not a valid machine tag"#);
    }

    #[test]
    fn test_machine_tag_invalid() {
        let err = MachineTag::new("0/lxc").unwrap_err();
        assert!(err.is_invalid_name());
        assert_eq!(err.to_string(), r#""0/lxc" is not a valid machine name"#);
    }
}
