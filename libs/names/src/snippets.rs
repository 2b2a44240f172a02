//! Regular expression fragments shared by the name grammars.
//!
//! Snippets are unanchored and use non-capturing groups so they can be
//! composed into larger patterns without shifting capture indices.

/// A service name: lowercase, starts with a letter, hyphen-separated
/// segments that each contain at least one letter.
pub const SERVICE_SNIPPET: &str = "(?:[a-z][a-z0-9]*(?:-[a-z0-9]*[a-z][a-z0-9]*)*)";

/// A non-negative integer without leading zeros.
pub const NUMBER_SNIPPET: &str = "(?:0|[1-9][0-9]*)";

/// A container type such as `lxc` or `kvm`.
pub const CONTAINER_TYPE_SNIPPET: &str = "[a-z]+";

/// A machine id: a number followed by any depth of `/{type}/{number}`
/// container segments.
pub const MACHINE_SNIPPET: &str = "(?:(?:0|[1-9][0-9]*)(?:/[a-z]+/(?:0|[1-9][0-9]*))*)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_snippet_is_composed_from_parts() {
        let composed = format!(
            "(?:{NUMBER_SNIPPET}(?:/{CONTAINER_TYPE_SNIPPET}/{NUMBER_SNIPPET})*)"
        );
        assert_eq!(MACHINE_SNIPPET, composed);
    }
}
