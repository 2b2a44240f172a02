//! Macros for wiring concrete tag types into the shared [`Tag`](crate::Tag).

/// Implements the tag-string plumbing shared by every concrete tag type.
///
/// The type must be a struct with a `suffix: String` field holding the part
/// of the tag after `{kind}-`, and an inherent `id()` method. This generates:
/// - A `KIND` constant
/// - `parse()` to narrow an arbitrary tag string to this kind
/// - `Display` (the canonical tag string) and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations using the tag string
/// - `Entity`, and conversions to and from [`Tag`](crate::Tag)
///
/// # Example
///
/// ```ignore
/// impl_tag!(UnitTag, Unit);
///
/// let tag: UnitTag = "unit-mysql-0".parse()?;
/// assert_eq!(tag.id(), "mysql/0");
/// ```
macro_rules! impl_tag {
    ($name:ident, $variant:ident) => {
        impl $name {
            /// The kind discriminator for this tag type.
            pub const KIND: $crate::TagKind = $crate::TagKind::$variant;

            /// Returns the kind of this tag.
            #[must_use]
            pub const fn kind(&self) -> $crate::TagKind {
                Self::KIND
            }

            /// Parses a tag string of this kind.
            ///
            /// The string is resolved through [`parse_tag`](crate::parse_tag)
            /// and then narrowed; a well-formed tag of any other kind is
            /// rejected.
            pub fn parse(tag: &str) -> Result<Self, $crate::NameError> {
                $crate::parse_tag(tag)
                    .ok()
                    .and_then(|parsed| Self::try_from(parsed).ok())
                    .ok_or_else(|| $crate::NameError::invalid_tag(tag, Some(Self::KIND)))
            }
        }

        impl $crate::Entity for $name {
            fn kind(&self) -> $crate::TagKind {
                Self::KIND
            }

            fn id(&self) -> String {
                $name::id(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}-{}", Self::KIND, self.suffix)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::NameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for $crate::Tag {
            fn from(tag: $name) -> Self {
                $crate::Tag::$variant(tag)
            }
        }

        impl TryFrom<$crate::Tag> for $name {
            type Error = $crate::Tag;

            fn try_from(tag: $crate::Tag) -> Result<Self, Self::Error> {
                match tag {
                    $crate::Tag::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_tag;
