//! # tagspace-names
//!
//! Entity names and their kind-prefixed tags.
//!
//! ## Design Principles
//!
//! - Names are what humans type; tags are what systems exchange
//! - Every tag has a canonical string representation with strict parsing
//! - Names and tags convert losslessly in both directions
//! - Tags are typed per entity kind so a machine tag can never be used
//!   where a unit tag is expected
//!
//! ## Tag Format
//!
//! All tags use a kind-prefixed format: `{kind}-{suffix}`
//!
//! | Kind      | Name        | Tag                 |
//! |-----------|-------------|---------------------|
//! | `unit`    | `mysql/0`   | `unit-mysql-0`      |
//! | `service` | `wordpress` | `service-wordpress` |
//! | `machine` | `0/lxc/1`   | `machine-0-lxc-1`   |
//!
//! Use the concrete type (`UnitTag::parse`) when the expected kind is known,
//! and [`parse_tag`] when it is not.

mod error;
mod machine;
mod macros;
mod service;
pub mod snippets;
mod tag;
mod unit;

pub use error::NameError;
pub use machine::{is_valid_machine, MachineTag};
pub use service::{is_valid_service, ServiceTag};
pub use tag::{parse_tag, tag_kind, Entity, Tag, TagKind};
pub use unit::{is_valid_unit, unit_service, UnitTag};
