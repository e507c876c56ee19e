//! Declarative building blocks: interaction kinds and field descriptors.
//!
//! - `model` declares *what exists* on an entity
//! - `shape` turns that into *what gets constructed*

mod field;
mod interaction;

pub use field::FieldDescriptor;
pub(crate) use field::validate_field_name;
pub use interaction::{InteractionKind, InteractionKinds};
