//! Meta-schema core: declare an entity's fields once, tagged with the
//! interaction kinds they take part in, and get three independently
//! constructible shapes (Create, Edit, Get) with shared validation.

#[macro_use]
mod macros;

pub mod error;
pub mod intent;
pub mod model;
pub mod shape;
pub mod traits;
pub mod validate;
pub mod value;

pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        args,
        error::{ConstructionError, DefinitionError, Error, ShapeError, ValidationError},
        intent::{IntentConstructor, Param},
        model::{FieldDescriptor, InteractionKind, InteractionKinds},
        shape::{Arguments, EntityBuilder, EntitySchema, Shape, ShapeInput, ShapeModel},
        traits::FieldSource,
        validate::{FieldIssues, ValidateIssue, Validator, ValidatorRegistry},
        value::{Record, Value, ValueKind},
    };
}
