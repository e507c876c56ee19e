//! Synthesized shapes and the construction protocol they share.

mod construct;
mod entity;
mod synthesize;


pub use construct::{Arguments, ShapeInput};
pub use entity::EntitySchema;
pub use synthesize::{EntityBuilder, synthesize};

use crate::{
    error::ShapeError,
    model::{FieldDescriptor, InteractionKind},
    traits::FieldSource,
    validate::ValidatorRegistry,
    value::{Record, Value},
};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::sync::Arc;

///
/// ShapeModel
///
/// The record type one interaction kind of an entity synthesizes to.
/// Holds exactly the fields tagged with that kind, in declaration order,
/// and the validator bindings whose field it contains.
///

#[derive(Debug)]
pub struct ShapeModel {
    entity: &'static str,
    kind: InteractionKind,
    name: String,
    fields: Vec<FieldDescriptor>,
    validators: ValidatorRegistry,
    allow_extra: bool,
}

impl ShapeModel {
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    #[must_use]
    pub const fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Diagnostic name, e.g. `User.Create`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldDescriptor::name)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[must_use]
    pub const fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    #[must_use]
    pub const fn allows_extra(&self) -> bool {
        self.allow_extra
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    ///
    /// CONSTRUCTION
    ///

    /// Build an instance from any construction input.
    pub fn build(self: &Arc<Self>, input: ShapeInput<'_>) -> Result<Shape, ShapeError> {
        let values = construct::assemble(self, input)?;

        Ok(Shape {
            model: Arc::clone(self),
            values,
        })
    }

    /// Build from another shape or a plain record, taking every field this
    /// shape declares by name.
    pub fn project(self: &Arc<Self>, source: &dyn FieldSource) -> Result<Shape, ShapeError> {
        self.build(ShapeInput::Project(source))
    }

    /// Build from positional and keyword arguments.
    pub fn construct(self: &Arc<Self>, args: Arguments) -> Result<Shape, ShapeError> {
        self.build(ShapeInput::Args(args))
    }
}

///
/// Shape
///
/// A validated instance of a shape model.
/// Holds one value per model field, in declaration order, and cannot be
/// mutated; a changed shape is a new construction.
///

#[derive(Clone, Debug)]
pub struct Shape {
    model: Arc<ShapeModel>,
    values: Vec<Value>,
}

impl Shape {
    #[must_use]
    pub fn model(&self) -> &Arc<ShapeModel> {
        &self.model
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.model.name()
    }

    #[must_use]
    pub fn kind(&self) -> InteractionKind {
        self.model.kind()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.model.position(name).map(|i| &self.values[i])
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.model.field_names().zip(self.values.iter())
    }

    #[must_use]
    pub fn to_record(&self) -> Record {
        self.iter().map(|(name, value)| (name, value.clone())).collect()
    }

    #[must_use]
    pub fn into_record(self) -> Record {
        self.model.field_names().zip(self.values).collect()
    }

    /// Rerun construction against this instance's own values.
    pub fn revalidate(&self) -> Result<Self, ShapeError> {
        self.model.project(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FieldSource for Shape {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.model.name == other.model.name && self.values == other.values
    }
}

impl Eq for Shape {}

impl From<Shape> for Value {
    fn from(shape: Shape) -> Self {
        Self::Record(shape.into_record())
    }
}

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }

        map.end()
    }
}
