use crate::{
    error::DefinitionError,
    model::{FieldDescriptor, InteractionKind, validate_field_name},
    shape::{EntitySchema, ShapeModel},
    validate::{Validator, ValidatorRegistry},
};
use std::{collections::BTreeSet, sync::Arc};

///
/// synthesize
///
/// Partition an entity's fields by interaction kind and build its three
/// shape models. Fields keep declaration order inside every shape, and a
/// validator binding is carried by every shape containing its field.
///

pub fn synthesize(
    entity: &'static str,
    fields: Vec<FieldDescriptor>,
    validators: ValidatorRegistry,
) -> Result<EntitySchema, DefinitionError> {
    synthesize_with(entity, fields, &validators, false)
}

fn synthesize_with(
    entity: &'static str,
    fields: Vec<FieldDescriptor>,
    validators: &ValidatorRegistry,
    allow_extra: bool,
) -> Result<EntitySchema, DefinitionError> {
    validate_field_name(entity)?;

    let mut seen = BTreeSet::new();
    for field in &fields {
        if !seen.insert(field.name()) {
            return Err(DefinitionError::DuplicateField {
                owner: entity.to_string(),
                field: field.name().to_string(),
            });
        }
    }

    validators.check_fields(entity, &fields)?;

    let model = |kind: InteractionKind| {
        let fields: Vec<FieldDescriptor> = fields
            .iter()
            .filter(|f| f.participates_in(kind))
            .cloned()
            .collect();

        let mut bound = ValidatorRegistry::new();
        for binding in validators {
            if fields.iter().any(|f| f.name() == binding.field()) {
                bound.push(binding.clone());
            }
        }

        Arc::new(ShapeModel {
            entity,
            kind,
            name: format!("{entity}.{kind}"),
            fields,
            validators: bound,
            allow_extra,
        })
    };

    Ok(EntitySchema::new(
        entity,
        model(InteractionKind::Create),
        model(InteractionKind::Edit),
        model(InteractionKind::Get),
    ))
}

///
/// EntityBuilder
///
/// Declaration front end over `synthesize`.
///
/// ```ignore
/// let schema = EntityBuilder::new("Message")
///     .field(FieldDescriptor::new("text", ValueKind::Text, InteractionKinds::ALL)?)
///     .validator("text", "len", len::Range::new(1, 4096))
///     .build()?;
/// ```
///

#[derive(Debug)]
pub struct EntityBuilder {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
    validators: ValidatorRegistry,
    allow_extra: bool,
}

impl EntityBuilder {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            validators: ValidatorRegistry::new(),
            allow_extra: false,
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn validator(
        mut self,
        field: &'static str,
        name: &'static str,
        validator: impl Validator + 'static,
    ) -> Self {
        self.validators.bind(field, name, validator);
        self
    }

    /// Unknown keyword arguments are dropped instead of rejected.
    #[must_use]
    pub const fn allow_extra(mut self) -> Self {
        self.allow_extra = true;
        self
    }

    pub fn build(self) -> Result<EntitySchema, DefinitionError> {
        synthesize_with(self.name, self.fields, &self.validators, self.allow_extra)
    }
}
