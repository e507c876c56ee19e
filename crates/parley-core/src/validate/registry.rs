use crate::{error::DefinitionError, model::FieldDescriptor, validate::Validator};
use std::{fmt, sync::Arc};

///
/// ValidatorBinding
/// A named validator attached to one field.
///

#[derive(Clone)]
pub struct ValidatorBinding {
    field: &'static str,
    name: &'static str,
    validator: Arc<dyn Validator>,
}

impl ValidatorBinding {
    pub fn new(field: &'static str, name: &'static str, validator: impl Validator + 'static) -> Self {
        Self {
            field,
            name,
            validator: Arc::new(validator),
        }
    }

    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }
}

impl fmt::Debug for ValidatorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBinding")
            .field("field", &self.field)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

///
/// ValidatorRegistry
///
/// Ordered validator bindings for one entity.
/// Binding does not check the field name; fields may be declared after
/// their validators, so the check happens at synthesis.
///

#[derive(Clone, Debug, Default)]
pub struct ValidatorRegistry {
    bindings: Vec<ValidatorBinding>,
}

impl ValidatorRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn bind(
        &mut self,
        field: &'static str,
        name: &'static str,
        validator: impl Validator + 'static,
    ) -> &mut Self {
        self.bindings
            .push(ValidatorBinding::new(field, name, validator));
        self
    }

    pub(crate) fn push(&mut self, binding: ValidatorBinding) {
        self.bindings.push(binding);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidatorBinding> {
        self.bindings.iter()
    }

    /// Bindings for one field, in bind order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidatorBinding> {
        self.bindings.iter().filter(move |b| b.field == field)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Every binding must target a declared field.
    pub(crate) fn check_fields(
        &self,
        owner: &str,
        fields: &[FieldDescriptor],
    ) -> Result<(), DefinitionError> {
        for binding in &self.bindings {
            if !fields.iter().any(|f| f.name() == binding.field) {
                return Err(DefinitionError::UnknownField {
                    owner: owner.to_string(),
                    field: binding.field.to_string(),
                    binding: format!("validator '{}'", binding.name),
                });
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidatorRegistry {
    type Item = &'a ValidatorBinding;
    type IntoIter = std::slice::Iter<'a, ValidatorBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
