use crate::{
    error::DefinitionError,
    model::{InteractionKind, InteractionKinds},
    value::{Value, ValueKind},
};
use serde::Serialize;

///
/// FieldDescriptor
///
/// One declared attribute of an entity.
/// Immutable once built; a field without a default is mandatory in every
/// shape that contains it.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    name: &'static str,
    kind: ValueKind,
    kinds: InteractionKinds,

    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

impl FieldDescriptor {
    /// Declare a mandatory field.
    pub fn new(
        name: &'static str,
        kind: ValueKind,
        kinds: impl Into<InteractionKinds>,
    ) -> Result<Self, DefinitionError> {
        validate_field_name(name)?;

        let kinds = kinds.into();
        if kinds.is_empty() {
            return Err(DefinitionError::InvalidKind {
                field: name.to_string(),
            });
        }

        Ok(Self {
            name,
            kind,
            kinds,
            default: None,
        })
    }

    /// Declare an `Opt` field that defaults to `Null`.
    pub fn optional(
        name: &'static str,
        inner: ValueKind,
        kinds: impl Into<InteractionKinds>,
    ) -> Result<Self, DefinitionError> {
        Self::new(name, ValueKind::opt(inner), kinds)?.with_default(Value::Null)
    }

    /// Attach a default; it must be a well-typed value of the field's kind.
    pub fn with_default(mut self, default: impl Into<Value>) -> Result<Self, DefinitionError> {
        let default = default.into();
        if !self.kind.accepts(&default) {
            return Err(DefinitionError::TypeMismatch {
                field: self.name.to_string(),
                expected: self.kind,
                found: default.label(),
            });
        }

        self.default = Some(default);

        Ok(self)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> &ValueKind {
        &self.kind
    }

    #[must_use]
    pub const fn kinds(&self) -> InteractionKinds {
        self.kinds
    }

    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        self.default.is_none()
    }

    #[must_use]
    pub const fn participates_in(&self, kind: InteractionKind) -> bool {
        self.kinds.contains(kind)
    }
}

// Field names must be usable as keyword names.
pub(crate) fn validate_field_name(name: &str) -> Result<(), DefinitionError> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        Some("name must not start with a digit")
    } else if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some("name must be ASCII alphanumeric or '_'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DefinitionError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_kind_set_is_rejected() {
        let err = FieldDescriptor::new("id", ValueKind::Int, InteractionKinds::NONE).unwrap_err();

        assert!(matches!(err, DefinitionError::InvalidKind { field } if field == "id"));
    }

    #[test]
    fn default_must_match_kind() {
        let err = FieldDescriptor::new("status", ValueKind::Int, InteractionKinds::EDIT)
            .unwrap()
            .with_default("zero")
            .unwrap_err();

        assert!(matches!(
            err,
            DefinitionError::TypeMismatch { found: "text", .. }
        ));
    }

    #[test]
    fn null_default_requires_opt_kind() {
        assert!(
            FieldDescriptor::new("fst_name", ValueKind::Text, InteractionKinds::ALL)
                .unwrap()
                .with_default(Value::Null)
                .is_err()
        );

        let field =
            FieldDescriptor::optional("fst_name", ValueKind::Text, InteractionKinds::ALL).unwrap();
        assert!(!field.is_mandatory());
        assert_eq!(field.default(), Some(&Value::Null));
    }

    #[test]
    fn list_default_checks_elements() {
        let kind = ValueKind::list(ValueKind::Record);

        assert!(
            FieldDescriptor::new("sent", kind.clone(), InteractionKinds::GET)
                .unwrap()
                .with_default(Value::List(Vec::new()))
                .is_ok()
        );
        assert!(
            FieldDescriptor::new("sent", kind, InteractionKinds::GET)
                .unwrap()
                .with_default(Value::list([1]))
                .is_err()
        );
    }

    #[test]
    fn rejects_unusable_names() {
        for name in ["", "1st", "nik-name", "naïve"] {
            assert!(
                FieldDescriptor::new(name, ValueKind::Int, InteractionKinds::GET).is_err(),
                "name '{name}' should be rejected"
            );
        }
    }
}
