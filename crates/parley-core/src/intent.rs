//! Intent constructors: named, statically declared entry points onto one
//! shape, e.g. `init_create(nik_name, fst_name)`.

use crate::{
    error::{ConstructionError, DefinitionError, ShapeError},
    model::validate_field_name,
    shape::{Arguments, Shape, ShapeModel},
    value::{Record, Value},
};
use std::{collections::BTreeSet, sync::Arc};

///
/// Param
/// One declared parameter; its name is the target field's name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Param {
    name: &'static str,
    default: Option<Value>,
}

impl Param {
    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    pub fn optional(name: &'static str, default: impl Into<Value>) -> Self {
        Self {
            name,
            default: Some(default.into()),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

///
/// IntentConstructor
///
/// Binds call arguments to its parameter list the way a function call
/// would, then builds the target shape in keyword mode.
///
/// Binding rules:
/// - positional arguments bind to parameters in order; surplus is an arity error
/// - a keyword naming an already bound parameter is an arity error
/// - a keyword naming no parameter is an arity error unless extra
///   keywords are accepted, in which case it is forwarded to the shape
/// - parameters left unbound take their default or are reported missing
///

#[derive(Clone, Debug)]
pub struct IntentConstructor {
    name: &'static str,
    label: String,
    shape: Arc<ShapeModel>,
    params: Vec<Param>,
    accept_extra: bool,
}

impl IntentConstructor {
    pub(crate) fn new(
        name: &'static str,
        shape: Arc<ShapeModel>,
        params: Vec<Param>,
    ) -> Result<Self, DefinitionError> {
        validate_field_name(name)?;

        let label = format!("{}.{name}", shape.entity());
        let mut seen = BTreeSet::new();

        for param in &params {
            if !seen.insert(param.name) {
                return Err(DefinitionError::DuplicateField {
                    owner: label,
                    field: param.name.to_string(),
                });
            }

            let Some(field) = shape.field(param.name) else {
                return Err(DefinitionError::UnknownField {
                    owner: shape.name().to_string(),
                    field: param.name.to_string(),
                    binding: format!("intent '{name}'"),
                });
            };

            if let Some(default) = &param.default
                && !field.kind().accepts(default)
            {
                return Err(DefinitionError::TypeMismatch {
                    field: param.name.to_string(),
                    expected: field.kind().clone(),
                    found: default.label(),
                });
            }
        }

        Ok(Self {
            name,
            label,
            shape,
            params,
            accept_extra: false,
        })
    }

    /// Forward keywords that name no parameter to the shape.
    #[must_use]
    pub const fn accept_extra(mut self) -> Self {
        self.accept_extra = true;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn shape(&self) -> &Arc<ShapeModel> {
        &self.shape
    }

    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn call(&self, args: Arguments) -> Result<Shape, ShapeError> {
        let keyword = self.bind(args)?;

        self.shape.construct(Arguments::keyword(keyword))
    }

    fn bind(&self, args: Arguments) -> Result<Record, ConstructionError> {
        let (positional, keyword) = args.into_parts();

        if positional.len() > self.params.len() {
            return Err(self.arity(format!(
                "takes {} positional argument(s) but {} were given",
                self.params.len(),
                positional.len()
            )));
        }

        let filled = positional.len();
        let mut slots: Vec<Option<Value>> = positional.into_iter().map(Some).collect();
        slots.resize(self.params.len(), None);

        let mut extra = Record::new();
        for (name, value) in keyword {
            match self.params.iter().position(|p| p.name == name) {
                Some(i) if i < filled => {
                    return Err(self.arity(format!("got multiple values for argument '{name}'")));
                }
                Some(i) => slots[i] = Some(value),
                None if self.accept_extra => {
                    extra.insert(name, value);
                }
                None => {
                    return Err(self.arity(format!("got an unexpected keyword argument '{name}'")));
                }
            }
        }

        let mut bound = Record::new();
        let mut missing = Vec::new();
        for (param, slot) in self.params.iter().zip(slots) {
            match slot.or_else(|| param.default.clone()) {
                Some(value) => {
                    bound.insert(param.name, value);
                }
                None => missing.push(param.name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(ConstructionError::MissingField {
                shape: self.label.clone(),
                fields: missing,
            });
        }

        for (name, value) in extra {
            bound.insert(name, value);
        }

        Ok(bound)
    }

    fn arity(&self, reason: String) -> ConstructionError {
        ConstructionError::Arity {
            shape: self.label.clone(),
            reason,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{FieldDescriptor, InteractionKind, InteractionKinds},
        shape::{EntityBuilder, EntitySchema},
        value::ValueKind,
    };

    fn schema() -> EntitySchema {
        EntityBuilder::new("User")
            .field(FieldDescriptor::new("id", ValueKind::Int, InteractionKinds::GET).unwrap())
            .field(
                FieldDescriptor::new("nik_name", ValueKind::Text, InteractionKinds::ALL).unwrap(),
            )
            .field(
                FieldDescriptor::optional("fst_name", ValueKind::Text, InteractionKinds::ALL)
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    fn init_create(schema: &EntitySchema) -> IntentConstructor {
        schema
            .intent(
                InteractionKind::Create,
                "init_create",
                [Param::required("nik_name"), Param::optional("fst_name", "Ann")],
            )
            .unwrap()
    }

    #[test]
    fn param_must_name_a_shape_field() {
        let err = schema()
            .intent(InteractionKind::Create, "init_create", [Param::required("id")])
            .unwrap_err();

        assert!(matches!(err, DefinitionError::UnknownField { field, .. } if field == "id"));
    }

    #[test]
    fn param_default_must_match_field_kind() {
        let err = schema()
            .intent(
                InteractionKind::Create,
                "init_create",
                [Param::optional("nik_name", 7)],
            )
            .unwrap_err();

        assert!(matches!(err, DefinitionError::TypeMismatch { .. }));
    }

    #[test]
    fn positional_and_keyword_bind_like_a_call() {
        let schema = schema();
        let intent = init_create(&schema);

        let shape = intent
            .call(Arguments::new().arg("@ann").kwarg("fst_name", "Anna"))
            .unwrap();

        assert_eq!(shape.text("nik_name"), Some("@ann"));
        assert_eq!(shape.text("fst_name"), Some("Anna"));
        assert_eq!(shape.name(), "User.Create");
    }

    #[test]
    fn unbound_param_uses_its_default() {
        let schema = schema();
        let shape = init_create(&schema)
            .call(Arguments::new().arg("@ann"))
            .unwrap();

        assert_eq!(shape.text("fst_name"), Some("Ann"));
    }

    #[test]
    fn binding_errors_match_call_semantics() {
        let schema = schema();
        let intent = init_create(&schema);

        let surplus = intent
            .call(Arguments::positional(["@ann", "Ann", "extra"]))
            .unwrap_err();
        assert!(matches!(
            surplus,
            ShapeError::Construction(ConstructionError::Arity { .. })
        ));

        let twice = intent
            .call(Arguments::new().arg("@ann").kwarg("nik_name", "@bob"))
            .unwrap_err();
        assert!(matches!(
            twice,
            ShapeError::Construction(ConstructionError::Arity { .. })
        ));

        let unexpected = intent
            .call(Arguments::new().arg("@ann").kwarg("sec_name", "Lee"))
            .unwrap_err();
        assert!(matches!(
            unexpected,
            ShapeError::Construction(ConstructionError::Arity { .. })
        ));

        let missing = intent.call(Arguments::new()).unwrap_err();
        assert_eq!(
            missing,
            ShapeError::Construction(ConstructionError::MissingField {
                shape: "User.init_create".to_string(),
                fields: vec!["nik_name".to_string()],
            })
        );
    }

    #[test]
    fn extra_keywords_are_forwarded_to_the_shape() {
        let schema = schema();
        let intent = schema
            .intent(
                InteractionKind::Create,
                "init_nik",
                [Param::required("nik_name")],
            )
            .unwrap()
            .accept_extra();

        let shape = intent
            .call(Arguments::new().arg("@ann").kwarg("fst_name", "Anna"))
            .unwrap();
        assert_eq!(shape.text("fst_name"), Some("Anna"));

        // the shape itself is still strict
        let err = intent
            .call(Arguments::new().arg("@ann").kwarg("bogus", 1))
            .unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Construction(ConstructionError::StrictField { .. })
        ));
    }
}
