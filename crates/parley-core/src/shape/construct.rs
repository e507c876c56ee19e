use crate::{
    error::{ConstructionError, ShapeError, ValidationError},
    shape::ShapeModel,
    traits::FieldSource,
    validate::{FieldIssues, run_rules},
    value::{Record, Value},
};
use serde::Deserialize;
use std::fmt;

///
/// Arguments
///
/// Raw call arguments: positional values in field order, then keyword
/// values by field name.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Arguments {
    #[serde(default)]
    positional: Vec<Value>,

    #[serde(default)]
    keyword: Record,
}

impl Arguments {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keyword: Record::new(),
        }
    }

    /// Keyword-only arguments.
    #[must_use]
    pub const fn keyword(keyword: Record) -> Self {
        Self {
            positional: Vec::new(),
            keyword,
        }
    }

    /// Positional-only arguments.
    pub fn positional<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keyword: Record::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name, value);
        self
    }

    #[must_use]
    pub fn positional_values(&self) -> &[Value] {
        &self.positional
    }

    #[must_use]
    pub const fn keyword_values(&self) -> &Record {
        &self.keyword
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Value>, Record) {
        (self.positional, self.keyword)
    }
}

impl From<Record> for Arguments {
    fn from(keyword: Record) -> Self {
        Self::keyword(keyword)
    }
}

///
/// ShapeInput
///
/// The construction modes, in precedence order.
/// Projection is chosen by the caller handing over a `FieldSource`;
/// anything else is call arguments.
///

pub enum ShapeInput<'a> {
    Project(&'a dyn FieldSource),
    Args(Arguments),
}

impl fmt::Debug for ShapeInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project(_) => f.write_str("Project(..)"),
            Self::Args(args) => f.debug_tuple("Args").field(args).finish(),
        }
    }
}

impl From<Arguments> for ShapeInput<'_> {
    fn from(args: Arguments) -> Self {
        Self::Args(args)
    }
}

///
/// assemble
///
/// Slot filling, default completion, kind checks and validation.
/// Returns the final value of every model field, in declaration order.
///

pub(super) fn assemble(model: &ShapeModel, input: ShapeInput<'_>) -> Result<Vec<Value>, ShapeError> {
    let slots = match input {
        ShapeInput::Project(source) => fill_from_source(model, source),
        ShapeInput::Args(args) => fill_from_args(model, args)?,
    };

    let values = complete(model, slots)?;

    Ok(run_validators(model, values)?)
}

fn fill_from_source(model: &ShapeModel, source: &dyn FieldSource) -> Vec<Option<Value>> {
    model
        .fields()
        .iter()
        .map(|field| source.get_field(field.name()))
        .collect()
}

fn fill_from_args(model: &ShapeModel, args: Arguments) -> Result<Vec<Option<Value>>, ConstructionError> {
    let (positional, keyword) = args.into_parts();

    if positional.len() > model.len() {
        return Err(ConstructionError::Arity {
            shape: model.name().to_string(),
            reason: format!(
                "takes at most {} positional argument(s) but {} were given",
                model.len(),
                positional.len()
            ),
        });
    }

    let filled = positional.len();
    let mut slots: Vec<Option<Value>> = positional.into_iter().map(Some).collect();
    slots.resize(model.len(), None);

    let mut unknown = Vec::new();
    for (name, value) in keyword {
        match model.position(&name) {
            Some(i) if i < filled => {
                return Err(ConstructionError::Arity {
                    shape: model.name().to_string(),
                    reason: format!("got multiple values for field '{name}'"),
                });
            }
            Some(i) => slots[i] = Some(value),
            None => unknown.push(name),
        }
    }

    if !unknown.is_empty() && !model.allows_extra() {
        return Err(ConstructionError::StrictField {
            shape: model.name().to_string(),
            fields: unknown,
        });
    }

    Ok(slots)
}

// Unfilled slots take the field default; every field left without one is
// reported together.
fn complete(model: &ShapeModel, slots: Vec<Option<Value>>) -> Result<Vec<Value>, ConstructionError> {
    let mut values = Vec::with_capacity(slots.len());
    let mut missing = Vec::new();

    for (field, slot) in model.fields().iter().zip(slots) {
        match slot.or_else(|| field.default().cloned()) {
            Some(value) => values.push(value),
            None => missing.push(field.name().to_string()),
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(ConstructionError::MissingField {
            shape: model.name().to_string(),
            fields: missing,
        })
    }
}

// A value of the wrong kind is reported as that field's only reason; its
// validators are not run.
fn run_validators(model: &ShapeModel, values: Vec<Value>) -> Result<Vec<Value>, ValidationError> {
    let mut accepted = Vec::with_capacity(values.len());
    let mut issues = Vec::new();

    for (field, value) in model.fields().iter().zip(values) {
        if !field.kind().accepts(&value) {
            issues.push(FieldIssues::new(
                field.name(),
                vec![format!("expected {}, found {}", field.kind(), value.label())],
            ));
            accepted.push(value);
            continue;
        }

        let (value, reasons) = run_rules(model.validators().for_field(field.name()), value);
        if !reasons.is_empty() {
            issues.push(FieldIssues::new(field.name(), reasons));
        }
        accepted.push(value);
    }

    if issues.is_empty() {
        Ok(accepted)
    } else {
        Err(ValidationError {
            shape: model.name().to_string(),
            issues,
        })
    }
}
