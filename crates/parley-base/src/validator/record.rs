use parley_core::{
    error::ShapeError,
    shape::ShapeModel,
    validate::{ValidateIssue, Validator},
    value::Value,
};
use std::sync::Arc;

///
/// ListOf
///
/// Every item of a list must project onto `model`.
/// The accepted value is the list of projected records, so items carry
/// exactly the model's fields; every failing item is reported.
///

#[derive(Clone, Debug)]
pub struct ListOf {
    model: Arc<ShapeModel>,
}

impl ListOf {
    #[must_use]
    pub const fn new(model: Arc<ShapeModel>) -> Self {
        Self { model }
    }
}

impl Validator for ListOf {
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue> {
        let items = match value {
            Value::List(items) => items,
            Value::Null => return Ok(Value::Null),
            other => {
                return Err(ValidateIssue::reason(format!(
                    "expected list, found {}",
                    other.label()
                )));
            }
        };

        let mut issue = ValidateIssue::new();
        let mut projected = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let Some(record) = item.as_record() else {
                issue.push(format!(
                    "item {i}: expected a {} record, found {}",
                    self.model.name(),
                    item.label()
                ));
                continue;
            };

            match self.model.project(record) {
                Ok(shape) => projected.push(Value::from(shape)),
                Err(ShapeError::Construction(err)) => issue.push(format!("item {i}: {err}")),
                Err(ShapeError::Validation(err)) => {
                    for field in err.issues {
                        for reason in field.reasons {
                            issue.push(format!("item {i}: {}: {reason}", field.field));
                        }
                    }
                }
            }
        }

        issue.result(Value::List(projected))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::{
        model::{FieldDescriptor, InteractionKinds},
        shape::EntityBuilder,
        value::{Record, ValueKind},
    };

    fn notes() -> Arc<ShapeModel> {
        let schema = EntityBuilder::new("Note")
            .field(FieldDescriptor::new("id", ValueKind::Int, InteractionKinds::GET).unwrap())
            .field(FieldDescriptor::new("text", ValueKind::Text, InteractionKinds::ALL).unwrap())
            .build()
            .unwrap();

        Arc::clone(schema.get())
    }

    #[test]
    fn test_items_are_projected_onto_the_model() {
        let list = Value::list([Record::new()
            .with("text", "hi")
            .with("id", 1)
            .with("password", "hunter2")]);

        let accepted = ListOf::new(notes()).validate(list).unwrap();

        assert_eq!(
            accepted,
            Value::list([Record::new().with("id", 1).with("text", "hi")])
        );
    }

    #[test]
    fn test_every_bad_item_is_reported() {
        let list = Value::List(vec![
            Value::Record(Record::new().with("password", "hunter2")),
            Value::Record(Record::new().with("id", 2).with("text", "ok")),
            Value::Int(3),
        ]);

        let err = ListOf::new(notes()).validate(list).unwrap_err();

        assert_eq!(
            err.reasons(),
            [
                "item 0: Note.Get: missing required field(s): id, text",
                "item 2: expected a Note.Get record, found int",
            ]
        );
    }

    #[test]
    fn test_item_field_kinds_are_checked() {
        let list = Value::list([Record::new().with("id", "one").with("text", "hi")]);

        let err = ListOf::new(notes()).validate(list).unwrap_err();

        assert_eq!(err.reasons(), ["item 0: id: expected int, found text"]);
    }

    #[test]
    fn test_empty_list_and_null_pass() {
        let validator = ListOf::new(notes());

        assert_eq!(validator.validate(Value::List(Vec::new())), Ok(Value::List(Vec::new())));
        assert_eq!(validator.validate(Value::Null), Ok(Value::Null));
    }
}
