use crate::validator::invalid_config;
use parley_core::{
    validate::{ValidateIssue, Validator},
    value::Value,
};
use serde::Serialize;

fn expect_int(value: &Value) -> Result<i64, ValidateIssue> {
    value
        .as_int()
        .ok_or_else(|| ValidateIssue::reason(format!("expected int, found {}", value.label())))
}

///
/// InSet
/// The value must be one of a fixed set of integers.
///

#[derive(Clone, Debug, Serialize)]
pub struct InSet {
    values: Vec<i64>,
    #[serde(skip)]
    error: Option<ValidateIssue>,
}

impl InSet {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        let values: Vec<i64> = values.into_iter().collect();
        let error = values
            .is_empty()
            .then(|| invalid_config("InSet requires at least one value"));

        Self { values, error }
    }
}

impl Validator for InSet {
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if value.is_null() {
            return Ok(value);
        }

        let n = expect_int(&value)?;
        if self.values.contains(&n) {
            Ok(value)
        } else {
            let allowed = self
                .values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");

            Err(ValidateIssue::reason(format!(
                "{n} is not one of [{allowed}]"
            )))
        }
    }
}

///
/// Range
///

#[derive(Clone, Debug, Serialize)]
pub struct Range {
    min: i64,
    max: i64,
    #[serde(skip)]
    error: Option<ValidateIssue>,
}

impl Range {
    #[must_use]
    pub fn new(min: i64, max: i64) -> Self {
        let error = (min > max).then(|| invalid_config("range requires min <= max"));

        Self { min, max, error }
    }
}

impl Validator for Range {
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if value.is_null() {
            return Ok(value);
        }

        let n = expect_int(&value)?;
        if n < self.min || n > self.max {
            Err(ValidateIssue::reason(format!(
                "{n} must be between {} and {} (inclusive)",
                self.min, self.max
            )))
        } else {
            Ok(value)
        }
    }
}

///
/// TESTS
///
