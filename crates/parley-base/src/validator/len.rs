use crate::validator::invalid_config;
use parley_core::{
    validate::{ValidateIssue, Validator},
    value::{Record, Value},
};
use serde::Serialize;

///
/// HasLen
///

#[allow(clippy::len_without_is_empty)]
pub trait HasLen {
    fn len(&self) -> usize;
}

impl HasLen for String {
    fn len(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl<T> HasLen for Vec<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl HasLen for Record {
    fn len(&self) -> usize {
        Self::len(self)
    }
}

/// Length of a text (in chars), list or record value.
pub(crate) fn measure(value: &Value) -> Result<usize, ValidateIssue> {
    match value {
        Value::Text(s) => Ok(HasLen::len(s)),
        Value::List(items) => Ok(HasLen::len(items)),
        Value::Record(record) => Ok(HasLen::len(record)),
        other => Err(ValidateIssue::reason(format!(
            "length is undefined for {}",
            other.label()
        ))),
    }
}

///
/// Min
///

#[derive(Clone, Debug, Serialize)]
pub struct Min {
    target: usize,
    #[serde(skip)]
    error: Option<ValidateIssue>,
}

impl Min {
    pub fn new(target: impl TryInto<usize>) -> Self {
        match target.try_into() {
            Ok(target) => Self {
                target,
                error: None,
            },
            Err(_) => Self {
                target: 0,
                error: Some(invalid_config("Min target must be non-negative")),
            },
        }
    }
}

impl Validator for Min {
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if value.is_null() {
            return Ok(value);
        }

        let len = measure(&value)?;
        if len < self.target {
            Err(ValidateIssue::reason(format!(
                "length ({len}) is lower than minimum of {}",
                self.target
            )))
        } else {
            Ok(value)
        }
    }
}

///
/// Max
///

#[derive(Clone, Debug, Serialize)]
pub struct Max {
    target: usize,
    #[serde(skip)]
    error: Option<ValidateIssue>,
}

impl Max {
    pub fn new(target: impl TryInto<usize>) -> Self {
        match target.try_into() {
            Ok(target) => Self {
                target,
                error: None,
            },
            Err(_) => Self {
                target: 0,
                error: Some(invalid_config("Max target must be non-negative")),
            },
        }
    }
}

impl Validator for Max {
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if value.is_null() {
            return Ok(value);
        }

        let len = measure(&value)?;
        if len > self.target {
            Err(ValidateIssue::reason(format!(
                "length ({len}) is greater than maximum of {}",
                self.target
            )))
        } else {
            Ok(value)
        }
    }
}

///
/// Range
///

#[derive(Clone, Debug, Serialize)]
pub struct Range {
    min: usize,
    max: usize,
    #[serde(skip)]
    error: Option<ValidateIssue>,
}

impl Range {
    pub fn new(min: impl TryInto<usize>, max: impl TryInto<usize>) -> Self {
        match (min.try_into(), max.try_into()) {
            (Ok(min), Ok(max)) if min <= max => Self {
                min,
                max,
                error: None,
            },
            (Ok(_), Ok(_)) => Self {
                min: 0,
                max: 0,
                error: Some(invalid_config("range requires min <= max")),
            },
            _ => Self {
                min: 0,
                max: 0,
                error: Some(invalid_config("range bounds must be non-negative")),
            },
        }
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

        let len = measure(&value)?;
        if len < self.min || len > self.max {
            Err(ValidateIssue::reason(format!(
                "length ({len}) must be between {} and {} (inclusive)",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_ok() {
        let r = Range::new(2, 5);
        assert!(r.validate(Value::text("hey")).is_ok());
    }

    #[test]
    fn test_range_err() {
        let r = Range::new(2, 5);
        assert!(r.validate(Value::text("hello world")).is_err());
    }

    #[test]
    fn test_invalid_range_config() {
        let r = Range::new(5, 2);
        let err = r.validate(Value::text("hey")).unwrap_err();

        assert_eq!(
            err.reasons(),
            ["invalid validator config: range requires min <= max"]
        );
    }

    #[test]
    fn test_negative_target_is_invalid_config() {
        assert!(Min::new(-1).validate(Value::text("hey")).is_err());
    }

    #[test]
    fn test_text_length_counts_chars() {
        assert!(Max::new(5).validate(Value::text("ёжики")).is_ok());
    }

    #[test]
    fn test_lists_are_measured() {
        assert!(Max::new(2).validate(Value::list([1, 2])).is_ok());
        assert!(Min::new(3).validate(Value::list([1, 2])).is_err());
    }

    #[test]
    fn test_null_is_skipped() {
        assert_eq!(Min::new(3).validate(Value::Null), Ok(Value::Null));
    }

    #[test]
    fn test_int_has_no_length() {
        let err = Max::new(3).validate(Value::Int(12)).unwrap_err();

        assert_eq!(err.reasons(), ["length is undefined for int"]);
    }
}
