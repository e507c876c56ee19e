//! Field validators and the registry that binds them to field names.

mod registry;

pub use registry::{ValidatorBinding, ValidatorRegistry};

use crate::value::Value;
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// Validator
///
/// Pure rule over one field value: returns the accepted (possibly
/// normalized) value, or an issue carrying every violated condition.
/// Rules must not stop at the first violation when several conditions
/// can fail independently.
///

pub trait Validator: Send + Sync {
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue>;
}

impl<F> Validator for F
where
    F: Fn(Value) -> Result<Value, ValidateIssue> + Send + Sync,
{
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue> {
        self(value)
    }
}

///
/// ValidateIssue
///
/// Accumulator for the reasons a single rule rejects a value.
///
/// ```ignore
/// let mut issue = ValidateIssue::new();
/// if too_short { issue.push("too short"); }
/// if bad_chars { issue.push("wrong format"); }
/// issue.result(value)
/// ```
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidateIssue {
    reasons: Vec<String>,
}

impl ValidateIssue {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reasons: Vec::new(),
        }
    }

    /// Single-reason issue.
    pub fn reason(msg: impl Into<String>) -> Self {
        Self {
            reasons: vec![msg.into()],
        }
    }

    pub fn push(&mut self, msg: impl Into<String>) {
        self.reasons.push(msg.into());
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    #[must_use]
    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }

    /// `Ok(accepted)` when nothing was pushed, otherwise `Err(self)`.
    pub fn result<T>(self, accepted: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(accepted)
        } else {
            Err(self)
        }
    }
}

///
/// FieldIssues
/// Every reason one field was rejected, in rule order.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldIssues {
    pub field: String,
    pub reasons: Vec<String>,
}

impl FieldIssues {
    pub fn new(field: impl Into<String>, reasons: Vec<String>) -> Self {
        Self {
            field: field.into(),
            reasons,
        }
    }
}

///
/// run_rules
///
/// Run every binding against one value, in binding order.
/// Each rule sees the value accepted by the last passing rule; a failing
/// rule does not stop later ones, so every reason is collected.
/// `Null` (an absent optional) is never handed to a rule.
///

pub(crate) fn run_rules<'a>(
    bindings: impl IntoIterator<Item = &'a ValidatorBinding>,
    value: Value,
) -> (Value, Vec<String>) {
    let mut current = value;
    let mut reasons = Vec::new();

    if current.is_null() {
        return (current, reasons);
    }

    for binding in bindings {
        match binding.validator().validate(current.clone()) {
            Ok(accepted) => current = accepted,
            Err(issue) => reasons.extend(issue.into_reasons()),
        }
    }

    (current, reasons)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn min_len(value: Value) -> Result<Value, ValidateIssue> {
        let mut issue = ValidateIssue::new();
        if value.as_text().is_some_and(|s| s.len() < 2) {
            issue.push("too short");
        }
        if value.as_text().is_some_and(|s| s.contains(' ')) {
            issue.push("contains a space");
        }

        issue.result(value)
    }

    fn never(_: Value) -> Result<Value, ValidateIssue> {
        Err(ValidateIssue::reason("never valid"))
    }

    fn upper(value: Value) -> Result<Value, ValidateIssue> {
        match value {
            Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
            other => Ok(other),
        }
    }

    #[test]
    fn issue_accumulates_every_reason() {
        let err = min_len(Value::text(" ")).unwrap_err();

        assert_eq!(err.reasons(), ["too short", "contains a space"]);
    }

    #[test]
    fn rules_chain_accepted_values() {
        let mut registry = ValidatorRegistry::new();
        registry.bind("name", "upper", upper);
        registry.bind("name", "min_len", min_len);

        let (value, reasons) = run_rules(registry.iter(), Value::text("ann"));

        assert!(reasons.is_empty());
        assert_eq!(value, Value::text("ANN"));
    }

    #[test]
    fn failing_rule_does_not_stop_later_rules() {
        let mut registry = ValidatorRegistry::new();
        registry.bind("name", "min_len", min_len);
        registry.bind("name", "never", never);

        let (_, reasons) = run_rules(registry.iter(), Value::text("a"));

        assert_eq!(reasons, vec!["too short".to_string(), "never valid".to_string()]);
    }

    #[test]
    fn null_skips_rules() {
        let mut registry = ValidatorRegistry::new();
        registry.bind("name", "never", never);

        let (value, reasons) = run_rules(registry.iter(), Value::Null);

        assert_eq!(value, Value::Null);
        assert!(reasons.is_empty());
    }
}
