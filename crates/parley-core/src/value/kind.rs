use crate::value::Value;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// ValueKind
///
/// Semantic type tag of a field.
/// `Opt` is the only kind that accepts `Value::Null`.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ValueKind {
    Bool,
    Int,
    List(Box<Self>),
    Opt(Box<Self>),
    Record,
    Text,
}

impl ValueKind {
    #[must_use]
    pub fn list(item: Self) -> Self {
        Self::List(Box::new(item))
    }

    #[must_use]
    pub fn opt(inner: Self) -> Self {
        Self::Opt(Box::new(inner))
    }

    /// Whether `value` is a well-typed inhabitant of this kind.
    /// Lists are checked element by element.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Opt(_), Value::Null) => true,
            (Self::Opt(inner), other) => inner.accepts(other),
            (Self::List(item), Value::List(items)) => items.iter().all(|v| item.accepts(v)),
            (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Record, Value::Record(_))
            | (Self::Text, Value::Text(_)) => true,
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Opt(_))
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::List(item) => write!(f, "list<{item}>"),
            Self::Opt(inner) => write!(f, "opt<{inner}>"),
            Self::Record => f.write_str("record"),
            Self::Text => f.write_str("text"),
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
    fn opt_accepts_null_and_inner() {
        let kind = ValueKind::opt(ValueKind::Text);

        assert!(kind.accepts(&Value::Null));
        assert!(kind.accepts(&Value::text("ann")));
        assert!(!kind.accepts(&Value::Int(1)));
    }

    #[test]
    fn non_opt_rejects_null() {
        assert!(!ValueKind::Int.accepts(&Value::Null));
        assert!(!ValueKind::Text.accepts(&Value::Null));
    }

    #[test]
    fn list_checks_every_element() {
        let kind = ValueKind::list(ValueKind::Int);

        assert!(kind.accepts(&Value::list([1, 2, 3])));
        assert!(kind.accepts(&Value::List(Vec::new())));
        assert!(!kind.accepts(&Value::List(vec![Value::Int(1), Value::text("x")])));
    }

    #[test]
    fn display_nests_inner_kinds() {
        let kind = ValueKind::opt(ValueKind::list(ValueKind::Record));

        assert_eq!(kind.to_string(), "opt<list<record>>");
    }
}
