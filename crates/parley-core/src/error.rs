use crate::{validate::FieldIssues, value::ValueKind};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure the core can signal.
/// The core never catches or logs these; callers translate them.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<ShapeError> for Error {
    fn from(err: ShapeError) -> Self {
        match err {
            ShapeError::Construction(e) => Self::Construction(e),
            ShapeError::Validation(e) => Self::Validation(e),
        }
    }
}

///
/// DefinitionError
///
/// Raised while declaring fields or synthesizing an entity.
/// Always a programming error in the declaration itself.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum DefinitionError {
    #[error("field '{field}' is declared more than once on '{owner}'")]
    DuplicateField { owner: String, field: String },

    #[error("field '{field}' must participate in at least one interaction kind")]
    InvalidKind { field: String },

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("default for field '{field}' is {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        found: &'static str,
    },

    #[error("{binding} targets unknown field '{field}' on '{owner}'")]
    UnknownField {
        owner: String,
        field: String,
        binding: String,
    },
}

///
/// ShapeError
/// Failure to produce a shape instance.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ShapeError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

///
/// ConstructionError
///
/// Raised while assembling raw input into a shape, before any validator
/// runs.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[remain::sorted]
pub enum ConstructionError {
    #[error("{shape}: {reason}")]
    Arity { shape: String, reason: String },

    #[error("{shape}: missing required field(s): {}", .fields.join(", "))]
    MissingField { shape: String, fields: Vec<String> },

    #[error("{shape}: unexpected field(s): {}", .fields.join(", "))]
    StrictField { shape: String, fields: Vec<String> },
}

///
/// ValidationError
///
/// Every rejected field of one construction, in field declaration order,
/// each with every reason its validators reported.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{shape}: validation failed: {}", render_issues(.issues))]
pub struct ValidationError {
    pub shape: String,
    pub issues: Vec<FieldIssues>,
}

impl ValidationError {
    /// Reasons reported for one field, empty when the field passed.
    #[must_use]
    pub fn reasons(&self, field: &str) -> &[String] {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map_or(&[], |issue| issue.reasons.as_slice())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.field.as_str())
    }
}

fn render_issues(issues: &[FieldIssues]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.reasons.join("; ")))
        .collect::<Vec<_>>()
        .join(" | ")
}

///
/// TESTS
///
