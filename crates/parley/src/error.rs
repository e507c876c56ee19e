use crate::db::StoreError;
use candid::CandidType;
use derive_more::Display;
use parley_core::{
    error::{ConstructionError, DefinitionError, Error as CoreError, ShapeError, ValidationError},
    validate::FieldIssues,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    /// HTTP status a route layer should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl From<DefinitionError> for Error {
    fn from(err: DefinitionError) -> Self {
        Self::new(ErrorKind::Definition, ErrorOrigin::Schema, err.to_string())
    }
}

impl From<ConstructionError> for Error {
    fn from(err: ConstructionError) -> Self {
        let kind = match &err {
            ConstructionError::Arity { .. } => ConstructionErrorKind::Arity,
            ConstructionError::MissingField { .. } => ConstructionErrorKind::MissingField,
            ConstructionError::StrictField { .. } => ConstructionErrorKind::StrictField,
        };

        Self::new(ErrorKind::Construction(kind), ErrorOrigin::Shape, err.to_string())
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        let message = err.to_string();

        Self::new(ErrorKind::Validation(err.issues), ErrorOrigin::Shape, message)
    }
}

impl From<ShapeError> for Error {
    fn from(err: ShapeError) -> Self {
        match err {
            ShapeError::Construction(err) => err.into(),
            ShapeError::Validation(err) => err.into(),
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Definition(err) => err.into(),
            CoreError::Construction(err) => err.into(),
            CoreError::Validation(err) => err.into(),
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        let kind = match &err {
            StoreError::Conflict { .. } => ErrorKind::Store(StoreErrorKind::Conflict),
            StoreError::NotFound { .. } => ErrorKind::Store(StoreErrorKind::NotFound),
            StoreError::ShapeMismatch { .. } => ErrorKind::Definition,
        };

        Self::new(kind, ErrorOrigin::Store, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and route layers.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Construction(ConstructionErrorKind),

    /// Every rejected field with every reason.
    Validation(Vec<FieldIssues>),

    Store(StoreErrorKind),

    /// The caller cannot remediate this.
    Definition,
}

impl ErrorKind {
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Construction(_) => 400,
            Self::Validation(_) => 422,
            Self::Store(StoreErrorKind::NotFound) => 404,
            Self::Store(StoreErrorKind::Conflict) => 409,
            Self::Definition => 500,
        }
    }
}

///
/// ConstructionErrorKind
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConstructionErrorKind {
    /// Too many positional arguments, or a field given twice.
    Arity,

    /// A mandatory field was not supplied.
    MissingField,

    /// A keyword named no field of the shape.
    StrictField,
}

///
/// StoreErrorKind
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StoreErrorKind {
    NotFound,
    Conflict,
}

///
/// ErrorOrigin
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Schema,
    Shape,
    Store,
}

///
/// TESTS
///
