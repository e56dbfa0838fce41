//! Defines [`PathError`], representing all errors returned by this crate.

use arrow_schema::ArrowError;
use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PathError {
    /// Packed input is malformed: a header length is not a positive integer, or the blocks do
    /// not tile the buffer exactly.
    #[error("Malformed packed path: {0}")]
    Format(String),

    /// Caller-supplied loops or arguments are invalid.
    #[error("Invalid input: {0}")]
    Validation(Cow<'static, str>),

    /// The operation is not available for the current shape of the path.
    #[error("Invalid state: {0}")]
    State(Cow<'static, str>),

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// A named slot was not found in storage.
    #[error("No array named {0:?} in storage")]
    MissingSlot(String),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, PathError>;

impl From<PathError> for ArrowError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::Arrow(err) => err,
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}
