use thiserror::Error;

use crate::store::StoreError;

/// Errors from repository operations.
///
/// The sentinel-returning repository methods log these and collapse them;
/// the `try_*` methods return them.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Content payload must be a JSON object")]
    NotAnObject,

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ContentError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ContentError::Validation(msg.into())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::Store(e) if e.is_not_found())
    }
}
