use thiserror::Error;

/// Errors raised by a [`super::DocumentStore`] backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// The backend cannot serve this filter + ordering combination
    #[error("Query on '{collection}' requires a composite index on [{}]", .fields.join(", "))]
    MissingIndex {
        collection: String,
        fields: Vec<String>,
    },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
