//! Document store abstraction.
//!
//! The repositories only ever talk to a [`DocumentStore`] handed to them;
//! there is no process-wide store handle. Two backends ship with the daemon:
//! [`MemoryStore`] and the file-backed [`FsStore`].

mod document;
mod error;
mod fs;
mod memory;
mod query;
mod stamp;

pub use document::{
    Document, Fields, CREATED_AT_FIELD, ID_FIELD, PUBLISHED_FIELD, UPDATED_AT_FIELD,
};
pub use error::StoreError;
pub use fs::FsStore;
pub use memory::MemoryStore;
pub use query::{compare_documents, compare_values, Direction, Filter, FilterOp, OrderBy, Query};

use async_trait::async_trait;

/// Collection/document CRUD with simple queries.
///
/// Every call suspends until the backend responds. Writes to one document are
/// last-write-wins; nothing spans multiple documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for diagnostics (e.g. "memory", "fs")
    fn backend_name(&self) -> &'static str;

    /// Add a document with a store-assigned id. Stamps `createdAt` and
    /// `updatedAt` and defaults `published` to false.
    async fn add(&self, collection: &str, fields: Fields) -> Result<Document, StoreError>;

    /// Merge `patch` into an existing document and refresh `updatedAt`.
    /// Fails with [`StoreError::NotFound`] if the document does not exist.
    async fn merge(&self, collection: &str, id: &str, patch: Fields)
        -> Result<Document, StoreError>;

    /// Hard-delete a document. Fails with [`StoreError::NotFound`] if absent.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError>;
}

/// Generate a new document id.
#[must_use]
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
