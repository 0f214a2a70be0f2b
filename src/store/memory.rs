use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use super::document::{Document, Fields};
use super::query::Query;
use super::stamp::{stamp_merge, stamp_new};
use super::{new_document_id, DocumentStore, StoreError};

type CollectionMap = BTreeMap<String, Fields>;

/// In-process document store.
///
/// Documents within a collection are kept in id order, which is the order
/// queries see them in before sorting.
#[derive(Debug)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, CollectionMap>>,
    composite_indexes: bool,
    unavailable: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            composite_indexes: true,
            unavailable: AtomicBool::new(false),
        }
    }

    /// Reject filtered multi-field orderings with [`StoreError::MissingIndex`],
    /// as a hosted store without the matching composite index would.
    #[must_use]
    pub fn without_composite_indexes(mut self) -> Self {
        self.composite_indexes = false;
        self
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`]
    /// (or succeed again when `false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of documents currently held in `collection`.
    pub async fn document_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn add(&self, collection: &str, mut fields: Fields) -> Result<Document, StoreError> {
        self.check_available()?;
        stamp_new(&mut fields);
        let id = new_document_id();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields.clone());
        debug!(collection, id = %id, "Document added");
        Ok(Document::new(id, fields))
    }

    async fn merge(
        &self,
        collection: &str,
        id: &str,
        patch: Fields,
    ) -> Result<Document, StoreError> {
        self.check_available()?;
        let mut collections = self.collections.write().await;
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        stamp_merge(existing, patch);
        Ok(Document::new(id, existing.clone()))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.check_available()?;
        let mut collections = self.collections.write().await;
        collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(id))
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        self.check_available()?;
        if !self.composite_indexes && query.needs_composite_index() {
            return Err(StoreError::MissingIndex {
                collection: collection.to_string(),
                fields: query.index_fields(),
            });
        }
        let collections = self.collections.read().await;
        let docs = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        Ok(query.apply(docs))
    }
}
