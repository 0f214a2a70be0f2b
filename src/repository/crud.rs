//! Generic typed repository bound to one collection.

use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::error::ContentError;
use super::patch::ContentPatch;
use super::slug::slugify;
use super::sort::{apply_to_query, featured_first, newest_first, sort_documents, SortSpec};
use crate::collections::Collection;
use crate::content::Content;
use crate::store::{
    Document, DocumentStore, Fields, Query, StoreError, CREATED_AT_FIELD, ID_FIELD,
    PUBLISHED_FIELD, UPDATED_AT_FIELD,
};

/// Result cap applied to every listing unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 100;

const TITLE_FIELD: &str = "title";
const SLUG_FIELD: &str = "slug";

/// Boolean flags that can be toggled on any content entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFlag {
    Published,
    Featured,
}

impl ContentFlag {
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ContentFlag::Published => PUBLISHED_FIELD,
            ContentFlag::Featured => "featured",
        }
    }
}

/// Typed create/read/update/delete for the collection `T` is bound to.
///
/// Two surfaces are offered. The `try_*` methods return [`ContentError`].
/// The plain methods never fail: reads degrade to empty/`None` and writes
/// to `None`/`false`, with the cause logged. Callers of the plain methods
/// cannot tell an empty collection from a failed query.
pub struct ContentRepository<T: Content> {
    store: Arc<dyn DocumentStore>,
    limit: usize,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Content> Clone for ContentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            limit: self.limit,
            _entity: PhantomData,
        }
    }
}

impl<T: Content> ContentRepository<T> {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            limit: DEFAULT_LIMIT,
            _entity: PhantomData,
        }
    }

    /// Override the listing cap.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn collection(&self) -> Collection {
        T::COLLECTION
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    fn name(&self) -> &'static str {
        T::COLLECTION.as_str()
    }

    // ── Fallible surface ────────────────────────────────────────────────────

    /// Persist a new entity and return its id.
    pub async fn try_create(&self, data: &T) -> Result<String, ContentError> {
        let fields = entity_fields(data)?;
        let doc = self.store.add(self.name(), fields).await?;
        info!(collection = self.name(), id = %doc.id, "Content created");
        Ok(doc.id)
    }

    /// Merge a partial update into an existing entity.
    pub async fn try_update(&self, id: &str, patch: ContentPatch) -> Result<(), ContentError> {
        let mut fields = patch.into_fields();
        strip_store_owned(&mut fields);
        derive_slug(&mut fields);
        self.store.merge(self.name(), id, fields).await?;
        info!(collection = self.name(), id, "Content updated");
        Ok(())
    }

    /// Create the entity, or overwrite every field of it when it already
    /// carries an id.
    pub async fn try_save(&self, data: &T) -> Result<String, ContentError> {
        match data.id() {
            Some(id) => {
                let fields = entity_fields(data)?;
                self.store.merge(self.name(), id, fields).await?;
                info!(collection = self.name(), id, "Content saved");
                Ok(id.to_string())
            }
            None => self.try_create(data).await,
        }
    }

    /// Hard-delete an entity.
    pub async fn try_delete(&self, id: &str) -> Result<(), ContentError> {
        self.store.delete(self.name(), id).await?;
        info!(collection = self.name(), id, "Content deleted");
        Ok(())
    }

    /// Newest first, optionally published only, capped at the limit.
    pub async fn try_get_all(&self, published_only: bool) -> Result<Vec<T>, ContentError> {
        self.try_get_sorted(&newest_first(), published_only).await
    }

    /// Published entities, featured first, then by manual order.
    pub async fn try_get_featured(&self) -> Result<Vec<T>, ContentError> {
        self.try_get_sorted(&featured_first(), true).await
    }

    pub async fn try_get_by_id(&self, id: &str) -> Result<Option<T>, ContentError> {
        match self.store.get(self.name(), id).await? {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    /// First published entity with this slug. Slugs are not unique; with
    /// duplicates the store's natural order decides.
    pub async fn try_get_by_slug(&self, slug: &str) -> Result<Option<T>, ContentError> {
        let query = Query::new()
            .where_eq(SLUG_FIELD, slug)
            .where_eq(PUBLISHED_FIELD, true)
            .limit(1);
        let docs = self.store.query(self.name(), &query).await?;
        match docs.into_iter().next() {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    /// Filter, then order by each spec in sequence, then apply the limit.
    ///
    /// When the store reports a missing composite index, the filtered set is
    /// re-fetched unordered and sorted here instead.
    pub async fn try_get_sorted(
        &self,
        specs: &[SortSpec],
        published_only: bool,
    ) -> Result<Vec<T>, ContentError> {
        let filtered = if published_only {
            Query::new().where_eq(PUBLISHED_FIELD, true)
        } else {
            Query::new()
        };
        let query = apply_to_query(filtered.clone(), specs).limit(self.limit);

        let docs = match self.store.query(self.name(), &query).await {
            Ok(docs) => docs,
            Err(StoreError::MissingIndex { fields, .. }) => {
                warn!(
                    collection = self.name(),
                    index = %fields.join(","),
                    "Store cannot run sorted query, sorting in memory"
                );
                let mut docs = self.store.query(self.name(), &filtered).await?;
                sort_documents(&mut docs, specs);
                docs.truncate(self.limit);
                docs
            }
            Err(e) => return Err(e.into()),
        };
        debug!(collection = self.name(), count = docs.len(), "Content listed");
        Ok(decode_all(self.name(), docs))
    }

    /// Write `!current` to the flag without re-reading the entity.
    pub async fn try_toggle(
        &self,
        id: &str,
        flag: ContentFlag,
        current: bool,
    ) -> Result<bool, ContentError> {
        let next = !current;
        self.try_update(id, ContentPatch::new().set(flag.field(), next))
            .await?;
        Ok(next)
    }

    // ── Sentinel surface ────────────────────────────────────────────────────

    /// New id, or `None` if the write failed.
    pub async fn create(&self, data: &T) -> Option<String> {
        self.collapse("create", self.try_create(data).await)
    }

    pub async fn update(&self, id: &str, patch: ContentPatch) -> bool {
        self.collapse("update", self.try_update(id, patch).await)
            .is_some()
    }

    pub async fn delete(&self, id: &str) -> bool {
        self.collapse("delete", self.try_delete(id).await).is_some()
    }

    pub async fn get_all(&self, published_only: bool) -> Vec<T> {
        self.collapse("get_all", self.try_get_all(published_only).await)
            .unwrap_or_default()
    }

    pub async fn get_published(&self) -> Vec<T> {
        self.get_all(true).await
    }

    pub async fn get_featured(&self) -> Vec<T> {
        self.collapse("get_featured", self.try_get_featured().await)
            .unwrap_or_default()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<T> {
        self.collapse("get_by_id", self.try_get_by_id(id).await)
            .flatten()
    }

    pub async fn get_by_slug(&self, slug: &str) -> Option<T> {
        self.collapse("get_by_slug", self.try_get_by_slug(slug).await)
            .flatten()
    }

    pub async fn get_sorted(&self, specs: &[SortSpec], published_only: bool) -> Vec<T> {
        self.collapse(
            "get_sorted",
            self.try_get_sorted(specs, published_only).await,
        )
        .unwrap_or_default()
    }

    /// Flip `published`, given the caller's view of its current value.
    pub async fn toggle_published(&self, id: &str, current: bool) -> bool {
        self.collapse(
            "toggle_published",
            self.try_toggle(id, ContentFlag::Published, current).await,
        )
        .is_some()
    }

    /// Flip `featured`, given the caller's view of its current value.
    pub async fn toggle_featured(&self, id: &str, current: bool) -> bool {
        self.collapse(
            "toggle_featured",
            self.try_toggle(id, ContentFlag::Featured, current).await,
        )
        .is_some()
    }

    fn collapse<V>(&self, operation: &'static str, result: Result<V, ContentError>) -> Option<V> {
        match result {
            Ok(value) => Some(value),
            Err(e) if e.is_not_found() => {
                debug!(collection = self.name(), operation, error = %e, "Content not found");
                None
            }
            Err(e) => {
                warn!(collection = self.name(), operation, error = %e, "Content operation failed");
                None
            }
        }
    }
}

/// Serialize an entity into the fields written on create.
pub(crate) fn entity_fields<T: Content>(data: &T) -> Result<Fields, ContentError> {
    let Value::Object(mut fields) = serde_json::to_value(data)? else {
        return Err(ContentError::NotAnObject);
    };
    strip_store_owned(&mut fields);
    derive_slug(&mut fields);
    Ok(fields)
}

fn strip_store_owned(fields: &mut Fields) {
    fields.remove(ID_FIELD);
    fields.remove(CREATED_AT_FIELD);
    fields.remove(UPDATED_AT_FIELD);
}

/// Fill `slug` from `title` when a title is present and no slug was given.
/// An empty slug is never stored.
fn derive_slug(fields: &mut Fields) {
    let slug_given = fields
        .get(SLUG_FIELD)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());
    if slug_given {
        return;
    }
    let derived = fields
        .get(TITLE_FIELD)
        .and_then(Value::as_str)
        .map(slugify)
        .filter(|slug| !slug.is_empty());
    match derived {
        Some(slug) => {
            fields.insert(SLUG_FIELD.to_string(), Value::String(slug));
        }
        None => {
            fields.remove(SLUG_FIELD);
        }
    }
}

pub(crate) fn decode<T: Content>(doc: Document) -> Result<T, ContentError> {
    Ok(serde_json::from_value(doc.into_json())?)
}

/// Decode a listing, skipping documents that no longer match the entity shape.
fn decode_all<T: Content>(collection: &str, docs: Vec<Document>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            match decode(doc) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    warn!(collection, id = %id, error = %e, "Skipping malformed document");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_derive_slug_from_title() {
        let mut f = fields(json!({"title": "Hello, World!"}));
        derive_slug(&mut f);
        assert_eq!(f["slug"], "hello-world");
    }

    #[test]
    fn test_derive_slug_keeps_explicit_slug() {
        let mut f = fields(json!({"title": "Hello", "slug": "custom"}));
        derive_slug(&mut f);
        assert_eq!(f["slug"], "custom");
    }

    #[test]
    fn test_derive_slug_drops_empty_slug_when_title_has_none() {
        let mut f = fields(json!({"title": "!!!", "slug": ""}));
        derive_slug(&mut f);
        assert!(f.get("slug").is_none());

        let mut untitled = fields(json!({"name": "Ada", "slug": ""}));
        derive_slug(&mut untitled);
        assert!(untitled.get("slug").is_none());
    }

    #[test]
    fn test_derive_slug_replaces_empty_or_null_slug() {
        let mut empty = fields(json!({"title": "Hello There", "slug": ""}));
        derive_slug(&mut empty);
        assert_eq!(empty["slug"], "hello-there");

        let mut null = fields(json!({"title": "Hello There", "slug": null}));
        derive_slug(&mut null);
        assert_eq!(null["slug"], "hello-there");
    }

    #[test]
    fn test_derive_slug_without_title() {
        let mut f = fields(json!({"name": "Ada"}));
        derive_slug(&mut f);
        assert!(f.get("slug").is_none());
    }

    #[test]
    fn test_strip_store_owned() {
        let mut f = fields(json!({
            "id": "x",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "title": "Kept"
        }));
        strip_store_owned(&mut f);
        assert_eq!(f.len(), 1);
        assert_eq!(f["title"], "Kept");
    }

    #[test]
    fn test_flag_fields() {
        assert_eq!(ContentFlag::Published.field(), "published");
        assert_eq!(ContentFlag::Featured.field(), "featured");
    }
}
