use async_trait::async_trait;
use serde_json::Value;

use super::crud::{decode, ContentFlag, ContentRepository};
use super::error::ContentError;
use super::patch::ContentPatch;
use super::sort::SortSpec;
use crate::collections::Collection;
use crate::content::Content;
use crate::store::{Document, Fields, StoreError, ID_FIELD};

/// Collection-erased view of a [`ContentRepository`] that speaks JSON.
///
/// Every payload is checked against the entity type before it is written,
/// and every result is normalized through it before it is returned.
#[async_trait]
pub trait JsonRepository: Send + Sync {
    fn collection(&self) -> Collection;

    async fn create_json(&self, payload: Value) -> Result<String, ContentError>;

    async fn update_json(&self, id: &str, patch: Value) -> Result<(), ContentError>;

    async fn delete_json(&self, id: &str) -> Result<(), ContentError>;

    async fn list_json(
        &self,
        sort: &[SortSpec],
        published_only: bool,
    ) -> Result<Vec<Value>, ContentError>;

    async fn get_json_by_id(&self, id: &str) -> Result<Option<Value>, ContentError>;

    async fn get_json_by_slug(&self, slug: &str) -> Result<Option<Value>, ContentError>;

    async fn toggle_flag(
        &self,
        id: &str,
        flag: ContentFlag,
        current: bool,
    ) -> Result<bool, ContentError>;
}

#[async_trait]
impl<T: Content> JsonRepository for ContentRepository<T> {
    fn collection(&self) -> Collection {
        T::COLLECTION
    }

    async fn create_json(&self, payload: Value) -> Result<String, ContentError> {
        if !payload.is_object() {
            return Err(ContentError::NotAnObject);
        }
        let entity: T = serde_json::from_value(payload).map_err(|e| {
            ContentError::validation(format!("invalid {} payload: {e}", T::COLLECTION))
        })?;
        self.try_create(&entity).await
    }

    async fn update_json(&self, id: &str, patch: Value) -> Result<(), ContentError> {
        let patch = ContentPatch::from_json(patch)?;
        let Some(current) = self.try_get_by_id(id).await? else {
            return Err(StoreError::not_found(T::COLLECTION.as_str(), id).into());
        };
        check_merged::<T>(&current, &patch)?;
        self.try_update(id, patch).await
    }

    async fn delete_json(&self, id: &str) -> Result<(), ContentError> {
        self.try_delete(id).await
    }

    async fn list_json(
        &self,
        sort: &[SortSpec],
        published_only: bool,
    ) -> Result<Vec<Value>, ContentError> {
        let items = self.try_get_sorted(sort, published_only).await?;
        items
            .iter()
            .map(|item| serde_json::to_value(item).map_err(ContentError::from))
            .collect()
    }

    async fn get_json_by_id(&self, id: &str) -> Result<Option<Value>, ContentError> {
        self.try_get_by_id(id)
            .await?
            .map(|item| serde_json::to_value(&item).map_err(ContentError::from))
            .transpose()
    }

    async fn get_json_by_slug(&self, slug: &str) -> Result<Option<Value>, ContentError> {
        self.try_get_by_slug(slug)
            .await?
            .map(|item| serde_json::to_value(&item).map_err(ContentError::from))
            .transpose()
    }

    async fn toggle_flag(
        &self,
        id: &str,
        flag: ContentFlag,
        current: bool,
    ) -> Result<bool, ContentError> {
        self.try_toggle(id, flag, current).await
    }
}

/// Reject a patch that would leave the entity unreadable as `T`.
fn check_merged<T: Content>(current: &T, patch: &ContentPatch) -> Result<(), ContentError> {
    let Value::Object(mut merged) = serde_json::to_value(current)? else {
        return Err(ContentError::NotAnObject);
    };
    let id = merged
        .remove(ID_FIELD)
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    let patch_fields: Fields = patch.clone().into_fields();
    for (key, value) in patch_fields {
        merged.insert(key, value);
    }
    decode::<T>(Document::new(id, merged))
        .map(|_| ())
        .map_err(|e| ContentError::validation(format!("invalid {} patch: {e}", T::COLLECTION)))
}
