//! The base shape every content entity composes.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::collections::Collection;

/// Fields shared by every persisted content entity.
///
/// `id` and the timestamps are owned by the store: they are ignored on
/// create and never overwritten by an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseContent {
    /// Store-assigned identifier (absent until persisted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Public visibility gate
    #[serde(default)]
    pub published: bool,
    /// URL-safe identifier, derived from `title` when not supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Manual sort key among siblings
    #[serde(default)]
    pub order: i64,
    /// Promotional placement flag
    #[serde(default)]
    pub featured: bool,
}

impl BaseContent {
    #[must_use]
    pub fn published() -> Self {
        Self {
            published: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

/// Contract every entity satisfies so the generic repository can rely on the
/// base fields and its bound collection.
pub trait Content: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The collection documents of this type live in
    const COLLECTION: Collection;

    fn base(&self) -> &BaseContent;

    fn base_mut(&mut self) -> &mut BaseContent;

    fn id(&self) -> Option<&str> {
        self.base().id.as_deref()
    }

    fn slug(&self) -> Option<&str> {
        self.base().slug.as_deref()
    }

    fn is_published(&self) -> bool {
        self.base().published
    }

    fn is_featured(&self) -> bool {
        self.base().featured
    }

    fn order(&self) -> i64 {
        self.base().order
    }
}
