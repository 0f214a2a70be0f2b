use serde::Serialize;
use serde_json::Value;

use super::error::ContentError;
use crate::store::Fields;

/// A partial update: only the fields set here are merged into the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentPatch {
    fields: Fields,
}

impl ContentPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary field to a JSON value.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Set a field from any serializable value.
    pub fn set_serialized<V: Serialize>(
        mut self,
        field: impl Into<String>,
        value: &V,
    ) -> Result<Self, ContentError> {
        self.fields.insert(field.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    #[must_use]
    pub fn title(self, title: impl Into<String>) -> Self {
        let title: String = title.into();
        self.set("title", title)
    }

    #[must_use]
    pub fn slug(self, slug: impl Into<String>) -> Self {
        let slug: String = slug.into();
        self.set("slug", slug)
    }

    #[must_use]
    pub fn published(self, published: bool) -> Self {
        self.set("published", published)
    }

    #[must_use]
    pub fn featured(self, featured: bool) -> Self {
        self.set("featured", featured)
    }

    #[must_use]
    pub fn order(self, order: i64) -> Self {
        self.set("order", order)
    }

    /// Build a patch from a JSON object.
    pub fn from_json(value: Value) -> Result<Self, ContentError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ContentError::NotAnObject),
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_sets_fields() {
        let patch = ContentPatch::new().title("New").published(true).order(4);
        assert_eq!(patch.get("title"), Some(&json!("New")));
        assert_eq!(patch.get("published"), Some(&json!(true)));
        assert_eq!(patch.get("order"), Some(&json!(4)));
        assert!(patch.get("slug").is_none());
    }

    #[test]
    fn test_from_json_requires_object() {
        assert!(ContentPatch::from_json(json!({"title": "x"})).is_ok());
        assert!(matches!(
            ContentPatch::from_json(json!(["title"])),
            Err(ContentError::NotAnObject)
        ));
    }

    #[test]
    fn test_set_serialized() {
        let patch = ContentPatch::new()
            .set_serialized("tags", &vec!["rust", "web"])
            .unwrap();
        assert_eq!(patch.get("tags"), Some(&json!(["rust", "web"])));
    }
}
