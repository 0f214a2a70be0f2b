use serde_json::{Map, Value};

/// Field map of a stored document.
pub type Fields = Map<String, Value>;

/// Field names the store owns or defaults.
pub const ID_FIELD: &str = "id";
pub const CREATED_AT_FIELD: &str = "createdAt";
pub const UPDATED_AT_FIELD: &str = "updatedAt";
pub const PUBLISHED_FIELD: &str = "published";

/// A document as returned by the store: its id plus its fields.
///
/// The id is not part of `fields`; [`Document::into_json`] merges it back in
/// for conversion into typed entities.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The document as a JSON object including its `id`.
    #[must_use]
    pub fn into_json(self) -> Value {
        let mut fields = self.fields;
        fields.insert(ID_FIELD.to_string(), Value::String(self.id));
        Value::Object(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_json_includes_id() {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!("Hello"));
        let doc = Document::new("abc", fields);
        assert_eq!(doc.get("title"), Some(&json!("Hello")));
        assert_eq!(doc.into_json(), json!({"id": "abc", "title": "Hello"}));
    }
}
