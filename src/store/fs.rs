use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::document::{Document, Fields};
use super::query::Query;
use super::stamp::{stamp_merge, stamp_new};
use super::{new_document_id, DocumentStore, StoreError};
use crate::utils::{atomic_write, is_safe_segment};

/// File-backed document store: `<root>/<collection>/<id>.json`.
///
/// Each write replaces one file atomically. Merges and deletes on the same
/// document are serialized so concurrent partial updates never drop each
/// other's fields. Queries read the whole collection directory and evaluate
/// in memory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl FsStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Lock guarding read-modify-write cycles on one document.
    async fn document_lock(&self, collection: &str, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        Arc::clone(locks.entry(format!("{collection}/{id}")).or_default())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: &str) -> Result<PathBuf, StoreError> {
        if !is_safe_segment(collection) {
            return Err(StoreError::InvalidDocument(format!(
                "invalid collection name '{collection}'"
            )));
        }
        Ok(self.root.join(collection))
    }

    fn document_path(&self, collection: &str, id: &str) -> Result<PathBuf, StoreError> {
        if !is_safe_segment(id) {
            return Err(StoreError::InvalidDocument(format!(
                "invalid document id '{id}'"
            )));
        }
        Ok(self.collection_dir(collection)?.join(format!("{id}.json")))
    }

    async fn read_fields(path: &Path) -> Result<Option<Fields>, StoreError> {
        let content = match fs::read(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io_error(e)),
        };
        match serde_json::from_slice::<Value>(&content)? {
            Value::Object(fields) => Ok(Some(fields)),
            _ => Err(StoreError::InvalidDocument(format!(
                "{} is not a JSON object",
                path.display()
            ))),
        }
    }

    async fn write_fields(path: &Path, fields: &Fields) -> Result<(), StoreError> {
        let content = serde_json::to_vec_pretty(fields)?;
        atomic_write(path, content).await.map_err(map_io_error)
    }
}

fn map_io_error(e: std::io::Error) -> StoreError {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        StoreError::PermissionDenied(e.to_string())
    } else {
        StoreError::Io(e)
    }
}

#[async_trait]
impl DocumentStore for FsStore {
    fn backend_name(&self) -> &'static str {
        "fs"
    }

    async fn add(&self, collection: &str, mut fields: Fields) -> Result<Document, StoreError> {
        let dir = self.collection_dir(collection)?;
        fs::create_dir_all(&dir).await.map_err(map_io_error)?;
        stamp_new(&mut fields);
        let id = new_document_id();
        Self::write_fields(&self.document_path(collection, &id)?, &fields).await?;
        debug!(collection, id = %id, "Document written");
        Ok(Document::new(id, fields))
    }

    async fn merge(
        &self,
        collection: &str,
        id: &str,
        patch: Fields,
    ) -> Result<Document, StoreError> {
        let path = self.document_path(collection, id)?;
        let lock = self.document_lock(collection, id).await;
        let _guard = lock.lock().await;
        let mut fields = Self::read_fields(&path)
            .await?
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        stamp_merge(&mut fields, patch);
        Self::write_fields(&path, &fields).await?;
        Ok(Document::new(id, fields))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let path = self.document_path(collection, id)?;
        let lock = self.document_lock(collection, id).await;
        let _guard = lock.lock().await;
        let result = fs::remove_file(&path).await;
        self.locks.lock().await.remove(&format!("{collection}/{id}"));
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::not_found(collection, id))
            }
            Err(e) => Err(map_io_error(e)),
        }
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let path = self.document_path(collection, id)?;
        Ok(Self::read_fields(&path)
            .await?
            .map(|fields| Document::new(id, fields)))
    }

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let dir = self.collection_dir(collection)?;
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(e)),
        };

        let mut docs = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(map_io_error)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            match Self::read_fields(&path).await {
                Ok(Some(fields)) => docs.push(Document::new(id, fields)),
                Ok(None) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable document"),
            }
        }
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(query.apply(docs))
    }
}
