//! Common test utilities

use nodenest_daemon::content::{BaseContent, Service};
use nodenest_daemon::repository::{ContentRepository, DEFAULT_LIMIT};
use nodenest_daemon::services::ContentServices;
use nodenest_daemon::store::{DocumentStore, MemoryStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)] // Only the fs tests need it
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A service entity with the given title and base fields
pub fn service(title: &str, base: BaseContent) -> Service {
    Service {
        base,
        title: title.to_string(),
        short_description: format!("{title} in brief"),
        ..Service::default()
    }
}

/// Repository over a fresh in-memory store, with the store handle for poking at it
#[allow(dead_code)]
pub fn memory_repo() -> (Arc<MemoryStore>, ContentRepository<Service>) {
    let store = Arc::new(MemoryStore::new());
    let dyn_store: Arc<dyn DocumentStore> = store.clone();
    (store, ContentRepository::new(dyn_store))
}

#[allow(dead_code)]
pub fn memory_services() -> ContentServices {
    ContentServices::new(Arc::new(MemoryStore::new()), DEFAULT_LIMIT)
}

/// Keep consecutive creates from sharing a `createdAt` microsecond
#[allow(dead_code)]
pub async fn tick() {
    tokio::time::sleep(Duration::from_millis(2)).await;
}
