#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

mod common;

use common::{create_test_dir, service};
use nodenest_daemon::content::{BaseContent, Content, Service};
use nodenest_daemon::repository::{ContentPatch, ContentRepository};
use nodenest_daemon::store::{DocumentStore, FsStore};
use std::sync::Arc;

fn fs_repo(root: &std::path::Path) -> ContentRepository<Service> {
    let store: Arc<dyn DocumentStore> = Arc::new(FsStore::new(root));
    ContentRepository::new(store)
}

#[tokio::test]
async fn test_content_survives_reopening_the_store() {
    let temp_dir = create_test_dir();

    let id = {
        let repo = fs_repo(temp_dir.path());
        let id = repo
            .create(&service("Cloud Hosting", BaseContent::published()))
            .await
            .expect("Should create");
        assert!(repo.update(&id, ContentPatch::new().featured(true)).await);
        id
    };

    let reopened = fs_repo(temp_dir.path());
    let stored = reopened.get_by_id(&id).await.expect("Should persist");
    assert_eq!(stored.title, "Cloud Hosting");
    assert!(stored.is_featured());
    assert_eq!(
        reopened
            .get_by_slug("cloud-hosting")
            .await
            .map(|s| s.title),
        Some("Cloud Hosting".to_string())
    );
}

#[tokio::test]
async fn test_documents_are_plain_json_files() {
    let temp_dir = create_test_dir();
    let repo = fs_repo(temp_dir.path());
    let id = repo
        .create(&service("On Disk", BaseContent::default()))
        .await
        .unwrap();

    let path = temp_dir.path().join("services").join(format!("{id}.json"));
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["title"], "On Disk");
    assert_eq!(raw["slug"], "on-disk");
    assert_eq!(raw["published"], false);
    assert!(raw.get("id").is_none());

    assert!(repo.delete(&id).await);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_listing_an_empty_store() {
    let temp_dir = create_test_dir();
    let repo = fs_repo(temp_dir.path());
    assert!(repo.get_all(false).await.is_empty());
    assert!(repo.get_featured().await.is_empty());
    assert!(repo.get_by_slug("anything").await.is_none());
}

#[tokio::test]
async fn test_unsafe_ids_are_rejected() {
    let temp_dir = create_test_dir();
    let repo = fs_repo(temp_dir.path());
    assert!(repo.get_by_id("../../etc/passwd").await.is_none());
    assert!(repo.try_get_by_id("../escape").await.is_err());
}

#[tokio::test]
async fn test_concurrent_merges_keep_every_field() {
    let temp_dir = create_test_dir();
    let store = Arc::new(FsStore::new(temp_dir.path()));
    let doc = store
        .add("team", serde_json::Map::new())
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        let id = doc.id.clone();
        handles.push(tokio::spawn(async move {
            let mut patch = serde_json::Map::new();
            patch.insert(format!("f{i}"), serde_json::json!(i));
            store.merge("team", &id, patch).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stored = store.get("team", &doc.id).await.unwrap().unwrap();
    for i in 0..16 {
        assert_eq!(stored.fields[&format!("f{i}")], serde_json::json!(i));
    }
}
