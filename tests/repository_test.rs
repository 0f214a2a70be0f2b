#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

mod common;

use common::{memory_repo, service, tick};
use nodenest_daemon::collections::SortField;
use nodenest_daemon::content::{BaseContent, Content, Service};
use nodenest_daemon::repository::{ContentPatch, ContentRepository, SortSpec};
use nodenest_daemon::store::{DocumentStore, MemoryStore};
use std::sync::Arc;

#[tokio::test]
async fn test_create_derives_slug_from_title() {
    let (_, repo) = memory_repo();
    let id = repo
        .create(&service("Hello, World!", BaseContent::default()))
        .await
        .expect("Should create");

    let stored = repo.get_by_id(&id).await.expect("Should exist");
    assert_eq!(stored.slug(), Some("hello-world"));
    assert_eq!(stored.id(), Some(id.as_str()));
    assert!(stored.base.created_at.is_some());
    assert_eq!(stored.base.created_at, stored.base.updated_at);
}

#[tokio::test]
async fn test_create_keeps_explicit_slug() {
    let (_, repo) = memory_repo();
    let id = repo
        .create(&service(
            "Hello, World!",
            BaseContent::default().with_slug("greetings"),
        ))
        .await
        .unwrap();

    assert_eq!(repo.get_by_id(&id).await.unwrap().slug(), Some("greetings"));
}

#[tokio::test]
async fn test_published_defaults_to_false() {
    let (_, repo) = memory_repo();
    let id = repo
        .create(&service("Draft", BaseContent::default()))
        .await
        .unwrap();

    assert!(!repo.get_by_id(&id).await.unwrap().is_published());
    assert!(repo.get_published().await.is_empty());
}

#[tokio::test]
async fn test_get_published_excludes_drafts_and_sorts_newest_first() {
    let (_, repo) = memory_repo();
    repo.create(&service("Old", BaseContent::published()))
        .await
        .unwrap();
    tick().await;
    repo.create(&service("Draft", BaseContent::default()))
        .await
        .unwrap();
    tick().await;
    repo.create(&service("New", BaseContent::published()))
        .await
        .unwrap();

    let published = repo.get_published().await;
    let titles: Vec<_> = published.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Old"]);
    assert!(published.iter().all(Content::is_published));

    assert_eq!(repo.get_all(false).await.len(), 3);
}

#[tokio::test]
async fn test_get_featured_orders_featured_then_order() {
    let (_, repo) = memory_repo();
    for (title, featured, order) in [
        ("C", false, 1),
        ("A", true, 2),
        ("D", false, 0),
        ("B", true, 1),
    ] {
        repo.create(&service(
            title,
            BaseContent::published()
                .with_featured(featured)
                .with_order(order),
        ))
        .await
        .unwrap();
    }
    repo.create(&service(
        "Hidden",
        BaseContent::default().with_featured(true),
    ))
    .await
    .unwrap();

    let titles: Vec<_> = repo
        .get_featured()
        .await
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["B", "A", "D", "C"]);
}

#[tokio::test]
async fn test_update_merges_and_advances_updated_at() {
    let (_, repo) = memory_repo();
    let id = repo
        .create(&service("Original", BaseContent::default().with_order(7)))
        .await
        .unwrap();
    let before = repo.get_by_id(&id).await.unwrap();

    assert!(repo.update(&id, ContentPatch::new().title("Renamed Service")).await);

    let after = repo.get_by_id(&id).await.unwrap();
    assert_eq!(after.title, "Renamed Service");
    assert_eq!(after.slug(), Some("renamed-service"));
    assert_eq!(after.short_description, before.short_description);
    assert_eq!(after.order(), 7);
    assert_eq!(after.base.created_at, before.base.created_at);
    assert!(after.base.updated_at > before.base.updated_at);

    assert!(repo.update(&id, ContentPatch::new().order(8)).await);
    let again = repo.get_by_id(&id).await.unwrap();
    assert!(again.base.updated_at > after.base.updated_at);
}

#[tokio::test]
async fn test_update_cannot_overwrite_store_fields() {
    let (_, repo) = memory_repo();
    let id = repo
        .create(&service("Stable", BaseContent::default()))
        .await
        .unwrap();
    let before = repo.get_by_id(&id).await.unwrap();

    let patch = ContentPatch::new()
        .set("id", "hijacked")
        .set("createdAt", "2000-01-01T00:00:00.000000Z");
    assert!(repo.update(&id, patch).await);

    let after = repo.get_by_id(&id).await.unwrap();
    assert_eq!(after.id(), Some(id.as_str()));
    assert_eq!(after.base.created_at, before.base.created_at);
}

#[tokio::test]
async fn test_update_missing_id_is_false() {
    let (_, repo) = memory_repo();
    assert!(!repo.update("nope", ContentPatch::new().title("x")).await);
}

#[tokio::test]
async fn test_delete_then_get_is_none() {
    let (_, repo) = memory_repo();
    let id = repo
        .create(&service("Short-lived", BaseContent::default()))
        .await
        .unwrap();

    assert!(repo.delete(&id).await);
    assert!(repo.get_by_id(&id).await.is_none());
    assert!(!repo.delete(&id).await);
}

#[tokio::test]
async fn test_toggles_write_negated_current() {
    let (_, repo) = memory_repo();
    let id = repo
        .create(&service("Toggle", BaseContent::published()))
        .await
        .unwrap();

    assert!(repo.toggle_published(&id, true).await);
    assert!(!repo.get_by_id(&id).await.unwrap().is_published());

    assert!(repo.toggle_published(&id, false).await);
    assert!(repo.get_by_id(&id).await.unwrap().is_published());

    assert!(repo.toggle_featured(&id, false).await);
    assert!(repo.get_by_id(&id).await.unwrap().is_featured());

    assert!(!repo.toggle_featured("missing", false).await);
}

#[tokio::test]
async fn test_get_by_slug() {
    let (_, repo) = memory_repo();
    assert!(repo.get_by_slug("nonexistent").await.is_none());

    repo.create(&service("Web Design", BaseContent::published()))
        .await
        .unwrap();
    repo.create(&service("Draft Only", BaseContent::default()))
        .await
        .unwrap();

    let found = repo.get_by_slug("web-design").await.expect("Should find");
    assert_eq!(found.title, "Web Design");
    assert!(repo.get_by_slug("draft-only").await.is_none());
}

#[tokio::test]
async fn test_store_failure_degrades_to_sentinels() {
    let (store, repo) = memory_repo();
    let id = repo
        .create(&service("Present", BaseContent::published()))
        .await
        .unwrap();

    store.set_unavailable(true);

    assert!(repo.get_all(true).await.is_empty());
    assert!(repo.get_featured().await.is_empty());
    assert!(repo.get_by_id(&id).await.is_none());
    assert!(repo.get_by_slug("present").await.is_none());
    assert!(repo
        .create(&service("Lost", BaseContent::default()))
        .await
        .is_none());
    assert!(!repo.update(&id, ContentPatch::new().order(1)).await);
    assert!(!repo.delete(&id).await);
    assert!(repo.try_get_all(true).await.is_err());

    store.set_unavailable(false);
    assert_eq!(repo.get_all(true).await.len(), 1);
}

#[tokio::test]
async fn test_get_sorted_falls_back_without_composite_index() {
    let store = Arc::new(MemoryStore::new().without_composite_indexes());
    let dyn_store: Arc<dyn DocumentStore> = store.clone();
    let repo: ContentRepository<Service> = ContentRepository::new(dyn_store);

    for (title, featured, order) in [("C", false, 0), ("A", true, 5), ("B", true, 1)] {
        repo.create(&service(
            title,
            BaseContent::published()
                .with_featured(featured)
                .with_order(order),
        ))
        .await
        .unwrap();
    }
    repo.create(&service("Draft", BaseContent::default().with_featured(true)))
        .await
        .unwrap();

    let sorted = repo
        .try_get_sorted(
            &[
                SortSpec::desc(SortField::Featured),
                SortSpec::asc(SortField::Order),
            ],
            true,
        )
        .await
        .expect("Fallback should succeed");
    let titles: Vec<_> = sorted.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A", "C"]);

    assert_eq!(repo.get_featured().await.len(), 3);
}

#[tokio::test]
async fn test_limit_caps_listings() {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let repo: ContentRepository<Service> = ContentRepository::new(store).with_limit(2);
    for title in ["One", "Two", "Three"] {
        repo.create(&service(title, BaseContent::published()))
            .await
            .unwrap();
        tick().await;
    }

    let titles: Vec<_> = repo
        .get_published()
        .await
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["Three", "Two"]);
}

#[tokio::test]
async fn test_create_then_get_returns_every_field() {
    use chrono::NaiveDate;
    use nodenest_daemon::content::{BlogPost, CategoryFields, DateFields, ImageFields, SeoData};

    let repo: ContentRepository<BlogPost> = ContentRepository::new(Arc::new(MemoryStore::new()));
    let mut data = BlogPost {
        base: BaseContent::published().with_order(3).with_featured(true),
        title: "Zero-Downtime Deploys".to_string(),
        excerpt: "How we ship on Fridays".to_string(),
        content: "Blue, green, done.".to_string(),
        author: "Ada".to_string(),
        author_image: Some("/img/ada.png".to_string()),
        read_time: Some(4),
        image: ImageFields {
            image_url: "/img/deploys.png".to_string(),
            image_alt: Some("A deploy pipeline".to_string()),
            gallery_images: vec!["/img/a.png".to_string(), "/img/b.png".to_string()],
        },
        seo: SeoData {
            meta_title: Some("Deploys".to_string()),
            meta_description: Some("Shipping without downtime".to_string()),
            keywords: vec!["devops".to_string(), "rust".to_string()],
            og_image: Some("/img/og.png".to_string()),
        },
        classification: CategoryFields {
            category: "engineering".to_string(),
            tags: vec!["ci".to_string()],
        },
        dates: DateFields {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            expiry_date: Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
        },
    };

    let id = repo.create(&data).await.expect("Should create");
    let stored = repo.get_by_id(&id).await.expect("Should exist");

    assert_eq!(stored.slug(), Some("zero-downtime-deploys"));
    assert!(stored.base.created_at.is_some());
    data.base.id = Some(id);
    data.base.created_at = stored.base.created_at;
    data.base.updated_at = stored.base.updated_at;
    data.base.slug = stored.base.slug.clone();
    assert_eq!(stored, data);
}
