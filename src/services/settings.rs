use tracing::{debug, warn};

use super::ContentServices;
use crate::content::SiteSettings;
use crate::collections::SortField;
use crate::repository::{ContentError, SortSpec};

impl ContentServices {
    /// The stored settings document, or defaults when none exists yet.
    ///
    /// When several documents exist the oldest is used.
    pub async fn site_settings(&self) -> SiteSettings {
        match self.try_site_settings().await {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!("No site settings stored, using defaults");
                SiteSettings::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load site settings, using defaults");
                SiteSettings::default()
            }
        }
    }

    pub async fn try_site_settings(&self) -> Result<Option<SiteSettings>, ContentError> {
        let oldest_first = [SortSpec::asc(SortField::CreatedAt)];
        let all = self.settings.try_get_sorted(&oldest_first, false).await?;
        Ok(all.into_iter().next())
    }

    /// Create the settings document, or overwrite the existing one.
    ///
    /// Fields are merged: an optional field set to `None` keeps its stored value.
    pub async fn save_site_settings(
        &self,
        mut settings: SiteSettings,
    ) -> Result<String, ContentError> {
        if settings.base.id.is_none() {
            if let Some(existing) = self.try_site_settings().await? {
                settings.base.id = existing.base.id;
            }
        }
        self.settings.try_save(&settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::DEFAULT_LIMIT;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn services() -> ContentServices {
        ContentServices::new(Arc::new(MemoryStore::new()), DEFAULT_LIMIT)
    }

    #[tokio::test]
    async fn test_defaults_when_empty() {
        let settings = services().site_settings().await;
        assert_eq!(settings, SiteSettings::default());
    }

    #[tokio::test]
    async fn test_save_reuses_single_document() {
        let services = services();
        let first = services
            .save_site_settings(SiteSettings {
                site_name: "NodeNest".to_string(),
                ..SiteSettings::default()
            })
            .await
            .unwrap();

        let second = services
            .save_site_settings(SiteSettings {
                site_name: "Atom Flow".to_string(),
                maintenance_mode: true,
                ..SiteSettings::default()
            })
            .await
            .unwrap();

        assert_eq!(first, second);
        let loaded = services.site_settings().await;
        assert_eq!(loaded.site_name, "Atom Flow");
        assert!(loaded.maintenance_mode);
        assert_eq!(services.settings.get_all(false).await.len(), 1);
    }

    #[tokio::test]
    async fn test_oldest_document_wins_beyond_limit() {
        let services = ContentServices::new(Arc::new(MemoryStore::new()), 1);
        for name in ["oldest", "newer", "newest"] {
            services
                .settings
                .try_create(&SiteSettings {
                    site_name: name.to_string(),
                    ..SiteSettings::default()
                })
                .await
                .unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        assert_eq!(services.site_settings().await.site_name, "oldest");

        services
            .save_site_settings(SiteSettings {
                site_name: "renamed".to_string(),
                ..SiteSettings::default()
            })
            .await
            .unwrap();
        assert_eq!(services.site_settings().await.site_name, "renamed");
    }

    #[tokio::test]
    async fn test_save_with_none_keeps_stored_optional_field() {
        let services = services();
        services
            .save_site_settings(SiteSettings {
                site_name: "NodeNest".to_string(),
                contact_email: Some("hello@nodenest.dev".to_string()),
                ..SiteSettings::default()
            })
            .await
            .unwrap();

        services
            .save_site_settings(SiteSettings {
                site_name: "NodeNest".to_string(),
                contact_email: None,
                ..SiteSettings::default()
            })
            .await
            .unwrap();

        let loaded = services.site_settings().await;
        assert_eq!(loaded.contact_email.as_deref(), Some("hello@nodenest.dev"));
    }
}
