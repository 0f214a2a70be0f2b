use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::collections::Collection;
use crate::content::{BaseContent, BlogCategory, HasSeo, SeoData};

/// Site-wide settings. The `settings` collection holds a single document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(flatten)]
    pub base: BaseContent,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_links: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blog_categories: Vec<BlogCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(flatten)]
    pub seo: SeoData,
}

impl SiteSettings {
    /// Look up a configured blog category by slug.
    #[must_use]
    pub fn blog_category(&self, slug: &str) -> Option<&BlogCategory> {
        self.blog_categories.iter().find(|c| c.slug == slug)
    }
}

impl_content!(SiteSettings, Collection::Settings);

impl HasSeo for SiteSettings {
    fn seo(&self) -> &SeoData {
        &self.seo
    }
}
