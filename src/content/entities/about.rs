use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::collections::Collection;
use crate::content::{BaseContent, HasImage, HasSeo, ImageFields, SeoData};

/// The agency's "about" page content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(flatten)]
    pub base: BaseContent,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CompanyValue>,
    /// Platform name to profile URL
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_links: BTreeMap<String, String>,
    #[serde(flatten)]
    pub image: ImageFields,
    #[serde(flatten)]
    pub seo: SeoData,
}

/// A company value shown on the about page; embedded in [`CompanyInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyValue {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl_content!(CompanyInfo, Collection::About);

impl HasImage for CompanyInfo {
    fn image(&self) -> &ImageFields {
        &self.image
    }
}

impl HasSeo for CompanyInfo {
    fn seo(&self) -> &SeoData {
        &self.seo
    }
}
