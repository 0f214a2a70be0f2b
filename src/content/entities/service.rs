use serde::{Deserialize, Serialize};

use crate::collections::Collection;
use crate::content::{BaseContent, HasImage, HasSeo, ImageFields, SeoData};

/// A service offered by the agency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(flatten)]
    pub base: BaseContent,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    /// Icon name understood by the frontend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(flatten)]
    pub image: ImageFields,
    #[serde(flatten)]
    pub seo: SeoData,
}

impl_content!(Service, Collection::Services);

impl HasImage for Service {
    fn image(&self) -> &ImageFields {
        &self.image
    }
}

impl HasSeo for Service {
    fn seo(&self) -> &SeoData {
        &self.seo
    }
}
