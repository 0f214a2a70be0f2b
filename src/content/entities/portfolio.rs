use serde::{Deserialize, Serialize};

use crate::collections::Collection;
use crate::content::{
    BaseContent, CategoryFields, Categorized, DateFields, Dated, HasImage, HasSeo, ImageFields,
    SeoData,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    #[serde(flatten)]
    pub base: BaseContent,
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub description: String,
    /// Long-form case study (markdown)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
    #[serde(flatten)]
    pub image: ImageFields,
    #[serde(flatten)]
    pub seo: SeoData,
    #[serde(flatten)]
    pub classification: CategoryFields,
    #[serde(flatten)]
    pub dates: DateFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl_content!(PortfolioProject, Collection::Portfolio);

impl HasImage for PortfolioProject {
    fn image(&self) -> &ImageFields {
        &self.image
    }
}

impl HasSeo for PortfolioProject {
    fn seo(&self) -> &SeoData {
        &self.seo
    }
}

impl Categorized for PortfolioProject {
    fn classification(&self) -> &CategoryFields {
        &self.classification
    }
}

impl Dated for PortfolioProject {
    fn dates(&self) -> &DateFields {
        &self.dates
    }
}
