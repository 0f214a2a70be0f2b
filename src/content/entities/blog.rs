use serde::{Deserialize, Serialize};

use crate::collections::Collection;
use crate::content::{
    BaseContent, CategoryFields, Categorized, DateFields, Dated, HasImage, HasSeo, ImageFields,
    SeoData,
};

/// Words per minute used for the read-time estimate.
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(flatten)]
    pub base: BaseContent,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Markdown body
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
    #[serde(flatten)]
    pub image: ImageFields,
    #[serde(flatten)]
    pub seo: SeoData,
    #[serde(flatten)]
    pub classification: CategoryFields,
    #[serde(flatten)]
    pub dates: DateFields,
}

impl BlogPost {
    /// Estimated reading time in whole minutes, never less than one.
    #[must_use]
    pub fn estimate_read_time(content: &str) -> u32 {
        let words = content.split_whitespace().count();
        let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }

    /// The stored read time, or an estimate from the body.
    #[must_use]
    pub fn read_time_minutes(&self) -> u32 {
        self.read_time
            .unwrap_or_else(|| Self::estimate_read_time(&self.content))
    }
}

/// A blog category; the configured list lives in [`super::SiteSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl_content!(BlogPost, Collection::Blog);

impl HasImage for BlogPost {
    fn image(&self) -> &ImageFields {
        &self.image
    }
}

impl HasSeo for BlogPost {
    fn seo(&self) -> &SeoData {
        &self.seo
    }
}

impl Categorized for BlogPost {
    fn classification(&self) -> &CategoryFields {
        &self.classification
    }
}

impl Dated for BlogPost {
    fn dates(&self) -> &DateFields {
        &self.dates
    }
}
