//! Composable capabilities: image, SEO, categorization and dating.
//!
//! Each capability is a field group (flattened into the entity's JSON) plus a
//! trait the entities carrying it implement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFields {
    /// Primary image
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery_images: Vec<String>,
}

impl ImageFields {
    #[must_use]
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFields {
    /// Primary classification
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFields {
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl DateFields {
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            expiry_date: None,
        }
    }
}

pub trait HasImage {
    fn image(&self) -> &ImageFields;

    fn image_url(&self) -> &str {
        &self.image().image_url
    }

    /// Alt text, falling back to the given label when none was set.
    fn alt_text<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.image().image_alt.as_deref().unwrap_or(fallback)
    }
}

pub trait HasSeo {
    fn seo(&self) -> &SeoData;

    fn meta_title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.seo().meta_title.as_deref().unwrap_or(fallback)
    }
}

pub trait Categorized {
    fn classification(&self) -> &CategoryFields;

    fn category(&self) -> &str {
        &self.classification().category
    }

    fn tags(&self) -> &[String] {
        &self.classification().tags
    }

    /// Case-insensitive tag membership.
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

pub trait Dated {
    fn dates(&self) -> &DateFields;

    fn date(&self) -> NaiveDate {
        self.dates().date
    }

    /// True once `today` is past the expiry date, if one is set.
    fn is_expired(&self, today: NaiveDate) -> bool {
        self.dates().expiry_date.is_some_and(|expiry| today > expiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        image: ImageFields,
        seo: SeoData,
        class: CategoryFields,
        dates: DateFields,
    }

    impl HasImage for Sample {
        fn image(&self) -> &ImageFields {
            &self.image
        }
    }

    impl HasSeo for Sample {
        fn seo(&self) -> &SeoData {
            &self.seo
        }
    }

    impl Categorized for Sample {
        fn classification(&self) -> &CategoryFields {
            &self.class
        }
    }

    impl Dated for Sample {
        fn dates(&self) -> &DateFields {
            &self.dates
        }
    }

    fn sample() -> Sample {
        Sample {
            image: ImageFields::new("https://cdn.example.com/a.png"),
            seo: SeoData::default(),
            class: CategoryFields {
                category: "design".to_string(),
                tags: vec!["UX".to_string(), "branding".to_string()],
            },
            dates: DateFields {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                expiry_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            },
        }
    }

    #[test]
    fn test_alt_text_fallback() {
        let s = sample();
        assert_eq!(s.alt_text("Cover"), "Cover");
        assert_eq!(s.image_url(), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_meta_title_fallback() {
        let s = sample();
        assert_eq!(s.meta_title_or("Post title"), "Post title");
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let s = sample();
        assert!(s.has_tag("ux"));
        assert!(!s.has_tag("seo"));
        assert_eq!(s.category(), "design");
    }

    #[test]
    fn test_is_expired() {
        let s = sample();
        assert!(!s.is_expired(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(s.is_expired(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()));
    }

    #[test]
    fn test_date_serializes_as_iso_day() {
        let dates = DateFields::on(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
        let json = serde_json::to_value(&dates).unwrap();
        assert_eq!(json["date"], "2024-01-09");
        assert!(json.get("expiryDate").is_none());
    }
}
