//! Content type schema.
//!
//! Structural contracts only: [`BaseContent`] and the capability field groups
//! are flattened into each entity, and the traits let generic code rely on
//! them without knowing the concrete type.

/// Implement [`Content`] for an entity with a `base: BaseContent` field.
macro_rules! impl_content {
    ($ty:ty, $collection:expr) => {
        impl $crate::content::Content for $ty {
            const COLLECTION: $crate::collections::Collection = $collection;

            fn base(&self) -> &$crate::content::BaseContent {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::content::BaseContent {
                &mut self.base
            }
        }
    };
}

mod base;
mod capabilities;
pub mod entities;

pub use base::{BaseContent, Content};
pub use capabilities::{
    CategoryFields, Categorized, DateFields, Dated, HasImage, HasSeo, ImageFields, SeoData,
};
pub use entities::{
    BlogCategory, BlogPost, CompanyInfo, CompanyValue, Contact, ContactStatus, PortfolioProject,
    Service, SiteSettings, TeamMember, Testimonial,
};
