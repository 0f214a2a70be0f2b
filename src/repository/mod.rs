//! Typed content repositories over a [`DocumentStore`](crate::store::DocumentStore).

mod crud;
mod error;
mod json;
mod patch;
mod slug;
mod sort;

pub use crud::{ContentFlag, ContentRepository, DEFAULT_LIMIT};
pub use error::ContentError;
pub use json::JsonRepository;
pub use patch::ContentPatch;
pub use slug::slugify;
pub use sort::{apply_to_query, featured_first, newest_first, sort_documents, SortSpec};
