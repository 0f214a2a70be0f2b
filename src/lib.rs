// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod assist;
pub mod collections;
pub mod config;
pub mod content;
pub mod cors;
pub mod grpc_logging;
pub mod logging;
pub mod metrics;
pub mod repository;
pub mod server;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use collections::{Collection, SortField};
pub use config::{DaemonConfig, StoreBackend};
pub use content::{
    BlogPost, CompanyInfo, Contact, ContactStatus, Content, PortfolioProject, Service,
    SiteSettings, TeamMember,
};
pub use repository::{ContentError, ContentPatch, ContentRepository, SortSpec};
pub use server::ContentDaemonService;
pub use services::{ContactForm, ContentServices};
pub use store::{DocumentStore, FsStore, MemoryStore, StoreError};
