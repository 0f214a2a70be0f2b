//! Concrete content entities, one module per collection.

mod about;
mod blog;
mod contact;
mod portfolio;
mod service;
mod settings;
mod team;

pub use about::{CompanyInfo, CompanyValue};
pub use blog::{BlogCategory, BlogPost};
pub use contact::{Contact, ContactStatus};
pub use portfolio::{PortfolioProject, Testimonial};
pub use service::Service;
pub use settings::SiteSettings;
pub use team::TeamMember;
