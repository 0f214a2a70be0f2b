//! One repository per collection, plus the contact and settings workflows
//! built on top of them.

mod contact;
mod settings;

pub use contact::{validate_contact_form, ContactForm, EMAIL_REGEX};

use std::sync::Arc;

use crate::collections::Collection;
use crate::content::{
    BlogPost, CompanyInfo, Contact, PortfolioProject, Service, SiteSettings, TeamMember,
};
use crate::repository::{ContentRepository, JsonRepository};
use crate::store::DocumentStore;

/// The site's content services, all sharing one store.
#[derive(Clone)]
pub struct ContentServices {
    pub blog: ContentRepository<BlogPost>,
    pub portfolio: ContentRepository<PortfolioProject>,
    pub services: ContentRepository<Service>,
    pub team: ContentRepository<TeamMember>,
    pub about: ContentRepository<CompanyInfo>,
    pub contacts: ContentRepository<Contact>,
    pub settings: ContentRepository<SiteSettings>,
    store: Arc<dyn DocumentStore>,
}

impl ContentServices {
    /// Bind every collection to `store`, capping listings at `limit`.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, limit: usize) -> Self {
        Self {
            blog: ContentRepository::new(Arc::clone(&store)).with_limit(limit),
            portfolio: ContentRepository::new(Arc::clone(&store)).with_limit(limit),
            services: ContentRepository::new(Arc::clone(&store)).with_limit(limit),
            team: ContentRepository::new(Arc::clone(&store)).with_limit(limit),
            about: ContentRepository::new(Arc::clone(&store)).with_limit(limit),
            contacts: ContentRepository::new(Arc::clone(&store)).with_limit(limit),
            settings: ContentRepository::new(Arc::clone(&store)).with_limit(limit),
            store,
        }
    }

    /// JSON view of the repository bound to `collection`.
    #[must_use]
    pub fn repository(&self, collection: Collection) -> &dyn JsonRepository {
        match collection {
            Collection::About => &self.about,
            Collection::Services => &self.services,
            Collection::Portfolio => &self.portfolio,
            Collection::Team => &self.team,
            Collection::Blog => &self.blog,
            Collection::Settings => &self.settings,
            Collection::Contacts => &self.contacts,
        }
    }

    #[must_use]
    pub fn store_backend(&self) -> &'static str {
        self.store.backend_name()
    }
}
