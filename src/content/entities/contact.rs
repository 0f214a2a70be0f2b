use serde::{Deserialize, Serialize};

use crate::collections::Collection;
use crate::content::BaseContent;

/// Handling state of a contact-form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::New => write!(f, "new"),
            ContactStatus::Read => write!(f, "read"),
            ContactStatus::Replied => write!(f, "replied"),
            ContactStatus::Archived => write!(f, "archived"),
        }
    }
}

/// A message sent through the site's contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(flatten)]
    pub base: BaseContent,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_interest: Option<String>,
    #[serde(default)]
    pub status: ContactStatus,
}

impl_content!(Contact, Collection::Contacts);
