use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::info;

use super::ContentServices;
use crate::content::{BaseContent, Contact, ContactStatus};
use crate::repository::ContentError;

/// Loose email shape check: something@something.tld, no whitespace.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_REGEX is a valid regex literal")
});

const MAX_MESSAGE_LEN: usize = 5000;

/// What a visitor submits through the contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub service_interest: Option<String>,
}

/// Validate a contact form and return an error message if invalid.
pub fn validate_contact_form(form: &ContactForm) -> Result<(), String> {
    if form.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if !EMAIL_REGEX.is_match(form.email.trim()) {
        return Err(format!("invalid email address '{}'", form.email));
    }
    if form.message.trim().is_empty() {
        return Err("message must not be empty".to_string());
    }
    if form.message.len() > MAX_MESSAGE_LEN {
        return Err(format!(
            "message must be at most {MAX_MESSAGE_LEN} bytes, got {}",
            form.message.len()
        ));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ContentServices {
    /// Validate and store a contact-form submission with status `new`.
    pub async fn submit_contact(&self, form: ContactForm) -> Result<String, ContentError> {
        validate_contact_form(&form).map_err(ContentError::Validation)?;

        let contact = Contact {
            base: BaseContent::default(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: non_blank(form.phone),
            company: non_blank(form.company),
            subject: non_blank(form.subject),
            message: form.message,
            service_interest: non_blank(form.service_interest),
            status: ContactStatus::New,
        };
        let id = self.contacts.try_create(&contact).await?;
        info!(id = %id, "Contact submission stored");
        Ok(id)
    }
}
