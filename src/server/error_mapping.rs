use crate::assist::{AssistError, PromptError};
use crate::repository::ContentError;
use crate::store::StoreError;

/// Trait for mapping domain errors to structured error codes and optional tips.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);
}

// ── StoreError ────────────────────────────────────────────────────────────────
impl ToStructuredError for StoreError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            StoreError::Unavailable(_) => (
                "STORE_UNAVAILABLE",
                Some("Check the daemon's data directory and logs"),
            ),
            StoreError::PermissionDenied(_) => ("PERMISSION_DENIED", None),
            StoreError::NotFound { .. } => ("NOT_FOUND", None),
            StoreError::MissingIndex { .. } => ("MISSING_INDEX", None),
            StoreError::InvalidDocument(_) => ("INVALID_DOCUMENT", None),
            StoreError::Io(_) => ("IO_ERROR", None),
            StoreError::Json(_) => ("JSON_ERROR", None),
        }
    }
}

// ── ContentError ──────────────────────────────────────────────────────────────
impl ToStructuredError for ContentError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            ContentError::Store(e) => e.error_code_and_tip(),
            ContentError::Serialization(_) => ("JSON_ERROR", None),
            ContentError::NotAnObject => (
                "NOT_AN_OBJECT",
                Some("Send the entity as a JSON object"),
            ),
            ContentError::UnknownCollection(_) => (
                "UNKNOWN_COLLECTION",
                Some("Valid collections: about, services, portfolio, team, blog, settings, contacts"),
            ),
            ContentError::Validation(_) => ("VALIDATION_ERROR", None),
        }
    }
}

// ── PromptError ───────────────────────────────────────────────────────────────
impl ToStructuredError for PromptError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            PromptError::TemplateError(_) | PromptError::RenderError(_) => {
                ("TEMPLATE_ERROR", None)
            }
            PromptError::UnknownTemplate(_) => (
                "UNKNOWN_TEMPLATE",
                Some("Valid templates: blog-post, service-description, project-summary, seo-meta"),
            ),
            PromptError::MissingTopic => ("TOPIC_REQUIRED", Some("Provide a non-empty topic")),
        }
    }
}

// ── AssistError ───────────────────────────────────────────────────────────────
impl ToStructuredError for AssistError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            AssistError::NotConfigured => (
                "ASSIST_NOT_CONFIGURED",
                Some("Set `endpoint` under [assist] in ~/.nodenest/config.toml or pass --assist-endpoint"),
            ),
            AssistError::Timeout(_) => ("ASSIST_TIMEOUT", None),
            AssistError::Request(_) => ("ASSIST_REQUEST_FAILED", None),
            AssistError::Status(_) => ("ASSIST_BAD_STATUS", None),
            AssistError::EmptyContent => ("ASSIST_EMPTY_CONTENT", None),
            AssistError::Prompt(e) => e.error_code_and_tip(),
        }
    }
}
