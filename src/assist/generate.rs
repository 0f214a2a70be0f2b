//! Text generation against an HTTP AI endpoint.
//!
//! The endpoint accepts `{"prompt": "..."}` and answers `{"content": "..."}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info};

use super::prompt::PromptError;

/// Default timeout for a generation request (60 seconds)
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Content generation is not configured")]
    NotConfigured,

    #[error("Generation request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Generation endpoint returned status {0}")]
    Status(u16),

    #[error("Generation endpoint returned empty content")]
    EmptyContent,

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    content: String,
}

/// [`ContentGenerator`] backed by a JSON HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpGenerator {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "Requesting generation");

        let request = async {
            let response = self
                .client
                .post(&self.endpoint)
                .json(&GenerateRequest { prompt })
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                return Err(AssistError::Status(status.as_u16()));
            }
            Ok(response.json::<GenerateResponse>().await?)
        };

        let body = timeout(self.timeout, request)
            .await
            .map_err(|_| AssistError::Timeout(self.timeout.as_secs()))??;

        let content = body.content.trim();
        if content.is_empty() {
            return Err(AssistError::EmptyContent);
        }

        info!(content_len = content.len(), "Generated content");
        Ok(content.to_string())
    }
}
