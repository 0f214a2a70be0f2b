//! AI-assisted drafting of site copy.

mod generate;
mod prompt;

pub use generate::{AssistError, ContentGenerator, HttpGenerator, DEFAULT_GENERATION_TIMEOUT_SECS};
pub use prompt::{PromptBuilder, PromptContext, PromptError, PromptKind};

use std::sync::Arc;
use tracing::info;

/// Renders a prompt template and hands it to a generator.
#[derive(Clone)]
pub struct ContentAssistant {
    prompts: Arc<PromptBuilder>,
    generator: Arc<dyn ContentGenerator>,
}

impl ContentAssistant {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Result<Self, AssistError> {
        Ok(Self {
            prompts: Arc::new(PromptBuilder::new()?),
            generator,
        })
    }

    pub async fn generate(
        &self,
        kind: PromptKind,
        context: &PromptContext,
    ) -> Result<String, AssistError> {
        let prompt = self.prompts.render(kind, context)?;
        info!(template = kind.name(), "Generating content");
        self.generator.generate(&prompt).await
    }
}
