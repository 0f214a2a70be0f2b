use crate::assist::{AssistError, ContentAssistant, PromptContext, PromptKind};
use crate::server::helpers::nonempty;
use crate::server::proto::{GenerateContentRequest, GenerateContentResponse};
use crate::server::structured_error::to_error_json;
use tonic::{Response, Status};

async fn generate(
    assistant: Option<&ContentAssistant>,
    req: GenerateContentRequest,
) -> Result<String, AssistError> {
    let assistant = assistant.ok_or(AssistError::NotConfigured)?;
    let kind: PromptKind = req.template.parse()?;
    let context = PromptContext {
        topic: req.topic,
        tone: nonempty(&req.tone),
        keywords: req.keywords.iter().map(String::as_str).filter_map(nonempty).collect(),
        notes: nonempty(&req.notes),
    };
    assistant.generate(kind, &context).await
}

pub async fn generate_content(
    assistant: Option<&ContentAssistant>,
    req: GenerateContentRequest,
) -> Result<Response<GenerateContentResponse>, Status> {
    match generate(assistant, req).await {
        Ok(content) => Ok(Response::new(GenerateContentResponse {
            success: true,
            error: String::new(),
            content,
        })),
        Err(e) => Ok(Response::new(GenerateContentResponse {
            success: false,
            error: to_error_json("", &e),
            content: String::new(),
        })),
    }
}
