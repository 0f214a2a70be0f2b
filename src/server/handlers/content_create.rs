use crate::repository::ContentError;
use crate::server::helpers::{parse_payload, resolve_collection};
use crate::server::proto::{CreateContentRequest, CreateContentResponse};
use crate::server::structured_error::to_error_json;
use crate::services::ContentServices;
use tonic::{Response, Status};

async fn create(
    services: &ContentServices,
    req: &CreateContentRequest,
) -> Result<String, ContentError> {
    let collection = resolve_collection(&req.collection)?;
    let payload = parse_payload(&req.json)?;
    services.repository(collection).create_json(payload).await
}

pub async fn create_content(
    services: &ContentServices,
    req: CreateContentRequest,
) -> Result<Response<CreateContentResponse>, Status> {
    match create(services, &req).await {
        Ok(id) => Ok(Response::new(CreateContentResponse {
            success: true,
            error: String::new(),
            id,
        })),
        Err(e) => Ok(Response::new(CreateContentResponse {
            success: false,
            error: to_error_json(&req.collection, &e),
            id: String::new(),
        })),
    }
}
