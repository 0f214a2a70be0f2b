use crate::repository::ContentError;
use crate::server::helpers::{parse_payload, resolve_collection};
use crate::server::proto::{UpdateContentRequest, UpdateContentResponse};
use crate::server::structured_error::to_error_json;
use crate::services::ContentServices;
use tonic::{Response, Status};

async fn update(services: &ContentServices, req: &UpdateContentRequest) -> Result<(), ContentError> {
    let collection = resolve_collection(&req.collection)?;
    let patch = parse_payload(&req.json)?;
    services
        .repository(collection)
        .update_json(&req.id, patch)
        .await
}

pub async fn update_content(
    services: &ContentServices,
    req: UpdateContentRequest,
) -> Result<Response<UpdateContentResponse>, Status> {
    let error = match update(services, &req).await {
        Ok(()) => String::new(),
        Err(e) => to_error_json(&req.collection, &e),
    };
    Ok(Response::new(UpdateContentResponse {
        success: error.is_empty(),
        error,
    }))
}
