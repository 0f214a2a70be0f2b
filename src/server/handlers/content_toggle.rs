use crate::repository::ContentError;
use crate::server::helpers::{flag_from_proto, resolve_collection};
use crate::server::proto::{ToggleFlagRequest, ToggleFlagResponse};
use crate::server::structured_error::to_error_json;
use crate::services::ContentServices;
use tonic::{Response, Status};

async fn toggle(services: &ContentServices, req: &ToggleFlagRequest) -> Result<bool, ContentError> {
    let collection = resolve_collection(&req.collection)?;
    services
        .repository(collection)
        .toggle_flag(&req.id, flag_from_proto(req.flag()), req.current)
        .await
}

/// Writes `!current`; the stored value is not re-read first.
pub async fn toggle_flag(
    services: &ContentServices,
    req: ToggleFlagRequest,
) -> Result<Response<ToggleFlagResponse>, Status> {
    match toggle(services, &req).await {
        Ok(value) => Ok(Response::new(ToggleFlagResponse {
            success: true,
            error: String::new(),
            value,
        })),
        Err(e) => Ok(Response::new(ToggleFlagResponse {
            success: false,
            error: to_error_json(&req.collection, &e),
            value: req.current,
        })),
    }
}
