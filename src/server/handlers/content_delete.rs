use crate::server::helpers::resolve_collection;
use crate::server::proto::{DeleteContentRequest, DeleteContentResponse};
use crate::server::structured_error::to_error_json;
use crate::services::ContentServices;
use tonic::{Response, Status};

pub async fn delete_content(
    services: &ContentServices,
    req: DeleteContentRequest,
) -> Result<Response<DeleteContentResponse>, Status> {
    let result = match resolve_collection(&req.collection) {
        Ok(collection) => services.repository(collection).delete_json(&req.id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => Ok(Response::new(DeleteContentResponse {
            success: true,
            error: String::new(),
        })),
        Err(e) => Ok(Response::new(DeleteContentResponse {
            success: false,
            error: to_error_json(&req.collection, &e),
        })),
    }
}
