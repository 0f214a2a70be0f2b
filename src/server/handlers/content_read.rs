use crate::repository::ContentError;
use crate::server::helpers::resolve_collection;
use crate::server::proto::get_content_request::Key;
use crate::server::proto::{GetContentRequest, GetContentResponse};
use crate::server::structured_error::to_error_json;
use crate::services::ContentServices;
use tonic::{Response, Status};

async fn get(
    services: &ContentServices,
    req: &GetContentRequest,
) -> Result<Option<String>, ContentError> {
    let collection = resolve_collection(&req.collection)?;
    let repo = services.repository(collection);
    let found = match &req.key {
        Some(Key::Id(id)) => repo.get_json_by_id(id).await?,
        Some(Key::Slug(slug)) => repo.get_json_by_slug(slug).await?,
        None => return Err(ContentError::validation("either id or slug is required")),
    };
    found
        .map(|value| serde_json::to_string(&value).map_err(ContentError::from))
        .transpose()
}

pub async fn get_content(
    services: &ContentServices,
    req: GetContentRequest,
) -> Result<Response<GetContentResponse>, Status> {
    match get(services, &req).await {
        Ok(Some(json)) => Ok(Response::new(GetContentResponse {
            success: true,
            error: String::new(),
            found: true,
            json,
        })),
        Ok(None) => Ok(Response::new(GetContentResponse {
            success: true,
            error: String::new(),
            found: false,
            json: String::new(),
        })),
        Err(e) => Ok(Response::new(GetContentResponse {
            success: false,
            error: to_error_json(&req.collection, &e),
            found: false,
            json: String::new(),
        })),
    }
}
