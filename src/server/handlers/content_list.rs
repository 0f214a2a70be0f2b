use crate::repository::{featured_first, newest_first, ContentError};
use crate::server::helpers::{resolve_collection, sort_specs_from_proto};
use crate::server::proto::{ListContentRequest, ListContentResponse, ListMode};
use crate::server::structured_error::to_error_json;
use crate::services::ContentServices;
use tonic::{Response, Status};

async fn list(
    services: &ContentServices,
    req: &ListContentRequest,
) -> Result<Vec<String>, ContentError> {
    let collection = resolve_collection(&req.collection)?;
    let mode = req.mode();
    let specs = if !req.sort.is_empty() {
        sort_specs_from_proto(&req.sort)?
    } else if mode == ListMode::Featured {
        featured_first()
    } else {
        newest_first()
    };
    let published_only = mode != ListMode::All;

    let items = services
        .repository(collection)
        .list_json(&specs, published_only)
        .await?;
    items
        .iter()
        .map(|item| serde_json::to_string(item).map_err(ContentError::from))
        .collect()
}

pub async fn list_content(
    services: &ContentServices,
    req: ListContentRequest,
) -> Result<Response<ListContentResponse>, Status> {
    match list(services, &req).await {
        Ok(items) => {
            let total_count = i32::try_from(items.len()).unwrap_or(i32::MAX);
            Ok(Response::new(ListContentResponse {
                success: true,
                error: String::new(),
                items,
                total_count,
            }))
        }
        Err(e) => Ok(Response::new(ListContentResponse {
            success: false,
            error: to_error_json(&req.collection, &e),
            items: vec![],
            total_count: 0,
        })),
    }
}
