use crate::collections::Collection;
use crate::server::proto::{DaemonInfo, GetDaemonInfoRequest};
use crate::services::ContentServices;
use crate::utils::DAEMON_VERSION;
use tonic::{Response, Status};

#[allow(
    renamed_and_removed_lints,
    unknown_lints,
    unused_async,
    clippy::unused_async
)]
pub async fn get_daemon_info(
    services: &ContentServices,
    assist_enabled: bool,
    _req: GetDaemonInfoRequest,
) -> Result<Response<DaemonInfo>, Status> {
    Ok(Response::new(DaemonInfo {
        version: DAEMON_VERSION.to_string(),
        store_backend: services.store_backend().to_string(),
        collections: Collection::ALL
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
        assist_enabled,
    }))
}
