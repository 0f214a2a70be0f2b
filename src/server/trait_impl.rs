use crate::metrics::OperationTimer;
use tonic::{Request, Response, Status};
use tracing::instrument;

use super::handlers;
use super::proto::content_service_server::ContentService;
use super::proto::{
    CreateContentRequest, CreateContentResponse, DaemonInfo, DeleteContentRequest,
    DeleteContentResponse, GenerateContentRequest, GenerateContentResponse, GetContentRequest,
    GetContentResponse, GetDaemonInfoRequest, ListContentRequest, ListContentResponse,
    SubmitContactRequest, SubmitContactResponse, ToggleFlagRequest, ToggleFlagResponse,
    UpdateContentRequest, UpdateContentResponse,
};
use super::ContentDaemonService;

/// Responses that report success in-band.
trait Outcome {
    fn succeeded(&self) -> bool;
}

macro_rules! impl_outcome {
    ($($ty:ty),+ $(,)?) => {
        $(impl Outcome for $ty {
            fn succeeded(&self) -> bool {
                self.success
            }
        })+
    };
}

impl_outcome!(
    CreateContentResponse,
    UpdateContentResponse,
    DeleteContentResponse,
    ListContentResponse,
    GetContentResponse,
    ToggleFlagResponse,
    SubmitContactResponse,
    GenerateContentResponse,
);

/// Flag the timer when the handler reported failure in-band.
fn finish<T: Outcome>(
    mut timer: OperationTimer,
    result: Result<Response<T>, Status>,
) -> Result<Response<T>, Status> {
    match &result {
        Ok(response) if response.get_ref().succeeded() => {}
        _ => timer.mark_failed(),
    }
    result
}

#[tonic::async_trait]
impl ContentService for ContentDaemonService {
    #[instrument(name = "grpc.create_content", skip_all)]
    async fn create_content(
        &self,
        request: Request<CreateContentRequest>,
    ) -> Result<Response<CreateContentResponse>, Status> {
        let req = request.into_inner();
        let timer = OperationTimer::new("create_content").with_collection(&req.collection);
        finish(
            timer,
            handlers::content_create::create_content(&self.services, req).await,
        )
    }

    #[instrument(name = "grpc.update_content", skip_all)]
    async fn update_content(
        &self,
        request: Request<UpdateContentRequest>,
    ) -> Result<Response<UpdateContentResponse>, Status> {
        let req = request.into_inner();
        let timer = OperationTimer::new("update_content").with_collection(&req.collection);
        finish(
            timer,
            handlers::content_update::update_content(&self.services, req).await,
        )
    }

    #[instrument(name = "grpc.delete_content", skip_all)]
    async fn delete_content(
        &self,
        request: Request<DeleteContentRequest>,
    ) -> Result<Response<DeleteContentResponse>, Status> {
        let req = request.into_inner();
        let timer = OperationTimer::new("delete_content").with_collection(&req.collection);
        finish(
            timer,
            handlers::content_delete::delete_content(&self.services, req).await,
        )
    }

    #[instrument(name = "grpc.list_content", skip_all)]
    async fn list_content(
        &self,
        request: Request<ListContentRequest>,
    ) -> Result<Response<ListContentResponse>, Status> {
        let req = request.into_inner();
        let timer = OperationTimer::new("list_content").with_collection(&req.collection);
        finish(
            timer,
            handlers::content_list::list_content(&self.services, req).await,
        )
    }

    #[instrument(name = "grpc.get_content", skip_all)]
    async fn get_content(
        &self,
        request: Request<GetContentRequest>,
    ) -> Result<Response<GetContentResponse>, Status> {
        let req = request.into_inner();
        let timer = OperationTimer::new("get_content").with_collection(&req.collection);
        finish(
            timer,
            handlers::content_read::get_content(&self.services, req).await,
        )
    }

    #[instrument(name = "grpc.toggle_flag", skip_all)]
    async fn toggle_flag(
        &self,
        request: Request<ToggleFlagRequest>,
    ) -> Result<Response<ToggleFlagResponse>, Status> {
        let req = request.into_inner();
        let timer = OperationTimer::new("toggle_flag").with_collection(&req.collection);
        finish(
            timer,
            handlers::content_toggle::toggle_flag(&self.services, req).await,
        )
    }

    #[instrument(name = "grpc.submit_contact", skip_all)]
    async fn submit_contact(
        &self,
        request: Request<SubmitContactRequest>,
    ) -> Result<Response<SubmitContactResponse>, Status> {
        let timer = OperationTimer::new("submit_contact").with_collection("contacts");
        finish(
            timer,
            handlers::contact_submit::submit_contact(&self.services, request.into_inner()).await,
        )
    }

    #[instrument(name = "grpc.generate_content", skip_all)]
    async fn generate_content(
        &self,
        request: Request<GenerateContentRequest>,
    ) -> Result<Response<GenerateContentResponse>, Status> {
        let timer = OperationTimer::new("generate_content");
        finish(
            timer,
            handlers::generate::generate_content(self.assistant.as_ref(), request.into_inner())
                .await,
        )
    }

    async fn get_daemon_info(
        &self,
        request: Request<GetDaemonInfoRequest>,
    ) -> Result<Response<DaemonInfo>, Status> {
        handlers::daemon::get_daemon_info(
            &self.services,
            self.assistant.is_some(),
            request.into_inner(),
        )
        .await
    }
}
