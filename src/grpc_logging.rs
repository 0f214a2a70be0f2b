use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{info, info_span, warn, Instrument};

use crate::metrics::generate_request_id;

/// Split a gRPC path (`/package.Service/Method`) into service and method.
#[must_use]
pub fn split_grpc_path(path: &str) -> (&str, &str) {
    match path.trim_start_matches('/').split_once('/') {
        Some((service, method)) if !service.is_empty() && !method.is_empty() => {
            (service, method)
        }
        _ => ("unknown", "unknown"),
    }
}

/// Tower layer that wraps each gRPC call in a span carrying a request id
/// and logs its outcome.
#[derive(Clone, Copy)]
pub struct GrpcLoggingLayer;

impl<S> Layer<S> for GrpcLoggingLayer {
    type Service = GrpcLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GrpcLoggingService { inner }
    }
}

#[derive(Clone)]
pub struct GrpcLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for GrpcLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let (service, method) = split_grpc_path(req.uri().path());
        let span = info_span!(
            "grpc",
            request_id = %generate_request_id(),
            grpc.service = %service,
            grpc.method = %method,
        );

        // Clone-and-swap so the service that was polled ready handles this call
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(
            async move {
                let result = inner.call(req).await;
                let duration_ms = start.elapsed().as_millis();

                match &result {
                    Ok(response) => {
                        let status = response
                            .headers()
                            .get("grpc-status")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("0");
                        if status == "0" {
                            info!(grpc.status = %status, duration_ms = %duration_ms, "gRPC request completed");
                        } else {
                            warn!(grpc.status = %status, duration_ms = %duration_ms, "gRPC request completed with error status");
                        }
                    }
                    Err(_) => {
                        warn!(duration_ms = %duration_ms, "gRPC request failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_grpc_path() {
        assert_eq!(
            split_grpc_path("/nodenest.ContentService/ListContent"),
            ("nodenest.ContentService", "ListContent")
        );
    }

    #[test]
    fn test_split_grpc_path_malformed() {
        assert_eq!(split_grpc_path("/"), ("unknown", "unknown"));
        assert_eq!(split_grpc_path("/onlyservice"), ("unknown", "unknown"));
        assert_eq!(split_grpc_path(""), ("unknown", "unknown"));
    }
}
