use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use futures::future::BoxFuture;
use tower::{Layer, Service};

use crate::errors::ApiError;
use crate::extractors::RequestTarget;

// =============================================================================
// PanicCaptureLayer
// =============================================================================

/// Turns a panic inside request handling into an internal-failure envelope
/// (`status` 10) that names the failing request, instead of dropping the
/// connection.
#[derive(Debug, Clone, Default)]
pub struct PanicCaptureLayer;

impl PanicCaptureLayer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<Service> Layer<Service> for PanicCaptureLayer {
    type Service = PanicCaptureService<Service>;

    fn layer(&self, inner: Service) -> Self::Service {
        PanicCaptureService { inner }
    }
}

// =============================================================================
// PanicCaptureService
// =============================================================================

#[derive(Debug, Clone)]
pub struct PanicCaptureService<Service> {
    inner: Service,
}

impl<InnerService> Service<Request> for PanicCaptureService<InnerService>
where
    InnerService: Service<Request, Response = Response> + Clone + Send + 'static,
    InnerService::Future: Send,
{
    type Response = Response;
    type Error = InnerService::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, context: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(context)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let target = RequestTarget::from_uri(request.uri());
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let outcome = AssertUnwindSafe(async move { inner.call(request).await })
                .catch_unwind()
                .await;

            match outcome {
                Ok(result) => result,
                Err(payload) => {
                    Ok(ApiError::internal(describe_panic(payload.as_ref()), target.0).into_response())
                }
            }
        })
    }
}

/// Renders a panic payload as a short diagnostic string.
fn describe_panic(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .map_or_else(
            || "panic(<non-string payload>)".to_owned(),
            |message| format!("panic({message:?})"),
        )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::StatusResponse;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{self, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/fine", get(|| async { "fine" }))
            .route(
                "/explode",
                get(|| async {
                    let values: Vec<u32> = Vec::new();
                    if values.is_empty() {
                        panic!("index out of bounds");
                    }
                    "unreachable"
                }),
            )
            .layer(PanicCaptureLayer::new())
    }

    async fn send(uri: &str) -> Response {
        app()
            .oneshot(http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn passes_through_normal_responses() {
        let response = send("/fine").await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"fine");
    }

    #[rstest]
    #[tokio::test]
    async fn panic_becomes_internal_failure_with_request() {
        let response = send("/explode?attempt=2").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: StatusResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, 10);
        assert_eq!(
            body.value,
            "panic(\"index out of bounds\"), request: /explode?attempt=2"
        );
    }

    #[rstest]
    fn describe_panic_handles_owned_and_static_messages() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let fixed: Box<dyn Any + Send> = Box::new("fixed");
        let other: Box<dyn Any + Send> = Box::new(7_u8);

        assert_eq!(describe_panic(owned.as_ref()), "panic(\"owned\")");
        assert_eq!(describe_panic(fixed.as_ref()), "panic(\"fixed\")");
        assert_eq!(describe_panic(other.as_ref()), "panic(<non-string payload>)");
    }
}
