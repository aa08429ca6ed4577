//! Routing definitions for the tracker API.
//!
//! Every route is a `GET`. Routes whose canonical form ends in `/` are also
//! served without the trailing slash.

use axum::Router;
use axum::routing::{MethodRouter, get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::PanicCaptureLayer;
use crate::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the API router with all routes and middleware.
///
/// Unmatched requests fall through to [`handlers::route_not_found`]. Panics
/// in any handler, the fallback included, become internal-failure envelopes.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(handlers::alive))
        .route("/version", get(handlers::version))
        // Session lifecycle
        .route("/session/{session}/exists", get(handlers::session_exists))
        .route("/session/{session}/create", get(handlers::create_session))
        .route("/session/{session}/delete", get(handlers::delete_session))
        // Monsters
        .route(
            "/session/{session}/monster/{monster}/clear",
            get(handlers::clear_monster),
        )
        // Part fields
        .route(
            "/session/{session}/monster/{monster}/part/{part}/{field}",
            get(handlers::get_part_field),
        )
        .route(
            "/session/{session}/monster/{monster}/part/{part}/{field}/{value}",
            get(handlers::set_part_field),
        )
        // Ailment fields
        .route(
            "/session/{session}/monster/{monster}/ailment/{ailment}/{field}",
            get(handlers::get_ailment_field),
        )
        .route(
            "/session/{session}/monster/{monster}/ailment/{ailment}/{field}/{value}",
            get(handlers::set_ailment_field),
        );

    let router = [
        ("/session/{session}/", get(handlers::get_session)),
        (
            "/session/{session}/monster/{monster}/",
            get(handlers::get_monster),
        ),
        (
            "/session/{session}/monster/{monster}/part/{part}/",
            get(handlers::get_part),
        ),
        (
            "/session/{session}/monster/{monster}/part/{part}/set_all/{current_hp}/{max_hp}/{times_broken}/",
            get(handlers::set_part_all),
        ),
        (
            "/session/{session}/monster/{monster}/ailment/{ailment}/",
            get(handlers::get_ailment),
        ),
        (
            "/session/{session}/monster/{monster}/ailment/{ailment}/set_all/{current}/{max}/",
            get(handlers::set_ailment_all),
        ),
    ]
    .into_iter()
    .fold(router, |router, (path, method_router)| {
        route_with_optional_slash(router, path, method_router)
    });

    router
        .fallback(handlers::route_not_found)
        .layer(PanicCaptureLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Registers `path` (which ends in `/`) together with its slash-less form.
fn route_with_optional_slash(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    let bare = path.trim_end_matches('/');

    router
        .route(path, method_router.clone())
        .route(bare, method_router)
}

/// Creates the CORS layer configuration.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::StatusResponse;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use mhwsync_domain::Tracker;
    use rstest::{fixture, rstest};
    use tower::ServiceExt;

    #[fixture]
    fn router() -> Router {
        create_router(AppState::new(Tracker::with_buffer_size(4)))
    }

    async fn get_envelope(router: Router, uri: &str) -> (StatusCode, StatusResponse) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[tokio::test]
    async fn root_reports_alive(router: Router) {
        let (status, body) = get_envelope(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, StatusResponse::ok());
    }

    #[rstest]
    #[tokio::test]
    async fn version_is_a_number(router: Router) {
        let (_, body) = get_envelope(router, "/version").await;

        assert_eq!(body.status, 0);
        assert_eq!(body.value, serde_json::json!(2));
    }

    #[rstest]
    #[case("/session/nobody/exists")]
    #[case("/session/nobody/")]
    #[case("/session/nobody")]
    #[case("/session/nobody/monster/0/part/0/max_hp")]
    #[tokio::test]
    async fn missing_session_routes_report_status_1(router: Router, #[case] uri: &str) {
        let (status, body) = get_envelope(router, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, 1);
        assert_eq!(body.value, "session does not exist");
    }

    #[rstest]
    #[case("/nothing/here")]
    #[case("/session/a/monster/zero/")]
    #[case("/session/a/monster/0/part/0/stamina")]
    #[case("/session/a/monster/0/part/0/max_hp/-4")]
    #[tokio::test]
    async fn unmatched_paths_report_404(router: Router, #[case] uri: &str) {
        let (status, body) = get_envelope(router, uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status, 404);
        assert_eq!(body.value, uri);
    }

    #[rstest]
    #[tokio::test]
    async fn any_origin_is_allowed(router: Router) {
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/version")
                    .header(header::ORIGIN, "http://overlay.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[rstest]
    fn optional_slash_strips_only_trailing_separator() {
        assert_eq!(
            "/session/{session}/monster/{monster}/".trim_end_matches('/'),
            "/session/{session}/monster/{monster}"
        );
    }
}
