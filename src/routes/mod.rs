//! HTTP route handlers.
//!
//! The route table is built explicitly at construction time; every
//! (method, path) pair maps to a named handler function. Handlers are pure:
//! they read only the immutable application state and construct a fresh
//! response per request.

pub mod health;
pub mod home;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Health check - never cached, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    let home_routes = Router::new().route("/", get(home::index));

    Router::new()
        .merge(health_routes)
        .merge(home_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let config = AppConfig {
            port: 0,
            debug: false,
            environment: "test".to_string(),
        };
        create_router(AppState::new(config))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_fixed_payload() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CACHE_CONTROL).unwrap(),
            "no-store"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "healthy", "version": "1.0.0"})
        );
    }

    #[tokio::test]
    async fn index_returns_welcome_message() {
        let response = test_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Welcome to the API"})
        );
    }

    #[tokio::test]
    async fn health_ignores_query_parameters_and_headers() {
        let request = Request::get("/health?verbose=1&probe=k8s")
            .header("x-request-id", "abc123")
            .header("accept", "text/plain")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "healthy", "version": "1.0.0"})
        );
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = test_router()
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
