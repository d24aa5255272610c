/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines all
 * route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (register, login, health, protected account routes)
 * 2. Fallback handler (JSON 404)
 * 3. Request tracing layer
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::conversion::not_found;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::backend::auth::MemoryCredentialStore;
    use crate::backend::server::{build_state, ServerConfig};

    fn app() -> Router<()> {
        let config = ServerConfig::builder()
            .jwt_secret("router-test-secret")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        let state = build_state(&config, Arc::new(MemoryCredentialStore::new())).unwrap();
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_not_found() {
        let response = app()
            .oneshot(Request::get("/accounts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_protected_route_without_token_is_forbidden() {
        let response = app()
            .oneshot(Request::get("/accounts/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
