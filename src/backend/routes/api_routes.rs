/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - Account registration
 * - `POST /login` - Login, returns an access token
 * - `GET /health` - Liveness probe
 *
 * ## Protected (bearer token required)
 * - `GET /accounts/{id}` - Public fields of an account
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{get_account, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes get `auth_middleware` as a route layer, so unmatched
/// paths still fall through to the 404 fallback instead of a 403.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/accounts/{id}", get(get_account))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/health", get(health))
        .merge(protected)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
