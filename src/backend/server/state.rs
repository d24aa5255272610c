/**
 * Application State Management
 *
 * This module defines the application state and the `FromRef`
 * implementation that lets handlers extract the auth gateway directly.
 *
 * # Thread Safety
 *
 * The state only holds an `Arc<AuthService>`. The service is immutable after
 * construction; its store is safe for concurrent use.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::service::AuthService;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth gateway (store, hasher, token issuer and validator)
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}

/// Implement FromRef for the auth gateway
///
/// This allows handlers and middleware to use
/// `State(auth): State<Arc<AuthService>>`.
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
