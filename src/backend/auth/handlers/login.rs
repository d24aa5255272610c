/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown email and wrong password return the same 401 body
 * - Only the token is returned, never account data
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Unparseable payload or missing fields
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AuthError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected login payload: {}", rejection.body_text());
        AuthError::invalid_input("Invalid request payload")
    })?;

    let token = auth.login(request).await?;
    Ok(Json(TokenResponse { token }))
}
