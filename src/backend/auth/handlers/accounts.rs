/**
 * Get Account Handler
 *
 * Handler for GET /accounts/{id}. The route sits behind `auth_middleware`,
 * so a valid bearer token has been checked before this runs.
 *
 * Any authenticated caller may read any account's public fields.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::handlers::types::AccountResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;
use crate::backend::middleware::AuthUser;

/// Get account handler
///
/// # Errors
///
/// * `400 Bad Request` - `id` is not an integer
/// * `403 Forbidden` - Raised by the middleware for a missing/invalid token
/// * `404 Not Found` - No account with this ID
/// * `500 Internal Server Error` - Store failure
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "first_name": "Ann",
///   "last_name": "Lee",
///   "birth_date": "1990-04-12",
///   "email": "ann@example.com"
/// }
/// ```
pub async fn get_account(
    State(auth): State<Arc<AuthService>>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, AuthError> {
    tracing::debug!("Account {} requested by subject {}", id, caller.subject);

    let account = auth.get_account(&id).await?;
    Ok(Json(AccountResponse::from(account)))
}
