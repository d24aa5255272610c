/**
 * Register Handler
 *
 * This module implements the account registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Parse the JSON payload (400 on syntax errors)
 * 2. Validate presence of email and password, parse birth date
 * 3. Check that the email is not registered yet
 * 4. Hash password using bcrypt
 * 5. Insert the account
 * 6. Return a confirmation with the new account ID
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Unparseable payload, missing email/password, or
///   malformed birth date
/// * `409 Conflict` - An account with this email already exists
/// * `500 Internal Server Error` - Store or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "first_name": "Ann",
///   "last_name": "Lee",
///   "birth_date": "1990-04-12",
///   "email": "ann@example.com",
///   "password": "p1"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "Account registered successfully", "id": 1 }
/// ```
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected register payload: {}", rejection.body_text());
        AuthError::invalid_input("Invalid request payload")
    })?;

    let account = auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account registered successfully".to_string(),
            id: account.id,
        }),
    ))
}
