/**
 * Authentication Error Types
 *
 * This module defines the error taxonomy of the credential lifecycle.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - `InvalidInput` - payload or path parameter fails structural checks (400)
 * - `Conflict` - the email is already registered (409)
 * - `Unauthorized` - login credentials rejected (401)
 * - `Forbidden` - bearer token missing or rejected (403)
 * - `NotFound` - the requested account does not exist (404)
 *
 * ## Infrastructure errors
 *
 * - `Store` - credential store failure (500)
 * - `Hash` - password hashing failure (500)
 * - `Signing` - token signing failure (500)
 *
 * Infrastructure errors are logged when converted into a response and are
 * never retried inside a request.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Credential store failure
///
/// "Not found" is not an error: lookups return `Ok(None)` for that case.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage uniqueness constraint on `email` rejected an insert
    #[error("email already registered")]
    DuplicateEmail,

    /// Connectivity or query failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Password hashing failure
///
/// A password mismatch is not a `HashError`.
#[derive(Debug, Error)]
pub enum HashError {
    /// Password longer than bcrypt can hash without truncating it
    #[error("password is {0} bytes, longer than bcrypt accepts")]
    TooLong(usize),

    /// Malformed stored digest, or the blocking hashing task did not complete
    #[error("password hashing failed: {0}")]
    Failed(String),
}

impl From<bcrypt::BcryptError> for HashError {
    fn from(err: bcrypt::BcryptError) -> Self {
        match err {
            bcrypt::BcryptError::Truncation(len) => Self::TooLong(len),
            other => Self::Failed(other.to_string()),
        }
    }
}

/// Token signing failure (key or configuration problem)
#[derive(Debug, Error)]
#[error("token signing failed: {0}")]
pub struct SigningError(pub String);

/// Reason a presented access token was rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Wrong structure, undecodable claims, or an algorithm other than HS256
    #[error("malformed token")]
    Malformed,

    /// The MAC does not match the token contents
    #[error("bad signature")]
    BadSignature,

    /// The validity window has passed
    #[error("token expired")]
    Expired,
}

/// Errors surfaced by the auth gateway and its HTTP handlers
///
/// Every variant maps to a single HTTP status (see [`AuthError::status_code`]).
/// Messages for `Unauthorized` are deliberately identical for every cause so
/// responses cannot be used to enumerate accounts.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Client-supplied data fails structural checks
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An account with this email already exists
    #[error("An account with this email already exists")]
    Conflict,

    /// Credentials rejected at login
    #[error("Invalid email or password")]
    Unauthorized,

    /// Bearer token missing or rejected; carries a diagnostic detail
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Requested account does not exist
    #[error("Account not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}

impl AuthError {
    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new forbidden error with a diagnostic detail
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden(detail.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Store`, `Hash`, `Signing` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Store(_) | Self::Hash(_) | Self::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Infrastructure errors collapse to a generic message; their cause is
    /// only logged.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            Self::Forbidden(_) => "Forbidden".to_string(),
            Self::Store(_) => "Database error".to_string(),
            Self::Hash(_) | Self::Signing(_) => "Server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Diagnostic detail, only present on `Forbidden`
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Forbidden(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        Self::Forbidden(err.to_string())
    }
}
