//! Backend Error Module
//!
//! This module defines the error types of the credential lifecycle and their
//! conversion to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` for `AuthError` and the JSON error body
//!
//! # Error Types
//!
//! - `AuthError` - Gateway-level errors, one HTTP status per variant
//! - `StoreError` - Credential store failures
//! - `HashError` - Password hashing failures
//! - `SigningError` - Token signing failures
//! - `TokenError` - Token rejection reasons (malformed, bad signature, expired)
//!
//! Handlers return `Result<_, AuthError>` directly; the error is converted
//! into a status code and a JSON body of the form
//! `{"error": "...", "status": 401}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::ErrorBody;
pub use types::{AuthError, HashError, SigningError, StoreError, TokenError};
