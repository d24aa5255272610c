//! Authentication Module
//!
//! This module owns the credential lifecycle: account registration,
//! password hashing and verification, access token issuance, and token
//! validation in front of protected routes.
//!
//! # Architecture
//!
//! - **`accounts`** - Account model and email normalization
//! - **`store`** - Credential store contract and its PostgreSQL / in-memory
//!   implementations
//! - **`passwords`** - bcrypt hashing and verification
//! - **`tokens`** - HS256 access token issuer and validator
//! - **`service`** - `AuthService`, the gateway composing the above
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password -> uniqueness check -> hash -> insert
//! 2. **Login**: email + password -> lookup -> verify -> token returned
//! 3. **Protected request**: `Authorization: Bearer <token>` -> validate ->
//!    subject handed to the handler
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and expire after 24 hours; there is no revocation
//! - Login failures return an identical 401 regardless of cause
//! - Token failures return 403

/// Account model
pub mod accounts;

/// Credential store
pub mod store;

/// Password hashing
pub mod passwords;

/// Access token issuance and validation
pub mod tokens;

/// Auth gateway
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use accounts::{Account, NewAccount};
pub use handlers::{get_account, login, register};
pub use passwords::PasswordHasher;
pub use service::AuthService;
pub use store::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
pub use tokens::{TokenIssuer, TokenValidator};
