//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. Handlers only translate
//! between HTTP and [`AuthService`](crate::backend::auth::service::AuthService);
//! every rule lives in the gateway.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - Account registration handler
//! ├── login.rs     - Login handler
//! └── accounts.rs  - Get account handler (protected)
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register
//! - **`login`** - POST /login
//! - **`get_account`** - GET /accounts/{id} (requires a bearer token)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get account handler
pub mod accounts;

pub use types::{AccountResponse, LoginRequest, RegisterRequest, RegisterResponse, TokenResponse};

pub use accounts::get_account;
pub use login::login;
pub use register::register;
