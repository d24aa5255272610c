//! Backend Module
//!
//! All server-side code of the authentication service.
//!
//! # Architecture
//!
//! - **`auth`** - Credential lifecycle: accounts, store, passwords, tokens,
//!   gateway and handlers
//! - **`middleware`** - Bearer token middleware for protected routes
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`server`** - Configuration, application state and initialization
//! - **`error`** - Error types and their HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── routes/         - Route configuration
//! ├── server/         - Server initialization and state
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! - `AppState` holds an `Arc<AuthService>` that is never mutated
//! - The PostgreSQL pool and the in-memory store are safe for concurrent use
//! - bcrypt work runs on the blocking pool

/// Authentication and account management
pub mod auth;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

pub use auth::AuthService;
pub use error::AuthError;
pub use server::{create_app, AppState, ServerConfig};
