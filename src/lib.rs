//! authgate - Account Authentication Service
//!
//! authgate registers accounts, verifies credentials at login, issues
//! bearer tokens, and validates those tokens in front of protected routes.
//!
//! # Overview
//!
//! - Passwords are hashed with bcrypt and never returned to a caller
//! - Access tokens are HS256 JWTs valid for 24 hours, validated statelessly
//! - Emails are unique; the storage constraint is the source of truth
//! - Accounts persist in PostgreSQL (`sqlx`), or in memory for development
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Endpoints
//!
//! - `POST /register` - 201, 400, 409, 500
//! - `POST /login` - 200 `{"token"}`, 400, 401, 500
//! - `GET /accounts/{id}` - 200, 400, 403, 404, 500 (bearer token required)
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations, `Option<T>` for "not found"
//! - Error types in `backend::error`, rendered as `{"error", "status"}` JSON

/// Backend server-side code
pub mod backend;
