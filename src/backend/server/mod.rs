//! Server Module
//!
//! This module initializes and configures the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementation
//! - **`config`** - Configuration loading (environment) and database setup
//! - **`init`** - Store selection, gateway assembly and app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env()`
//! 2. **Store Selection**: PostgreSQL (with migrations) or in-memory
//! 3. **State Creation**: `AuthService` wrapped in `AppState`
//! 4. **Router Creation**: public and protected routes, request tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{build_state, create_app};
pub use state::AppState;
