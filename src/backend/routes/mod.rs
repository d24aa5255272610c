//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, fallback and tracing layer
//! - **`api_routes`** - Authentication and account endpoints
//!
//! # Routes
//!
//! - `POST /register` - Account registration
//! - `POST /login` - Login
//! - `GET /accounts/{id}` - Get account (requires `Authorization: Bearer`)
//! - `GET /health` - Liveness probe

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
