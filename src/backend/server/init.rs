/**
 * Server Initialization
 *
 * This module builds the application from a `ServerConfig`:
 *
 * 1. Select the credential store (PostgreSQL if `DATABASE_URL` is set,
 *    in-memory otherwise)
 * 2. Construct the password hasher and the token issuer/validator with the
 *    configured secret
 * 3. Assemble the auth gateway into `AppState`
 * 4. Create the router
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::store::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
use crate::backend::auth::tokens::{TokenIssuer, TokenValidator};
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// `ConfigError` when the configured database cannot be reached or
/// migrated, or the signing secret is rejected.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing authgate server");

    let store = open_store(config).await?;
    let app_state = build_state(config, store)?;

    tracing::info!("Router configured");
    Ok(create_router(app_state))
}

/// Select the credential store for this configuration
pub async fn open_store(config: &ServerConfig) -> Result<Arc<dyn CredentialStore>, ConfigError> {
    match &config.database_url {
        Some(url) => {
            let pool = load_database(url).await?;
            Ok(Arc::new(PgCredentialStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Accounts are kept in memory and lost on restart.");
            Ok(Arc::new(MemoryCredentialStore::new()))
        }
    }
}

/// Assemble the application state around a credential store
///
/// The signing secret is handed to the issuer and validator here and is not
/// reachable from anywhere else.
pub fn build_state(
    config: &ServerConfig,
    store: Arc<dyn CredentialStore>,
) -> Result<AppState, ConfigError> {
    let secret = config.jwt_secret.as_bytes();
    let auth = AuthService::new(
        store,
        PasswordHasher::new(config.bcrypt_cost),
        TokenIssuer::new(secret, config.token_ttl)?,
        TokenValidator::new(secret)?,
    );

    Ok(AppState::new(auth))
}
