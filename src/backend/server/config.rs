/**
 * Server Configuration
 *
 * This module loads and validates the server configuration from environment
 * variables (a `.env` file is loaded by the binary first) and opens the
 * optional PostgreSQL connection.
 *
 * # Variables
 *
 * - `JWT_SECRET` - required, token signing secret
 * - `DATABASE_URL` - optional; without it accounts live in memory
 * - `SERVER_PORT` - default 8080
 * - `BCRYPT_COST` - default 12, 4..=31
 * - `TOKEN_TTL_HOURS` - default 24, must be positive
 */

use chrono::TimeDelta;
use sqlx::PgPool;
use std::fmt;
use thiserror::Error;

use crate::backend::auth::passwords::{MAX_COST, MIN_COST};
use crate::backend::auth::tokens::DEFAULT_TOKEN_TTL_HOURS;
use crate::backend::error::SigningError;

pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("database setup failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub token_ttl: TimeDelta,
}

// Keeps the signing secret and database credentials out of logs.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse_var("SERVER_PORT", &port)?);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
        }
        if let Some(hours) = lookup("TOKEN_TTL_HOURS") {
            builder = builder.token_ttl_hours(parse_var("TOKEN_TTL_HOURS", &hours)?);
        }

        builder.build()
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: u16,
    bcrypt_cost: u32,
    token_ttl_hours: i64,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: None,
            jwt_secret: None,
            port: DEFAULT_PORT,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn token_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = hours;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }

        let token_ttl = Some(self.token_ttl_hours)
            .filter(|hours| *hours > 0)
            .and_then(TimeDelta::try_hours)
            .ok_or_else(|| ConfigError::InvalidValue {
                name: "TOKEN_TTL_HOURS",
                value: self.token_ttl_hours.to_string(),
            })?;

        Ok(ServerConfig {
            database_url: self.database_url,
            jwt_secret,
            port: self.port,
            bcrypt_cost: self.bcrypt_cost,
            token_ttl,
        })
    }
}

/// Open the PostgreSQL connection pool and run migrations
///
/// This function:
/// 1. Creates a PostgreSQL connection pool
/// 2. Runs the migrations in `migrations/`
///
/// Unlike a missing `DATABASE_URL`, a configured database that cannot be
/// reached is a startup error.
pub async fn load_database(database_url: &str) -> Result<PgPool, ConfigError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.database_url, None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.token_ttl, TimeDelta::hours(24));
    }

    #[test]
    fn test_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/auth"),
            ("SERVER_PORT", "9000"),
            ("BCRYPT_COST", "10"),
            ("TOKEN_TTL_HOURS", "1"),
        ]))
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/auth"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.token_ttl, TimeDelta::hours(1));
    }

    #[test]
    fn test_missing_secret() {
        assert_matches!(
            ServerConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingValue("JWT_SECRET"))
        );
        assert_matches!(
            ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "")])),
            Err(ConfigError::MissingValue("JWT_SECRET"))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_matches!(
            ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("SERVER_PORT", "http")])),
            Err(ConfigError::InvalidValue { name: "SERVER_PORT", .. })
        );
        assert_matches!(
            ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("BCRYPT_COST", "3")])),
            Err(ConfigError::InvalidValue { name: "BCRYPT_COST", .. })
        );
        assert_matches!(
            ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("TOKEN_TTL_HOURS", "0")])),
            Err(ConfigError::InvalidValue { name: "TOKEN_TTL_HOURS", .. })
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ServerConfig::builder()
            .jwt_secret("super-secret-value")
            .database_url("postgres://user:pw@localhost/auth")
            .build()
            .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
        assert!(!debug.contains("pw@localhost"));
    }
}
