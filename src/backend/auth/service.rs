/**
 * Auth Gateway
 *
 * `AuthService` composes the credential store, the password hasher and the
 * token issuer/validator into the user-facing operations:
 *
 * - `register` - create an account after a uniqueness check
 * - `login` - verify credentials and issue an access token
 * - `authenticate` - turn an `Authorization` header into a subject
 * - `get_account` - read an account's public fields by ID
 *
 * The service holds no per-request state; one instance is shared by every
 * request through `AppState`.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::backend::auth::accounts::{
    normalize_email, Account, LoginRequest, NewAccount, RegisterRequest,
};
use crate::backend::auth::passwords::{PasswordHasher, MAX_PASSWORD_BYTES};
use crate::backend::auth::store::CredentialStore;
use crate::backend::auth::tokens::{TokenIssuer, TokenValidator};
use crate::backend::error::{AuthError, HashError, StoreError};
use crate::backend::middleware::AuthenticatedAccount;

/// Prefix of the `Authorization` header value carrying an access token
pub const BEARER_PREFIX: &str = "Bearer ";

/// Calendar format of `birth_date`
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Plaintext behind the digest verified when a login names no account
const DUMMY_PASSWORD: &str = "authgate-dummy-password";

/// Auth gateway
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    validator: TokenValidator,
    /// Digest at the configured cost, hashed on the first unknown-email login
    dummy_digest: OnceCell<String>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        issuer: TokenIssuer,
        validator: TokenValidator,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
            validator,
            dummy_digest: OnceCell::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Register a new account
    ///
    /// # Process
    ///
    /// 1. Check that email and password are present
    /// 2. Parse the optional birth date
    /// 3. Reject an email that is already registered
    /// 4. Hash the password and insert the account
    ///
    /// Input is fully validated before the store is touched.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - missing email/password, password over
    ///   `MAX_PASSWORD_BYTES`, or malformed birth date
    /// * `Conflict` - email already registered (also when the store's
    ///   uniqueness constraint fires after the lookup)
    /// * `Store` / `Hash` - infrastructure failure
    pub async fn register(&self, request: RegisterRequest) -> Result<Account, AuthError> {
        let email = normalize_email(&request.email);
        if email.is_empty() {
            return Err(AuthError::invalid_input("Email is required"));
        }
        if !email.contains('@') {
            return Err(AuthError::invalid_input("Invalid email format"));
        }
        if request.password.is_empty() {
            return Err(AuthError::invalid_input("Password is required"));
        }
        if request.password.len() > MAX_PASSWORD_BYTES {
            return Err(password_too_long());
        }
        let birth_date = parse_birth_date(request.birth_date.as_deref())?;

        if self.store.find_by_email(&email).await?.is_some() {
            tracing::warn!("Registration rejected, email already exists: {}", email);
            return Err(AuthError::Conflict);
        }

        let password_hash = self
            .hasher
            .hash(&request.password)
            .await
            .map_err(|e| match e {
                HashError::TooLong(_) => password_too_long(),
                other => AuthError::Hash(other),
            })?;

        let account = self
            .store
            .insert(NewAccount {
                first_name: request.first_name.trim().to_string(),
                last_name: request.last_name.trim().to_string(),
                birth_date,
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::DuplicateEmail => {
                    tracing::warn!("Registration lost a race on a duplicate email");
                    AuthError::Conflict
                }
                other => AuthError::Store(other),
            })?;

        tracing::info!("Account registered: {} ({})", account.id, account.email);
        Ok(account)
    }

    /// Verify credentials and issue an access token
    ///
    /// An unknown email and a wrong password produce the same
    /// `Unauthorized`, so callers cannot tell which one applied. An unknown
    /// email still pays for one bcrypt verification against a dummy digest.
    pub async fn login(&self, request: LoginRequest) -> Result<String, AuthError> {
        let email = normalize_email(&request.email);
        if email.is_empty() || request.password.is_empty() {
            return Err(AuthError::invalid_input("Email and password are required"));
        }

        let account = match self.store.find_by_email(&email).await? {
            Some(account) => account,
            None => {
                let digest = self
                    .dummy_digest
                    .get_or_try_init(|| self.hasher.hash(DUMMY_PASSWORD))
                    .await?;
                let _ = self.hasher.verify(&request.password, digest).await;

                tracing::warn!("Login failed: unknown email");
                return Err(AuthError::Unauthorized);
            }
        };

        let verified = match self
            .hasher
            .verify(&request.password, &account.password_hash)
            .await
        {
            Ok(verified) => verified,
            Err(HashError::TooLong(_)) => false,
            Err(other) => return Err(AuthError::Hash(other)),
        };

        if !verified {
            tracing::warn!("Login failed: wrong password for account {}", account.id);
            return Err(AuthError::Unauthorized);
        }

        let token = self.issuer.issue(&account.id.to_string())?;

        tracing::info!("Account logged in: {}", account.id);
        Ok(token)
    }

    /// Authenticate a request from its headers
    ///
    /// Every rejection is `Forbidden`; the detail names the reason.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthenticatedAccount, AuthError> {
        let header = headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                AuthError::forbidden("missing authorization header")
            })?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                tracing::warn!("Invalid Authorization header format");
                AuthError::forbidden("malformed authorization header")
            })?;

        let subject = self.validator.validate(token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            AuthError::from(e)
        })?;

        Ok(AuthenticatedAccount { subject })
    }

    /// Fetch an account by the raw ID from the request path
    pub async fn get_account(&self, raw_id: &str) -> Result<Account, AuthError> {
        let id: i64 = raw_id
            .parse()
            .map_err(|_| AuthError::invalid_input("Invalid account ID"))?;

        self.store.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Account not found: {}", id);
            AuthError::NotFound
        })
    }
}

fn password_too_long() -> AuthError {
    AuthError::invalid_input(format!(
        "Password must be at most {} bytes",
        MAX_PASSWORD_BYTES
    ))
}

/// Parse an optional `YYYY-MM-DD` date; absent or empty means no date
fn parse_birth_date(raw: Option<&str>) -> Result<Option<NaiveDate>, AuthError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)
            .map(Some)
            .map_err(|_| AuthError::invalid_input("Invalid birth date, expected YYYY-MM-DD")),
    }
}
