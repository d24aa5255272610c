//! Credential Store
//!
//! Persistence contract for accounts. The store owns the uniqueness of
//! identity by email: whatever the gateway checks beforehand, an insert that
//! would duplicate an email fails with [`StoreError::DuplicateEmail`].
//!
//! - **`postgres`** - `PgCredentialStore`, backed by a `sqlx::PgPool`
//! - **`memory`** - `MemoryCredentialStore`, in-process (development and tests)

use async_trait::async_trait;

use crate::backend::auth::accounts::{Account, NewAccount};
use crate::backend::error::StoreError;

pub mod memory;
pub mod postgres;

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;

/// Account persistence consumed by the auth gateway
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for
/// connectivity or query failures. Implementations must be safe to share
/// across concurrent requests.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find an account by its normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Find an account by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError>;

    /// Persist a new account and return it with its assigned ID
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;
}
