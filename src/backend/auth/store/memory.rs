/**
 * In-Memory Credential Store
 *
 * Keeps accounts in process memory. Used when `DATABASE_URL` is not set and
 * by the test suites. Contents are lost on restart.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::CredentialStore;
use crate::backend::auth::accounts::{Account, NewAccount};
use crate::backend::error::StoreError;

#[derive(Default)]
struct Accounts {
    by_id: HashMap<i64, Account>,
    /// email -> id
    email_index: HashMap<String, i64>,
    last_id: i64,
}

/// Credential store held in memory
///
/// The email check and the insert happen under one write lock, so the
/// uniqueness invariant holds under concurrent registration.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .email_index
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.by_id.get(&id).cloned())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.email_index.contains_key(&account.email) {
            return Err(StoreError::DuplicateEmail);
        }

        accounts.last_id += 1;
        let id = accounts.last_id;
        let account = account.into_account(id, Utc::now());

        accounts.email_index.insert(account.email.clone(), id);
        accounts.by_id.insert(id, account.clone());

        tracing::debug!("Account {} stored in memory", id);
        Ok(account)
    }
}
