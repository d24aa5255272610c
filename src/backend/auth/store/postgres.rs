/**
 * PostgreSQL Credential Store
 *
 * This module implements `CredentialStore` on top of a `sqlx::PgPool`.
 * The schema lives in `migrations/` and is applied at startup.
 */

use async_trait::async_trait;
use sqlx::PgPool;

use super::CredentialStore;
use crate::backend::auth::accounts::{Account, NewAccount};
use crate::backend::error::StoreError;

/// Credential store backed by PostgreSQL
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map an insert failure, separating the uniqueness violation on `email`
fn map_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    /// Get account by email
    ///
    /// # Returns
    /// Account or None if not found
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, birth_date, email, password_hash, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Get account by ID
    ///
    /// # Returns
    /// Account or None if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, birth_date, email, password_hash, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Create a new account
    ///
    /// # Errors
    /// `StoreError::DuplicateEmail` when the `accounts_email_key` constraint
    /// rejects the row
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (first_name, last_name, birth_date, email, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, birth_date, email, password_hash, created_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.birth_date)
        .bind(&account.email)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_non_constraint_errors_stay_database_errors() {
        assert_matches!(
            map_insert_error(sqlx::Error::PoolTimedOut),
            StoreError::Database(sqlx::Error::PoolTimedOut)
        );
        assert_matches!(
            map_insert_error(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        );
    }
}
