/**
 * Account Model
 *
 * This module defines the persisted identity, the registration and login
 * input, and the email normalization policy shared by registration and
 * every lookup.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account struct representing a row of the `accounts` table
#[derive(Clone, sqlx::FromRow)]
pub struct Account {
    /// System-assigned ID, immutable once created
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Optional calendar date of birth
    pub birth_date: Option<NaiveDate>,
    /// Normalized email (unique)
    pub email: String,
    /// bcrypt digest; never returned to a caller
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

// Keeps the digest out of logs.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("birth_date", &self.birth_date)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Account data to insert; the store assigns `id` and `created_at`
#[derive(Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub email: String,
    pub password_hash: String,
}

impl NewAccount {
    /// Materialize the account with store-assigned fields
    pub fn into_account(self, id: i64, created_at: DateTime<Utc>) -> Account {
        Account {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            email: self.email,
            password_hash: self.password_hash,
            created_at,
        }
    }
}

/// Registration input
///
/// Missing string fields deserialize as empty so the gateway can report them
/// as invalid input instead of a JSON rejection.
#[derive(Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`, optional
    pub birth_date: Option<String>,
    pub email: String,
    /// Plaintext password (hashed before storage, never echoed)
    pub password: String,
}

/// Login input
#[derive(Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Normalize an email for storage and lookup
///
/// Surrounding whitespace is trimmed and the address is lowercased, so
/// `" A@X.com "` and `"a@x.com"` identify the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_register_request_missing_fields_default() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(request.email, "a@x.com");
        assert!(request.password.is_empty());
        assert!(request.birth_date.is_none());
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let account = NewAccount {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            birth_date: None,
            email: "ann@example.com".to_string(),
            password_hash: "$2b$04$secretdigest".to_string(),
        }
        .into_account(7, Utc::now());

        let debug = format!("{:?}", account);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secretdigest"));
    }
}
