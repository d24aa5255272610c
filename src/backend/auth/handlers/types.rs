/**
 * Authentication Handler Types
 *
 * Response bodies of the authentication endpoints. The request bodies are
 * the gateway's own input types, re-exported here.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::backend::auth::accounts::Account;

pub use crate::backend::auth::accounts::{LoginRequest, RegisterRequest};

/// Register response
///
/// Confirms the registration; carries neither the password nor its hash.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    /// ID assigned to the new account
    pub id: i64,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// HS256 access token, valid for 24 hours by default
    pub token: String,
}

/// Public fields of an account
///
/// Safe to return to clients: there is no password hash field at all.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Serialized as `YYYY-MM-DD`, or `null` when absent
    pub birth_date: Option<NaiveDate>,
    pub email: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            birth_date: account.birth_date,
            email: account.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::backend::auth::accounts::NewAccount;

    #[test]
    fn test_account_response_omits_hash() {
        let account = NewAccount {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            email: "ann@example.com".to_string(),
            password_hash: "$2b$04$digest".to_string(),
        }
        .into_account(3, Utc::now());

        let json = serde_json::to_value(AccountResponse::from(account)).unwrap();
        assert_eq!(json["birth_date"], "1990-04-12");
        assert_eq!(json["id"], 3);
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("digest"));
    }
}
