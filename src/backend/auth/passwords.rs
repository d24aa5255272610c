/**
 * Password Hashing
 *
 * One-way salted hashing (bcrypt) and constant-time verification.
 *
 * bcrypt is intentionally slow, so both operations run on the blocking
 * thread pool instead of stalling the async runtime.
 *
 * bcrypt only reads the first 72 bytes of its NUL-terminated input. Longer
 * passwords are rejected with `HashError::TooLong` instead of being silently
 * truncated.
 */

use crate::backend::error::HashError;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;
/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;
/// Longest password, in bytes, bcrypt hashes in full (72 minus the NUL)
pub const MAX_PASSWORD_BYTES: usize = 71;

/// bcrypt password hasher with a configurable cost factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with the given cost (clamped to bcrypt's valid range)
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// Two calls with the same input produce different digests. A password
    /// over [`MAX_PASSWORD_BYTES`] fails with `HashError::TooLong`.
    pub async fn hash(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
            .await
            .map_err(|e| HashError::Failed(format!("hashing task failed: {}", e)))?
            .map_err(HashError::from)
    }

    /// Verify a plaintext password against a stored digest
    ///
    /// Returns `Ok(false)` on mismatch; `Err` when `digest` is malformed or
    /// the password is over [`MAX_PASSWORD_BYTES`].
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let digest = digest.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &digest))
            .await
            .map_err(|e| HashError::Failed(format!("verification task failed: {}", e)))?
            .map_err(HashError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(MIN_COST)
    }

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = hasher();
        let digest = hasher.hash("p1").await.unwrap();

        assert!(hasher.verify("p1", &digest).await.unwrap());
        assert!(!hasher.verify("p2", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_is_salted() {
        let hasher = hasher();
        let first = hasher.hash("same").await.unwrap();
        let second = hasher.hash("same").await.unwrap();

        assert_ne!(first, second);
        assert!(!first.contains("same"));
    }

    #[tokio::test]
    async fn test_verify_malformed_digest_is_error() {
        let result = hasher().verify("p1", "not-a-bcrypt-digest").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_long_password_is_not_truncated() {
        let hasher = hasher();
        let prefix = "a".repeat(MAX_PASSWORD_BYTES);
        let digest = hasher.hash(&prefix).await.unwrap();

        let longer = format!("{}WRONG-SUFFIX", prefix);
        assert_matches!(hasher.hash(&longer).await, Err(HashError::TooLong(_)));
        assert_matches!(hasher.verify(&longer, &digest).await, Err(HashError::TooLong(_)));
        assert!(hasher.verify(&prefix, &digest).await.unwrap());
    }

    #[test]
    fn test_cost_is_clamped() {
        assert_eq!(PasswordHasher::new(1).cost(), MIN_COST);
        assert_eq!(PasswordHasher::new(99).cost(), MAX_COST);
        assert_eq!(PasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }
}
