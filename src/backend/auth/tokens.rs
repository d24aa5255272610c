/**
 * Access Tokens
 *
 * This module issues and validates the stateless bearer tokens handed out at
 * login. Tokens are JWTs signed with HMAC-SHA256 using the process-wide
 * secret; nothing is stored server side, so every protected request
 * validates its token independently.
 *
 * # Validation rules
 *
 * - Only HS256 is accepted; any other algorithm (including `none`) is
 *   rejected as malformed
 * - A signature mismatch is reported as a bad signature
 * - A token is expired from the instant `now >= exp`, with no leeway
 */

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::{SigningError, TokenError};

/// The only algorithm tokens are signed and accepted with
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Default validity window of an access token
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account ID as a decimal string
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration time (Unix seconds)
    pub exp: i64,
}

/// Mints signed, time-bounded access tokens
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: TimeDelta,
}

impl TokenIssuer {
    /// Create an issuer from the signing secret and the validity window
    ///
    /// # Errors
    /// `SigningError` if the secret is empty
    pub fn new(secret: &[u8], ttl: TimeDelta) -> Result<Self, SigningError> {
        if secret.is_empty() {
            return Err(SigningError("signing secret must not be empty".to_string()));
        }
        Ok(Self {
            key: EncodingKey::from_secret(secret),
            ttl,
        })
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Issue a token bound to `subject`, expiring `ttl` from now
    pub fn issue(&self, subject: &str) -> Result<String, SigningError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, SigningError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.key)
            .map_err(|e| SigningError(e.to_string()))
    }
}

/// Verifies presented tokens and extracts the bound subject
#[derive(Clone)]
pub struct TokenValidator {
    key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Create a validator for tokens signed with `secret`
    ///
    /// # Errors
    /// `SigningError` if the secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, SigningError> {
        if secret.is_empty() {
            return Err(SigningError("signing secret must not be empty".to_string()));
        }

        let mut validation = Validation::new(TOKEN_ALGORITHM);
        // Expiry is checked against an injectable clock in `validate_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Validate a token and return its subject
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as if the current time were `now`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;

        let claims = data.claims;
        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }
        if claims.sub.is_empty() {
            return Err(TokenError::Malformed);
        }

        Ok(claims.sub)
    }
}
