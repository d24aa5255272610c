/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require a
 * bearer token. It authenticates the request through `AuthService` and
 * exposes the token subject to handlers as request-scoped context.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Authenticated caller extracted from the access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// Token subject (the account ID as a string)
    pub subject: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates it
/// 3. Attaches the subject to request extensions for use in handlers
///
/// Returns 403 Forbidden if the header is missing, malformed, or the token
/// is rejected.
pub async fn auth_middleware(
    State(auth): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let caller = auth.authenticate(request.headers())?;
    request.extensions_mut().insert(caller);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Only usable on routes wrapped by [`auth_middleware`]; elsewhere it
/// rejects with 403.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedAccount);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAccount>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedAccount not found in request extensions");
                AuthError::forbidden("missing authentication context")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn test_extract_authenticated_account() {
        let mut request = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let caller = AuthenticatedAccount {
            subject: "42".to_string(),
        };
        request.extensions_mut().insert(caller.clone());

        let (mut parts, _) = request.into_parts();
        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, caller);
    }

    #[tokio::test]
    async fn test_extract_without_middleware_is_forbidden() {
        let request = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();

        let (mut parts, _) = request.into_parts();
        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Forbidden(_))));
    }
}
