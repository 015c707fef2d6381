//! Resolves which user a request acts on behalf of.
//!
//! Clients currently name themselves by sending a `user_id` in the request
//! body, and nothing proves they are that user. Handlers never read that id
//! directly: they hand it to an [`IdentityResolver`] and act as the returned
//! [`Caller`], so a session or token check can replace [`AssertedIdentity`]
//! without touching them.

use axum::http::HeaderMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Invalid user id: {0}. ID must be a positive integer")]
    InvalidUserId(i32),
}

/// The user a request acts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i32,
}

#[async_trait::async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolves the caller from the request headers and the id the client
    /// claimed in its body.
    async fn resolve(
        &self,
        headers: &HeaderMap,
        claimed_user_id: i32,
    ) -> Result<Caller, IdentityError>;
}

/// Trusts the claimed id as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssertedIdentity;

#[async_trait::async_trait]
impl IdentityResolver for AssertedIdentity {
    async fn resolve(
        &self,
        _headers: &HeaderMap,
        claimed_user_id: i32,
    ) -> Result<Caller, IdentityError> {
        if claimed_user_id <= 0 {
            return Err(IdentityError::InvalidUserId(claimed_user_id));
        }

        Ok(Caller {
            user_id: claimed_user_id,
        })
    }
}
