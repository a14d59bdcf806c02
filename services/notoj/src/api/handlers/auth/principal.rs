//! Authenticated principal extraction.
//!
//! Flow Overview: pull the bearer token from the Authorization header, verify
//! its signature and expiry, then re-resolve the user from storage so a token
//! for a vanished account stops working immediately.

use axum::http::HeaderMap;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{
    session::{SessionSigner, extract_bearer_token},
    storage,
};
use crate::api::handlers::error::ApiError;

/// Authenticated user context derived from a verified session token.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
}

/// Resolve a bearer token into a principal, or fail with 401.
///
/// # Errors
/// Returns `Unauthorized` when the header is absent or malformed, the token
/// fails verification, or the token's subject no longer exists.
pub async fn require_auth(
    headers: &HeaderMap,
    pool: &PgPool,
    signer: &SessionSigner,
) -> Result<Principal, ApiError> {
    let Some(token) = extract_bearer_token(headers) else {
        return Err(unauthorized());
    };

    let claims = signer.verify(&token).map_err(|err| {
        debug!("Session token rejected: {err}");
        unauthorized()
    })?;

    // The token payload is not trusted on its own: the subject must still
    // resolve to a live user.
    let user = storage::lookup_user_by_email(pool, &claims.email)
        .await
        .map_err(ApiError::Internal)?;

    match user {
        Some(user) => Ok(Principal {
            user_id: user.id,
            email: user.email,
        }),
        None => Err(unauthorized()),
    }
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Invalid token".to_string())
}
