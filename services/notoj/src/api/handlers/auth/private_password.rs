//! The private-note access gate.
//!
//! Setting and validating the second, independently-set "private password"
//! that gates the private note partition. Validation is a per-request
//! re-proof of knowledge; the server keeps no "unlocked" state between calls.

use axum::{Json, extract::Extension, http::HeaderMap, response::IntoResponse};
use sqlx::PgPool;
use std::sync::Arc;

use super::{
    password::{hash_password, verify_password},
    principal::require_auth,
    state::AuthState,
    storage,
    types::{
        MessageResponse, SetPrivatePasswordRequest, ValidatePrivatePasswordRequest,
        ValidatePrivatePasswordResponse,
    },
};
use crate::api::handlers::error::{ApiError, ErrorBody};

const MIN_PRIVATE_PASSWORD_CHARS: usize = 6;

#[utoipa::path(
    post,
    path = "/auth/set-private-password",
    request_body = SetPrivatePasswordRequest,
    responses(
        (status = 200, description = "Private password set", body = MessageResponse),
        (status = 400, description = "Validation error or confirmation mismatch", body = ErrorBody),
        (status = 401, description = "Missing or invalid session token", body = ErrorBody),
    ),
    tag = "auth"
)]
pub async fn set_private_password(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<SetPrivatePasswordRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let principal = require_auth(&headers, &pool, auth_state.signer()).await?;

    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    if request.password.chars().count() < MIN_PRIVATE_PASSWORD_CHARS
        || request.confirm.chars().count() < MIN_PRIVATE_PASSWORD_CHARS
    {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    if request.password != request.confirm {
        return Err(ApiError::BadRequest("Passwords do not match".to_string()));
    }

    let password = request.password;
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|err| ApiError::Internal(anyhow::anyhow!("password hashing task failed: {err}")))??;

    // Overwrites any previous value; no re-authentication with the old
    // private password is required.
    let updated = storage::set_private_password_hash(&pool, principal.user_id, &hash).await?;
    if !updated {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Private password set".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/auth/validate-private-password",
    request_body = ValidatePrivatePasswordRequest,
    responses(
        (status = 200, description = "Validation result; validity is encoded in the body", body = ValidatePrivatePasswordResponse),
        (status = 401, description = "Missing or invalid session token", body = ErrorBody),
    ),
    tag = "auth"
)]
pub async fn validate_private_password(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<ValidatePrivatePasswordRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let principal = require_auth(&headers, &pool, auth_state.signer()).await?;

    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    let Some(user) = storage::lookup_user_by_id(&pool, principal.user_id).await? else {
        return Err(ApiError::NotFound("User not found".to_string()));
    };

    // "Not configured" is a distinct outcome from a wrong password: clients
    // use it to decide between a "create" and an "unlock" prompt.
    let Some(stored_hash) = user.private_password_hash else {
        return Ok(Json(ValidatePrivatePasswordResponse {
            valid: false,
            message: Some("No private password set".to_string()),
        }));
    };

    let password = request.password;
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|err| {
            ApiError::Internal(anyhow::anyhow!("password verification task failed: {err}"))
        })??;

    Ok(Json(ValidatePrivatePasswordResponse {
        valid,
        message: None,
    }))
}
