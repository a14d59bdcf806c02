use axum::{Json, extract::Extension, response::IntoResponse};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use super::{
    password::verify_password,
    state::AuthState,
    storage,
    types::{LoginRequest, TokenResponse},
};
use crate::api::handlers::error::{ApiError, ErrorBody};

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    tag = "auth"
)]
pub async fn login(
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<LoginRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    let email = request.email.trim();

    // Unknown email and wrong password take the same exit so callers cannot
    // probe which addresses are registered.
    let Some(user) = storage::lookup_user_by_email(&pool, email).await? else {
        debug!("Login failed: unknown email");
        return Err(invalid_credentials());
    };

    let password = request.password;
    let stored_hash = user.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|err| {
            ApiError::Internal(anyhow::anyhow!("password verification task failed: {err}"))
        })??;

    if !matches {
        debug!("Login failed: password mismatch");
        return Err(invalid_credentials());
    }

    let token = auth_state.signer().issue(user.id, &user.email)?;
    Ok(Json(TokenResponse {
        access_token: token,
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}
