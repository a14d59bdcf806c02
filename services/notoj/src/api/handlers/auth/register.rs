use crate::api::handlers::{valid_email, valid_name, valid_password};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use super::{
    password::hash_password,
    state::AuthState,
    storage::{self, SignupOutcome},
    types::{RegisterRequest, TokenResponse},
};
use crate::api::handlers::error::{ApiError, ErrorBody};

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = TokenResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 409, description = "User with the specified email already exists", body = ErrorBody),
    ),
    tag = "auth"
)]
pub async fn register(
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<RegisterRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    let name = request.name.trim().to_string();
    // Emails are matched exactly (case-sensitive), so only whitespace is trimmed.
    let email = request.email.trim().to_string();

    if !valid_name(&name) {
        return Err(ApiError::Validation(
            "Name should contain only letters and spaces".to_string(),
        ));
    }

    if !valid_email(&email) {
        return Err(ApiError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    if !valid_password(&request.password) {
        return Err(ApiError::Validation(
            "Password must be at least 12 characters and include uppercase, lowercase, number, and symbol"
                .to_string(),
        ));
    }

    // Argon2 is CPU-bound; keep it off the async executor.
    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|err| ApiError::Internal(anyhow::anyhow!("password hashing task failed: {err}")))??;

    match storage::insert_user(&pool, &name, &email, &password_hash).await? {
        SignupOutcome::Conflict => {
            debug!("Registration conflict for existing email");
            Err(ApiError::Conflict("Email already exists".to_string()))
        }
        SignupOutcome::Created(user) => {
            let token = auth_state.signer().issue(user.id, &user.email)?;
            Ok((
                StatusCode::CREATED,
                Json(TokenResponse {
                    access_token: token,
                }),
            ))
        }
    }
}
