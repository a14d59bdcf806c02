//! Owner-scoped note handlers.
//!
//! Flow Overview:
//! 1) Authenticate via bearer session token.
//! 2) Scope every query to the resolved owner.
//! 3) Report missing and not-owned notes identically as 404.

pub(crate) mod storage;
pub(crate) mod types;

use axum::{
    Json,
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use self::types::{CreateNoteRequest, NoteResponse, UpdateNoteRequest};
use super::auth::{AuthState, principal::require_auth};
use super::error::{ApiError, ErrorBody};
use crate::api::handlers::auth::types::MessageResponse;

const MAX_TITLE_CHARS: usize = 80;
const DEFAULT_COLOR: &str = "#ffffff";

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Owned notes, pinned first then newest first", body = [NoteResponse]),
        (status = 401, description = "Missing or invalid session token", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn list_notes(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
) -> Result<impl IntoResponse, ApiError> {
    let principal = require_auth(&headers, &pool, auth_state.signer()).await?;

    let notes = storage::list_notes(&pool, principal.user_id)
        .await
        .map_err(|err| ApiError::Internal(err.into()))?;

    let body: Vec<NoteResponse> = notes.into_iter().map(NoteResponse::from).collect();
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Single owned note", body = NoteResponse),
        (status = 401, description = "Missing or invalid session token", body = ErrorBody),
        (status = 404, description = "Note missing or not owned", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn get_note(
    Path(id): Path<String>,
    headers: HeaderMap,
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
) -> Result<impl IntoResponse, ApiError> {
    let principal = require_auth(&headers, &pool, auth_state.signer()).await?;
    let note_id = parse_note_id(&id)?;

    let note = storage::fetch_note(&pool, note_id, principal.user_id)
        .await
        .map_err(|err| ApiError::Internal(err.into()))?
        .ok_or_else(note_not_found)?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 401, description = "Missing or invalid session token", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn create_note(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<CreateNoteRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let principal = require_auth(&headers, &pool, auth_state.signer()).await?;

    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    validate_title(&request.title)?;

    let color = request.color.as_deref().unwrap_or(DEFAULT_COLOR);
    let note = storage::insert_note(
        &pool,
        principal.user_id,
        &request.title,
        &request.content,
        color,
        request.pinned.unwrap_or(false),
        request.is_private,
    )
    .await
    .map_err(|err| ApiError::Internal(err.into()))?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note id")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 401, description = "Missing or invalid session token", body = ErrorBody),
        (status = 404, description = "Note missing or not owned", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn update_note(
    Path(id): Path<String>,
    headers: HeaderMap,
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<UpdateNoteRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let principal = require_auth(&headers, &pool, auth_state.signer()).await?;
    let note_id = parse_note_id(&id)?;

    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    if request.is_empty() {
        return Err(ApiError::Validation("No updates provided".to_string()));
    }

    if let Some(title) = &request.title {
        validate_title(title)?;
    }

    let note = storage::update_note(&pool, note_id, principal.user_id, &request)
        .await
        .map_err(|err| ApiError::Internal(err.into()))?
        .ok_or_else(note_not_found)?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid session token", body = ErrorBody),
        (status = 404, description = "Note missing or not owned", body = ErrorBody),
    ),
    tag = "notes"
)]
pub async fn delete_note(
    Path(id): Path<String>,
    headers: HeaderMap,
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
) -> Result<impl IntoResponse, ApiError> {
    let principal = require_auth(&headers, &pool, auth_state.signer()).await?;
    let note_id = parse_note_id(&id)?;

    let deleted = storage::delete_note(&pool, note_id, principal.user_id)
        .await
        .map_err(|err| ApiError::Internal(err.into()))?;

    if !deleted {
        return Err(note_not_found());
    }

    Ok(Json(MessageResponse {
        message: "Note deleted".to_string(),
    }))
}

fn note_not_found() -> ApiError {
    ApiError::NotFound("Note not found".to_string())
}

fn parse_note_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id.trim()).map_err(|_| ApiError::Validation("Invalid note id".to_string()))
}

fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ApiError::Validation(
            "Title must be at most 80 characters".to_string(),
        ));
    }
    Ok(())
}
