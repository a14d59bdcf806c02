//! API error taxonomy and its mapping to HTTP responses.
//!
//! Every failure surfaces to the transport boundary as a kind plus a message;
//! nothing is retried internally. Ownership violations are reported as
//! `not_found` so the existence of other users' notes is never revealed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Structured error body: a stable kind plus a human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::BadRequest(_) => "bad_request",
            Self::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Internal(err) => {
                // Log the cause; the caller only gets a generic message.
                error!("internal error: {err:?}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: self.kind(),
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn kinds_and_statuses_line_up() {
        let cases = [
            (
                ApiError::Validation("bad".to_string()),
                "validation",
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Conflict("dup".to_string()),
                "conflict",
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Unauthorized("no".to_string()),
                "unauthorized",
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::NotFound("gone".to_string()),
                "not_found",
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::BadRequest("nope".to_string()),
                "bad_request",
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Internal(anyhow!("boom")),
                "internal",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, kind, status) in cases {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.status(), status);
        }
    }

    #[test]
    fn internal_message_is_generic() {
        let response = ApiError::Internal(anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_keeps_message() {
        let response = ApiError::NotFound("Note not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
