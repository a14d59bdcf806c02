//! Request/response types for note endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::storage::NoteRecord;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct NoteResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub color: String,
    pub pinned: bool,
    pub is_private: bool,
    pub created_at: String,
    pub user_id: String,
}

impl From<NoteRecord> for NoteResponse {
    fn from(record: NoteRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            content: record.content,
            color: record.color,
            pinned: record.pinned,
            is_private: record.is_private,
            created_at: record
                .created_at
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            user_id: record.user_id.to_string(),
        }
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    pub pinned: Option<bool>,
    pub is_private: bool,
}

/// Partial update: every absent field means "leave unchanged".
#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
    pub pinned: Option<bool>,
    pub is_private: Option<bool>,
}

impl UpdateNoteRequest {
    pub(crate) fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.color.is_none()
            && self.pinned.is_none()
            && self.is_private.is_none()
    }
}
