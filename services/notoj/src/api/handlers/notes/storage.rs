//! Database helpers for owner-scoped note access.
//!
//! Every query filters by `user_id`; a note that is missing or owned by
//! another user is indistinguishable from the caller's side.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::types::UpdateNoteRequest;

#[derive(Debug, Clone, FromRow)]
pub(crate) struct NoteRecord {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) color: String,
    pub(crate) pinned: bool,
    pub(crate) is_private: bool,
    pub(crate) created_at: DateTime<Utc>,
}

const NOTE_COLUMNS: &str = "id, user_id, title, content, color, pinned, is_private, created_at";

pub(super) async fn list_notes(pool: &PgPool, user_id: Uuid) -> Result<Vec<NoteRecord>, sqlx::Error> {
    let query = format!(
        "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = $1 ORDER BY pinned DESC, created_at DESC"
    );
    sqlx::query_as::<_, NoteRecord>(&query)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub(super) async fn fetch_note(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<NoteRecord>, sqlx::Error> {
    let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1 AND user_id = $2");
    sqlx::query_as::<_, NoteRecord>(&query)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub(super) async fn insert_note(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    content: &str,
    color: &str,
    pinned: bool,
    is_private: bool,
) -> Result<NoteRecord, sqlx::Error> {
    let query = format!(
        r"
        INSERT INTO notes (user_id, title, content, color, pinned, is_private)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {NOTE_COLUMNS}
        "
    );
    sqlx::query_as::<_, NoteRecord>(&query)
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(color)
        .bind(pinned)
        .bind(is_private)
        .fetch_one(pool)
        .await
}

/// Apply a partial update; absent fields keep their stored value.
pub(super) async fn update_note(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    update: &UpdateNoteRequest,
) -> Result<Option<NoteRecord>, sqlx::Error> {
    let query = format!(
        r"
        UPDATE notes
        SET
            title = COALESCE($1, title),
            content = COALESCE($2, content),
            color = COALESCE($3, color),
            pinned = COALESCE($4, pinned),
            is_private = COALESCE($5, is_private)
        WHERE id = $6 AND user_id = $7
        RETURNING {NOTE_COLUMNS}
        "
    );
    sqlx::query_as::<_, NoteRecord>(&query)
        .bind(update.title.as_deref())
        .bind(update.content.as_deref())
        .bind(update.color.as_deref())
        .bind(update.pinned)
        .bind(update.is_private)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub(super) async fn delete_note(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
