//! Database operations for contact messages
//!
//! This module contains the store operations backing the public contact
//! form and the admin inbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new contact message. `read` always starts false.
#[derive(Debug, Clone)]
pub struct AddMessageInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Insert a new contact message
pub async fn add_message(
    pool: &SqlitePool,
    input: AddMessageInput,
) -> Result<ContactMessage, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let message = sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO messages (id, name, email, subject, message, read, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7)
        RETURNING id, name, email, subject, message, read, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(input.name.trim())
    .bind(input.email.trim().to_lowercase())
    .bind(input.subject.trim())
    .bind(input.message.trim())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(message)
}

/// List all contact messages, newest first
pub async fn list_messages(pool: &SqlitePool) -> Result<Vec<ContactMessage>, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        r#"
        SELECT id, name, email, subject, message, read, created_at, updated_at
        FROM messages
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Delete a contact message
///
/// Returns `true` if a row was deleted, `false` if no such message exists.
pub async fn delete_message(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Mark a contact message as read
///
/// Returns `true` if a row was updated, `false` if no such message exists.
pub async fn mark_message_read(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let now = Utc::now();

    let result = sqlx::query("UPDATE messages SET read = TRUE, updated_at = $1 WHERE id = $2")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
