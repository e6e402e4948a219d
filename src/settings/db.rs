//! Database operations for site settings
//!
//! Settings are a small key-value table; values are stored as JSON so the
//! table can hold booleans, strings, or numbers without schema changes.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;

/// Key of the contact-form feature flag.
pub const CONTACT_FORM_STATUS: &str = "contactFormStatus";

/// A single settings row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Setting {
    pub key: String,
    pub value: Json<serde_json::Value>,
    pub updated_at: DateTime<Utc>,
}

/// Get a setting by key. Returns `None` if it has never been written.
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<Setting>, sqlx::Error> {
    sqlx::query_as::<_, Setting>(
        r#"
        SELECT key, value, updated_at
        FROM settings
        WHERE key = $1
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await
}

/// Update or create a setting (upsert).
pub async fn update_setting(
    pool: &SqlitePool,
    key: &str,
    value: serde_json::Value,
) -> Result<Setting, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Setting>(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        RETURNING key, value, updated_at
        "#,
    )
    .bind(key)
    .bind(Json(value))
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Whether the public contact form is enabled. Defaults to `false` when the
/// flag has never been set.
pub async fn contact_form_enabled(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let setting = get_setting(pool, CONTACT_FORM_STATUS).await?;
    Ok(setting
        .map(|s| s.value.0.as_bool().unwrap_or(false))
        .unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::init::test_pool;

    #[tokio::test]
    async fn test_missing_setting_is_none() {
        let pool = test_pool().await;
        // test_pool seeds the default flag; look for a key that never existed
        let setting = get_setting(&pool, "noSuchKey").await.unwrap();
        assert!(setting.is_none());
    }

    #[tokio::test]
    async fn test_upsert_and_read_back() {
        let pool = test_pool().await;

        update_setting(&pool, CONTACT_FORM_STATUS, serde_json::json!(true))
            .await
            .unwrap();
        assert!(contact_form_enabled(&pool).await.unwrap());

        update_setting(&pool, CONTACT_FORM_STATUS, serde_json::json!(false))
            .await
            .unwrap();
        assert!(!contact_form_enabled(&pool).await.unwrap());
    }

    #[tokio::test]
    async fn test_non_boolean_value_reads_as_disabled() {
        let pool = test_pool().await;

        update_setting(&pool, CONTACT_FORM_STATUS, serde_json::json!("yes"))
            .await
            .unwrap();
        assert!(!contact_form_enabled(&pool).await.unwrap());
    }
}
