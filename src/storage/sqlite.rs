//! SQLite storage backend.
//!
//! The schema is a single append-only table:
//!
//! ```text
//! sentiment_records
//! ├── id              INTEGER PRIMARY KEY AUTOINCREMENT
//! ├── review_text     TEXT NOT NULL
//! ├── label_sentimen  TEXT NOT NULL   -- always lower-cased
//! ├── created_at      TEXT NOT NULL   -- UTC, set on insert
//! └── updated_at      TEXT NOT NULL   -- UTC, set on insert
//! ```

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::Result;
use crate::models::{SentimentLabel, SentimentRecord};
use crate::storage::SentimentStore;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS sentiment_records (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    review_text     TEXT NOT NULL,
    label_sentimen  TEXT NOT NULL,
    created_at      TEXT NOT NULL,
    updated_at      TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_sentiment_records_label
    ON sentiment_records (label_sentimen);
";

/// SQLite-backed sentiment store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database at the given sqlx URL, creating the file and
    /// schema when missing.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the schema if it does not exist yet.
    async fn init_schema(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        for statement in SCHEMA.split(';').filter(|s| !s.trim().is_empty()) {
            sqlx::query(statement).execute(&mut *conn).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SentimentStore for SqliteStore {
    async fn insert(&self, text: &str, label: SentimentLabel) -> Result<SentimentRecord> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO sentiment_records (review_text, label_sentimen, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(text)
        .bind(label.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(SentimentRecord {
            id: result.last_insert_rowid(),
            text: text.to_string(),
            label,
            created_at: now,
            updated_at: now,
        })
    }

    async fn count_by_label(&self, label: SentimentLabel) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sentiment_records WHERE label_sentimen = ?1",
        )
        .bind(label.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count.max(0) as u64)
    }

    async fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        let latest: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT MAX(updated_at) FROM sentiment_records")
                .fetch_one(&self.pool)
                .await?;

        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn temp_store() -> (TempDir, SqliteStore) {
        let tmp = TempDir::new().unwrap();
        let url = format!("sqlite://{}", tmp.path().join("test.db").display());
        let store = SqliteStore::connect(&url).await.unwrap();
        (tmp, store)
    }

    #[tokio::test]
    async fn empty_table_has_zero_counts_and_no_timestamp() {
        let (_tmp, store) = temp_store().await;

        for label in SentimentLabel::ALL {
            assert_eq!(store.count_by_label(label).await.unwrap(), 0);
        }
        assert!(store.last_updated().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_sets_timestamps_and_counts() {
        let (_tmp, store) = temp_store().await;

        let record = store
            .insert("great product", SentimentLabel::Positive)
            .await
            .unwrap();
        assert_eq!(record.label, SentimentLabel::Positive);
        assert_eq!(record.created_at, record.updated_at);

        store.insert("meh", SentimentLabel::Neutral).await.unwrap();
        store
            .insert("awful", SentimentLabel::Negative)
            .await
            .unwrap();

        assert_eq!(
            store.count_by_label(SentimentLabel::Positive).await.unwrap(),
            1
        );
        assert_eq!(
            store.count_by_label(SentimentLabel::Neutral).await.unwrap(),
            1
        );
        assert_eq!(
            store.count_by_label(SentimentLabel::Unknown).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn last_updated_tracks_the_newest_record() {
        let (_tmp, store) = temp_store().await;

        let first = store
            .insert("first", SentimentLabel::Positive)
            .await
            .unwrap();
        let second = store
            .insert("second", SentimentLabel::Negative)
            .await
            .unwrap();

        let latest = store.last_updated().await.unwrap().unwrap();
        assert!(latest.timestamp() >= first.updated_at.timestamp());
        assert_eq!(latest.timestamp(), second.updated_at.timestamp());
    }

    #[tokio::test]
    async fn schema_init_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let url = format!("sqlite://{}", tmp.path().join("test.db").display());

        let store = SqliteStore::connect(&url).await.unwrap();
        store.insert("kept", SentimentLabel::Unknown).await.unwrap();
        drop(store);

        // Reconnecting must not wipe existing rows.
        let store = SqliteStore::connect(&url).await.unwrap();
        assert_eq!(
            store.count_by_label(SentimentLabel::Unknown).await.unwrap(),
            1
        );
    }
}
