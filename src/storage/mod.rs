//! Storage abstractions for sentiment record persistence.
//!
//! Records are append-only: this system never updates or deletes a row once
//! it is written. Aggregation reads are pure queries.

pub mod sqlite;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{SentimentLabel, SentimentRecord};

// Re-export for convenience
pub use sqlite::SqliteStore;

/// Trait for sentiment record storage backends.
#[async_trait]
pub trait SentimentStore: Send + Sync {
    /// Insert a new record; timestamps are set by the backend.
    async fn insert(&self, text: &str, label: SentimentLabel) -> Result<SentimentRecord>;

    /// Count records carrying the given label.
    async fn count_by_label(&self, label: SentimentLabel) -> Result<u64>;

    /// Latest `updated_at` across all records, `None` when the table is empty.
    async fn last_updated(&self) -> Result<Option<DateTime<Utc>>>;
}
