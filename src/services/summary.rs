// src/services/summary.rs

//! Dashboard aggregation service.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{SentimentLabel, SentimentSummary};
use crate::storage::SentimentStore;

/// Service computing the aggregate counts shown on the dashboard.
pub struct SummaryService {
    store: Arc<dyn SentimentStore>,
}

impl SummaryService {
    /// Create a new aggregator over the given store.
    pub fn new(store: Arc<dyn SentimentStore>) -> Self {
        Self { store }
    }

    /// Count records per displayed label and format the latest update.
    ///
    /// The "unknown" label is a valid persisted value but is excluded from
    /// the displayed counts. An empty table is a valid state and yields the
    /// `"N/A"` sentinel for the last update.
    pub async fn summary(&self) -> Result<SentimentSummary> {
        let positive = self.store.count_by_label(SentimentLabel::Positive).await?;
        let negative = self.store.count_by_label(SentimentLabel::Negative).await?;
        let neutral = self.store.count_by_label(SentimentLabel::Neutral).await?;
        let last_update = self.store.last_updated().await?;

        Ok(SentimentSummary::new(
            positive,
            negative,
            neutral,
            last_update,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;
    use tempfile::TempDir;

    async fn temp_service() -> (TempDir, Arc<SqliteStore>, SummaryService) {
        let tmp = TempDir::new().unwrap();
        let url = format!("sqlite://{}", tmp.path().join("test.db").display());
        let store = Arc::new(SqliteStore::connect(&url).await.unwrap());
        let service = SummaryService::new(store.clone());
        (tmp, store, service)
    }

    #[tokio::test]
    async fn empty_table_yields_zeros_and_na() {
        let (_tmp, _store, service) = temp_service().await;

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.positive_count, 0);
        assert_eq!(summary.negative_count, 0);
        assert_eq!(summary.neutral_count, 0);
        assert_eq!(summary.last_update_display, "N/A");
    }

    #[tokio::test]
    async fn unknown_records_are_excluded_from_counts() {
        let (_tmp, store, service) = temp_service().await;

        store.insert("good", SentimentLabel::Positive).await.unwrap();
        store.insert("good too", SentimentLabel::Positive).await.unwrap();
        store.insert("bad", SentimentLabel::Negative).await.unwrap();
        store.insert("???", SentimentLabel::Unknown).await.unwrap();

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.positive_count, 2);
        assert_eq!(summary.negative_count, 1);
        assert_eq!(summary.neutral_count, 0);
        assert_ne!(summary.last_update_display, "N/A");
    }

    #[tokio::test]
    async fn summary_is_idempotent_without_writes() {
        let (_tmp, store, service) = temp_service().await;

        store.insert("fine", SentimentLabel::Neutral).await.unwrap();

        let first = service.summary().await.unwrap();
        let second = service.summary().await.unwrap();
        assert_eq!(first, second);
    }
}
