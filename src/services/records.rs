// src/services/records.rs

//! Record writer service.
//!
//! Validates review/label pairs and persists them as immutable records.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{MAX_TEXT_CHARS, SentimentLabel, SentimentRecord};
use crate::storage::SentimentStore;

/// Service that validates and persists review/label pairs.
pub struct RecordWriter {
    store: Arc<dyn SentimentStore>,
}

impl RecordWriter {
    /// Create a new writer over the given store.
    pub fn new(store: Arc<dyn SentimentStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a single record.
    ///
    /// The label is matched case-insensitively against the closed set and
    /// stored lower-cased. Nothing is written when validation fails.
    /// Persistence failures are logged with the attempted payload and
    /// propagated to the caller.
    pub async fn save(&self, text: &str, label: &str) -> Result<SentimentRecord> {
        if text.is_empty() {
            return Err(AppError::validation("review_text", "is required"));
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(AppError::validation(
                "review_text",
                format!("must not exceed {MAX_TEXT_CHARS} characters"),
            ));
        }
        let label = SentimentLabel::parse(label).ok_or_else(|| {
            AppError::validation(
                "label_sentimen",
                "must be one of: positive, negative, neutral, unknown",
            )
        })?;

        match self.store.insert(text, label).await {
            Ok(record) => Ok(record),
            Err(e) => {
                log::error!("Failed to save sentiment record: {e} (label={label}, text={text:?})");
                Err(e)
            }
        }
    }
}
