//! Sentiment record data structures.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a stored review text, in characters.
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Minimum length of a text submitted for classification, in characters.
pub const MIN_CLASSIFY_CHARS: usize = 3;

/// The closed set of labels a record may carry.
///
/// Anything the external classifier returns outside this set is relayed to
/// the caller as-is but is rejected at persistence time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl SentimentLabel {
    /// All valid labels, in display order.
    pub const ALL: [SentimentLabel; 4] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Unknown,
    ];

    /// Lower-cased storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Unknown => "unknown",
        }
    }

    /// Parse a label case-insensitively. Returns `None` outside the set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(SentimentLabel::Positive),
            "negative" => Some(SentimentLabel::Negative),
            "neutral" => Some(SentimentLabel::Neutral),
            "unknown" => Some(SentimentLabel::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted review/label pair.
///
/// Records are immutable once created; timestamps are set by storage on
/// insert and never touched afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentRecord {
    /// Row identifier
    pub id: i64,

    /// Review text, non-empty, at most [`MAX_TEXT_CHARS`] characters
    pub text: String,

    /// Sentiment label, always a member of the closed set
    pub label: SentimentLabel,

    /// Insertion timestamp
    pub created_at: DateTime<Utc>,

    /// Last-update timestamp (equals `created_at` for this system)
    pub updated_at: DateTime<Utc>,
}

/// Aggregate counts shown on the dashboard.
///
/// The "unknown" label is a valid persisted value but is not part of the
/// displayed counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub positive_count: u64,
    pub negative_count: u64,
    pub neutral_count: u64,

    /// Formatted timestamp of the latest record, or `"N/A"` when empty
    pub last_update_display: String,
}

impl SentimentSummary {
    /// Build a summary from raw counts and the latest update timestamp.
    pub fn new(
        positive_count: u64,
        negative_count: u64,
        neutral_count: u64,
        last_update: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            positive_count,
            negative_count,
            neutral_count,
            last_update_display: format_last_update(last_update),
        }
    }
}

/// Format the last-update timestamp for display in server-local time.
pub fn format_last_update(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%d %B %Y %H:%M")
            .to_string(),
        None => "N/A".to_string(),
    }
}
