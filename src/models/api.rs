//! Request and response shapes for the HTTP surface.
//!
//! Field names (`review_text`, `label_sentimen`, `original_comment`) are the
//! wire contract shared with the frontend and are kept verbatim.

use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Free text to classify
    pub review_text: String,
}

/// Successful response of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub message: String,

    /// Lower-cased label as relayed by the classifier (not clamped to the
    /// persisted label set)
    pub label_sentimen: String,

    pub original_comment: String,
}

/// Body of `POST /save`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    pub review_text: String,
    pub label_sentimen: String,
}

/// Response of `POST /save`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveResponse {
    /// Response for a persisted record.
    pub fn saved() -> Self {
        Self {
            success: true,
            message: Some("Comment saved successfully".to_string()),
            error: None,
        }
    }

    /// Response for a persistence failure; carries no internal detail.
    pub fn failed() -> Self {
        Self {
            success: false,
            message: None,
            error: Some("Failed to save sentiment record".to_string()),
        }
    }
}

/// Uniform JSON error shape for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
