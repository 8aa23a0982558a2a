// src/services/classifier.rs

//! Classifier gateway service.
//!
//! Forwards user text to the external sentiment classification endpoint and
//! normalizes its response or failure into a typed result. The endpoint is
//! injected at construction; there is no process-wide state.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{AppError, Result};
use crate::models::{ClassifierConfig, MIN_CLASSIFY_CHARS};

const UPSTREAM_FAILURE: &str = "Failed to analyse sentiment via the classification service.";
const FALLBACK_LABEL: &str = "unknown";

/// Verdict relayed from the external classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Lower-cased label as returned by the service. Not clamped to the
    /// persisted label set; a foreign label surfaces to the caller and is
    /// only rejected at save time.
    pub label: String,

    /// Text echoed back by the service
    pub original_text: String,
}

/// Expected success body from the classifier.
#[derive(Debug, Default, Deserialize)]
struct PredictionBody {
    sentiment: Option<String>,
    text: Option<String>,
}

/// Gateway to the external sentiment classification service.
pub struct ClassifierGateway {
    endpoint: String,
    client: Client,
}

impl ClassifierGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    /// Endpoint this gateway talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Classify a text through the external service.
    ///
    /// Texts shorter than [`MIN_CLASSIFY_CHARS`] are rejected before any
    /// network call. A single POST is issued; there are no retries. Timeouts
    /// are treated identically to connection failures.
    pub async fn classify(&self, text: &str) -> Result<Classification> {
        if text.chars().count() < MIN_CLASSIFY_CHARS {
            return Err(AppError::validation(
                "review_text",
                format!("must be at least {MIN_CLASSIFY_CHARS} characters"),
            ));
        }

        let response = match self
            .client
            .post(&self.endpoint)
            .json(&json!({ "text": text }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                log::error!("Classifier connection error: {e}");
                return Err(AppError::Unavailable);
            }
            Err(e) => {
                log::error!("Unexpected error calling classifier: {e}");
                return Err(AppError::unexpected(e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::error!("Failed to read classifier response: {e}");
                return Err(AppError::unexpected(e));
            }
        };

        if status.is_success() {
            Ok(Self::parse_success(&body, text))
        } else {
            log::error!("Classifier request failed: status={status}, body={body}");
            Err(Self::upstream_error(status.as_u16(), &body))
        }
    }

    /// Extract label and echoed text from a 2xx body, tolerating missing
    /// fields and malformed JSON.
    fn parse_success(body: &str, submitted: &str) -> Classification {
        let parsed: PredictionBody = serde_json::from_str(body).unwrap_or_default();
        Classification {
            label: parsed
                .sentiment
                .map(|s| s.to_lowercase())
                .unwrap_or_else(|| FALLBACK_LABEL.to_string()),
            original_text: parsed.text.unwrap_or_else(|| submitted.to_string()),
        }
    }

    /// Build an upstream error from a non-2xx response.
    ///
    /// FastAPI-style bodies carry a `detail` field, either a plain string or
    /// a list of validation entries with a `msg`; the first `msg` wins.
    fn upstream_error(status: u16, body: &str) -> AppError {
        match serde_json::from_str::<Value>(body) {
            Ok(json_body) if !json_body.is_null() => match json_body.get("detail") {
                Some(detail) => {
                    let detail = detail
                        .as_array()
                        .and_then(|list| list.first())
                        .and_then(|entry| entry.get("msg"))
                        .unwrap_or(detail)
                        .clone();
                    let rendered = render_detail(&detail);
                    AppError::upstream(
                        status,
                        format!("{UPSTREAM_FAILURE} Detail: {rendered}"),
                        Some(detail),
                    )
                }
                None => AppError::upstream(
                    status,
                    format!("{UPSTREAM_FAILURE} API response: {json_body}"),
                    Some(json_body),
                ),
            },
            _ => AppError::upstream(
                status,
                format!("{UPSTREAM_FAILURE} Status: {status}, Body: {body}"),
                None,
            ),
        }
    }
}

/// Render a detail value without quoting plain strings.
fn render_detail(detail: &Value) -> String {
    match detail.as_str() {
        Some(s) => s.to_string(),
        None => detail.to_string(),
    }
}
