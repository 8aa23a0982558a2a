// src/models/mod.rs

//! Domain models for the sentiboard application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod api;
mod config;
mod record;

// Re-export all public types
pub use api::{ErrorBody, PredictRequest, PredictResponse, SaveRequest, SaveResponse};
pub use config::{ClassifierConfig, Config, DatabaseConfig, ENDPOINT_ENV_VAR, ServerConfig};
pub use record::{
    MAX_TEXT_CHARS, MIN_CLASSIFY_CHARS, SentimentLabel, SentimentRecord, SentimentSummary,
    format_last_update,
};
