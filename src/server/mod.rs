// src/server/mod.rs

//! HTTP surface of the application.
//!
//! Exposes three routes over a shared [`AppState`]:
//! - `GET /` — dashboard with aggregated counts
//! - `POST /predict` — relay to the external classifier
//! - `POST /save` — persist a review/label pair
//!
//! Every failure is converted here into the uniform JSON error shape; raw
//! driver errors and stack traces never reach the caller.

mod dashboard;
mod predict;
mod save;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{Config, ErrorBody};
use crate::services::{ClassifierGateway, RecordWriter, SummaryService};
use crate::storage::SentimentStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub summary: Arc<SummaryService>,
    pub writer: Arc<RecordWriter>,
    pub classifier: Arc<ClassifierGateway>,
}

impl AppState {
    /// Wire the services over a store and the classifier configuration.
    pub fn new(store: Arc<dyn SentimentStore>, config: &Config) -> Result<Self> {
        Ok(Self {
            summary: Arc::new(SummaryService::new(store.clone())),
            writer: Arc::new(RecordWriter::new(store)),
            classifier: Arc::new(ClassifierGateway::new(&config.classifier)?),
        })
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::show))
        .route("/predict", post(predict::predict))
        .route("/save", post(save::save))
        .with_state(state)
}

/// Bind and serve the router until the process is stopped.
pub async fn serve(bind_addr: &str, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = error_response(self);
        (status, Json(body)).into_response()
    }
}

/// Map an error to its HTTP status and uniform JSON body.
fn error_response(err: AppError) -> (StatusCode, ErrorBody) {
    match err {
        AppError::Validation { field, message } => {
            let mut details = serde_json::Map::new();
            details.insert(field.clone(), Value::String(message.clone()));
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: format!("{field} {message}"),
                    details: Some(Value::Object(details)),
                },
            )
        }
        AppError::Upstream {
            status,
            message,
            details,
        } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            ErrorBody {
                error: message,
                details,
            },
        ),
        AppError::Unavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorBody {
                error: "Could not reach the sentiment classification service.".to_string(),
                details: None,
            },
        ),
        AppError::Unexpected(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody {
                error: "An unexpected error occurred during sentiment analysis.".to_string(),
                details: None,
            },
        ),
        other => {
            log::error!("Unhandled internal error: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Internal server error.".to_string(),
                    details: None,
                },
            )
        }
    }
}
