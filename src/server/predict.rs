// src/server/predict.rs

//! Prediction relay handler.

use axum::{Json, extract::State};

use crate::error::Result;
use crate::models::{PredictRequest, PredictResponse};
use crate::server::AppState;

/// `POST /predict` — relay the text to the external classifier.
///
/// The verdict is NOT persisted here; the caller issues a separate
/// `POST /save` for that.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>> {
    let classification = state.classifier.classify(&request.review_text).await?;

    Ok(Json(PredictResponse {
        message: "Sentiment analysis complete".to_string(),
        label_sentimen: classification.label,
        original_comment: classification.original_text,
    }))
}
