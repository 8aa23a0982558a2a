// src/server/save.rs

//! Record persistence handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::{SaveRequest, SaveResponse};
use crate::server::AppState;

/// `POST /save` — validate and persist a review/label pair.
///
/// Validation failures surface in the uniform error shape with a 422;
/// persistence failures surface as `{success: false, error}` with a 500 and
/// a generic message.
pub async fn save(State(state): State<AppState>, Json(request): Json<SaveRequest>) -> Response {
    match state
        .writer
        .save(&request.review_text, &request.label_sentimen)
        .await
    {
        Ok(_) => Json(SaveResponse::saved()).into_response(),
        Err(err) if err.is_validation() => err.into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SaveResponse::failed()),
        )
            .into_response(),
    }
}
