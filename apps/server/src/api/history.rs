use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use horadric_core::history::{AnalysisContext, HistoryItem};
use serde::Deserialize;

async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryItem>> {
    Json(state.history_service.items())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordAnalysisRequest {
    /// Raw analysis text, including any metadata block
    response: String,
    #[serde(flatten)]
    context: AnalysisContext,
}

async fn record_analysis(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecordAnalysisRequest>,
) -> ApiResult<(StatusCode, Json<HistoryItem>)> {
    if body.response.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Analysis response must not be empty".to_string(),
        ));
    }
    let item = state
        .history_service
        .record_analysis(&body.response, body.context);
    Ok((StatusCode::CREATED, Json(item)))
}

async fn delete_history_item(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.history_service.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("No history item {}", id)))
    }
}

async fn clear_history(State(state): State<Arc<AppState>>) -> StatusCode {
    state.history_service.clear();
    StatusCode::NO_CONTENT
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/history",
            get(list_history).post(record_analysis).delete(clear_history),
        )
        .route("/history/{id}", delete(delete_history_item))
}
