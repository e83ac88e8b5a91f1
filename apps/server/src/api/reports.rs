use std::sync::Arc;

use crate::{api::prices::ItemQuery, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use horadric_core::errors::{Error as CoreError, ValidationError};
use horadric_core::reports::{NewPriceReport, PriceReport};

async fn list_reports(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ItemQuery>,
) -> Json<Vec<PriceReport>> {
    let reports = match query.item {
        Some(item) => state.report_log.reports_for_item(&item),
        None => state.report_log.reports(),
    };
    Json(reports)
}

async fn submit_report(
    State(state): State<Arc<AppState>>,
    Json(report): Json<NewPriceReport>,
) -> ApiResult<(StatusCode, Json<PriceReport>)> {
    if report.item_name.trim().is_empty() {
        return Err(CoreError::from(ValidationError::MissingField("itemName".to_string())).into());
    }
    if report.observed_price.trim().is_empty() {
        return Err(
            CoreError::from(ValidationError::MissingField("observedPrice".to_string())).into(),
        );
    }
    let saved = state.report_log.submit(report);
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn clear_reports(State(state): State<Arc<AppState>>) -> StatusCode {
    state.report_log.clear();
    StatusCode::NO_CONTENT
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/reports",
        get(list_reports).post(submit_report).delete(clear_reports),
    )
}
