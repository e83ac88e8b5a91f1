use std::sync::Arc;

use crate::{
    error::{require_param, ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use horadric_core::pricing::CacheStats;
use horadric_market_data::{search_url, PriceData};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub(crate) struct ItemQuery {
    pub item: Option<String>,
}

async fn get_price(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ItemQuery>,
) -> ApiResult<Json<PriceData>> {
    let item = require_param(query.item, "item")?;
    match state.price_service.get_price(&item).await {
        Some(data) => Ok(Json(PriceData::clone(&data))),
        None => Err(ApiError::NotFound(format!("No price data for '{}'", item))),
    }
}

async fn get_cache_stats(State(state): State<Arc<AppState>>) -> Json<CacheStats> {
    Json(state.price_service.cache_stats())
}

async fn clear_cache(State(state): State<Arc<AppState>>) -> StatusCode {
    state.price_service.clear_cache();
    StatusCode::NO_CONTENT
}

#[derive(Serialize)]
struct SearchUrlResponse {
    url: String,
}

async fn get_search_url(Query(query): Query<ItemQuery>) -> ApiResult<Json<SearchUrlResponse>> {
    let item = require_param(query.item, "item")?;
    Ok(Json(SearchUrlResponse {
        url: search_url(&item),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices", get(get_price))
        .route("/prices/cache", get(get_cache_stats).delete(clear_cache))
        .route("/prices/search-url", get(get_search_url))
}
