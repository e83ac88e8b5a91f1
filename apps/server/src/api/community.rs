use std::sync::Arc;

use crate::{
    api::prices::ItemQuery,
    error::{require_param, ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use horadric_core::community::CommunityAggregate;
use serde::Serialize;

/// Aggregate plus whether the price service would use it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommunityPriceResponse {
    #[serde(flatten)]
    aggregate: CommunityAggregate,
    trusted: bool,
}

async fn get_community_price(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ItemQuery>,
) -> ApiResult<Json<CommunityPriceResponse>> {
    let item = require_param(query.item, "item")?;
    let aggregate = state
        .community
        .average(&item)
        .ok_or_else(|| ApiError::NotFound(format!("No community reports for '{}'", item)))?;
    let trusted = aggregate.is_trusted(state.pricing_config.min_community_samples);
    Ok(Json(CommunityPriceResponse { aggregate, trusted }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/community", get(get_community_price))
}
