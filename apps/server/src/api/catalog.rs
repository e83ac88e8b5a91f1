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
use horadric_core::catalog::{PriceRecord, Rarity};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct CatalogFilter {
    rarity: Option<String>,
    class: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogResponse {
    last_updated: &'static str,
    items: Vec<PriceRecord>,
}

async fn list_catalog(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CatalogFilter>,
) -> ApiResult<Json<CatalogResponse>> {
    let mut items: Vec<&PriceRecord> = match filter.rarity.as_deref() {
        Some(rarity) => state.catalog.items_by_rarity(rarity.parse::<Rarity>()?),
        None => state.catalog.records().iter().collect(),
    };
    if let Some(class_name) = filter.class.as_deref() {
        items.retain(|record| record.best_for.contains(&class_name));
    }

    Ok(Json(CatalogResponse {
        last_updated: state.catalog.last_updated(),
        items: items.into_iter().cloned().collect(),
    }))
}

async fn search_catalog(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ItemQuery>,
) -> ApiResult<Json<PriceRecord>> {
    let item = require_param(query.item, "item")?;
    state
        .catalog
        .search(&item)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("'{}' is not in the catalog", item)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/catalog", get(list_catalog))
        .route("/catalog/search", get(search_catalog))
}
