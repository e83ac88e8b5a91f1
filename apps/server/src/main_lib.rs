use std::sync::Arc;

use crate::config::Config;
use horadric_core::{
    catalog::PriceCatalog,
    clock::{Clock, SystemClock},
    community::CommunityPricing,
    history::{HistoryService, MarketPriceResolver},
    pricing::{PriceService, PriceServiceTrait},
    reports::ReportLog,
    settings::PricingConfig,
    storage::KeyValueStore,
};
use horadric_market_data::{
    DiabloTradeProvider, LivePriceSource, LiveSourceChain, PriceApiProvider,
};
use horadric_storage_sqlite::{db, SqliteKeyValueStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub price_service: Arc<dyn PriceServiceTrait>,
    pub report_log: Arc<ReportLog>,
    pub community: Arc<CommunityPricing>,
    pub catalog: Arc<PriceCatalog>,
    pub history_service: Arc<HistoryService>,
    pub pricing_config: PricingConfig,
}

pub fn init_tracing() {
    let log_format = std::env::var("HORADRIC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Live sources enabled by the config, in the order the chain should try them.
fn build_live_source(config: &Config) -> Option<Arc<dyn LivePriceSource>> {
    let mut sources: Vec<Arc<dyn LivePriceSource>> = Vec::new();
    if config.live_pricing {
        sources.push(Arc::new(DiabloTradeProvider::new(config.request_timeout)));
    }
    if let Some(url) = &config.price_api_url {
        sources.push(Arc::new(PriceApiProvider::new(
            url.clone(),
            config.request_timeout,
        )));
    }

    if sources.is_empty() {
        tracing::info!("Live pricing disabled; using community and catalog data only");
        return None;
    }

    let chain = LiveSourceChain::new(sources);
    tracing::info!("Live price sources: {:?}", chain.source_ids());
    Some(Arc::new(chain))
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::open(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let pricing_config = PricingConfig::default().with_cache_ttl(config.price_cache_ttl);

    let report_log = Arc::new(ReportLog::new(store.clone(), clock.clone()));
    let community = Arc::new(CommunityPricing::new(report_log.clone()));
    let catalog = Arc::new(PriceCatalog::new());

    let price_service: Arc<dyn PriceServiceTrait> = Arc::new(PriceService::new(
        build_live_source(config),
        community.clone(),
        catalog.clone(),
        clock.clone(),
        pricing_config.clone(),
    ));

    let resolver = MarketPriceResolver::new(
        community.clone(),
        catalog.clone(),
        pricing_config.min_community_samples,
    );
    let history_service = Arc::new(HistoryService::new(
        store,
        clock,
        resolver,
        pricing_config.max_history,
    ));
    let migration = history_service.load();
    tracing::info!(
        "History loaded: {} items, {} migrated",
        migration.examined,
        migration.migrated
    );

    Ok(Arc::new(AppState {
        price_service,
        report_log,
        community,
        catalog,
        history_service,
        pricing_config,
    }))
}
