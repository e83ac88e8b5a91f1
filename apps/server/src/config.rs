use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub price_cache_ttl: Duration,
    /// Scrape Diablo.Trade before falling back to community and catalog data
    pub live_pricing: bool,
    /// Backend price API tried after the scraper
    pub price_api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr = std::env::var("HORADRIC_LISTEN_ADDR")
            .ok()
            .and_then(|addr| match addr.parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!("Invalid HORADRIC_LISTEN_ADDR '{}': {}", addr, e);
                    None
                }
            })
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));
        let db_path =
            std::env::var("HORADRIC_DB_PATH").unwrap_or_else(|_| "./db/horadric.db".into());
        let cors_allow = std::env::var("HORADRIC_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("HORADRIC_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let cache_ttl_secs: u64 = std::env::var("HORADRIC_PRICE_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .unwrap_or(3600);
        let live_pricing = std::env::var("HORADRIC_LIVE_PRICING")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);
        let price_api_url = std::env::var("HORADRIC_PRICE_API_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            price_cache_ttl: Duration::from_secs(cache_ttl_secs),
            live_pricing,
            price_api_url,
        }
    }
}
