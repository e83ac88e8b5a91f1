//! Client for a self-hosted pricing backend.
//!
//! The backend exposes `GET {endpoint}?item=<name>` and answers with a JSON
//! body in the `PriceData` shape. Whatever the backend reports as its source
//! is replaced with `backend_api` so callers can tell where a price came from.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::PriceData;
use crate::provider::LivePriceSource;

const PROVIDER_ID: &str = "BACKEND_API";
const SOURCE_TAG: &str = "backend_api";

pub struct PriceApiProvider {
    client: Client,
    endpoint: String,
}

impl PriceApiProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LivePriceSource for PriceApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        5
    }

    async fn fetch_price(&self, item_name: &str) -> Result<PriceData, MarketDataError> {
        debug!("Price API request for '{}'", item_name);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("item", item_name)])
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::NoListings(item_name.to_string()));
        }
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Decode a backend response body and stamp it with the backend source tag.
pub fn parse_response(body: &str) -> Result<PriceData, MarketDataError> {
    let mut data: PriceData =
        serde_json::from_str(body).map_err(|e| MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;
    data.source = SOURCE_TAG.to_string();
    Ok(data)
}
