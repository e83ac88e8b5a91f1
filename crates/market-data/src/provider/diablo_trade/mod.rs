//! Diablo.Trade listings scraper.
//!
//! Diablo.Trade has no public API, so this source downloads the public
//! search results page and reads the listing cards out of the HTML:
//!
//! ```text
//! .listing-item
//!   .listing-price   "150M"
//!   .listing-date    "2 hours ago"
//!   .listing-seller  "Wanderer#1234"
//! ```
//!
//! Prices are summarized into a single `PriceData` with min/avg/max and a
//! demand tier derived from the number of active listings.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{Listing, PriceData};
use crate::provider::LivePriceSource;
use crate::valuation::{
    demand_from_listing_count, format_price, parse_price, price_to_trade_value,
};

const BASE_URL: &str = "https://diablo.trade";
const PROVIDER_ID: &str = "DIABLO_TRADE";
const SOURCE_TAG: &str = "diablo.trade";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Listings kept on the summary for display.
const RECENT_LISTINGS_LIMIT: usize = 10;

/// Public search page URL for an item name.
pub fn search_url(item_name: &str) -> String {
    search_url_with_base(BASE_URL, item_name)
}

fn search_url_with_base(base_url: &str, item_name: &str) -> String {
    format!(
        "{}/listings/items?search={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(item_name)
    )
}

/// Scrapes the Diablo.Trade search results page.
pub struct DiabloTradeProvider {
    client: Client,
    base_url: String,
}

impl DiabloTradeProvider {
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(BASE_URL, timeout)
    }

    /// Point the scraper at a different host (mirrors, local fixtures).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch_page(&self, item_name: &str) -> Result<String, MarketDataError> {
        let url = search_url_with_base(&self.base_url, item_name);
        debug!("Diablo.Trade request: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl LivePriceSource for DiabloTradeProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        1
    }

    async fn fetch_price(&self, item_name: &str) -> Result<PriceData, MarketDataError> {
        let html = self.fetch_page(item_name).await?;
        let listings = parse_listings(&html)?;
        summarize(item_name, listings, Utc::now())
    }
}

fn selector(css: &str) -> Result<Selector, MarketDataError> {
    Selector::parse(css).map_err(|e| MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message: format!("Invalid selector '{}': {}", css, e),
    })
}

fn child_text(element: &ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|child| child.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Extract listing cards from a search results page.
///
/// Cards with an empty price are skipped. Cards whose price text does not
/// parse are kept with a price of `0.0` so they still count toward demand.
pub fn parse_listings(html: &str) -> Result<Vec<Listing>, MarketDataError> {
    let item_selector = selector(".listing-item")?;
    let price_selector = selector(".listing-price")?;
    let date_selector = selector(".listing-date")?;
    let seller_selector = selector(".listing-seller")?;

    let document = Html::parse_document(html);
    let listings = document
        .select(&item_selector)
        .filter_map(|card| {
            let price_raw = child_text(&card, &price_selector);
            if price_raw.is_empty() {
                return None;
            }
            Some(Listing {
                price: parse_price(&price_raw),
                price_raw,
                date: child_text(&card, &date_selector),
                seller: child_text(&card, &seller_selector),
            })
        })
        .collect();

    Ok(listings)
}

/// Summarize scraped listings into price data.
///
/// Statistics only consider listings with a positive price; the listing
/// count used for demand includes every card.
pub fn summarize(
    item_name: &str,
    listings: Vec<Listing>,
    now: DateTime<Utc>,
) -> Result<PriceData, MarketDataError> {
    if listings.is_empty() {
        return Err(MarketDataError::NoListings(item_name.to_string()));
    }

    let prices: Vec<f64> = listings
        .iter()
        .map(|listing| listing.price)
        .filter(|price| *price > 0.0)
        .collect();
    if prices.is_empty() {
        return Err(MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("No parseable prices among {} listings", listings.len()),
        });
    }

    let avg = prices.iter().sum::<f64>() / prices.len() as f64;
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let total = listings.len();
    let recent: Vec<Listing> = listings.into_iter().take(RECENT_LISTINGS_LIMIT).collect();

    let mut data = PriceData::new(
        item_name,
        price_to_trade_value(avg).as_str(),
        format!("{}-{} Gold", format_price(min), format_price(max)),
        demand_from_listing_count(total).as_str(),
        SOURCE_TAG,
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
    );
    data.avg_price = Some(format_price(avg));
    data.min_price = Some(format_price(min));
    data.max_price = Some(format_price(max));
    data.recent_listings = Some(recent);
    data.total_listings = Some(total);

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FIXTURE: &str = r#"
        <html><body>
          <div class="listing-item">
            <span class="listing-price"> 100M </span>
            <span class="listing-date">1 hour ago</span>
            <span class="listing-seller">Lilith#0001</span>
          </div>
          <div class="listing-item">
            <span class="listing-price">300M</span>
            <span class="listing-date">3 hours ago</span>
          </div>
          <div class="listing-item">
            <span class="listing-price"></span>
          </div>
          <div class="listing-item">
            <span class="listing-price">make offer</span>
          </div>
        </body></html>
    "#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_search_url_encodes_name() {
        assert_eq!(
            search_url("Harlequin Crest"),
            "https://diablo.trade/listings/items?search=Harlequin%20Crest"
        );
        assert_eq!(
            search_url("Tyrael's Might"),
            "https://diablo.trade/listings/items?search=Tyrael%27s%20Might"
        );
    }

    #[test]
    fn test_parse_listings_skips_empty_prices() {
        let listings = parse_listings(FIXTURE).unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].price, 100.0);
        assert_eq!(listings[0].price_raw, "100M");
        assert_eq!(listings[0].seller, "Lilith#0001");
        assert_eq!(listings[1].seller, "");
        assert_eq!(listings[2].price, 0.0);
    }

    #[test]
    fn test_summarize_statistics() {
        let listings = parse_listings(FIXTURE).unwrap();
        let data = summarize("Harlequin Crest", listings, now()).unwrap();

        assert_eq!(data.name, "Harlequin Crest");
        assert_eq!(data.source, "diablo.trade");
        assert_eq!(data.avg_price.as_deref(), Some("200M"));
        assert_eq!(data.min_price.as_deref(), Some("100M"));
        assert_eq!(data.max_price.as_deref(), Some("300M"));
        assert_eq!(data.estimated_price, "100M-300M Gold");
        assert_eq!(data.trade_value, "Very High");
        assert_eq!(data.demand, "low");
        assert_eq!(data.total_listings, Some(3));
        assert_eq!(data.last_updated, "2026-01-16T12:00:00.000Z");
    }

    #[test]
    fn test_summarize_caps_recent_listings() {
        let listings: Vec<Listing> = (1..=25)
            .map(|i| Listing {
                price: i as f64,
                price_raw: format!("{}M", i),
                date: String::new(),
                seller: String::new(),
            })
            .collect();
        let data = summarize("Shako", listings, now()).unwrap();
        assert_eq!(data.recent_listings.unwrap().len(), RECENT_LISTINGS_LIMIT);
        assert_eq!(data.total_listings, Some(25));
        assert_eq!(data.demand, "high");
    }

    #[test]
    fn test_summarize_without_listings() {
        let error = summarize("Shako", Vec::new(), now()).unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_summarize_without_parseable_prices() {
        let listings = vec![Listing {
            price: 0.0,
            price_raw: "offers".to_string(),
            date: String::new(),
            seller: String::new(),
        }];
        let error = summarize("Shako", listings, now()).unwrap_err();
        assert!(matches!(error, MarketDataError::MalformedResponse { .. }));
    }
}
