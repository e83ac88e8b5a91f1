use serde::{Deserialize, Serialize};

/// Price information returned by every source in the fallback chain.
///
/// The six core fields are the shared contract; the optional extras are
/// source-specific and passed through untouched by the orchestrator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    pub name: String,

    /// Trade-value tier label (e.g. "Very High")
    pub trade_value: String,

    /// Display string such as "100M-200M Gold"
    pub estimated_price: String,

    /// Demand tier in wire form (e.g. "very_high")
    pub demand: String,

    /// Source tag (e.g. "diablo.trade", "community_reports", "static_database")
    #[serde(default)]
    pub source: String,

    pub last_updated: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_listings: Option<Vec<Listing>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_listings: Option<usize>,

    /// Number of community reports behind an aggregate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PriceData {
    /// Create price data with only the shared fields populated.
    pub fn new(
        name: impl Into<String>,
        trade_value: impl Into<String>,
        estimated_price: impl Into<String>,
        demand: impl Into<String>,
        source: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            trade_value: trade_value.into(),
            estimated_price: estimated_price.into(),
            demand: demand.into(),
            source: source.into(),
            last_updated: last_updated.into(),
            rarity: None,
            avg_price: None,
            min_price: None,
            max_price: None,
            recent_listings: None,
            total_listings: None,
            sample_size: None,
            notes: None,
        }
    }
}

/// A single marketplace listing scraped from a live source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Canonical price in millions of gold (0 when unparseable)
    pub price: f64,
    pub price_raw: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub seller: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extras_are_omitted_when_absent() {
        let data = PriceData::new(
            "Shako",
            "Extremely High",
            "400M+ Gold",
            "very_high",
            "static_database",
            "2026-01-16",
        );
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["tradeValue"], "Extremely High");
        assert_eq!(json["estimatedPrice"], "400M+ Gold");
        assert!(json.get("sampleSize").is_none());
        assert!(json.get("recentListings").is_none());
    }

    #[test]
    fn test_deserializes_backend_shape() {
        let body = r#"{
            "name": "Harlequin Crest",
            "tradeValue": "Extremely High",
            "estimatedPrice": "350M-450M Gold",
            "demand": "very_high",
            "source": "backend_api",
            "lastUpdated": "2026-01-15T10:00:00Z",
            "recentListings": [{"price": 400.0, "priceRaw": "400M"}]
        }"#;
        let data: PriceData = serde_json::from_str(body).unwrap();
        let listings = data.recent_listings.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].seller, "");
        assert_eq!(data.sample_size, None);
    }
}
