use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::analysis::Verdict;

/// Where a history item's market price came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Community,
    Database,
}

/// A persisted field that may hold a value this crate does not recognize.
///
/// Unrecognized values are written back exactly as they were read.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredValue<T> {
    Known(T),
    Unrecognized(Value),
}

impl<T> StoredValue<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            StoredValue::Known(value) => Some(value),
            StoredValue::Unrecognized(_) => None,
        }
    }

    /// False for `false`, `0`, and the empty string.
    pub fn is_present(&self) -> bool {
        match self {
            StoredValue::Known(_) => true,
            StoredValue::Unrecognized(value) => match value {
                Value::Null => false,
                Value::Bool(flag) => *flag,
                Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
                Value::String(text) => !text.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }
}

impl<'de, T: serde::de::DeserializeOwned> Deserialize<'de> for StoredValue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(match T::deserialize(&raw) {
            Ok(value) => StoredValue::Known(value),
            Err(_) => StoredValue::Unrecognized(raw),
        })
    }
}

/// One saved analysis.
///
/// Fields this crate does not interpret (player class, model, cost, ...) are
/// kept in `extra` and written back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub trade_query: Option<String>,
    #[serde(default)]
    pub verdict: Option<StoredValue<Verdict>>,
    #[serde(default)]
    pub market_price: Option<String>,
    #[serde(default)]
    pub price_source: Option<StoredValue<PriceSource>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HistoryItem {
    /// Any non-blank stored verdict counts, recognized or not.
    pub fn has_verdict(&self) -> bool {
        self.verdict.as_ref().is_some_and(StoredValue::is_present)
    }

    /// Empty strings count as missing.
    pub fn has_market_price(&self) -> bool {
        self.market_price
            .as_deref()
            .is_some_and(|price| !price.is_empty())
    }

    /// Nothing left to backfill.
    pub fn is_complete(&self) -> bool {
        self.has_verdict() && self.has_market_price()
    }

    /// The verdict as a `Verdict`, matching stored text case-insensitively.
    pub fn known_verdict(&self) -> Option<Verdict> {
        match self.verdict.as_ref()? {
            StoredValue::Known(verdict) => Some(*verdict),
            StoredValue::Unrecognized(value) => value.as_str()?.parse().ok(),
        }
    }

    pub fn known_price_source(&self) -> Option<PriceSource> {
        self.price_source.as_ref()?.known().copied()
    }
}
