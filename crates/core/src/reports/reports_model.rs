use serde::{Deserialize, Serialize};

/// A user-submitted price observation.
///
/// Field names match the persisted JSON written by earlier releases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceReport {
    /// Creation time in epoch milliseconds, unique within a log
    pub id: i64,
    pub item_name: String,
    /// Free-form price text, parsed only when aggregated
    pub observed_price: String,
    pub source: String,
    #[serde(default)]
    pub notes: String,
    /// RFC 3339 submission time
    pub timestamp: String,
    /// Reserved for backend sync; always false today
    #[serde(default)]
    pub submitted: bool,
}

/// Input for a new report.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPriceReport {
    pub item_name: String,
    pub observed_price: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub notes: Option<String>,
}
