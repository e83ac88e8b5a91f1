use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete trade-value label derived from a canonical price.
///
/// Ordered from lowest to highest so tiers can be compared directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TradeValue {
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Low-Medium")]
    LowMedium,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    #[serde(rename = "Extremely High")]
    ExtremelyHigh,
}

impl TradeValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::LowMedium => "Low-Medium",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::ExtremelyHigh => "Extremely High",
        }
    }

    /// Rarity colour bucket used when rendering a trade value.
    ///
    /// Labels bucket by the highest word they contain, so `Medium-High`
    /// counts as legendary and `Low-Medium` as rare.
    pub fn value_tier(&self) -> &'static str {
        match self {
            Self::ExtremelyHigh => "mythic",
            Self::VeryHigh => "unique",
            Self::High | Self::MediumHigh => "legendary",
            Self::Medium | Self::LowMedium => "rare",
            Self::Low => "common",
        }
    }
}

impl fmt::Display for TradeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market interest for an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DemandTier {
    /// Wire form, e.g. `very_high`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    /// Human readable label, e.g. `Very High`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Label for a wire-form demand string; unknown values read `Unknown`.
    pub fn label_for(demand: &str) -> &'static str {
        match demand {
            "low" => Self::Low.label(),
            "medium" => Self::Medium.label(),
            "high" => Self::High.label(),
            "very_high" => Self::VeryHigh.label(),
            _ => "Unknown",
        }
    }
}

impl fmt::Display for DemandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_value_serializes_as_label() {
        let json = serde_json::to_string(&TradeValue::MediumHigh).unwrap();
        assert_eq!(json, "\"Medium-High\"");
        let back: TradeValue = serde_json::from_str("\"Extremely High\"").unwrap();
        assert_eq!(back, TradeValue::ExtremelyHigh);
    }

    #[test]
    fn test_trade_value_ordering() {
        assert!(TradeValue::Low < TradeValue::LowMedium);
        assert!(TradeValue::VeryHigh < TradeValue::ExtremelyHigh);
    }

    #[test]
    fn test_value_tier() {
        assert_eq!(TradeValue::ExtremelyHigh.value_tier(), "mythic");
        assert_eq!(TradeValue::VeryHigh.value_tier(), "unique");
        assert_eq!(TradeValue::High.value_tier(), "legendary");
        assert_eq!(TradeValue::Medium.value_tier(), "rare");
        assert_eq!(TradeValue::Low.value_tier(), "common");
    }

    #[test]
    fn test_demand_labels() {
        assert_eq!(DemandTier::VeryHigh.as_str(), "very_high");
        assert_eq!(DemandTier::VeryHigh.label(), "Very High");
        assert_eq!(DemandTier::label_for("high"), "High");
        assert_eq!(DemandTier::label_for("extreme"), "Unknown");
    }
}
