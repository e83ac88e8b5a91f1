//! Price text parsing, display formatting, and tiering.
//!
//! All prices are handled in the canonical unit of one million gold.
//! Every function here is pure and total: malformed input parses to `0.0`
//! rather than failing, and callers treat `0.0` as "exclude".

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{DemandTier, TradeValue};

lazy_static! {
    /// First number in the text with an optional magnitude suffix.
    /// Longer unit words come first so `million` is not cut to `m`.
    static ref PRICE_PATTERN: Regex =
        Regex::new(r"([0-9]+(?:\.[0-9]*)?|\.[0-9]+)(million|billion|thousand|m|b|k|t)?")
            .expect("Invalid regex pattern");
}

/// Parse a free-text price ("150M", "1.5B", "500k", "2,000,000k") into
/// millions of gold. Returns `0.0` when no number is present.
pub fn parse_price(text: &str) -> f64 {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    let Some(captures) = PRICE_PATTERN.captures(&normalized) else {
        return 0.0;
    };

    let value = match captures[1].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return 0.0,
    };

    match captures.get(2).map(|unit| unit.as_str()) {
        None => value,
        Some(unit) if unit.starts_with('m') => value,
        Some(unit) if unit.starts_with('b') => value * 1000.0,
        // k, thousand, t
        Some(_) => value / 1000.0,
    }
}

/// Format a canonical price for display: `1.5B`, `150M`, or `500K`.
pub fn format_price(millions: f64) -> String {
    if millions >= 1000.0 {
        format!("{:.1}B", round_half_up(millions / 1000.0, 1))
    } else if millions >= 1.0 {
        format!("{:.0}M", round_half_up(millions, 0))
    } else {
        format!("{:.0}K", round_half_up(millions * 1000.0, 0))
    }
}

/// Map a canonical price to its trade-value tier. Lower bounds are inclusive.
pub fn price_to_trade_value(millions: f64) -> TradeValue {
    if millions >= 500.0 {
        TradeValue::ExtremelyHigh
    } else if millions >= 200.0 {
        TradeValue::VeryHigh
    } else if millions >= 100.0 {
        TradeValue::High
    } else if millions >= 50.0 {
        TradeValue::MediumHigh
    } else if millions >= 20.0 {
        TradeValue::Medium
    } else if millions >= 10.0 {
        TradeValue::LowMedium
    } else {
        TradeValue::Low
    }
}

/// Demand tier from the number of active listings on a marketplace.
pub fn demand_from_listing_count(listing_count: usize) -> DemandTier {
    if listing_count > 50 {
        DemandTier::VeryHigh
    } else if listing_count > 20 {
        DemandTier::High
    } else if listing_count > 10 {
        DemandTier::Medium
    } else {
        DemandTier::Low
    }
}

/// Rounds ties away from zero so `2.5M` displays as `3M`.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_units() {
        assert_eq!(parse_price("100M"), 100.0);
        assert_eq!(parse_price("1.5B"), 1500.0);
        assert_eq!(parse_price("500k"), 0.5);
        assert_eq!(parse_price("250"), 250.0);
        assert_eq!(parse_price("2 billion"), 2000.0);
        assert_eq!(parse_price("3 Million"), 3.0);
        assert_eq!(parse_price("750 thousand"), 0.75);
        assert_eq!(parse_price("750t"), 0.75);
    }

    #[test]
    fn test_parse_price_strips_commas_and_whitespace() {
        assert_eq!(parse_price("1,500 M"), 1500.0);
        assert_eq!(parse_price("  150 m gold  "), 150.0);
        assert_eq!(parse_price("about 80M each"), 80.0);
    }

    #[test]
    fn test_parse_price_garbage_is_zero() {
        assert_eq!(parse_price("garbage"), 0.0);
        assert_eq!(parse_price("not-a-price"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("."), 0.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1500.0), "1.5B");
        assert_eq!(format_price(1000.0), "1.0B");
        assert_eq!(format_price(150.0), "150M");
        assert_eq!(format_price(2.5), "3M");
        assert_eq!(format_price(1.0), "1M");
        assert_eq!(format_price(0.5), "500K");
        assert_eq!(format_price(0.0), "0K");
    }

    #[test]
    fn test_format_then_parse_is_close() {
        for value in [0.5, 5.0, 50.0, 500.0, 5000.0] {
            let parsed = parse_price(&format_price(value));
            assert!(
                (parsed - value).abs() <= value * 0.05,
                "{} formatted as {} parsed back as {}",
                value,
                format_price(value),
                parsed
            );
        }
    }

    #[test]
    fn test_trade_value_boundaries() {
        assert_eq!(price_to_trade_value(500.0), TradeValue::ExtremelyHigh);
        assert_eq!(price_to_trade_value(499.99), TradeValue::VeryHigh);
        assert_eq!(price_to_trade_value(200.0), TradeValue::VeryHigh);
        assert_eq!(price_to_trade_value(199.99), TradeValue::High);
        assert_eq!(price_to_trade_value(100.0), TradeValue::High);
        assert_eq!(price_to_trade_value(99.99), TradeValue::MediumHigh);
        assert_eq!(price_to_trade_value(50.0), TradeValue::MediumHigh);
        assert_eq!(price_to_trade_value(49.99), TradeValue::Medium);
        assert_eq!(price_to_trade_value(20.0), TradeValue::Medium);
        assert_eq!(price_to_trade_value(19.99), TradeValue::LowMedium);
        assert_eq!(price_to_trade_value(10.0), TradeValue::LowMedium);
        assert_eq!(price_to_trade_value(9.99), TradeValue::Low);
        assert_eq!(price_to_trade_value(0.0), TradeValue::Low);
    }

    #[test]
    fn test_demand_from_listing_count() {
        assert_eq!(demand_from_listing_count(51), DemandTier::VeryHigh);
        assert_eq!(demand_from_listing_count(50), DemandTier::High);
        assert_eq!(demand_from_listing_count(21), DemandTier::High);
        assert_eq!(demand_from_listing_count(20), DemandTier::Medium);
        assert_eq!(demand_from_listing_count(11), DemandTier::Medium);
        assert_eq!(demand_from_listing_count(10), DemandTier::Low);
        assert_eq!(demand_from_listing_count(0), DemandTier::Low);
    }
}
