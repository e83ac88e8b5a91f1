//! Property-based tests for price parsing, tiering, aggregation and
//! history migration.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use horadric_core::catalog::PriceCatalog;
use horadric_core::clock::ManualClock;
use horadric_core::community::CommunityPricing;
use horadric_core::history::{migrate_history, HistoryItem, MarketPriceResolver};
use horadric_core::reports::{NewPriceReport, ReportLog};
use horadric_core::storage::InMemoryKeyValueStore;
use horadric_core::valuation::{format_price, parse_price, price_to_trade_value};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Price text the way players type it.
fn arb_price_text() -> impl Strategy<Value = String> {
    (
        1u32..5000,
        prop_oneof![
            Just(""),
            Just("m"),
            Just("M"),
            Just("b"),
            Just("k"),
            Just(" million"),
            Just(" billion")
        ],
    )
        .prop_map(|(n, unit)| format!("{}{}", n, unit))
}

/// Report text that may or may not parse.
fn arb_report_text() -> impl Strategy<Value = String> {
    prop_oneof![arb_price_text(), "[a-z ]{0,12}"]
}

fn arb_title() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Harlequin Crest".to_string()),
        Just("Doombringer".to_string()),
        Just("Tempest Roar".to_string()),
        Just("Zzyzx".to_string()),
        Just(String::new()),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("**Verdict:** KEEP".to_string()),
        Just("**Verdict:**\nsalvage it".to_string()),
        Just("no verdict".to_string()),
        Just(String::new()),
    ]
}

fn arb_history(max: usize) -> impl Strategy<Value = Vec<HistoryItem>> {
    proptest::collection::vec(
        (
            arb_title(),
            arb_text(),
            proptest::option::of(prop_oneof![Just("KEEP"), Just("SALVAGE")]),
            proptest::option::of(prop_oneof![Just(""), Just("High"), Just("250M")]),
        ),
        0..=max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, text, verdict, price))| {
                serde_json::from_value(serde_json::json!({
                    "id": i as i64,
                    "title": title,
                    "text": text,
                    "verdict": verdict,
                    "marketPrice": price,
                }))
                .expect("valid history item")
            })
            .collect()
    })
}

fn report_log(items: &[(String, String)]) -> Arc<ReportLog> {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 1, 16, 12, 0, 0).unwrap(),
    ));
    let log = Arc::new(ReportLog::new(Arc::new(InMemoryKeyValueStore::new()), clock));
    for (item, price) in items {
        log.submit(NewPriceReport {
            item_name: item.clone(),
            observed_price: price.clone(),
            source: "proptest".to_string(),
            notes: None,
        });
    }
    log
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Parsing never panics and never yields a negative or non-finite price.
    #[test]
    fn prop_parse_is_total(text in ".{0,40}") {
        let value = parse_price(&text);
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }

    /// Formatting then parsing loses at most half a display unit.
    #[test]
    fn prop_format_parse_within_rounding(value in 0.001f64..100_000.0) {
        let parsed = parse_price(&format_price(value));
        let tolerance = if value >= 1000.0 {
            50.0
        } else if value >= 1.0 {
            0.5
        } else {
            0.0005
        };
        prop_assert!(
            (parsed - value).abs() <= tolerance + 1e-9,
            "{} -> {} -> {}", value, format_price(value), parsed
        );
    }

    /// Higher prices never land in a lower tier.
    #[test]
    fn prop_tiers_are_monotonic(a in 0.0f64..2000.0, b in 0.0f64..2000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(price_to_trade_value(low) <= price_to_trade_value(high));
    }

    /// Sample size counts every report; the mean lies within the parseable range.
    #[test]
    fn prop_aggregate_bounds(texts in proptest::collection::vec(arb_report_text(), 1..8)) {
        let rows: Vec<(String, String)> =
            texts.iter().map(|t| ("Shako".to_string(), t.clone())).collect();
        let community = CommunityPricing::new(report_log(&rows));

        let parsed: Vec<f64> = texts.iter().map(|t| parse_price(t)).filter(|p| *p > 0.0).collect();
        match community.average("Shako") {
            None => prop_assert!(parsed.is_empty()),
            Some(aggregate) => {
                prop_assert_eq!(aggregate.sample_size, texts.len());
                let min = parsed.iter().copied().fold(f64::INFINITY, f64::min);
                let max = parsed.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(aggregate.average_price >= min - 1e-9);
                prop_assert!(aggregate.average_price <= max + 1e-9);
            }
        }
    }

    /// A second migration pass changes nothing.
    #[test]
    fn prop_migration_is_idempotent(mut history in arb_history(10), trusted in any::<bool>()) {
        let rows: Vec<(String, String)> = if trusted {
            (0..3).map(|_| ("Doombringer".to_string(), "300M".to_string())).collect()
        } else {
            Vec::new()
        };
        let resolver = MarketPriceResolver::new(
            Arc::new(CommunityPricing::new(report_log(&rows))),
            Arc::new(PriceCatalog::new()),
            3,
        );

        migrate_history(&mut history, &resolver);
        let snapshot = serde_json::to_string(&history).unwrap();

        prop_assert_eq!(migrate_history(&mut history, &resolver), 0);
        prop_assert_eq!(serde_json::to_string(&history).unwrap(), snapshot);
    }
}
