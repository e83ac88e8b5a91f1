//! Static reference prices for notable items.
//!
//! The catalog is the last step of the price fallback chain. It never
//! changes at runtime; ambiguous lookups resolve to the first record in
//! declaration order.

mod catalog_data;

use std::fmt;
use std::str::FromStr;

use horadric_market_data::{DemandTier, PriceData, TradeValue};
use serde::{Deserialize, Serialize};

use crate::constants::STATIC_DATABASE_SOURCE;
use crate::errors::{Error, ValidationError};

pub use catalog_data::CATALOG_LAST_UPDATED;

/// Item rarity as shown in game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Magic,
    Rare,
    Legendary,
    Unique,
    Mythic,
}

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Magic,
        Rarity::Rare,
        Rarity::Legendary,
        Rarity::Unique,
        Rarity::Mythic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Magic => "magic",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
            Rarity::Unique => "unique",
            Rarity::Mythic => "mythic",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Rarity::ALL
            .into_iter()
            .find(|rarity| rarity.as_str() == lower)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown rarity '{}'",
                    s
                )))
            })
    }
}

/// One row of the reference table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub name: &'static str,
    pub rarity: Rarity,
    pub item_type: &'static str,
    pub trade_value: TradeValue,
    pub estimated_price: &'static str,
    pub demand: DemandTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
    pub best_for: &'static [&'static str],
    pub search_terms: &'static [&'static str],
}

impl PriceRecord {
    /// Convert to the shared price contract, tagged as coming from the catalog.
    pub fn to_price_data(&self) -> PriceData {
        let mut data = PriceData::new(
            self.name,
            self.trade_value.as_str(),
            self.estimated_price,
            self.demand.as_str(),
            STATIC_DATABASE_SOURCE,
            CATALOG_LAST_UPDATED,
        );
        data.rarity = Some(self.rarity.as_str().to_string());
        data.notes = self.notes.map(str::to_string);
        data
    }

    fn matches_search_term(&self, query: &str) -> bool {
        self.search_terms
            .iter()
            .any(|term| term.contains(query) || query.contains(term))
    }

    fn matches_partial_name(&self, query: &str) -> bool {
        let name = self.name.to_lowercase();
        if name.contains(query) {
            return true;
        }
        name.split(' ')
            .next()
            .is_some_and(|first_word| query.contains(first_word))
    }
}

/// Read-only lookup over the reference table.
#[derive(Clone, Debug)]
pub struct PriceCatalog {
    records: &'static [PriceRecord],
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceCatalog {
    pub fn new() -> Self {
        Self {
            records: catalog_data::RECORDS,
        }
    }

    /// Build a catalog over a custom table.
    pub fn with_records(records: &'static [PriceRecord]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        self.records
    }

    pub fn last_updated(&self) -> &'static str {
        CATALOG_LAST_UPDATED
    }

    /// Find the record for an item name.
    ///
    /// Matching is case-insensitive and runs in three passes, each over the
    /// whole table in declaration order:
    /// 1. exact canonical name;
    /// 2. a search term contains the query or the query contains a term;
    /// 3. the name contains the query or the query contains the name's first word.
    pub fn search(&self, item_name: &str) -> Option<&PriceRecord> {
        let query = item_name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.records
            .iter()
            .find(|record| record.name.to_lowercase() == query)
            .or_else(|| {
                self.records
                    .iter()
                    .find(|record| record.matches_search_term(&query))
            })
            .or_else(|| {
                self.records
                    .iter()
                    .find(|record| record.matches_partial_name(&query))
            })
    }

    pub fn items_by_rarity(&self, rarity: Rarity) -> Vec<&PriceRecord> {
        self.records
            .iter()
            .filter(|record| record.rarity == rarity)
            .collect()
    }

    /// Records recommended for a class. Class names match exactly.
    pub fn items_by_class(&self, class_name: &str) -> Vec<&PriceRecord> {
        self.records
            .iter()
            .filter(|record| record.best_for.contains(&class_name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_exact_is_case_insensitive() {
        let catalog = PriceCatalog::new();
        let record = catalog.search("  harlequin CREST ").unwrap();
        assert_eq!(record.name, "Harlequin Crest");
    }

    #[test]
    fn test_search_by_search_term() {
        let catalog = PriceCatalog::new();
        assert_eq!(catalog.search("Shako").unwrap().name, "Harlequin Crest");
        // Query containing a term
        assert_eq!(
            catalog.search("my new shako drop").unwrap().name,
            "Harlequin Crest"
        );
    }

    #[test]
    fn test_search_ambiguous_term_uses_declaration_order() {
        let catalog = PriceCatalog::new();
        // "mythic sword" belongs to both The Grandfather and Doombringer.
        assert_eq!(catalog.search("mythic sword").unwrap().name, "The Grandfather");
    }

    #[test]
    fn test_search_partial_name() {
        let catalog = PriceCatalog::new();
        assert_eq!(catalog.search("Godslayer").unwrap().name, "Godslayer Crown");
        assert_eq!(catalog.search("Windforce bow").unwrap().name, "Windforce");
    }

    #[test]
    fn test_search_misses() {
        let catalog = PriceCatalog::new();
        assert!(catalog.search("").is_none());
        assert!(catalog.search("   ").is_none());
        assert!(catalog.search("Zzyzx").is_none());
    }

    #[test]
    fn test_items_by_rarity() {
        let catalog = PriceCatalog::new();
        let mythics = catalog.items_by_rarity(Rarity::Mythic);
        assert_eq!(mythics.len(), 6);
        assert_eq!(mythics[0].name, "The Grandfather");
        assert!(catalog.items_by_rarity(Rarity::Magic).is_empty());
    }

    #[test]
    fn test_items_by_class() {
        let catalog = PriceCatalog::new();
        let druid: Vec<&str> = catalog
            .items_by_class("Druid")
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert!(druid.contains(&"Tempest Roar"));
        assert!(druid.contains(&"Tyrael's Might"));
        assert!(!druid.contains(&"Harlequin Crest"));
        assert!(catalog.items_by_class("druid").is_empty());
    }

    #[test]
    fn test_to_price_data() {
        let catalog = PriceCatalog::new();
        let data = catalog.search("Shako").unwrap().to_price_data();
        assert_eq!(data.name, "Harlequin Crest");
        assert_eq!(data.trade_value, "Extremely High");
        assert_eq!(data.estimated_price, "400M+ Gold");
        assert_eq!(data.demand, "very_high");
        assert_eq!(data.source, "static_database");
        assert_eq!(data.last_updated, "2026-01-16");
        assert_eq!(data.rarity.as_deref(), Some("mythic"));
    }

    #[test]
    fn test_rarity_from_str() {
        assert_eq!("Mythic".parse::<Rarity>().unwrap(), Rarity::Mythic);
        assert!("epic".parse::<Rarity>().is_err());
    }
}
