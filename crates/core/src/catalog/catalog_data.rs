//! Reference price table. Entries are matched in declaration order.

use horadric_market_data::{DemandTier, TradeValue};

use super::{PriceRecord, Rarity};

/// Date the reference prices were last reviewed.
pub const CATALOG_LAST_UPDATED: &str = "2026-01-16";

pub(crate) static RECORDS: &[PriceRecord] = &[
    // Mythic uniques
    PriceRecord {
        name: "The Grandfather",
        rarity: Rarity::Mythic,
        item_type: "Two-Handed Sword",
        trade_value: TradeValue::ExtremelyHigh,
        estimated_price: "500M+ Gold",
        demand: DemandTier::VeryHigh,
        notes: Some("Most prestigious weapon. Extremely rare drop."),
        best_for: &["Barbarian"],
        search_terms: &["grandfather", "mythic sword", "uber unique sword"],
    },
    PriceRecord {
        name: "Harlequin Crest",
        rarity: Rarity::Mythic,
        item_type: "Helm",
        trade_value: TradeValue::ExtremelyHigh,
        estimated_price: "400M+ Gold",
        demand: DemandTier::VeryHigh,
        notes: Some("Best-in-slot helm for most builds. Universal BiS."),
        best_for: &["All Classes"],
        search_terms: &["shako", "harlequin", "mythic helm", "uber helm"],
    },
    PriceRecord {
        name: "Tyrael's Might",
        rarity: Rarity::Mythic,
        item_type: "Chest Armor",
        trade_value: TradeValue::ExtremelyHigh,
        estimated_price: "350M+ Gold",
        demand: DemandTier::VeryHigh,
        notes: Some("Top-tier defensive option. Great for melee builds."),
        best_for: &["Barbarian", "Druid"],
        search_terms: &["tyrael", "mythic chest", "uber chest"],
    },
    PriceRecord {
        name: "Ahavarion, Spear of Lycander",
        rarity: Rarity::Mythic,
        item_type: "Staff",
        trade_value: TradeValue::VeryHigh,
        estimated_price: "300M+ Gold",
        demand: DemandTier::High,
        notes: Some("Powerful staff for casters. Enables unique builds."),
        best_for: &["Sorcerer", "Spiritborn"],
        search_terms: &["ahavarion", "lycander", "mythic staff", "uber staff"],
    },
    PriceRecord {
        name: "Doombringer",
        rarity: Rarity::Mythic,
        item_type: "One-Handed Sword",
        trade_value: TradeValue::VeryHigh,
        estimated_price: "280M+ Gold",
        demand: DemandTier::High,
        notes: Some("Strong one-handed option for various builds."),
        best_for: &["Barbarian", "Necromancer"],
        search_terms: &["doombringer", "mythic sword", "uber 1h"],
    },
    PriceRecord {
        name: "Melted Heart of Selig",
        rarity: Rarity::Mythic,
        item_type: "Amulet",
        trade_value: TradeValue::High,
        estimated_price: "250M+ Gold",
        demand: DemandTier::Medium,
        notes: Some("Unique defensive mechanics. Build-enabling."),
        best_for: &["Sorcerer", "Necromancer"],
        search_terms: &["melted heart", "selig", "mythic amulet", "uber amulet"],
    },
    // Top-tier uniques
    PriceRecord {
        name: "Tibault's Will",
        rarity: Rarity::Unique,
        item_type: "Pants",
        trade_value: TradeValue::VeryHigh,
        estimated_price: "100M-200M Gold",
        demand: DemandTier::VeryHigh,
        notes: Some("Best pants for many Rogue builds. Movement speed boost."),
        best_for: &["Rogue"],
        search_terms: &["tibault", "unique pants", "rogue pants"],
    },
    PriceRecord {
        name: "Banished Lord's Talisman",
        rarity: Rarity::Unique,
        item_type: "Ring",
        trade_value: TradeValue::VeryHigh,
        estimated_price: "80M-150M Gold",
        demand: DemandTier::VeryHigh,
        notes: Some("Essential for specific Necromancer builds."),
        best_for: &["Necromancer"],
        search_terms: &["banished lord", "unique ring", "necro ring"],
    },
    PriceRecord {
        name: "Fists of Fate",
        rarity: Rarity::Unique,
        item_type: "Gloves",
        trade_value: TradeValue::High,
        estimated_price: "50M-100M Gold",
        demand: DemandTier::High,
        notes: Some("Top gloves for lucky hit builds."),
        best_for: &["Barbarian", "Druid"],
        search_terms: &["fists of fate", "unique gloves"],
    },
    PriceRecord {
        name: "Tuskhelm of Joritz the Mighty",
        rarity: Rarity::Unique,
        item_type: "Helm",
        trade_value: TradeValue::High,
        estimated_price: "60M-120M Gold",
        demand: DemandTier::High,
        notes: Some("Strong defensive helm with thorns synergy."),
        best_for: &["Barbarian"],
        search_terms: &["tuskhelm", "joritz", "barb helm"],
    },
    PriceRecord {
        name: "Ancients' Oath",
        rarity: Rarity::Unique,
        item_type: "Two-Handed Axe",
        trade_value: TradeValue::High,
        estimated_price: "70M-130M Gold",
        demand: DemandTier::High,
        notes: Some("Powerful weapon for Whirlwind Barbarians."),
        best_for: &["Barbarian"],
        search_terms: &["ancients oath", "unique 2h axe", "barb axe"],
    },
    PriceRecord {
        name: "Starless Skies",
        rarity: Rarity::Unique,
        item_type: "Chest Armor",
        trade_value: TradeValue::MediumHigh,
        estimated_price: "40M-80M Gold",
        demand: DemandTier::Medium,
        notes: Some("Great for Spiritborn gorilla builds."),
        best_for: &["Spiritborn"],
        search_terms: &["starless skies", "spiritborn chest"],
    },
    PriceRecord {
        name: "Flickerstep",
        rarity: Rarity::Unique,
        item_type: "Boots",
        trade_value: TradeValue::High,
        estimated_price: "50M-100M Gold",
        demand: DemandTier::VeryHigh,
        notes: Some("Best boots for Rogue. Amazing mobility."),
        best_for: &["Rogue"],
        search_terms: &["flickerstep", "unique boots", "rogue boots"],
    },
    PriceRecord {
        name: "Rakanoth's Wake",
        rarity: Rarity::Unique,
        item_type: "Boots",
        trade_value: TradeValue::Medium,
        estimated_price: "30M-60M Gold",
        demand: DemandTier::Medium,
        notes: Some("Solid boots for movement-based builds."),
        best_for: &["Rogue", "Spiritborn"],
        search_terms: &["rakanoth", "unique boots"],
    },
    PriceRecord {
        name: "Godslayer Crown",
        rarity: Rarity::Unique,
        item_type: "Helm",
        trade_value: TradeValue::High,
        estimated_price: "50M-90M Gold",
        demand: DemandTier::High,
        notes: Some("Top helm for Druid werewolf builds."),
        best_for: &["Druid"],
        search_terms: &["godslayer", "druid helm"],
    },
    PriceRecord {
        name: "Tempest Roar",
        rarity: Rarity::Unique,
        item_type: "Helm",
        trade_value: TradeValue::VeryHigh,
        estimated_price: "80M-140M Gold",
        demand: DemandTier::VeryHigh,
        notes: Some("BiS for Hurricane Druid. Enables powerful builds."),
        best_for: &["Druid"],
        search_terms: &["tempest roar", "hurricane helm", "druid unique"],
    },
    PriceRecord {
        name: "Earthstriker's Aspect",
        rarity: Rarity::Unique,
        item_type: "Gloves",
        trade_value: TradeValue::Medium,
        estimated_price: "25M-50M Gold",
        demand: DemandTier::Medium,
        notes: Some("Good for Landslide Druid builds."),
        best_for: &["Druid"],
        search_terms: &["earthstriker", "druid gloves"],
    },
    PriceRecord {
        name: "Esu's Heirloom",
        rarity: Rarity::Unique,
        item_type: "Boots",
        trade_value: TradeValue::VeryHigh,
        estimated_price: "90M-160M Gold",
        demand: DemandTier::VeryHigh,
        notes: Some("Best boots for Sorcerer. Essential for endgame."),
        best_for: &["Sorcerer"],
        search_terms: &["esu", "sorc boots", "sorcerer boots"],
    },
    PriceRecord {
        name: "Cowl of the Nameless",
        rarity: Rarity::Unique,
        item_type: "Helm",
        trade_value: TradeValue::High,
        estimated_price: "60M-110M Gold",
        demand: DemandTier::High,
        notes: Some("Strong helm for Necromancer builds."),
        best_for: &["Necromancer"],
        search_terms: &["cowl nameless", "necro helm"],
    },
    PriceRecord {
        name: "Blood Artisan's Cuirass",
        rarity: Rarity::Unique,
        item_type: "Chest Armor",
        trade_value: TradeValue::High,
        estimated_price: "55M-100M Gold",
        demand: DemandTier::High,
        notes: Some("Top chest for blood skill Necromancers."),
        best_for: &["Necromancer"],
        search_terms: &["blood artisan", "necro chest"],
    },
    PriceRecord {
        name: "Writhing Band of Trickery",
        rarity: Rarity::Unique,
        item_type: "Ring",
        trade_value: TradeValue::MediumHigh,
        estimated_price: "40M-75M Gold",
        demand: DemandTier::Medium,
        notes: Some("Useful ring for subterfuge builds."),
        best_for: &["Rogue"],
        search_terms: &["writhing band", "trickery ring", "rogue ring"],
    },
    PriceRecord {
        name: "Scoundrel's Leathers",
        rarity: Rarity::Unique,
        item_type: "Chest Armor",
        trade_value: TradeValue::Medium,
        estimated_price: "30M-65M Gold",
        demand: DemandTier::Medium,
        notes: Some("Decent chest option for Rogue."),
        best_for: &["Rogue"],
        search_terms: &["scoundrel", "rogue chest"],
    },
    // Legendary affix combinations
    PriceRecord {
        name: "Legendary Helm with Shout Skills +4",
        rarity: Rarity::Legendary,
        item_type: "Helm",
        trade_value: TradeValue::High,
        estimated_price: "20M-40M Gold",
        demand: DemandTier::High,
        notes: Some("Perfect roll shout helm for Barbarian."),
        best_for: &["Barbarian"],
        search_terms: &["shout helm", "barb helm +4"],
    },
    PriceRecord {
        name: "Legendary Gloves with Critical Strike",
        rarity: Rarity::Legendary,
        item_type: "Gloves",
        trade_value: TradeValue::MediumHigh,
        estimated_price: "15M-35M Gold",
        demand: DemandTier::High,
        notes: Some("Well-rolled crit gloves. Universal value."),
        best_for: &["All Classes"],
        search_terms: &["crit gloves", "critical strike gloves"],
    },
    PriceRecord {
        name: "Legendary Boots with Movement Speed",
        rarity: Rarity::Legendary,
        item_type: "Boots",
        trade_value: TradeValue::Medium,
        estimated_price: "10M-25M Gold",
        demand: DemandTier::High,
        notes: Some("High movement speed with good secondary stats."),
        best_for: &["All Classes"],
        search_terms: &["movement boots", "speed boots"],
    },
    PriceRecord {
        name: "Legendary Chest with Damage Reduction",
        rarity: Rarity::Legendary,
        item_type: "Chest Armor",
        trade_value: TradeValue::Medium,
        estimated_price: "12M-28M Gold",
        demand: DemandTier::Medium,
        notes: Some("High damage reduction with good rolls."),
        best_for: &["All Classes"],
        search_terms: &["dr chest", "damage reduction chest"],
    },
    PriceRecord {
        name: "Legendary Amulet with Cooldown Reduction",
        rarity: Rarity::Legendary,
        item_type: "Amulet",
        trade_value: TradeValue::High,
        estimated_price: "25M-50M Gold",
        demand: DemandTier::High,
        notes: Some("High CDR with crit damage. Very sought after."),
        best_for: &["All Classes"],
        search_terms: &["cdr amulet", "cooldown amulet"],
    },
    PriceRecord {
        name: "Legendary Ring with Vulnerable Damage",
        rarity: Rarity::Legendary,
        item_type: "Ring",
        trade_value: TradeValue::MediumHigh,
        estimated_price: "18M-38M Gold",
        demand: DemandTier::High,
        notes: Some("High vulnerable damage. Meta stat."),
        best_for: &["All Classes"],
        search_terms: &["vulnerable ring", "vuln damage ring"],
    },
    // Notable weapons
    PriceRecord {
        name: "Windforce",
        rarity: Rarity::Unique,
        item_type: "Bow",
        trade_value: TradeValue::Medium,
        estimated_price: "30M-60M Gold",
        demand: DemandTier::Medium,
        notes: Some("Classic Diablo bow. Good for certain Rogue builds."),
        best_for: &["Rogue"],
        search_terms: &["windforce", "unique bow"],
    },
    PriceRecord {
        name: "Azurewrath",
        rarity: Rarity::Unique,
        item_type: "One-Handed Sword",
        trade_value: TradeValue::LowMedium,
        estimated_price: "10M-25M Gold",
        demand: DemandTier::Low,
        notes: Some("Situational weapon. Limited use cases."),
        best_for: &["Barbarian"],
        search_terms: &["azurewrath", "unique sword"],
    },
    PriceRecord {
        name: "The Oculus",
        rarity: Rarity::Unique,
        item_type: "Wand",
        trade_value: TradeValue::Medium,
        estimated_price: "20M-45M Gold",
        demand: DemandTier::Medium,
        notes: Some("Classic Sorcerer wand. Decent option."),
        best_for: &["Sorcerer"],
        search_terms: &["oculus", "unique wand"],
    },
    PriceRecord {
        name: "Skyhunter",
        rarity: Rarity::Unique,
        item_type: "Bow",
        trade_value: TradeValue::Medium,
        estimated_price: "25M-50M Gold",
        demand: DemandTier::Medium,
        notes: Some("Strong bow for penetrating shot builds."),
        best_for: &["Rogue"],
        search_terms: &["skyhunter", "unique bow"],
    },
    PriceRecord {
        name: "Staff of Endless Rage",
        rarity: Rarity::Unique,
        item_type: "Staff",
        trade_value: TradeValue::LowMedium,
        estimated_price: "15M-30M Gold",
        demand: DemandTier::Low,
        notes: Some("Niche staff. Limited build options."),
        best_for: &["Druid"],
        search_terms: &["endless rage", "unique staff"],
    },
];
