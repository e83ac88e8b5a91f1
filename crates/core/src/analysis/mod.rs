//! Field extraction from generated item analyses.
//!
//! An analysis is markdown text, optionally followed by `---METADATA---` and
//! a JSON object (possibly inside a ```json fence):
//!
//! ```text
//! **Harlequin Crest**
//! ...
//! **Verdict:** KEEP
//! ---METADATA---
//! {"rarity": "mythic", "trade_query": "Harlequin Crest"}
//! ```
//!
//! None of the extractors fail. Missing or malformed fields come back as
//! [`Extraction::Unparseable`] with a reason.

mod cancellation;

pub use cancellation::{run_cancellable_analysis, CancellationToken};

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::Rarity;
use crate::constants::{DEFAULT_TITLE, MAX_TITLE_CHARS, METADATA_DELIMITER};

lazy_static! {
    static ref VERDICT_PATTERN: Regex =
        Regex::new(r"(?i)\*\*Verdict:\*\*\s*(KEEP|SALVAGE)")
            .expect("Invalid regex pattern");
    static ref BOLD_PATTERN: Regex = Regex::new(r"\*\*(.*?)\*\*").expect("Invalid regex pattern");
}

/// Result of pulling one structured field out of free text.
#[derive(Clone, Debug, PartialEq)]
pub enum Extraction<T> {
    Parsed(T),
    Unparseable { reason: String },
}

impl<T> Extraction<T> {
    fn unparseable(reason: impl Into<String>) -> Self {
        Extraction::Unparseable {
            reason: reason.into(),
        }
    }

    pub fn parsed(self) -> Option<T> {
        match self {
            Extraction::Parsed(value) => Some(value),
            Extraction::Unparseable { .. } => None,
        }
    }

    pub fn as_parsed(&self) -> Option<&T> {
        match self {
            Extraction::Parsed(value) => Some(value),
            Extraction::Unparseable { .. } => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Extraction::Parsed(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Keep,
    Salvage,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Keep => "KEEP",
            Verdict::Salvage => "SALVAGE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "KEEP" => Ok(Verdict::Keep),
            "SALVAGE" => Ok(Verdict::Salvage),
            _ => Err(()),
        }
    }
}

/// Metadata block appended to an analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisMetadata {
    /// Display class such as `rarity-mythic`; only set for known rarities
    pub rarity_class: Option<String>,
    pub trade_query: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedAnalysis {
    /// Text before the metadata delimiter, trimmed
    pub display_text: String,
    pub metadata: Extraction<AnalysisMetadata>,
}

impl ParsedAnalysis {
    pub fn rarity_class(&self) -> Option<&str> {
        self.metadata
            .as_parsed()
            .and_then(|meta| meta.rarity_class.as_deref())
    }

    pub fn trade_query(&self) -> Option<&str> {
        self.metadata
            .as_parsed()
            .and_then(|meta| meta.trade_query.as_deref())
    }
}

#[derive(Deserialize)]
struct RawMetadata {
    #[serde(default)]
    rarity: Option<String>,
    #[serde(default)]
    trade_query: Option<String>,
}

/// Split an analysis into display text and metadata.
pub fn parse_analysis(text: &str) -> ParsedAnalysis {
    let mut parts = text.split(METADATA_DELIMITER);
    let display_text = parts.next().unwrap_or_default().trim().to_string();

    let metadata = match parts.next() {
        Some(block) if !block.trim().is_empty() => parse_metadata(block),
        _ => Extraction::unparseable("no metadata block"),
    };

    ParsedAnalysis {
        display_text,
        metadata,
    }
}

fn parse_metadata(block: &str) -> Extraction<AnalysisMetadata> {
    let json = block.replace("```json", "").replace("```", "");
    let raw: RawMetadata = match serde_json::from_str(json.trim()) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to parse analysis metadata: {}", e);
            return Extraction::unparseable(e.to_string());
        }
    };

    let rarity_class = raw
        .rarity
        .and_then(|rarity| rarity.parse::<Rarity>().ok())
        .map(|rarity| format!("rarity-{}", rarity));
    let trade_query = raw.trade_query.filter(|query| !query.is_empty());

    Extraction::Parsed(AnalysisMetadata {
        rarity_class,
        trade_query,
    })
}

/// Item name from the first bold span, capped at 100 characters.
pub fn extract_title(text: &str) -> String {
    BOLD_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|title| title.as_str())
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect()
}

/// KEEP/SALVAGE from a `**Verdict:**` line, matched case-insensitively.
pub fn extract_verdict(text: &str) -> Extraction<Verdict> {
    VERDICT_PATTERN
        .captures(text)
        .and_then(|captures| captures[1].parse::<Verdict>().ok())
        .map(Extraction::Parsed)
        .unwrap_or_else(|| Extraction::unparseable("no verdict line"))
}
