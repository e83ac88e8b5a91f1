/// Lifetime of a cached price, in milliseconds (one hour)
pub const PRICE_CACHE_TTL_MS: i64 = 3_600_000;

/// Reports required before a community average is trusted
pub const MIN_COMMUNITY_SAMPLES: usize = 3;

/// Maximum number of analyses kept in history
pub const MAX_HISTORY: usize = 10;

/// Storage key holding the crowdsourced price reports
pub const PRICE_REPORTS_KEY: &str = "horadric_price_reports";

/// Storage key holding the analysis history
pub const HISTORY_KEY: &str = "horadric_history";

/// Source tag for community aggregates
pub const COMMUNITY_REPORTS_SOURCE: &str = "community_reports";

/// Source tag for catalog lookups
pub const STATIC_DATABASE_SOURCE: &str = "static_database";

/// Separator between the analysis text and its JSON metadata block
pub const METADATA_DELIMITER: &str = "---METADATA---";

/// Longest title stored with a history item, in characters
pub const MAX_TITLE_CHARS: usize = 100;

/// Longest analysis text stored with a history item, in characters
pub const MAX_HISTORY_TEXT_CHARS: usize = 5000;

/// Title used when an analysis has no bold heading
pub const DEFAULT_TITLE: &str = "Item";
