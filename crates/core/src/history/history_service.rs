use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{migrate_history, HistoryItem, MarketPriceResolver, MigrationReport, StoredValue};
use crate::analysis::{
    extract_title, extract_verdict, parse_analysis, run_cancellable_analysis, CancellationToken,
};
use crate::clock::Clock;
use crate::constants::{HISTORY_KEY, MAX_HISTORY_TEXT_CHARS};
use crate::storage::{decode_array, KeyValueStore, StoredRecord};

/// Request-side details saved alongside an analysis.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisContext {
    #[serde(default)]
    pub player_class: Option<String>,
    #[serde(default)]
    pub build_style: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl AnalysisContext {
    fn into_extra(self, date: String) -> Map<String, Value> {
        let mut extra = Map::new();
        extra.insert("date".to_string(), Value::String(date));
        let fields = [
            ("playerClass", self.player_class.map(Value::String)),
            ("buildStyle", self.build_style.map(Value::String)),
            ("provider", self.provider.map(Value::String)),
            ("model", self.model.map(Value::String)),
            ("cost", self.cost.and_then(|c| serde_json::Number::from_f64(c).map(Value::Number))),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                extra.insert(key.to_string(), value);
            }
        }
        extra
    }
}

#[derive(Default)]
struct HistoryState {
    entries: Vec<StoredRecord<HistoryItem>>,
    last_id: i64,
}

impl HistoryState {
    fn items(&self) -> impl Iterator<Item = &HistoryItem> {
        self.entries.iter().filter_map(StoredRecord::decoded)
    }
}

/// Most-recent-first list of saved analyses, persisted as one JSON array.
pub struct HistoryService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    resolver: MarketPriceResolver,
    max_history: usize,
    state: Mutex<HistoryState>,
}

impl HistoryService {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        resolver: MarketPriceResolver,
        max_history: usize,
    ) -> Self {
        Self {
            store,
            clock,
            resolver,
            max_history,
            state: Mutex::new(HistoryState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HistoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read the persisted history and backfill missing fields.
    ///
    /// Run once at startup. The history is written back in a single write,
    /// and only when at least one item changed, so repeated loads of an
    /// already-migrated history never write.
    pub fn load(&self) -> MigrationReport {
        let mut entries = self.read_entries();
        entries.truncate(self.max_history);

        let migrated = migrate_history(
            entries.iter_mut().filter_map(StoredRecord::decoded_mut),
            &self.resolver,
        );
        let persisted = migrated > 0 && self.persist(&entries);
        if migrated > 0 {
            info!("Migrated {} history items", migrated);
        }

        let mut state = self.lock();
        state.entries = entries;
        let last_id = state.items().map(|item| item.id).max().unwrap_or(0);
        state.last_id = last_id;

        MigrationReport {
            examined: state.items().count(),
            migrated,
            persisted,
        }
    }

    pub fn items(&self) -> Vec<HistoryItem> {
        self.lock().items().cloned().collect()
    }

    /// Save a raw analysis response as the newest history item.
    pub fn record_analysis(&self, raw_response: &str, context: AnalysisContext) -> HistoryItem {
        let parsed = parse_analysis(raw_response);
        let title = extract_title(&parsed.display_text);
        let verdict = extract_verdict(&parsed.display_text).parsed();
        let (market_price, price_source) = match self.resolver.resolve(&title) {
            Some((price, source)) => (Some(price), Some(source)),
            None => (None, None),
        };

        let now = self.clock.now();
        let mut state = self.lock();
        let id = now.timestamp_millis().max(state.last_id + 1);
        state.last_id = id;

        let item = HistoryItem {
            id,
            title,
            text: parsed
                .display_text
                .chars()
                .take(MAX_HISTORY_TEXT_CHARS)
                .collect(),
            rarity: parsed.rarity_class().map(str::to_string),
            trade_query: parsed.trade_query().map(str::to_string),
            verdict: verdict.map(StoredValue::Known),
            market_price,
            price_source: price_source.map(StoredValue::Known),
            extra: context.into_extra(now.format("%-m/%-d/%Y").to_string()),
        };

        state.entries.insert(0, StoredRecord::Decoded(item.clone()));
        state.entries.truncate(self.max_history);
        self.persist(&state.entries);

        item
    }

    /// Await an in-flight analysis and record its response.
    ///
    /// Returns `None`, and records nothing, when `token` fires first.
    pub async fn record_cancellable<F>(
        &self,
        token: &CancellationToken,
        analysis: F,
        context: AnalysisContext,
    ) -> Option<HistoryItem>
    where
        F: Future<Output = String>,
    {
        let raw_response = run_cancellable_analysis(token, analysis).await?;
        Some(self.record_analysis(&raw_response, context))
    }

    /// Remove one item. Returns false when no item has that id.
    pub fn delete(&self, id: i64) -> bool {
        let mut state = self.lock();
        let before = state.entries.len();
        state
            .entries
            .retain(|entry| !matches!(entry.decoded(), Some(item) if item.id == id));
        if state.entries.len() == before {
            return false;
        }
        self.persist(&state.entries);
        true
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            warn!("Failed to clear history: {}", e);
        }
    }

    fn read_entries(&self) -> Vec<StoredRecord<HistoryItem>> {
        let raw = match self.store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to load history: {}", e);
                return Vec::new();
            }
        };

        decode_array(&raw, "history")
    }

    fn persist(&self, entries: &[StoredRecord<HistoryItem>]) -> bool {
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize history: {}", e);
                return false;
            }
        };
        match self.store.set(HISTORY_KEY, &json) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save history: {}", e);
                false
            }
        }
    }
}
