use std::sync::{Arc, Mutex, MutexGuard};

use chrono::SecondsFormat;
use log::{debug, warn};

use super::{NewPriceReport, PriceReport};
use crate::clock::Clock;
use crate::constants::PRICE_REPORTS_KEY;
use crate::storage::{decode_array, KeyValueStore, StoredRecord};

#[derive(Default)]
struct LogState {
    records: Vec<StoredRecord<PriceReport>>,
    last_id: i64,
}

impl LogState {
    fn reports(&self) -> impl Iterator<Item = &PriceReport> {
        self.records.iter().filter_map(StoredRecord::decoded)
    }
}

/// Append-only log of crowdsourced price reports.
///
/// Reports are kept in memory and written through to the key-value store as
/// one JSON array. A failed write is logged and the in-memory log stays
/// authoritative for the rest of the process.
pub struct ReportLog {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    state: Mutex<LogState>,
}

impl ReportLog {
    /// Open the log, loading any reports already persisted.
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let state = LogState {
            records: load_reports(store.as_ref()),
            last_id: 0,
        };
        let last_id = state.reports().map(|r| r.id).max().unwrap_or(0);
        debug!("Loaded {} price reports", state.reports().count());

        Self {
            store,
            clock,
            state: Mutex::new(LogState { last_id, ..state }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a report. Price text is not validated here.
    pub fn submit(&self, input: NewPriceReport) -> PriceReport {
        let now = self.clock.now();
        let mut state = self.lock();

        // Two submissions in the same millisecond still get distinct ids.
        let id = now.timestamp_millis().max(state.last_id + 1);
        state.last_id = id;

        let report = PriceReport {
            id,
            item_name: input.item_name,
            observed_price: input.observed_price,
            source: input.source,
            notes: input.notes.unwrap_or_default(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            submitted: false,
        };
        state.records.push(StoredRecord::Decoded(report.clone()));
        self.persist(&state.records);

        report
    }

    /// All reports in submission order.
    pub fn reports(&self) -> Vec<PriceReport> {
        self.lock().reports().cloned().collect()
    }

    /// Reports whose item name equals `item_name`, ignoring case.
    pub fn reports_for_item(&self, item_name: &str) -> Vec<PriceReport> {
        let wanted = item_name.to_lowercase();
        self.lock()
            .reports()
            .filter(|report| report.item_name.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().reports().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every report, in memory and in the store.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.records.clear();
        if let Err(e) = self.store.remove(PRICE_REPORTS_KEY) {
            warn!("Failed to clear price reports: {}", e);
        }
    }

    fn persist(&self, records: &[StoredRecord<PriceReport>]) {
        let json = match serde_json::to_string(records) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize price reports: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(PRICE_REPORTS_KEY, &json) {
            warn!("Failed to save price report: {}", e);
        }
    }
}

fn load_reports(store: &dyn KeyValueStore) -> Vec<StoredRecord<PriceReport>> {
    let raw = match store.get(PRICE_REPORTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to load price reports: {}", e);
            return Vec::new();
        }
    };

    decode_array(&raw, "price reports")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::test_support::RecordingStore;
    use chrono::{TimeZone, Utc};

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 1, 16, 12, 0, 0).unwrap(),
        ))
    }

    fn report(item: &str, price: &str) -> NewPriceReport {
        NewPriceReport {
            item_name: item.to_string(),
            observed_price: price.to_string(),
            source: "diablo.trade".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_submit_persists_and_stamps() {
        let store = Arc::new(RecordingStore::new());
        let log = ReportLog::new(store.clone(), clock());

        let saved = log.submit(report("Shako", "400M"));
        assert_eq!(saved.notes, "");
        assert!(!saved.submitted);
        assert_eq!(saved.timestamp, "2026-01-16T12:00:00.000Z");
        assert_eq!(store.writes(), 1);

        let raw = store.get(PRICE_REPORTS_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["itemName"], "Shako");
        assert_eq!(json[0]["observedPrice"], "400M");
        assert_eq!(json[0]["submitted"], false);
    }

    #[test]
    fn test_ids_are_unique_within_a_millisecond() {
        let store = Arc::new(RecordingStore::new());
        let log = ReportLog::new(store, clock());

        let first = log.submit(report("Shako", "400M"));
        let second = log.submit(report("Shako", "410M"));
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_garbage_prices_are_accepted() {
        let store = Arc::new(RecordingStore::new());
        let log = ReportLog::new(store, clock());
        log.submit(report("Shako", "not-a-price"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_reports_for_item_is_case_insensitive_exact() {
        let store = Arc::new(RecordingStore::new());
        let log = ReportLog::new(store, clock());
        log.submit(report("Harlequin Crest", "400M"));
        log.submit(report("harlequin crest", "380M"));
        log.submit(report("Harlequin", "1B"));

        assert_eq!(log.reports_for_item("HARLEQUIN CREST").len(), 2);
        assert_eq!(log.reports_for_item("Harlequin").len(), 1);
        assert!(log.reports_for_item("Shako").is_empty());
    }

    #[test]
    fn test_reload_from_store() {
        let store = Arc::new(RecordingStore::new());
        let log = ReportLog::new(store.clone(), clock());
        let saved = log.submit(report("Doombringer", "280M"));

        let reopened = ReportLog::new(store, clock());
        assert_eq!(reopened.reports(), vec![saved.clone()]);

        // Ids keep increasing after a reload even if the clock has not moved.
        let next = reopened.submit(report("Doombringer", "300M"));
        assert!(next.id > saved.id);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let store = Arc::new(RecordingStore::new());
        store.fail_writes(true);
        let log = ReportLog::new(store.clone(), clock());

        log.submit(report("Shako", "400M"));
        assert_eq!(log.len(), 1);
        assert_eq!(store.get(PRICE_REPORTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_malformed_store_is_ignored() {
        let store = Arc::new(RecordingStore::new());
        store.seed(PRICE_REPORTS_KEY, "{not json");
        let log = ReportLog::new(store, clock());
        assert!(log.is_empty());
    }

    #[test]
    fn test_unreadable_reports_are_kept() {
        let store = Arc::new(RecordingStore::new());
        let seeded = serde_json::json!([
            {"id": 1, "itemName": "Shako", "observedPrice": "400M", "source": "x",
             "timestamp": "2026-01-15T10:00:00.000Z"},
            {"id": 2, "itemName": null, "observedPrice": "1B", "source": "x",
             "timestamp": "2026-01-15T11:00:00.000Z"},
            {"id": 3, "itemName": "Shako", "observedPrice": "420M", "source": "x",
             "timestamp": "2026-01-15T12:00:00.000Z"}
        ]);
        store.seed(PRICE_REPORTS_KEY, &seeded.to_string());

        let log = ReportLog::new(store.clone(), clock());
        assert_eq!(log.len(), 2);
        assert_eq!(log.reports_for_item("shako").len(), 2);

        log.submit(report("Doombringer", "280M"));
        let raw = store.get(PRICE_REPORTS_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let written = json.as_array().unwrap();
        assert_eq!(written.len(), 4);
        assert_eq!(written[1], seeded[1]);
        assert_eq!(written[2]["observedPrice"], "420M");
        assert_eq!(written[3]["itemName"], "Doombringer");
    }

    #[test]
    fn test_clear() {
        let store = Arc::new(RecordingStore::new());
        let log = ReportLog::new(store.clone(), clock());
        log.submit(report("Shako", "400M"));
        log.clear();

        assert!(log.is_empty());
        assert_eq!(store.get(PRICE_REPORTS_KEY).unwrap(), None);
    }
}
