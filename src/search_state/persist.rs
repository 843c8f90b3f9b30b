use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::search::SearchRecord;

/// The single local storage key holding the persisted search record.
pub const STORAGE_KEY: &str = "stellenwerk.search-state";

/// Time source, abstracted so expiration tests can control the clock.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current unix time in milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// String key/value storage the search record is mirrored to.
///
/// Abstracted as a trait so tests and server-side rendering can use an
/// in-memory backend instead of the browser's localStorage.
pub trait SearchStateStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and SSR passes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchStateStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// localStorage backend. Holds no browser handle itself; every call looks
/// the storage up fresh, so the type stays Send + Sync.
///
/// Quota or access failures are logged and treated as "no persisted
/// state" — they never reach the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SearchStateStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage write failed for {key}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::local_storage() else {
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("localStorage delete failed for {key}");
        }
    }
}

/// Durable mirror of the current [`SearchRecord`].
///
/// Enforces the 5-hour TTL and deletes unparseable payloads on read, so
/// callers only ever see a valid, fresh record or `None`.
#[derive(Clone)]
pub struct PersistedSearchState {
    storage: Arc<dyn SearchStateStorage>,
    clock: Arc<dyn Clock>,
}

impl PersistedSearchState {
    pub fn new(storage: Arc<dyn SearchStateStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Read the persisted record, purging it if expired or corrupted.
    pub fn load(&self) -> Option<SearchRecord> {
        let raw = self.storage.get(STORAGE_KEY)?;

        let record: SearchRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("discarding corrupted search state: {err}");
                self.storage.remove(STORAGE_KEY);
                return None;
            }
        };

        if record.is_expired(self.clock.now_millis()) {
            tracing::debug!("discarding expired search state");
            self.storage.remove(STORAGE_KEY);
            return None;
        }

        Some(record)
    }

    /// Mirror the record to storage, or delete the mirror on `None`.
    pub fn save(&self, record: Option<&SearchRecord>) {
        match record {
            Some(record) => match serde_json::to_string(record) {
                Ok(json) => self.storage.set(STORAGE_KEY, &json),
                Err(err) => tracing::warn!("failed to serialize search state: {err}"),
            },
            None => self.storage.remove(STORAGE_KEY),
        }
    }

    /// Current time as seen by this store's clock.
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::search::SEARCH_STATE_TTL_MS;

    fn fixed_clock(now: i64) -> Arc<MockClock> {
        let mut clock = MockClock::new();
        clock.expect_now_millis().return_const(now);
        Arc::new(clock)
    }

    fn active_record(created_at: i64) -> SearchRecord {
        let mut record = SearchRecord::new(created_at);
        record.keyword = Some("engineer".into());
        record
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let storage = Arc::new(MemoryStorage::new());
        let state = PersistedSearchState::new(storage, fixed_clock(10_000));

        let record = active_record(5_000);
        state.save(Some(&record));

        assert_eq!(state.load(), Some(record));
    }

    #[test]
    fn test_expired_record_is_purged_on_load() {
        let now = 1_700_000_000_000;
        let storage = Arc::new(MemoryStorage::new());
        let state = PersistedSearchState::new(storage.clone(), fixed_clock(now));

        // One millisecond past the TTL.
        let record = active_record(now - SEARCH_STATE_TTL_MS - 1);
        state.save(Some(&record));

        assert_eq!(state.load(), None);
        assert_eq!(storage.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_record_at_exact_ttl_still_loads() {
        let now = 1_700_000_000_000;
        let storage = Arc::new(MemoryStorage::new());
        let state = PersistedSearchState::new(storage, fixed_clock(now));

        let record = active_record(now - SEARCH_STATE_TTL_MS);
        state.save(Some(&record));

        assert_eq!(state.load(), Some(record));
    }

    #[test]
    fn test_corrupted_payload_is_purged_and_returns_none() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(STORAGE_KEY, "{not valid json");

        let state = PersistedSearchState::new(storage.clone(), fixed_clock(0));

        assert_eq!(state.load(), None);
        assert_eq!(storage.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_save_none_deletes_the_mirror() {
        let storage = Arc::new(MemoryStorage::new());
        let state = PersistedSearchState::new(storage.clone(), fixed_clock(10_000));

        state.save(Some(&active_record(5_000)));
        assert!(storage.get(STORAGE_KEY).is_some());

        state.save(None);
        assert_eq!(storage.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_missing_key_loads_as_none() {
        let state =
            PersistedSearchState::new(Arc::new(MemoryStorage::new()), fixed_clock(0));
        assert_eq!(state.load(), None);
    }
}
