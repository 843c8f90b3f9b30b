use leptos::prelude::*;

use crate::models::search::SearchRecord;
use crate::search_state::persist::PersistedSearchState;

/// Single source of truth for the current [`SearchRecord`] during a page
/// session.
///
/// The live copy is a reactive signal owned exclusively by this store;
/// local storage is a durable mirror written on every mutation. The store
/// is constructed explicitly and handed to the page tree through context,
/// so tests can inject an isolated instance with their own storage and
/// clock.
#[derive(Clone)]
pub struct SearchStore {
    record: RwSignal<Option<SearchRecord>>,
    persisted: PersistedSearchState,
}

impl SearchStore {
    pub fn new(persisted: PersistedSearchState) -> Self {
        Self {
            record: RwSignal::new(None),
            persisted,
        }
    }

    /// Current record, or `None`. Reactive: views reading this re-render
    /// on every write.
    pub fn read(&self) -> Option<SearchRecord> {
        self.record.get()
    }

    /// Non-tracking read for use inside event handlers.
    pub fn read_untracked(&self) -> Option<SearchRecord> {
        self.record.get_untracked()
    }

    /// Replace the in-memory record and mirror it to persistent storage
    /// (deleting the mirror on `None`). Last write wins.
    pub fn write(&self, record: Option<SearchRecord>) {
        self.persisted.save(record.as_ref());
        self.record.set(record);
    }

    /// Equivalent to `write(None)`.
    pub fn clear(&self) {
        self.write(None);
    }

    /// `true` iff a record is present and at least one search field is
    /// populated.
    pub fn is_active(&self) -> bool {
        self.record
            .with(|r| r.as_ref().is_some_and(SearchRecord::is_active))
    }

    /// Replace only the in-memory copy, leaving the mirror untouched.
    /// Used when hydrating from storage, where re-writing what was just
    /// read would be pointless.
    pub(crate) fn set_in_memory(&self, record: Option<SearchRecord>) {
        self.record.set(record);
    }

    /// Load the persisted mirror (expiry and corruption checked) into
    /// memory.
    pub fn hydrate_from_persisted(&self) {
        self.set_in_memory(self.persisted.load());
    }

    /// Current time as seen by the store's clock, for stamping new
    /// records.
    pub fn now_millis(&self) -> i64 {
        self.persisted.now_millis()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::search_state::persist::{
        MemoryStorage, MockClock, SearchStateStorage, STORAGE_KEY,
    };

    fn store() -> (SearchStore, Arc<MemoryStorage>) {
        // Under the `sandboxed-arenas` feature (active in the `ssr` build),
        // signal creation requires a current reactive `Owner`. Establish one
        // and keep it alive for the duration of the test process so the
        // store's `RwSignal` is not disposed.
        let owner = Owner::new();
        owner.set();
        std::mem::forget(owner);

        let storage = Arc::new(MemoryStorage::new());
        let mut clock = MockClock::new();
        clock.expect_now_millis().return_const(10_000_i64);
        let persisted = PersistedSearchState::new(storage.clone(), Arc::new(clock));
        (SearchStore::new(persisted), storage)
    }

    #[test]
    fn test_write_mirrors_to_storage() {
        let (store, storage) = store();

        let mut record = SearchRecord::new(10_000);
        record.keyword = Some("engineer".into());
        store.write(Some(record.clone()));

        assert_eq!(store.read_untracked(), Some(record));
        assert!(storage.get(STORAGE_KEY).is_some());
    }

    #[test]
    fn test_clear_deletes_the_mirror() {
        let (store, storage) = store();

        let mut record = SearchRecord::new(10_000);
        record.location = Some("Berlin".into());
        store.write(Some(record));
        store.clear();

        assert_eq!(store.read_untracked(), None);
        assert_eq!(storage.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_is_active_requires_a_populated_field() {
        let (store, _) = store();
        assert!(!store.is_active());

        // A record with only a candidate label is not an active search.
        let mut record = SearchRecord::new(10_000);
        record.candidate_label = Some("Jane".into());
        store.write(Some(record.clone()));
        assert!(!store.is_active());

        record.file_reference = Some("dev-1".into());
        store.write(Some(record));
        assert!(store.is_active());
    }
}
