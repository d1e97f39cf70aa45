use contact_book::error::{StorageError, StorageResult};
use contact_book::models::ContactRecord;
use contact_book::repositories::ContactStore;
use contact_book::ContactCollection;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps the last saved snapshot in memory, can be seeded with records, can
/// be told to fail saves, and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose `load` returns `records`.
    pub fn with_records(records: Vec<ContactRecord>) -> Self {
        let store = Self::new();
        *store.records.lock().unwrap() = records;
        store
    }

    /// Make every subsequent save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// The records written by the most recent successful save.
    pub fn saved_records(&self) -> Vec<ContactRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockContactStore {
    fn load(&self) -> ContactCollection {
        self.track_call("load");
        ContactCollection::import_all(self.records.lock().unwrap().clone())
    }

    fn save(&self, collection: &ContactCollection) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "simulated disk failure",
            )));
        }

        *self.records.lock().unwrap() = collection.export_all();
        Ok(())
    }
}
