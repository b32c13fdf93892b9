use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::errors::StorageError;
use crate::domain::ports::{Clock, KeyValueStore, PositionSource};

pub(crate) type EntryTable = Arc<Mutex<HashMap<String, String>>>;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_millis(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub set: bool,
    pub remove: bool,
}

// Fake key-value store whose entries stay inspectable after being moved into a use case.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    entries: EntryTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_entry(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut guard = self.entries.lock().expect("entries mutex poisoned");
        guard.insert(key.into(), value.into());
    }

    pub(crate) fn get_test_entry(&self, key: &str) -> Option<String> {
        let guard = self.entries.lock().expect("entries mutex poisoned");
        guard.get(key).cloned()
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failures.get {
            return Err(StorageError::Poisoned);
        }

        let guard = self.entries.lock().expect("entries mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failures.set {
            return Err(StorageError::Poisoned);
        }

        let mut guard = self.entries.lock().expect("entries mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        if self.failures.remove {
            return Err(StorageError::Poisoned);
        }

        let mut guard = self.entries.lock().expect("entries mutex poisoned");
        Ok(guard.remove(key).is_some())
    }
}

// Replays a fixed list of percentages so spawn positions are predictable.
pub(crate) struct ScriptedPositions {
    values: Vec<f32>,
    next: usize,
}

impl ScriptedPositions {
    pub(crate) fn new(values: Vec<f32>) -> Self {
        Self { values, next: 0 }
    }
}

impl PositionSource for ScriptedPositions {
    fn next_percent(&mut self, min: f32, max: f32) -> f32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(min, max)
    }
}
