// In-memory state store adapter for hosts and tests
use crate::application::capabilities::StateStore;
use serde_json::Value;
use std::sync::RwLock;

/// Holds the application snapshot in memory.
///
/// The surrounding application owns mutation through `replace_snapshot`;
/// the dashboard only ever reads through the `StateStore` capability.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    snapshot: RwLock<Option<Value>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Value) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }

    pub fn replace_snapshot(&self, snapshot: Value) {
        if let Ok(mut guard) = self.snapshot.write() {
            *guard = Some(snapshot);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.snapshot.write() {
            *guard = None;
        }
    }
}

impl StateStore for InMemoryStateStore {
    fn snapshot(&self) -> Option<Value> {
        match self.snapshot.read() {
            Ok(guard) => guard.clone(),
            // A poisoned lock degrades to "no snapshot"
            Err(_) => None,
        }
    }
}
