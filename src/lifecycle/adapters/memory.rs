//! In-memory lifecycle recorder for tests.

use crate::lifecycle::{domain::LifecycleEvent, ports::LifecycleRecorder};
use std::sync::{Arc, RwLock};

/// Thread-safe recorder that keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingLifecycleRecorder {
    events: Arc<RwLock<Vec<LifecycleEvent>>>,
}

impl RecordingLifecycleRecorder {
    /// Creates a recorder with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl LifecycleRecorder for RecordingLifecycleRecorder {
    fn record_event(&self, event: &LifecycleEvent) {
        if let Ok(mut events) = self.events.write() {
            events.push(event.clone());
        }
    }
}
