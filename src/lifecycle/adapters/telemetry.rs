//! Production lifecycle recorder emitting structured logs and counters.

use crate::lifecycle::{
    domain::{LifecycleEvent, LifecycleOutcome},
    ports::LifecycleRecorder,
};

/// Name of the outcome counter incremented per recorded event.
const OUTCOME_COUNTER: &str = "sync_operation_outcomes_total";

/// Recorder that forwards events to `tracing` and the `metrics` facade.
///
/// Failures are logged at warn level with their classification so an
/// operator sees the provider message without needing the caller's error
/// chain; every event increments the outcome counter labelled by operation
/// and outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryLifecycleRecorder;

impl TelemetryLifecycleRecorder {
    /// Creates the recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LifecycleRecorder for TelemetryLifecycleRecorder {
    fn record_event(&self, event: &LifecycleEvent) {
        match event.outcome() {
            LifecycleOutcome::Failure => {
                let classification = event
                    .failure()
                    .map_or("unclassified", |detail| detail.classification());
                let provider_message = event.failure().map_or("", |detail| detail.message());
                tracing::warn!(
                    operation = event.operation(),
                    outcome = event.outcome().as_str(),
                    classification,
                    provider_message,
                    "sync operation failed"
                );
            }
            LifecycleOutcome::Started
            | LifecycleOutcome::Success
            | LifecycleOutcome::Halted => {
                tracing::info!(
                    operation = event.operation(),
                    outcome = event.outcome().as_str(),
                    "sync operation outcome recorded"
                );
            }
        }

        metrics::counter!(
            OUTCOME_COUNTER,
            "operation" => event.operation().to_owned(),
            "outcome" => event.outcome().as_str(),
        )
        .increment(1);
    }
}
