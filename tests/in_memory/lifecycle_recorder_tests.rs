//! Integration tests for lifecycle recorder adapters.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use syncline::lifecycle::{
    adapters::{RecordingLifecycleRecorder, TelemetryLifecycleRecorder},
    domain::LifecycleOutcome,
    services::EventLifecycle,
};

#[rstest]
fn recording_sink_preserves_emission_order() {
    let recorder = Arc::new(RecordingLifecycleRecorder::new());
    let clock = Arc::new(DefaultClock);

    EventLifecycle::start("order.first", recorder.clone(), clock.clone()).record_success();
    EventLifecycle::start("order.second", recorder.clone(), clock.clone()).record_halt();

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events.first().map(|event| (event.operation().to_owned(), event.outcome())),
        Some(("order.first".to_owned(), LifecycleOutcome::Success))
    );
    assert_eq!(
        events.get(1).map(|event| (event.operation().to_owned(), event.outcome())),
        Some(("order.second".to_owned(), LifecycleOutcome::Halted))
    );
}

#[rstest]
fn telemetry_sink_accepts_every_outcome() {
    // Without an installed metrics recorder the counter macro is a no-op;
    // the test pins the adapter's contract of never failing the caller.
    let recorder = Arc::new(TelemetryLifecycleRecorder::new());
    let clock = Arc::new(DefaultClock);

    EventLifecycle::start("telemetry.success", recorder.clone(), clock.clone()).record_success();
    EventLifecycle::start("telemetry.halt", recorder.clone(), clock.clone()).record_halt();
    let failure = std::io::Error::other("provider unreachable");
    EventLifecycle::start("telemetry.failure", recorder, clock)
        .record_failure("transport", &failure);
}
