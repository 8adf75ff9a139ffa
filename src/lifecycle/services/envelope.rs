//! Observability envelope for attempted sync operations.

use crate::lifecycle::{
    domain::{FailureDetail, LifecycleEvent},
    ports::LifecycleRecorder,
};
use mockable::Clock;
use std::sync::Arc;

/// Envelope entered once an operation's gate has passed.
///
/// Construction marks the operation logically started; the started state is
/// internal and emits no event of its own. The terminal methods consume the
/// envelope, so at most one terminal event can ever be recorded per
/// invocation — recording success and then failure does not compile. The
/// complementary exactly-one guarantee belongs to the caller: every control
/// path after the gate must end in a terminal call.
///
/// The envelope observes failures but never swallows them: recording a
/// failure captures a classification and message for the event while the
/// source error keeps propagating to the caller unchanged.
#[must_use = "an envelope that is dropped without a terminal call records nothing"]
pub struct EventLifecycle<L, C>
where
    L: LifecycleRecorder,
    C: Clock + Send + Sync,
{
    operation: String,
    recorder: Arc<L>,
    clock: Arc<C>,
}

impl<L, C> EventLifecycle<L, C>
where
    L: LifecycleRecorder,
    C: Clock + Send + Sync,
{
    /// Enters the envelope for one attempted operation.
    pub fn start(operation: impl Into<String>, recorder: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            operation: operation.into(),
            recorder,
            clock,
        }
    }

    /// Records a SUCCESS outcome and closes the envelope.
    pub fn record_success(self) {
        let event = LifecycleEvent::success(self.operation, self.clock.utc());
        self.recorder.record_event(&event);
    }

    /// Records a FAILURE outcome carrying the error's classification and
    /// message, then closes the envelope.
    ///
    /// The caller re-raises the source error afterwards; this method only
    /// observes it.
    pub fn record_failure(self, classification: &str, error: &(dyn std::error::Error + 'static)) {
        let detail = FailureDetail::from_error(classification, error);
        let event = LifecycleEvent::failure(self.operation, detail, self.clock.utc());
        self.recorder.record_event(&event);
    }

    /// Records a HALTED outcome for an expected non-error stop and closes
    /// the envelope.
    pub fn record_halt(self) {
        let event = LifecycleEvent::halted(self.operation, self.clock.utc());
        self.recorder.record_event(&event);
    }
}
