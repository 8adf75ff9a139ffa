//! Structured lifecycle event records.

use super::LifecycleOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification and message captured from a failure.
///
/// The source error itself keeps propagating to the caller; the detail is a
/// snapshot taken for the event so an unclassified or provider-opaque error
/// still produces a measurable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    classification: String,
    message: String,
}

impl FailureDetail {
    /// Captures classification and message from a source error.
    #[must_use]
    pub fn from_error(
        classification: impl Into<String>,
        error: &(dyn std::error::Error + 'static),
    ) -> Self {
        Self {
            classification: classification.into(),
            message: error.to_string(),
        }
    }

    /// Returns the coarse classification label.
    #[must_use]
    pub fn classification(&self) -> &str {
        &self.classification
    }

    /// Returns the captured error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One structured outcome record for an attempted operation.
///
/// Events are emitted to a [`LifecycleRecorder`](crate::lifecycle::ports::LifecycleRecorder),
/// never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    operation: String,
    outcome: LifecycleOutcome,
    failure: Option<FailureDetail>,
    recorded_at: DateTime<Utc>,
}

impl LifecycleEvent {
    /// Creates a success event.
    #[must_use]
    pub fn success(operation: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            operation: operation.into(),
            outcome: LifecycleOutcome::Success,
            failure: None,
            recorded_at,
        }
    }

    /// Creates a failure event carrying the captured detail.
    #[must_use]
    pub fn failure(
        operation: impl Into<String>,
        detail: FailureDetail,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            operation: operation.into(),
            outcome: LifecycleOutcome::Failure,
            failure: Some(detail),
            recorded_at,
        }
    }

    /// Creates a halted event for an expected non-error stop.
    #[must_use]
    pub fn halted(operation: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            operation: operation.into(),
            outcome: LifecycleOutcome::Halted,
            failure: None,
            recorded_at,
        }
    }

    /// Returns the operation label.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Returns the recorded outcome.
    #[must_use]
    pub const fn outcome(&self) -> LifecycleOutcome {
        self.outcome
    }

    /// Returns the failure detail for failure outcomes.
    #[must_use]
    pub const fn failure(&self) -> Option<&FailureDetail> {
        self.failure.as_ref()
    }

    /// Returns when the event was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
