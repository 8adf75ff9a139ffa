//! Outcome taxonomy for attempted operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Outcome of one attempted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleOutcome {
    /// The operation has been entered but not yet resolved.
    ///
    /// Tracked inside the envelope; not emitted as its own event in the
    /// baseline flow.
    Started,
    /// The operation completed.
    Success,
    /// The operation failed; the event carries the failure classification.
    Failure,
    /// The operation stopped for an expected, non-error reason after being
    /// entered.
    Halted,
}

impl LifecycleOutcome {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Halted => "halted",
        }
    }

    /// Returns whether this outcome terminates an envelope.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failure | Self::Halted)
    }
}

impl TryFrom<&str> for LifecycleOutcome {
    type Error = ParseLifecycleOutcomeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "started" => Ok(Self::Started),
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            "halted" => Ok(Self::Halted),
            _ => Err(ParseLifecycleOutcomeError(value.to_owned())),
        }
    }
}

impl fmt::Display for LifecycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned while parsing lifecycle outcomes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lifecycle outcome: {0}")]
pub struct ParseLifecycleOutcomeError(pub String);
