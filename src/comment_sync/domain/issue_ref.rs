//! External issue reference value objects.

use super::{CommentSyncDomainError, ExternalIssueId, InstallationId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated issue key in the provider's own format.
///
/// The format is provider-defined (`"PROJ-42"`, `"owner/repo#17"`, ...);
/// the only invariant enforced here is that the key is non-empty after
/// trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalIssueKey(String);

impl ExternalIssueKey {
    /// Creates a validated issue key.
    ///
    /// # Errors
    ///
    /// Returns [`CommentSyncDomainError::EmptyIssueKey`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CommentSyncDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(CommentSyncDomainError::EmptyIssueKey);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ExternalIssueKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ExternalIssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record linking an internal group to a tracked issue in an external
/// system.
///
/// References are immutable once created: the task looks them up and reads
/// them, never mutates them. A reference always names exactly one owning
/// installation, but the installation record is resolved independently and
/// may be gone by the time the reference is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIssueRef {
    id: ExternalIssueId,
    issue_key: ExternalIssueKey,
    installation_id: InstallationId,
}

impl ExternalIssueRef {
    /// Creates an issue reference from validated components.
    #[must_use]
    pub const fn new(
        id: ExternalIssueId,
        issue_key: ExternalIssueKey,
        installation_id: InstallationId,
    ) -> Self {
        Self {
            id,
            issue_key,
            installation_id,
        }
    }

    /// Returns the internal record identifier.
    #[must_use]
    pub const fn id(&self) -> ExternalIssueId {
        self.id
    }

    /// Returns the provider-format issue key.
    #[must_use]
    pub const fn issue_key(&self) -> &ExternalIssueKey {
        &self.issue_key
    }

    /// Returns the identifier of the owning installation.
    #[must_use]
    pub const fn installation_id(&self) -> InstallationId {
        self.installation_id
    }
}

impl fmt::Display for ExternalIssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.issue_key, self.id)
    }
}
