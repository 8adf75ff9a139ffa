//! Record lookup port for the comment-sync task.

use crate::comment_sync::domain::{
    ActivityId, ActivityNote, ExternalIssueId, ExternalIssueRef, IntegrationInstallation,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record lookup operations.
pub type SyncRecordResult<T> = Result<T, SyncRecordError>;

/// Read-only lookup contract for the records the sync task resolves.
///
/// Implementations own tenant routing: which partition serves a lookup is
/// decided behind this port and is invisible to callers. All three finders
/// return `None` for a missing record; an `Err` is reserved for
/// infrastructure failures.
#[async_trait]
pub trait SyncRecordStore: Send + Sync {
    /// Finds an external issue reference by identifier.
    ///
    /// Returns `None` when the reference does not exist.
    async fn find_external_issue_ref(
        &self,
        id: ExternalIssueId,
    ) -> SyncRecordResult<Option<ExternalIssueRef>>;

    /// Finds an activity note by identifier.
    ///
    /// Returns `None` when the note does not exist.
    async fn find_activity_note(&self, id: ActivityId) -> SyncRecordResult<Option<ActivityNote>>;

    /// Finds the installation owning the given issue reference.
    ///
    /// Resolution is independent of the reference lookup: implementations
    /// must not assume referential integrity holds at read time, because the
    /// installation may have been bulk-deleted while the reference record
    /// survives. Returns `None` when the installation does not exist.
    async fn find_installation_for(
        &self,
        issue_ref: &ExternalIssueRef,
    ) -> SyncRecordResult<Option<IntegrationInstallation>>;
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum SyncRecordError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SyncRecordError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
