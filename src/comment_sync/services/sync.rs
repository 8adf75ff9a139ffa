//! Service layer for the guarded comment-sync task.

use crate::comment_sync::{
    domain::{ActivityId, ActorId, ExternalIssueId},
    ports::{SyncRecordError, SyncRecordStore},
};
use crate::lifecycle::{ports::LifecycleRecorder, services::EventLifecycle};
use crate::provider::{ports::IssueProviderError, services::ProviderRegistry};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Operation label attached to every comment-sync lifecycle event.
const UPDATE_COMMENT_OPERATION: &str = "comment_sync.update_comment";

/// Service-level errors for comment synchronization.
///
/// Resolution misses and a disabled gate are not errors: those paths return
/// `Ok(())`. The variants here cover the two failure classes that do reach
/// the caller.
#[derive(Debug, Error)]
pub enum CommentSyncServiceError {
    /// Record lookup infrastructure failed before the gate.
    #[error(transparent)]
    Records(#[from] SyncRecordError),
    /// The provider update failed after the gate passed; a FAILURE event has
    /// been recorded before this error is returned.
    #[error(transparent)]
    Provider(#[from] IssueProviderError),
}

/// Result type for comment-sync service operations.
pub type CommentSyncResult<T> = Result<T, CommentSyncServiceError>;

/// Guarded outbound comment synchronization task.
///
/// One instance serves many concurrent invocations: the service holds no
/// per-invocation state, each call resolves its own records, and blocking
/// behaviour is bounded by the invoking worker runtime rather than here.
#[derive(Clone)]
pub struct CommentSyncService<S, L, C>
where
    S: SyncRecordStore,
    L: LifecycleRecorder,
    C: Clock + Send + Sync,
{
    records: Arc<S>,
    providers: Arc<ProviderRegistry>,
    lifecycle: Arc<L>,
    clock: Arc<C>,
}

impl<S, L, C> CommentSyncService<S, L, C>
where
    S: SyncRecordStore,
    L: LifecycleRecorder,
    C: Clock + Send + Sync,
{
    /// Creates a new comment-sync service.
    #[must_use]
    pub const fn new(
        records: Arc<S>,
        providers: Arc<ProviderRegistry>,
        lifecycle: Arc<L>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            records,
            providers,
            lifecycle,
            clock,
        }
    }

    /// Propagates an activity note's text to the matching comment on the
    /// external tracker.
    ///
    /// A missing issue reference, installation, or activity note is an
    /// expected no-op — the record disappeared between enqueue and
    /// execution — as is an installation whose `sync_comments` flag is
    /// disabled: the task returns `Ok(())` without invoking the provider and
    /// without recording a lifecycle event. Once all three records resolve
    /// and the gate passes, exactly one terminal lifecycle event is
    /// recorded: SUCCESS when the provider call completes, FAILURE
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CommentSyncServiceError::Records`] when record lookup
    /// infrastructure fails, or [`CommentSyncServiceError::Provider`] when
    /// the provider update fails after the gate passed — in the latter case
    /// the original provider error is preserved and a FAILURE event has
    /// already been recorded.
    pub async fn sync_comment(
        &self,
        issue_ref_id: ExternalIssueId,
        actor_id: ActorId,
        activity_id: ActivityId,
    ) -> CommentSyncResult<()> {
        let Some(issue_ref) = self.records.find_external_issue_ref(issue_ref_id).await? else {
            tracing::debug!(
                %issue_ref_id,
                "skipping comment sync: external issue reference not found"
            );
            return Ok(());
        };
        let Some(installation) = self.records.find_installation_for(&issue_ref).await? else {
            tracing::debug!(
                %issue_ref_id,
                installation_id = %issue_ref.installation_id(),
                "skipping comment sync: installation not found"
            );
            return Ok(());
        };
        let Some(note) = self.records.find_activity_note(activity_id).await? else {
            tracing::debug!(%activity_id, "skipping comment sync: activity note not found");
            return Ok(());
        };

        if !installation.config().sync_comments() {
            tracing::debug!(
                installation_id = %installation.id(),
                provider = %installation.provider(),
                "skipping comment sync: sync_comments disabled"
            );
            return Ok(());
        }

        // Gate passed: from here on exactly one terminal event is recorded.
        let lifecycle = EventLifecycle::start(
            UPDATE_COMMENT_OPERATION,
            self.lifecycle.clone(),
            self.clock.clone(),
        );

        let provider = installation.provider();
        let Some(client) = self.providers.client_for(provider) else {
            let error = IssueProviderError::NotConfigured(provider);
            lifecycle.record_failure(error.classification(), &error);
            return Err(error.into());
        };

        match client
            .update_comment(issue_ref.issue_key(), actor_id, &note)
            .await
        {
            Ok(()) => {
                lifecycle.record_success();
                Ok(())
            }
            Err(error) => {
                lifecycle.record_failure(error.classification(), &error);
                Err(error.into())
            }
        }
    }
}
