//! Recording provider client for comment sync tests.

use crate::comment_sync::domain::{ActivityNote, ActorId, ExternalIssueKey};
use crate::provider::ports::{IssueProviderClient, IssueProviderError, IssueProviderResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// One captured comment update call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommentUpdate {
    /// Issue key the update targeted.
    pub issue_key: ExternalIssueKey,
    /// Acting user threaded through the call.
    pub actor_id: ActorId,
    /// Activity note handed to the client.
    pub note: ActivityNote,
}

/// Thread-safe provider client that records calls instead of reaching a
/// tracker.
///
/// Tests inject a failure with [`RecordingProviderClient::fail_with`]; the
/// call is still captured before the injected error is returned, so call
/// counting works on both paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingProviderClient {
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    calls: Vec<RecordedCommentUpdate>,
    failure: Option<IssueProviderError>,
}

impl RecordingProviderClient {
    /// Creates a client with no recorded calls and no injected failure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent update fail with the given error.
    pub fn fail_with(&self, error: IssueProviderError) {
        if let Ok(mut state) = self.state.write() {
            state.failure = Some(error);
        }
    }

    /// Returns a snapshot of the recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCommentUpdate> {
        self.state
            .read()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl IssueProviderClient for RecordingProviderClient {
    async fn update_comment(
        &self,
        issue_key: &ExternalIssueKey,
        actor_id: ActorId,
        note: &ActivityNote,
    ) -> IssueProviderResult<()> {
        let mut state = self.state.write().map_err(|err| {
            IssueProviderError::runtime(std::io::Error::other(err.to_string()))
        })?;
        state.calls.push(RecordedCommentUpdate {
            issue_key: issue_key.clone(),
            actor_id,
            note: note.clone(),
        });
        state.failure.clone().map_or(Ok(()), Err)
    }
}
