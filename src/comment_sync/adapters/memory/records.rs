//! In-memory record store for comment-sync tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::comment_sync::{
    domain::{
        ActivityId, ActivityNote, ExternalIssueId, ExternalIssueRef, InstallationId,
        IntegrationInstallation,
    },
    ports::{SyncRecordError, SyncRecordResult, SyncRecordStore},
};

/// Thread-safe in-memory record store.
///
/// Each record class is held independently, so an installation can be
/// removed while its issue references survive — mirroring the bulk-delete
/// window the sync task must tolerate.
#[derive(Debug, Clone, Default)]
pub struct InMemorySyncRecordStore {
    state: Arc<RwLock<InMemoryRecordState>>,
}

#[derive(Debug, Default)]
struct InMemoryRecordState {
    issue_refs: HashMap<ExternalIssueId, ExternalIssueRef>,
    activities: HashMap<ActivityId, ActivityNote>,
    installations: HashMap<InstallationId, IntegrationInstallation>,
}

impl InMemorySyncRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an external issue reference.
    ///
    /// # Errors
    ///
    /// Returns [`SyncRecordError::Persistence`] when interior state is
    /// poisoned.
    pub fn insert_issue_ref(&self, issue_ref: ExternalIssueRef) -> SyncRecordResult<()> {
        let mut state = write_state(&self.state)?;
        state.issue_refs.insert(issue_ref.id(), issue_ref);
        Ok(())
    }

    /// Stores an activity note.
    ///
    /// # Errors
    ///
    /// Returns [`SyncRecordError::Persistence`] when interior state is
    /// poisoned.
    pub fn insert_activity(&self, note: ActivityNote) -> SyncRecordResult<()> {
        let mut state = write_state(&self.state)?;
        state.activities.insert(note.id(), note);
        Ok(())
    }

    /// Stores an integration installation.
    ///
    /// # Errors
    ///
    /// Returns [`SyncRecordError::Persistence`] when interior state is
    /// poisoned.
    pub fn insert_installation(&self, installation: IntegrationInstallation) -> SyncRecordResult<()> {
        let mut state = write_state(&self.state)?;
        state.installations.insert(installation.id(), installation);
        Ok(())
    }

    /// Removes an installation, leaving its issue references in place.
    ///
    /// # Errors
    ///
    /// Returns [`SyncRecordError::Persistence`] when interior state is
    /// poisoned.
    pub fn remove_installation(&self, id: InstallationId) -> SyncRecordResult<()> {
        let mut state = write_state(&self.state)?;
        state.installations.remove(&id);
        Ok(())
    }
}

fn write_state(
    state: &Arc<RwLock<InMemoryRecordState>>,
) -> SyncRecordResult<std::sync::RwLockWriteGuard<'_, InMemoryRecordState>> {
    state
        .write()
        .map_err(|err| SyncRecordError::persistence(std::io::Error::other(err.to_string())))
}

fn read_state(
    state: &Arc<RwLock<InMemoryRecordState>>,
) -> SyncRecordResult<std::sync::RwLockReadGuard<'_, InMemoryRecordState>> {
    state
        .read()
        .map_err(|err| SyncRecordError::persistence(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl SyncRecordStore for InMemorySyncRecordStore {
    async fn find_external_issue_ref(
        &self,
        id: ExternalIssueId,
    ) -> SyncRecordResult<Option<ExternalIssueRef>> {
        let state = read_state(&self.state)?;
        Ok(state.issue_refs.get(&id).cloned())
    }

    async fn find_activity_note(&self, id: ActivityId) -> SyncRecordResult<Option<ActivityNote>> {
        let state = read_state(&self.state)?;
        Ok(state.activities.get(&id).cloned())
    }

    async fn find_installation_for(
        &self,
        issue_ref: &ExternalIssueRef,
    ) -> SyncRecordResult<Option<IntegrationInstallation>> {
        let state = read_state(&self.state)?;
        Ok(state.installations.get(&issue_ref.installation_id()).cloned())
    }
}
