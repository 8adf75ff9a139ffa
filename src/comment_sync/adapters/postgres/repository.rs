//! `PostgreSQL` record store for comment-sync lookup.

use super::{
    models::{
        ActivityNoteRow, ExternalIssueRefRow, InstallationRow, row_to_activity_note,
        row_to_installation, row_to_issue_ref,
    },
    schema::{activity_notes, external_issue_refs, integration_installations},
};
use crate::comment_sync::{
    domain::{ActivityId, ActivityNote, ExternalIssueId, ExternalIssueRef, IntegrationInstallation},
    ports::{SyncRecordError, SyncRecordResult, SyncRecordStore},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by sync adapters.
pub type SyncPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed record store.
///
/// The pool decides which tenant partition serves lookups; callers never see
/// routing. The store never writes: every table is owned by the collaborator
/// that created its records.
#[derive(Debug, Clone)]
pub struct PostgresSyncRecordStore {
    pool: SyncPgPool,
}

impl PostgresSyncRecordStore {
    /// Creates a store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: SyncPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> SyncRecordResult<T>
    where
        F: FnOnce(&mut PgConnection) -> SyncRecordResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(SyncRecordError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(SyncRecordError::persistence)?
    }
}

#[async_trait]
impl SyncRecordStore for PostgresSyncRecordStore {
    async fn find_external_issue_ref(
        &self,
        id: ExternalIssueId,
    ) -> SyncRecordResult<Option<ExternalIssueRef>> {
        self.run_blocking(move |connection| {
            let row = external_issue_refs::table
                .filter(external_issue_refs::id.eq(id.into_inner()))
                .select(ExternalIssueRefRow::as_select())
                .first::<ExternalIssueRefRow>(connection)
                .optional()
                .map_err(SyncRecordError::persistence)?;
            row.map(row_to_issue_ref).transpose()
        })
        .await
    }

    async fn find_activity_note(&self, id: ActivityId) -> SyncRecordResult<Option<ActivityNote>> {
        self.run_blocking(move |connection| {
            let row = activity_notes::table
                .filter(activity_notes::id.eq(id.into_inner()))
                .select(ActivityNoteRow::as_select())
                .first::<ActivityNoteRow>(connection)
                .optional()
                .map_err(SyncRecordError::persistence)?;
            row.map(row_to_activity_note).transpose()
        })
        .await
    }

    async fn find_installation_for(
        &self,
        issue_ref: &ExternalIssueRef,
    ) -> SyncRecordResult<Option<IntegrationInstallation>> {
        let installation_id = issue_ref.installation_id();
        self.run_blocking(move |connection| {
            let row = integration_installations::table
                .filter(integration_installations::id.eq(installation_id.into_inner()))
                .select(InstallationRow::as_select())
                .first::<InstallationRow>(connection)
                .optional()
                .map_err(SyncRecordError::persistence)?;
            row.map(row_to_installation).transpose()
        })
        .await
    }
}
