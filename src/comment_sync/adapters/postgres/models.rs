//! Diesel row models and row-to-domain conversions for record lookup.

use super::schema::{activity_notes, external_issue_refs, integration_installations};
use crate::comment_sync::{
    domain::{
        ActivityId, ActivityKind, ActivityNote, ExternalIssueId, ExternalIssueKey,
        ExternalIssueRef, InstallationConfig, InstallationId, IntegrationInstallation,
    },
    ports::{SyncRecordError, SyncRecordResult},
};
use crate::provider::domain::ProviderKind;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for external issue references.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = external_issue_refs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExternalIssueRefRow {
    /// Internal reference identifier.
    pub id: uuid::Uuid,
    /// Issue key in the provider's own format.
    pub issue_key: String,
    /// Owning installation identifier.
    pub installation_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for activity notes.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activity_notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityNoteRow {
    /// Internal activity identifier.
    pub id: uuid::Uuid,
    /// Activity kind.
    pub kind: String,
    /// Free-text body.
    pub body: String,
    /// Optional provider-side comment identifier.
    pub external_comment_id: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for integration installations.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = integration_installations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InstallationRow {
    /// Installation identifier.
    pub id: uuid::Uuid,
    /// Provider name in canonical storage format.
    pub provider: String,
    /// Per-direction sync flag mapping.
    pub config: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Converts a persisted reference row into the domain value.
///
/// A row that fails key validation is reported as a persistence error: the
/// writer that owns the table enforces the invariant, so a violation means
/// the row is corrupt, not merely missing.
pub fn row_to_issue_ref(row: ExternalIssueRefRow) -> SyncRecordResult<ExternalIssueRef> {
    let ExternalIssueRefRow {
        id,
        issue_key,
        installation_id,
        created_at: _,
    } = row;
    let key = ExternalIssueKey::new(issue_key).map_err(SyncRecordError::persistence)?;
    Ok(ExternalIssueRef::new(
        ExternalIssueId::from_uuid(id),
        key,
        InstallationId::from_uuid(installation_id),
    ))
}

/// Converts a persisted activity row into the domain value.
pub fn row_to_activity_note(row: ActivityNoteRow) -> SyncRecordResult<ActivityNote> {
    let ActivityNoteRow {
        id,
        kind: persisted_kind,
        body,
        external_comment_id,
        created_at: _,
    } = row;
    let kind =
        ActivityKind::try_from(persisted_kind.as_str()).map_err(SyncRecordError::persistence)?;
    let mut note = ActivityNote::new(ActivityId::from_uuid(id), kind, body);
    if let Some(comment_id) = external_comment_id {
        note = note.with_external_comment_id(comment_id);
    }
    Ok(note)
}

/// Converts a persisted installation row into the domain value.
pub fn row_to_installation(row: InstallationRow) -> SyncRecordResult<IntegrationInstallation> {
    let InstallationRow {
        id,
        provider: persisted_provider,
        config,
        created_at: _,
    } = row;
    let provider =
        ProviderKind::try_from(persisted_provider.as_str()).map_err(SyncRecordError::persistence)?;
    let config_map =
        serde_json::from_value(config).map_err(SyncRecordError::persistence)?;
    Ok(IntegrationInstallation::new(
        InstallationId::from_uuid(id),
        provider,
        InstallationConfig::from_map(config_map),
    ))
}
