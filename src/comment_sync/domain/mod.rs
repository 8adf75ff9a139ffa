//! Domain model for comment synchronization.
//!
//! The comment-sync domain models the three records the task reads — the
//! external issue reference, the activity note, and the integration
//! installation with its per-direction sync flags — while keeping all
//! infrastructure concerns outside of the domain boundary. Every record is
//! created and owned by external collaborators; this module only reads them.

mod activity;
mod error;
mod ids;
mod installation;
mod issue_ref;

pub use activity::{ActivityKind, ActivityNote};
pub use error::{CommentSyncDomainError, ParseActivityKindError};
pub use ids::{ActivityId, ActorId, ExternalIssueId, InstallationId};
pub use installation::{
    InstallationConfig, IntegrationInstallation, SYNC_ASSIGNEE_INBOUND, SYNC_ASSIGNEE_OUTBOUND,
    SYNC_COMMENTS, SYNC_STATUS_INBOUND, SYNC_STATUS_OUTBOUND,
};
pub use issue_ref::{ExternalIssueKey, ExternalIssueRef};
