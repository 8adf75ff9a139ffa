//! Client port for provider-side comment updates.

use crate::comment_sync::domain::{ActivityNote, ActorId, ExternalIssueKey};
use crate::provider::domain::ProviderKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for provider client operations.
pub type IssueProviderResult<T> = Result<T, IssueProviderError>;

/// Update capability implemented once per provider.
///
/// The caller treats any error as an opaque failure; the variants exist so
/// the lifecycle envelope can attach a coarse classification to the failure
/// it records. Client implementations are supplied by provider-specific
/// crates and selected through
/// [`ProviderRegistry`](crate::provider::services::ProviderRegistry).
#[async_trait]
pub trait IssueProviderClient: Send + Sync {
    /// Updates the tracker comment that mirrors the given activity note.
    ///
    /// # Errors
    ///
    /// Returns an [`IssueProviderError`] on any authentication, transport,
    /// or provider-side problem. A completed call is the success signal;
    /// there is no other return channel.
    async fn update_comment(
        &self,
        issue_key: &ExternalIssueKey,
        actor_id: ActorId,
        note: &ActivityNote,
    ) -> IssueProviderResult<()>;
}

/// Errors returned by provider client implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueProviderError {
    /// Client authentication with the provider failed.
    #[error("provider authentication failed: {0}")]
    Authentication(String),

    /// The provider rejected the update; the provider's message is carried
    /// verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Transport-level failure reaching the provider.
    #[error("provider transport error: {0}")]
    Transport(String),

    /// No client is registered for the provider.
    #[error("no client registered for provider {0}")]
    NotConfigured(ProviderKind),

    /// Generic runtime failure inside a client implementation.
    #[error("provider client runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueProviderError {
    /// Wraps a runtime error from a client implementation.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }

    /// Returns the coarse classification label recorded with failure
    /// outcomes.
    #[must_use]
    pub const fn classification(&self) -> &'static str {
        match self {
            Self::Authentication(_) => "authentication",
            Self::Rejected(_) => "rejected",
            Self::Transport(_) => "transport",
            Self::NotConfigured(_) => "not_configured",
            Self::Runtime(_) => "runtime",
        }
    }
}
