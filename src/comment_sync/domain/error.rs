//! Error types for comment-sync domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing comment-sync domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentSyncDomainError {
    /// The external issue key is empty after trimming.
    #[error("external issue key must not be empty")]
    EmptyIssueKey,
}

/// Error returned while parsing activity kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity kind: {0}")]
pub struct ParseActivityKindError(pub String);
