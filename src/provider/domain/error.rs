//! Error types for provider domain validation.

use thiserror::Error;

/// Errors returned while constructing provider domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderDomainError {
    /// The provider value is unsupported.
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),
}
