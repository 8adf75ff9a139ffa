//! Provider identity for configured integrations.

use super::ProviderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported external issue-tracker providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// GitHub issues.
    #[serde(rename = "github")]
    GitHub,
    /// GitLab issues.
    #[serde(rename = "gitlab")]
    GitLab,
    /// Jira issues.
    #[serde(rename = "jira")]
    Jira,
}

impl ProviderKind {
    /// Returns the provider name in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Jira => "jira",
        }
    }
}

impl TryFrom<&str> for ProviderKind {
    type Error = ProviderDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "github" => Ok(Self::GitHub),
            "gitlab" => Ok(Self::GitLab),
            "jira" => Ok(Self::Jira),
            _ => Err(ProviderDomainError::UnsupportedProvider(value.to_owned())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
