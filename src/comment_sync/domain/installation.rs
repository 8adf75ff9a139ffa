//! Integration installation records and their sync-direction flags.

use super::InstallationId;
use crate::provider::domain::ProviderKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flag name enabling outbound comment synchronization.
pub const SYNC_COMMENTS: &str = "sync_comments";

/// Flag name enabling outbound status synchronization.
pub const SYNC_STATUS_OUTBOUND: &str = "sync_status_outbound";

/// Flag name enabling inbound status synchronization.
pub const SYNC_STATUS_INBOUND: &str = "sync_status_inbound";

/// Flag name enabling outbound assignee synchronization.
pub const SYNC_ASSIGNEE_OUTBOUND: &str = "sync_assignee_outbound";

/// Flag name enabling inbound assignee synchronization.
pub const SYNC_ASSIGNEE_INBOUND: &str = "sync_assignee_inbound";

/// Per-installation configuration mapping.
///
/// The mapping is stored as free-form JSON by the configuration surface that
/// owns it; each sync direction reads exactly one flag. A flag that is
/// absent, or present with any value other than JSON `true`, reads as
/// disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstallationConfig(Map<String, Value>);

impl InstallationConfig {
    /// Creates an empty configuration with every direction disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from an existing JSON mapping.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Sets a boolean flag by name.
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.0.insert(name.into(), Value::Bool(enabled));
        self
    }

    fn flag(&self, name: &str) -> bool {
        self.0.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Returns whether outbound comment synchronization is enabled.
    #[must_use]
    pub fn sync_comments(&self) -> bool {
        self.flag(SYNC_COMMENTS)
    }

    /// Returns whether outbound status synchronization is enabled.
    #[must_use]
    pub fn sync_status_outbound(&self) -> bool {
        self.flag(SYNC_STATUS_OUTBOUND)
    }

    /// Returns whether inbound status synchronization is enabled.
    #[must_use]
    pub fn sync_status_inbound(&self) -> bool {
        self.flag(SYNC_STATUS_INBOUND)
    }

    /// Returns whether outbound assignee synchronization is enabled.
    #[must_use]
    pub fn sync_assignee_outbound(&self) -> bool {
        self.flag(SYNC_ASSIGNEE_OUTBOUND)
    }

    /// Returns whether inbound assignee synchronization is enabled.
    #[must_use]
    pub fn sync_assignee_inbound(&self) -> bool {
        self.flag(SYNC_ASSIGNEE_INBOUND)
    }
}

/// Configured connection between an organization and an external provider.
///
/// Installations are created and mutated by the configuration surface;
/// comment sync only reads the provider identity and the
/// [`SYNC_COMMENTS`] flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationInstallation {
    id: InstallationId,
    provider: ProviderKind,
    config: InstallationConfig,
}

impl IntegrationInstallation {
    /// Creates an installation record from validated components.
    #[must_use]
    pub const fn new(
        id: InstallationId,
        provider: ProviderKind,
        config: InstallationConfig,
    ) -> Self {
        Self {
            id,
            provider,
            config,
        }
    }

    /// Returns the installation identifier.
    #[must_use]
    pub const fn id(&self) -> InstallationId {
        self.id
    }

    /// Returns the provider this installation connects to.
    #[must_use]
    pub const fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// Returns the per-direction sync configuration.
    #[must_use]
    pub const fn config(&self) -> &InstallationConfig {
        &self.config
    }
}
