//! Interface-dispatch table mapping provider kinds to client implementations.

use crate::provider::{domain::ProviderKind, ports::IssueProviderClient};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of provider clients keyed by provider kind.
///
/// Plain interface dispatch: callers look up the shared client for an
/// installation's provider and invoke the
/// [`IssueProviderClient`] contract through it. Registration happens at
/// composition time; the registry is immutable afterwards and cheap to clone.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    clients: HashMap<ProviderKind, Arc<dyn IssueProviderClient>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a client for a provider, replacing any previous entry.
    #[must_use]
    pub fn with_client(mut self, kind: ProviderKind, client: Arc<dyn IssueProviderClient>) -> Self {
        self.clients.insert(kind, client);
        self
    }

    /// Returns the client registered for the provider, if any.
    #[must_use]
    pub fn client_for(&self, kind: ProviderKind) -> Option<Arc<dyn IssueProviderClient>> {
        self.clients.get(&kind).cloned()
    }

    /// Returns the provider kinds with a registered client.
    #[must_use]
    pub fn registered_kinds(&self) -> Vec<ProviderKind> {
        self.clients.keys().copied().collect()
    }
}
