//! Provider identity and the polymorphic issue-tracker update capability.
//!
//! External trackers are reached through the [`ports::IssueProviderClient`]
//! capability. Each provider supplies its own client implementation; this
//! module owns only the contract, the provider identity type, and the
//! dispatch table that selects a client by provider kind. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Dispatch services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
