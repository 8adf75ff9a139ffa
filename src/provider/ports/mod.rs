//! Port contracts for provider-specific issue-tracker clients.
//!
//! Ports define infrastructure-agnostic interfaces used by sync services.

pub mod client;

pub use client::{IssueProviderClient, IssueProviderError, IssueProviderResult};
