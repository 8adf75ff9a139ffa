//! Guarded outbound comment synchronization.
//!
//! This module implements the comment-sync task: resolving an external issue
//! reference, its integration installation, and an activity note, checking
//! the installation's `sync_comments` gate, and delegating the update to the
//! provider client selected for the installation. Resolution misses and a
//! disabled gate are expected no-ops; once the gate passes, exactly one
//! lifecycle outcome event is recorded per invocation. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
