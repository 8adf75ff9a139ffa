//! Port contracts for comment synchronization.
//!
//! Ports define infrastructure-agnostic interfaces used by sync services.

pub mod records;

pub use records::{SyncRecordError, SyncRecordResult, SyncRecordStore};
