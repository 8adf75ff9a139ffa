//! `PostgreSQL` adapters for comment-sync record lookup.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresSyncRecordStore, SyncPgPool};
