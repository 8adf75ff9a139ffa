//! In-memory adapters for comment-sync tests.

mod records;

pub use records::InMemorySyncRecordStore;
