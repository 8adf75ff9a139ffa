//! Application services for comment synchronization.

mod sync;

pub use sync::{CommentSyncResult, CommentSyncService, CommentSyncServiceError};
