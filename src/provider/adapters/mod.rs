//! Adapter implementations of provider ports.
//!
//! Only the recording test double lives here; real provider clients are
//! supplied by provider-specific crates.

mod recording;

pub use recording::{RecordedCommentUpdate, RecordingProviderClient};
