//! Step definitions for comment-sync behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
