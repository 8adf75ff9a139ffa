//! Syncline: guarded outbound comment synchronization for external issue
//! trackers.
//!
//! The crate implements a single worker-invoked task: given an external
//! issue reference, an acting user, and an activity note, it conditionally
//! propagates the note's text to the matching comment on the external
//! tracker and records a structured lifecycle outcome for service-level
//! observability.
//!
//! # Architecture
//!
//! Syncline follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, telemetry)
//!
//! # Modules
//!
//! - [`comment_sync`]: Record resolution, the sync gate, and the task itself
//! - [`provider`]: Provider identity and the polymorphic update capability
//! - [`lifecycle`]: The outcome taxonomy and the observability envelope

pub mod comment_sync;
pub mod lifecycle;
pub mod provider;
