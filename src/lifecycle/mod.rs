//! Lifecycle observability for attempted sync operations.
//!
//! Once a sync task's gate has passed, the operation is "attempted" and must
//! leave exactly one structured outcome event behind — success or failure —
//! for service-level-objective measurement. This module owns the outcome
//! taxonomy, the event record, the recorder port, and the
//! [`services::EventLifecycle`] envelope whose consuming terminal methods
//! make a second terminal event unrepresentable. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The envelope service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
