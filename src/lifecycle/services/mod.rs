//! Envelope service guaranteeing one terminal event per attempted operation.

mod envelope;

pub use envelope::EventLifecycle;
