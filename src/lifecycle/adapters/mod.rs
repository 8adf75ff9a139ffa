//! Adapter implementations of the lifecycle recorder port.

mod memory;
mod telemetry;

pub use memory::RecordingLifecycleRecorder;
pub use telemetry::TelemetryLifecycleRecorder;
