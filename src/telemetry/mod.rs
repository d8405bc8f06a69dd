//! Telemetry sink
//!
//! Best-effort append-only event log: one JSON line per submitted event.
//! Telemetry must never block or fail the client-visible operation that
//! triggered it, so write failures degrade to a soft error status.

pub mod sink;
pub mod types;

pub use sink::{AppendOutcome, TelemetrySink};
pub use types::{validate_telemetry, TelemetryEvent};
