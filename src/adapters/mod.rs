//! Driven adapters — concrete implementations of the port traits.
//!
//! ```text
//!   RelayBoard / SimulatedRelayBoard ──▶ ActuatorPort
//!   JsonSnapshotStore                ──▶ SnapshotStore
//!   LogTelemetry                     ──▶ TelemetrySink
//! ```
//!
//! The real GPIO adapter is gated behind the `rpi` feature; host builds
//! (and every test) get the simulated relay board.

pub mod relays;
pub mod snapshot;
pub mod telemetry;
