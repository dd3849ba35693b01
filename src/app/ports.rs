//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ThermostatService (domain)
//! ```
//!
//! Driven adapters (relay board, snapshot file, telemetry sink) implement
//! these traits.  The
//! [`ThermostatService`](super::service::ThermostatService) consumes them
//! via generics, so the domain core never touches GPIO, the filesystem,
//! or a database directly.
//!
//! All port errors are typed and non-fatal to the control loop: the
//! service logs them and retries on the next tick.

use core::fmt;

use crate::hvac::Selection;
use crate::status::{EquipmentPins, ThermostatStatus};

// ───────────────────────────────────────────────────────────────
// Actuator port (domain → relays)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to energise equipment.
/// The core never touches raw hardware pins.
pub trait ActuatorPort {
    /// Energise the relay combination for `selection`.
    fn turn_on(&mut self, selection: Selection) -> Result<(), ActuatorError>;

    /// Drive an arbitrary relay combination (manual override path).
    fn set_pins(&mut self, pins: &EquipmentPins) -> Result<(), ActuatorError>;

    /// De-energise everything.
    fn all_off(&mut self) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Snapshot store (domain ↔ persisted status)
// ───────────────────────────────────────────────────────────────

/// Loads and persists the [`ThermostatStatus`] snapshot.
///
/// On startup a missing or malformed snapshot is substituted with
/// defaults (logged, never fatal); a failed save is retried on the next
/// tick.
pub trait SnapshotStore {
    fn load(&self) -> Result<ThermostatStatus, SnapshotError>;

    fn save(&self, status: &ThermostatStatus) -> Result<(), SnapshotError>;
}

// ───────────────────────────────────────────────────────────────
// Telemetry sink (domain → history database / log)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured
/// [`ThermostatEvent`](super::events::ThermostatEvent)s through this port.
///
/// Deliberately infallible: adapters swallow and log their own failures
/// so a down database can never stall a control tick.
pub trait TelemetrySink {
    fn emit(&mut self, event: &super::events::ThermostatEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ActuatorPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// A GPIO write failed.
    GpioWriteFailed,
    /// The relay board is not available (e.g. GPIO device missing).
    Unavailable,
}

/// Errors from [`SnapshotStore`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    /// No snapshot exists yet (first boot).
    NotFound,
    /// The stored snapshot failed deserialization.
    Malformed,
    /// Generic I/O error from the storage backend.
    IoError,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::Unavailable => write!(f, "relay board unavailable"),
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "snapshot not found"),
            Self::Malformed => write!(f, "snapshot malformed"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
