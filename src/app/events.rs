//! Outbound application events.
//!
//! The [`ThermostatService`](super::service::ThermostatService) emits
//! these through the [`TelemetrySink`](super::ports::TelemetrySink) port.
//! Adapters on the other side decide what to do with them — log them,
//! insert rows into a time-series database, push to a dashboard, etc.
//! A sink failure must never affect decisioning, so the port is
//! fire-and-forget.

use crate::hvac::Selection;
use crate::status::{EquipmentPins, UsableEquipment};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermostatEvent {
    /// A sensor reading was recorded.
    SensorUpdated {
        timestamp: u64,
        name: String,
        temperature: f64,
        humidity: f64,
    },

    /// Per-tick sample of the control signal.
    AveragesSampled {
        timestamp: u64,
        average_temp: f64,
        target_temp: i32,
    },

    /// Per-tick record of the commanded relays and capability flags.
    EquipmentApplied {
        timestamp: u64,
        pins: EquipmentPins,
        usable: UsableEquipment,
    },

    /// The arbiter switched equipment.
    EquipmentChanged { from: Selection, to: Selection },

    /// Manual override was engaged or released.
    OverrideChanged { active: bool },
}
