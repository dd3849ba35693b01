//! Inbound commands to the thermostat service.
//!
//! These represent actions requested by the outside world (HTTP handlers,
//! CLI, test harness) that the
//! [`ThermostatService`](super::service::ThermostatService) interprets and
//! acts upon.

use crate::status::EquipmentPins;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermostatCommand {
    /// A sensor reported in.  Inserts or overwrites its table entry.
    RecordSensorReading {
        name: String,
        temperature: f64,
        humidity: f64,
    },

    /// Set the temperature the thermostat aims for (whole °F).
    SetTargetTemp(i32),

    /// Set which subsystems the arbiter may select.
    SetUsable {
        ac: bool,
        cooler: bool,
        furnace: bool,
    },

    /// Suspend (or resume) automatic decisioning and drive the relays
    /// directly.  Dangerous against a real HVAC plant — the pins are
    /// applied exactly as given.
    SetManualOverride {
        active: bool,
        pins: EquipmentPins,
    },
}
