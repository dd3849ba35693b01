//! Serialized thermostat state.
//!
//! [`ThermostatStatus`] is the single struct the service mutates each tick
//! and persists through the [`SnapshotStore`](crate::app::ports::SnapshotStore)
//! port.  Its JSON shape is the on-disk snapshot format, so field renames
//! here are a compatibility break with existing `status.json` files.

use serde::{Deserialize, Serialize};

use crate::sensors::SensorTable;

// ---------------------------------------------------------------------------
// Relay state
// ---------------------------------------------------------------------------

/// Commanded state of the four HVAC relays.  `true` = energised.
///
/// Only the four canonical combinations ever come out of the arbiter
/// (see [`Selection`](crate::hvac::Selection)); arbitrary combinations can
/// only be produced by an explicit manual override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquipmentPins {
    pub pump: bool,
    pub fan_on: bool,
    pub ac: bool,
    pub furnace: bool,
}

impl EquipmentPins {
    /// Everything de-energised — the safe default.
    pub const fn all_off() -> Self {
        Self {
            pump: false,
            fan_on: false,
            ac: false,
            furnace: false,
        }
    }

    /// True if any relay is energised.
    pub fn any_on(&self) -> bool {
        self.pump || self.fan_on || self.ac || self.furnace
    }
}

// ---------------------------------------------------------------------------
// Capability flags
// ---------------------------------------------------------------------------

/// Operator-controlled permissions gating which equipment the arbiter may
/// select.  Mutated only by explicit command, read every decision cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsableEquipment {
    pub ac: bool,
    pub cooler: bool,
    pub furnace: bool,
}

impl Default for UsableEquipment {
    fn default() -> Self {
        Self {
            ac: true,
            cooler: true,
            furnace: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor reading
// ---------------------------------------------------------------------------

/// Last reported reading from one named sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Temperature in °F.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Unix timestamp (seconds) when the reading was recorded.
    pub observed_at: u64,
}

// ---------------------------------------------------------------------------
// Full status snapshot
// ---------------------------------------------------------------------------

/// The entire persisted state of the thermostat.
///
/// Invariant: `average_temp` is the arithmetic mean of non-stale sensor
/// temperatures at the time it was last computed.  When no sensors are
/// live the previous value is retained — it is never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatStatus {
    pub pins: EquipmentPins,
    pub usable: UsableEquipment,
    /// Setpoint in whole °F.
    pub target_temp: i32,
    pub average_temp: f64,
    /// When set, automatic decisioning is suspended and the pins are
    /// driven solely by the last explicit override command.
    pub manual_override: bool,
    pub sensors: SensorTable,
}

impl ThermostatStatus {
    /// Fresh status with the given setpoint: nothing active, everything
    /// usable, override off, no sensors.
    pub fn with_target(target_temp: i32) -> Self {
        Self {
            pins: EquipmentPins::all_off(),
            usable: UsableEquipment::default(),
            target_temp,
            average_temp: f64::from(target_temp),
            manual_override: false,
            sensors: SensorTable::default(),
        }
    }
}
