//! Relay-board pin assignments for the thermostat main board.
//!
//! Single source of truth — the GPIO adapter receives this map through
//! [`ThermostatConfig`](crate::config::ThermostatConfig) rather than
//! hard-coding pin numbers.  Change a pin here (or in the config file)
//! and it propagates everywhere.
//!
//! All four relays are wired active-low: driving the BCM pin LOW
//! energises the relay coil.

use serde::{Deserialize, Serialize};

/// BCM pin numbers for the four HVAC relays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPins {
    /// Evaporative-cooler water pump relay.
    pub pump: u8,
    /// Low-speed cooler fan relay.
    pub fan_on: u8,
    /// Air-conditioner compressor relay.
    pub ac: u8,
    /// Furnace call-for-heat relay.
    pub furnace: u8,
}

impl Default for RelayPins {
    fn default() -> Self {
        // Matches the deployed relay-hat wiring.
        Self {
            pump: 5,
            fan_on: 6,
            ac: 12,
            furnace: 13,
        }
    }
}
