//! Daemon configuration parameters.
//!
//! All tunable parameters for the thermostat, passed explicitly into the
//! service and adapters at construction — there is no process-global
//! state.  Values can be overridden via an optional JSON config file next
//! to the binary.

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::pins::RelayPins;

/// Core daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermostatConfig {
    /// BCM pin map for the relay board.
    pub relay_pins: RelayPins,

    // --- Arbiter ---
    /// Minimum dwell between equipment changes (seconds).  Protects the
    /// compressor and furnace from short-cycling.
    pub cycle_time_secs: u64,

    // --- Sensors ---
    /// A sensor silent for this long is evicted from aggregation (seconds).
    pub sensor_stale_timeout_secs: u64,

    // --- Timing ---
    /// Control tick interval (seconds).
    pub tick_interval_secs: u64,
    /// Average-temperature history sampling interval (seconds).
    pub history_interval_secs: u64,
    /// Maximum retained history samples.
    pub history_max_entries: usize,

    // --- Defaults ---
    /// Setpoint used when no snapshot exists (°F).
    pub default_target_temp: i32,
    /// Where the status snapshot is written.
    pub snapshot_path: String,
}

impl Default for ThermostatConfig {
    fn default() -> Self {
        Self {
            relay_pins: RelayPins::default(),

            cycle_time_secs: 2 * 60,

            sensor_stale_timeout_secs: 60,

            tick_interval_secs: 10,
            history_interval_secs: 2 * 60,
            history_max_entries: 500,

            default_target_temp: 72,
            snapshot_path: "status.json".to_owned(),
        }
    }
}

impl ThermostatConfig {
    /// Read the config file at `path`, falling back to defaults when it
    /// is missing or malformed.  Never fatal — the daemon always starts.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("config file {} is malformed ({e}); using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                info!("no config file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
