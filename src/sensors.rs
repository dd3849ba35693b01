//! Sensor aggregation table.
//!
//! The thermostat blends every live sensor into a single control signal:
//! the arithmetic mean of their temperatures.  A sensor that stops
//! reporting is evicted after a staleness timeout so a dead battery in one
//! room cannot permanently skew — or freeze — the average.
//!
//! Readings arrive keyed by sensor name.  Duplicate names overwrite
//! unconditionally (last write wins); there is no out-of-order protection
//! because the sensors report wall-clock-fresh values on each push.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::status::SensorReading;

/// Map of sensor name → last reading, with staleness eviction and
/// mean-temperature aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorTable {
    readings: HashMap<String, SensorReading>,
}

impl SensorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `name`.
    ///
    /// Empty names are rejected (logged, not an error) — everything else
    /// is accepted as-is, newest timestamp wins.
    pub fn record(&mut self, name: &str, temperature: f64, humidity: f64, now: u64) {
        if name.is_empty() {
            warn!("ignoring sensor reading with empty name");
            return;
        }
        self.readings.insert(
            name.to_owned(),
            SensorReading {
                temperature,
                humidity,
                observed_at: now,
            },
        );
    }

    /// Remove every entry whose `observed_at + stale_timeout <= now`.
    ///
    /// Must run before aggregation on every tick.
    pub fn evict_stale(&mut self, now: u64, stale_timeout_secs: u64) {
        self.readings.retain(|name, reading| {
            // Saturating: an absurd far-future timestamp from a restored
            // snapshot is retained until overwritten, never a panic.
            let live = reading.observed_at.saturating_add(stale_timeout_secs) > now;
            if !live {
                debug!(
                    "evicting stale sensor '{}' (last seen {}s ago)",
                    name,
                    now.saturating_sub(reading.observed_at)
                );
            }
            live
        });
    }

    /// Arithmetic mean of all currently retained temperatures.
    ///
    /// Returns `None` when the table is empty — the caller decides the
    /// fallback (the service retains the previous average).
    pub fn average_temperature(&self) -> Option<f64> {
        if self.readings.is_empty() {
            return None;
        }
        let sum: f64 = self.readings.values().map(|r| r.temperature).sum();
        Some(sum / self.readings.len() as f64)
    }

    /// Last reading for a named sensor, if it is live.
    pub fn get(&self, name: &str) -> Option<&SensorReading> {
        self.readings.get(name)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
