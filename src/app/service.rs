//! Thermostat service — the hexagonal core.
//!
//! [`ThermostatService`] owns the status, the sensor table, and the
//! equipment arbiter.  It exposes a clean, hardware-agnostic API; all I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!  commands ──▶ ┌──────────────────────────┐ ──▶ TelemetrySink
//!               │    ThermostatService      │
//! ActuatorPort ◀──│  sensors · arbiter       │──▶ SnapshotStore
//!               └──────────────────────────┘
//! ```
//!
//! One control tick flows strictly one direction: sensor readings →
//! aggregate temperature → arbiter decision → actuator command →
//! persisted status.  The service is synchronous and single-owner; the
//! binary wraps it in a mutex so the tick loop and request handlers
//! serialize against the same state.

use log::{info, warn};

use crate::config::ThermostatConfig;
use crate::history::TemperatureHistory;
use crate::hvac::{HvacArbiter, Selection};
use crate::status::ThermostatStatus;

use super::commands::ThermostatCommand;
use super::events::ThermostatEvent;
use super::ports::{ActuatorPort, SnapshotStore, TelemetrySink};

// ───────────────────────────────────────────────────────────────
// ThermostatService
// ───────────────────────────────────────────────────────────────

/// Orchestrates sensor aggregation, arbitration, actuation, and
/// persistence — once per control tick.
pub struct ThermostatService {
    status: ThermostatStatus,
    arbiter: HvacArbiter,
    history: TemperatureHistory,
    config: ThermostatConfig,
    tick_count: u64,
    last_history_at: Option<u64>,
}

impl ThermostatService {
    /// Construct with a fresh default status (nothing active, everything
    /// usable, override off).
    pub fn new(config: ThermostatConfig) -> Self {
        let status = ThermostatStatus::with_target(config.default_target_temp);
        Self::with_status(config, status)
    }

    /// Construct from a persisted snapshot, substituting defaults when it
    /// is absent or malformed.  Never fatal.
    pub fn from_store(config: ThermostatConfig, store: &impl SnapshotStore) -> Self {
        let status = match store.load() {
            Ok(status) => {
                info!(
                    "restored snapshot: target {}°F, override={}, {} sensor(s)",
                    status.target_temp,
                    status.manual_override,
                    status.sensors.len()
                );
                status
            }
            Err(e) => {
                info!("no usable snapshot ({e}); starting from defaults");
                ThermostatStatus::with_target(config.default_target_temp)
            }
        };
        Self::with_status(config, status)
    }

    fn with_status(config: ThermostatConfig, status: ThermostatStatus) -> Self {
        Self {
            arbiter: HvacArbiter::new(config.cycle_time_secs),
            history: TemperatureHistory::new(config.history_max_entries),
            status,
            config,
            tick_count: 0,
            last_history_at: None,
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: evict stale sensors → recompute the
    /// aggregate → arbitrate (unless overridden) → actuate → persist.
    ///
    /// Actuator and persistence failures are logged and non-fatal; the
    /// next tick retries both naturally.
    pub fn tick(
        &mut self,
        now: u64,
        hw: &mut impl ActuatorPort,
        sink: &mut impl TelemetrySink,
        store: &impl SnapshotStore,
    ) {
        self.tick_count += 1;

        // 1. Staleness eviction, then aggregation.  With no live sensors
        //    the previous average is retained — a defined fallback, not
        //    an error.
        self.status
            .sensors
            .evict_stale(now, self.config.sensor_stale_timeout_secs);
        if let Some(avg) = self.status.sensors.average_temperature() {
            self.status.average_temp = avg;
        }

        // 2. Arbitrate and actuate.  Under manual override the arbiter is
        //    skipped entirely and the held pins are re-issued (idempotent);
        //    the dwell timer is deliberately left alone so automatic
        //    decisions resume with the original window when override clears.
        if self.status.manual_override {
            if let Err(e) = hw.set_pins(&self.status.pins) {
                warn!("actuator write failed under override: {e}");
            }
        } else {
            let current = Selection::from_pins(&self.status.pins);
            let next = self.arbiter.decide(
                current,
                self.status.average_temp,
                self.status.target_temp,
                &self.status.usable,
                now,
            );
            if next != current {
                sink.emit(&ThermostatEvent::EquipmentChanged {
                    from: current,
                    to: next,
                });
            }
            self.status.pins = next.pins();
            let issued = match next {
                Selection::Off => hw.all_off(),
                _ => hw.turn_on(next),
            };
            if let Err(e) = issued {
                // Equipment may physically stay in its prior state; the
                // next tick re-issues the same command.
                warn!("actuator write failed: {e}");
            }
        }

        // 3. Telemetry (fire-and-forget).
        sink.emit(&ThermostatEvent::AveragesSampled {
            timestamp: now,
            average_temp: self.status.average_temp,
            target_temp: self.status.target_temp,
        });
        sink.emit(&ThermostatEvent::EquipmentApplied {
            timestamp: now,
            pins: self.status.pins,
            usable: self.status.usable,
        });

        // 4. Persist the snapshot.
        if let Err(e) = store.save(&self.status) {
            warn!("snapshot save failed: {e}");
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command (from the API layer or a test
    /// harness).  Override changes are persisted immediately; everything
    /// else reaches disk on the next tick.
    pub fn handle_command(
        &mut self,
        cmd: ThermostatCommand,
        now: u64,
        hw: &mut impl ActuatorPort,
        sink: &mut impl TelemetrySink,
        store: &impl SnapshotStore,
    ) {
        match cmd {
            ThermostatCommand::RecordSensorReading {
                name,
                temperature,
                humidity,
            } => {
                self.status.sensors.record(&name, temperature, humidity, now);
                sink.emit(&ThermostatEvent::SensorUpdated {
                    timestamp: now,
                    name,
                    temperature,
                    humidity,
                });
            }
            ThermostatCommand::SetTargetTemp(temp) => {
                info!("target temp set to {temp}°F");
                self.status.target_temp = temp;
            }
            ThermostatCommand::SetUsable {
                ac,
                cooler,
                furnace,
            } => {
                info!("usable equipment set: ac={ac} cooler={cooler} furnace={furnace}");
                self.status.usable.ac = ac;
                self.status.usable.cooler = cooler;
                self.status.usable.furnace = furnace;
            }
            ThermostatCommand::SetManualOverride { active, pins } => {
                info!("manual override {}; pins {:?}", if active { "engaged" } else { "released" }, pins);
                self.status.manual_override = active;
                self.status.pins = pins;
                if let Err(e) = hw.set_pins(&pins) {
                    warn!("actuator write failed applying override: {e}");
                }
                sink.emit(&ThermostatEvent::OverrideChanged { active });
                if let Err(e) = store.save(&self.status) {
                    warn!("snapshot save failed after override: {e}");
                }
            }
        }
    }

    // ── History ───────────────────────────────────────────────

    /// Append the current average to the history buffer when the
    /// configured interval has elapsed.  Returns `true` if a sample was
    /// taken.
    pub fn update_history_if_due(&mut self, now: u64) -> bool {
        let due = match self.last_history_at {
            None => true,
            Some(at) => now.saturating_sub(at) >= self.config.history_interval_secs,
        };
        if due {
            self.history.push(now, self.status.average_temp);
            self.last_history_at = Some(now);
        }
        due
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> &ThermostatStatus {
        &self.status
    }

    pub fn history(&self) -> &[crate::history::HistoryEntry] {
        self.history.entries()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// When the arbiter last changed equipment, if ever.
    pub fn last_transition_at(&self) -> Option<u64> {
        self.arbiter.last_transition_at()
    }
}
