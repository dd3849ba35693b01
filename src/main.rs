//! Homestat — main entry point.
//!
//! Hexagonal architecture with a fixed-interval control tick.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  RelayBoard        JsonSnapshotStore    LogTelemetry     │
//! │  (ActuatorPort)    (SnapshotStore)      (TelemetrySink)  │
//! │                                                          │
//! │  ────────────── Port trait boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        ThermostatService (pure logic)          │      │
//! │  │  SensorTable · HvacArbiter · History           │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The service lives behind an `Arc<Mutex<_>>`: the tick loop below and
//! the HTTP API layer (which receives a clone of the handle) serialize
//! every read and write of thermostat state through it.

#![deny(unused_must_use)]

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use log::info;

use homestat::adapters::snapshot::JsonSnapshotStore;
use homestat::adapters::telemetry::LogTelemetry;
use homestat::app::service::ThermostatService;
use homestat::config::ThermostatConfig;

#[cfg(feature = "rpi")]
use homestat::adapters::relays::RelayBoard;
#[cfg(not(feature = "rpi"))]
use homestat::adapters::relays::SimulatedRelayBoard;

const CONFIG_PATH: &str = "homestat.json";

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ThermostatConfig::load_or_default(Path::new(CONFIG_PATH));
    info!(
        "homestat starting: tick every {}s, cycle time {}s, stale timeout {}s",
        config.tick_interval_secs, config.cycle_time_secs, config.sensor_stale_timeout_secs
    );

    let store = JsonSnapshotStore::new(&config.snapshot_path);
    let mut sink = LogTelemetry::new();

    #[cfg(feature = "rpi")]
    let mut hw = RelayBoard::new(&config.relay_pins)?;
    #[cfg(not(feature = "rpi"))]
    let mut hw = {
        info!("built without the `rpi` feature; using simulated relays");
        SimulatedRelayBoard::new()
    };

    let tick_interval = Duration::from_secs(config.tick_interval_secs);
    let service = ThermostatService::from_store(config, &store);
    let handle = Arc::new(Mutex::new(service));
    // The HTTP API layer clones `handle` here and drives
    // `handle_command` from its request context.

    loop {
        let now = unix_now();
        {
            let mut svc = handle
                .lock()
                .map_err(|_| anyhow!("thermostat state mutex poisoned"))?;
            svc.tick(now, &mut hw, &mut sink, &store);
            svc.update_history_if_due(now);
        }
        thread::sleep(tick_interval);
    }
}
