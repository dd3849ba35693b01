//! Log-based telemetry sink adapter.
//!
//! Implements [`TelemetrySink`] by writing structured events to the
//! process logger.  A time-series database adapter (the deployment sink)
//! would implement the same trait; either way a sink failure is contained
//! here and never reaches the control loop.

use log::{debug, info};

use crate::app::events::ThermostatEvent;
use crate::app::ports::TelemetrySink;

/// Adapter that logs every [`ThermostatEvent`].
#[derive(Default)]
pub struct LogTelemetry;

impl LogTelemetry {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for LogTelemetry {
    fn emit(&mut self, event: &ThermostatEvent) {
        match event {
            ThermostatEvent::SensorUpdated {
                name,
                temperature,
                humidity,
                ..
            } => {
                info!("SENSOR | {name}: {temperature:.1}°F {humidity:.0}%RH");
            }
            ThermostatEvent::AveragesSampled {
                average_temp,
                target_temp,
                ..
            } => {
                debug!("TICK | avg={average_temp:.1}°F target={target_temp}°F");
            }
            ThermostatEvent::EquipmentApplied { pins, usable, .. } => {
                debug!("TICK | pins={pins:?} usable={usable:?}");
            }
            ThermostatEvent::EquipmentChanged { from, to } => {
                info!("EQUIP | {from:?} -> {to:?}");
            }
            ThermostatEvent::OverrideChanged { active } => {
                info!(
                    "OVERRIDE | {}",
                    if *active { "engaged" } else { "released" }
                );
            }
        }
    }
}
