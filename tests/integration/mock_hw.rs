//! Mock adapters for integration tests.
//!
//! Records every actuator call, emitted event, and snapshot save so tests
//! can assert on the full history without touching GPIO or the
//! filesystem.

use std::cell::{Cell, RefCell};

use homestat::app::events::ThermostatEvent;
use homestat::app::ports::{
    ActuatorError, ActuatorPort, SnapshotError, SnapshotStore, TelemetrySink,
};
use homestat::hvac::Selection;
use homestat::status::{EquipmentPins, ThermostatStatus};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum RelayCall {
    TurnOn(Selection),
    SetPins(EquipmentPins),
    AllOff,
}

// ── MockRelayBoard ────────────────────────────────────────────

#[derive(Default)]
pub struct MockRelayBoard {
    pub calls: Vec<RelayCall>,
    /// When set, every call fails with `GpioWriteFailed`.
    pub failing: bool,
}

#[allow(dead_code)]
impl MockRelayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            failing: true,
        }
    }

    pub fn last_call(&self) -> Option<&RelayCall> {
        self.calls.last()
    }

    fn record(&mut self, call: RelayCall) -> Result<(), ActuatorError> {
        self.calls.push(call);
        if self.failing {
            Err(ActuatorError::GpioWriteFailed)
        } else {
            Ok(())
        }
    }
}

impl ActuatorPort for MockRelayBoard {
    fn turn_on(&mut self, selection: Selection) -> Result<(), ActuatorError> {
        self.record(RelayCall::TurnOn(selection))
    }

    fn set_pins(&mut self, pins: &EquipmentPins) -> Result<(), ActuatorError> {
        self.record(RelayCall::SetPins(*pins))
    }

    fn all_off(&mut self) -> Result<(), ActuatorError> {
        self.record(RelayCall::AllOff)
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<ThermostatEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equipment_changes(&self) -> Vec<(Selection, Selection)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ThermostatEvent::EquipmentChanged { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl TelemetrySink for RecordingSink {
    fn emit(&mut self, event: &ThermostatEvent) {
        self.events.push(event.clone());
    }
}

// ── MemoryStore ───────────────────────────────────────────────

/// In-memory snapshot store with failure injection.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: RefCell<Option<ThermostatStatus>>,
    pub fail_saves: Cell<bool>,
    save_count: Cell<u32>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preloaded(status: ThermostatStatus) -> Self {
        let store = Self::default();
        *store.snapshot.borrow_mut() = Some(status);
        store
    }

    pub fn save_count(&self) -> u32 {
        self.save_count.get()
    }

    pub fn last_saved(&self) -> Option<ThermostatStatus> {
        self.snapshot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<ThermostatStatus, SnapshotError> {
        self.snapshot
            .borrow()
            .clone()
            .ok_or(SnapshotError::NotFound)
    }

    fn save(&self, status: &ThermostatStatus) -> Result<(), SnapshotError> {
        if self.fail_saves.get() {
            return Err(SnapshotError::IoError);
        }
        *self.snapshot.borrow_mut() = Some(status.clone());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
