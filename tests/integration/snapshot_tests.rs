//! Startup and restore behavior against the real on-disk snapshot store.
//!
//! Simulates daemon restarts: tick with one service instance, build a
//! fresh one from the same file, and check that state survives.  Also
//! covers first boot (no file) and a corrupted file.

use std::fs;

use crate::mock_hw::{MockRelayBoard, RecordingSink};

use homestat::adapters::snapshot::JsonSnapshotStore;
use homestat::app::commands::ThermostatCommand;
use homestat::app::service::ThermostatService;
use homestat::config::ThermostatConfig;
use homestat::status::EquipmentPins;

#[test]
fn first_boot_without_a_snapshot_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("status.json"));

    let svc = ThermostatService::from_store(ThermostatConfig::default(), &store);

    assert_eq!(svc.status().target_temp, 72);
    assert!(!svc.status().manual_override);
    assert!(!svc.status().pins.any_on());
}

#[test]
fn corrupted_snapshot_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    fs::write(&path, "}}}not even close").unwrap();
    let store = JsonSnapshotStore::new(path);

    let svc = ThermostatService::from_store(ThermostatConfig::default(), &store);

    assert_eq!(svc.status().target_temp, 72);
    assert!(!svc.status().manual_override);
}

#[test]
fn state_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    let mut hw = MockRelayBoard::new();
    let mut sink = RecordingSink::new();

    {
        let store = JsonSnapshotStore::new(&path);
        let mut svc = ThermostatService::from_store(ThermostatConfig::default(), &store);
        svc.handle_command(
            ThermostatCommand::SetTargetTemp(68),
            0,
            &mut hw,
            &mut sink,
            &store,
        );
        svc.handle_command(
            ThermostatCommand::RecordSensorReading {
                name: "kitchen".to_owned(),
                temperature: 75.0,
                humidity: 40.0,
            },
            0,
            &mut hw,
            &mut sink,
            &store,
        );
        svc.tick(0, &mut hw, &mut sink, &store);
        assert!(svc.status().pins.ac, "75 vs 68 target starts cooling");
    }

    // "Restart": new service, same file.
    let store = JsonSnapshotStore::new(&path);
    let svc = ThermostatService::from_store(ThermostatConfig::default(), &store);

    assert_eq!(svc.status().target_temp, 68);
    assert!(svc.status().pins.ac, "active equipment state restored");
    assert_eq!(svc.status().sensors.len(), 1);
}

#[test]
fn override_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    let mut hw = MockRelayBoard::new();
    let mut sink = RecordingSink::new();

    {
        let store = JsonSnapshotStore::new(&path);
        let mut svc = ThermostatService::from_store(ThermostatConfig::default(), &store);
        // Override persists without any tick having run.
        svc.handle_command(
            ThermostatCommand::SetManualOverride {
                active: true,
                pins: EquipmentPins {
                    furnace: true,
                    ..EquipmentPins::all_off()
                },
            },
            0,
            &mut hw,
            &mut sink,
            &store,
        );
    }

    let store = JsonSnapshotStore::new(&path);
    let svc = ThermostatService::from_store(ThermostatConfig::default(), &store);

    assert!(svc.status().manual_override);
    assert!(svc.status().pins.furnace);
}
