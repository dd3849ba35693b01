//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the thermostat: sensor
//! aggregation, the equipment arbiter, and tick orchestration.  All
//! interaction with the outside world happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! relays, a filesystem, or a database.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
