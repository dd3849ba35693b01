//! Homestat library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  The real GPIO adapter is guarded by the `rpi` feature
//! within [`adapters::relays`]; everything else is host-portable.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod hvac;
pub mod pins;
pub mod sensors;
pub mod status;

pub mod adapters;
