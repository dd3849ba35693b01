//! Startup error type for the thermostat daemon.
//!
//! Within the control loop nothing is fatal — port errors are logged at
//! the call site and retried next tick — so the only errors that ever
//! propagate are peripheral initialisation failures surfaced from `main`.

use core::fmt;

/// Errors that abort daemon startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Daemon-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
