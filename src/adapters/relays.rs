//! Relay board adapter.
//!
//! ## Dual-target design
//!
//! - **`rpi` feature** — [`RelayBoard`] drives the four active-low relays
//!   through the Raspberry Pi GPIO character device via `rppal`.
//! - **host / tests** — [`SimulatedRelayBoard`] tracks the commanded pins
//!   in memory and logs transitions, so the daemon runs end-to-end on any
//!   machine.
//!
//! The relays are wired active-low: the pins are initialised HIGH
//! (de-energised) and a relay is energised by driving its pin LOW.

use log::info;

use crate::app::ports::{ActuatorError, ActuatorPort};
use crate::hvac::Selection;
use crate::status::EquipmentPins;

// ───────────────────────────────────────────────────────────────
// Real hardware (Raspberry Pi)
// ───────────────────────────────────────────────────────────────

#[cfg(feature = "rpi")]
pub use rpi::RelayBoard;

#[cfg(feature = "rpi")]
mod rpi {
    use log::info;
    use rppal::gpio::{Gpio, OutputPin};

    use crate::app::ports::{ActuatorError, ActuatorPort};
    use crate::hvac::Selection;
    use crate::pins::RelayPins;
    use crate::status::EquipmentPins;

    /// Four-channel relay hat driven over BCM GPIO.
    pub struct RelayBoard {
        pump: OutputPin,
        fan_on: OutputPin,
        ac: OutputPin,
        furnace: OutputPin,
    }

    impl RelayBoard {
        /// Claim the four pins and drive everything to the de-energised
        /// (HIGH) state.
        pub fn new(pins: &RelayPins) -> crate::error::Result<Self> {
            let gpio = Gpio::new().map_err(|_| crate::error::Error::Init("GPIO unavailable"))?;
            let mut claim = |bcm: u8| -> crate::error::Result<OutputPin> {
                let pin = gpio
                    .get(bcm)
                    .map_err(|_| crate::error::Error::Init("relay pin claim failed"))?;
                Ok(pin.into_output_high())
            };
            let board = Self {
                pump: claim(pins.pump)?,
                fan_on: claim(pins.fan_on)?,
                ac: claim(pins.ac)?,
                furnace: claim(pins.furnace)?,
            };
            info!(
                "relay board ready (BCM pump={} fan={} ac={} furnace={})",
                pins.pump, pins.fan_on, pins.ac, pins.furnace
            );
            Ok(board)
        }

        fn write(&mut self, pins: &EquipmentPins) {
            // Active-low: LOW energises the coil.
            set_level(&mut self.pump, pins.pump);
            set_level(&mut self.fan_on, pins.fan_on);
            set_level(&mut self.ac, pins.ac);
            set_level(&mut self.furnace, pins.furnace);
        }
    }

    fn set_level(pin: &mut OutputPin, energised: bool) {
        if energised {
            pin.set_low();
        } else {
            pin.set_high();
        }
    }

    impl ActuatorPort for RelayBoard {
        fn turn_on(&mut self, selection: Selection) -> Result<(), ActuatorError> {
            self.write(&selection.pins());
            Ok(())
        }

        fn set_pins(&mut self, pins: &EquipmentPins) -> Result<(), ActuatorError> {
            self.write(pins);
            Ok(())
        }

        fn all_off(&mut self) -> Result<(), ActuatorError> {
            self.write(&EquipmentPins::all_off());
            Ok(())
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Host simulation
// ───────────────────────────────────────────────────────────────

/// In-memory relay board for host runs and tests.  Logs only actual
/// transitions so the idempotent per-tick re-issue stays quiet.
#[derive(Debug, Default)]
pub struct SimulatedRelayBoard {
    pins: EquipmentPins,
}

impl SimulatedRelayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently commanded relay state.
    pub fn pins(&self) -> EquipmentPins {
        self.pins
    }

    fn write(&mut self, pins: EquipmentPins) {
        if pins != self.pins {
            info!("relays (sim): {:?} -> {:?}", self.pins, pins);
            self.pins = pins;
        }
    }
}

impl ActuatorPort for SimulatedRelayBoard {
    fn turn_on(&mut self, selection: Selection) -> Result<(), ActuatorError> {
        self.write(selection.pins());
        Ok(())
    }

    fn set_pins(&mut self, pins: &EquipmentPins) -> Result<(), ActuatorError> {
        self.write(*pins);
        Ok(())
    }

    fn all_off(&mut self) -> Result<(), ActuatorError> {
        self.write(EquipmentPins::all_off());
        Ok(())
    }
}
