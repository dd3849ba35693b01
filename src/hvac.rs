//! Equipment arbiter — the hysteresis state machine.
//!
//! Decides which HVAC subsystem should be energised from the aggregate
//! house temperature, the setpoint, and the operator capability flags,
//! with a minimum dwell time between equipment changes to protect the
//! compressor and furnace from short-cycling.
//!
//! ```text
//!            diff = avg - target
//!
//!   OFF ──[diff <= -2]──▶ HEATING ──[diff >= -1]──▶ OFF
//!   OFF ──[diff >=  2]──▶ COOLING (AC preferred)
//!                     └──▶ FAN LOW (cooler fallback)
//!   COOLING/FAN ──[diff <= 1]──▶ OFF
//! ```
//!
//! The turn-off thresholds (±1) are deliberately looser than the turn-on
//! thresholds (±2) so the system never oscillates at the setpoint
//! boundary.  Boundary comparisons are inclusive exactly as drawn.
//!
//! The arbiter is pure decision logic: no I/O, never panics, and only
//! ever produces one of the four canonical selections.

use log::info;

use crate::status::{EquipmentPins, UsableEquipment};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The four canonical equipment selections, each mapping onto a fixed
/// relay combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Everything de-energised.
    Off,
    /// Evaporative cooler: water pump + low-speed fan.
    FanLow,
    /// Air-conditioner compressor.
    Cooling,
    /// Furnace call-for-heat.
    Heating,
}

impl Selection {
    /// Relay combination for this selection.
    pub fn pins(self) -> EquipmentPins {
        match self {
            Self::Off => EquipmentPins::all_off(),
            Self::FanLow => EquipmentPins {
                pump: true,
                fan_on: true,
                ..EquipmentPins::all_off()
            },
            Self::Cooling => EquipmentPins {
                ac: true,
                ..EquipmentPins::all_off()
            },
            Self::Heating => EquipmentPins {
                furnace: true,
                ..EquipmentPins::all_off()
            },
        }
    }

    /// Classify an arbitrary relay combination (e.g. one set by a manual
    /// override) into the selection family the arbiter branches on.
    /// Cooling outranks heating, matching the branch order of the
    /// decision table.
    pub fn from_pins(pins: &EquipmentPins) -> Self {
        if pins.ac {
            Self::Cooling
        } else if pins.fan_on || pins.pump {
            Self::FanLow
        } else if pins.furnace {
            Self::Heating
        } else {
            Self::Off
        }
    }

    /// True for the two cooling selections.
    pub fn is_cooling(self) -> bool {
        matches!(self, Self::FanLow | Self::Cooling)
    }

    /// Whether the capability flags permit this selection.
    pub fn permitted_by(self, usable: &UsableEquipment) -> bool {
        match self {
            Self::Off => true,
            Self::FanLow => usable.cooler,
            Self::Cooling => usable.ac,
            Self::Heating => usable.furnace,
        }
    }
}

// ---------------------------------------------------------------------------
// Arbiter
// ---------------------------------------------------------------------------

/// Cooling turns off when `diff` falls to this or below (°F).
const COOL_OFF_DIFF: f64 = 1.0;
/// Heating turns off when `diff` rises to this or above (°F).
const HEAT_OFF_DIFF: f64 = -1.0;
/// From idle, cooling starts when `diff` reaches this or above (°F).
const COOL_ON_DIFF: f64 = 2.0;
/// From idle, heating starts when `diff` falls to this or below (°F).
const HEAT_ON_DIFF: f64 = -2.0;

/// Hysteresis state machine with a minimum-cycle-time guard.
///
/// Owns the single `last_transition_at` timestamp for the life of the
/// process.  The timestamp resets only when the issued selection actually
/// differs from the held one — repeated holds (and manual-override
/// toggles, which bypass the arbiter entirely) leave the original dwell
/// window's expiry intact.
pub struct HvacArbiter {
    cycle_time_secs: u64,
    last_transition_at: Option<u64>,
}

impl HvacArbiter {
    pub fn new(cycle_time_secs: u64) -> Self {
        Self {
            cycle_time_secs,
            last_transition_at: None,
        }
    }

    /// Decide the next equipment selection.
    ///
    /// `current` is the held selection, `avg_temp` the aggregate house
    /// temperature (°F), `target_temp` the setpoint (whole °F), and `now`
    /// unix seconds.
    pub fn decide(
        &mut self,
        current: Selection,
        avg_temp: f64,
        target_temp: i32,
        usable: &UsableEquipment,
        now: u64,
    ) -> Selection {
        // Dwell guard: equipment is never switched before the minimum run
        // time elapses.
        if let Some(at) = self.last_transition_at {
            if now.saturating_sub(at) < self.cycle_time_secs {
                return current;
            }
        }

        let diff = avg_temp - f64::from(target_temp);

        let next = if current.is_cooling() {
            if diff <= COOL_OFF_DIFF {
                Selection::Off
            } else {
                pick_cooling(usable)
            }
        } else if current == Selection::Heating {
            if diff >= HEAT_OFF_DIFF {
                Selection::Off
            } else {
                pick_heating(usable)
            }
        } else if diff <= HEAT_ON_DIFF {
            pick_heating(usable)
        } else if diff >= COOL_ON_DIFF {
            pick_cooling(usable)
        } else {
            Selection::Off
        };

        if next != current {
            info!(
                "equipment {:?} -> {:?} (avg {:.1}°F, target {}°F, diff {:+.1})",
                current, next, avg_temp, target_temp, diff
            );
            self.last_transition_at = Some(now);
        }
        next
    }

    /// Timestamp of the last actual equipment change, if any.
    pub fn last_transition_at(&self) -> Option<u64> {
        self.last_transition_at
    }
}

/// Cooling preference order: AC over the low-speed fan when both are
/// usable, else whichever is, else off.
fn pick_cooling(usable: &UsableEquipment) -> Selection {
    if usable.ac {
        Selection::Cooling
    } else if usable.cooler {
        Selection::FanLow
    } else {
        Selection::Off
    }
}

fn pick_heating(usable: &UsableEquipment) -> Selection {
    if usable.furnace {
        Selection::Heating
    } else {
        Selection::Off
    }
}
