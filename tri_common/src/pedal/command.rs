//! Per-cycle input sample and command output.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

use super::fault::FaultFlags;

/// Raw pedal inputs for one control cycle.
///
/// Counts come straight from the ADC (0..=4095 on a 12-bit converter).
/// `regen_requested` comes from the independent brake switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(C)]
pub struct AnalogSample {
    /// Accelerator hall sensor A [counts].
    pub pedal_a: u16,
    /// Accelerator hall sensor B [counts].
    pub pedal_b: u16,
    /// Regen slider [counts].
    pub regen_slider: u16,
    /// Brake switch requests regenerative braking.
    #[serde(default)]
    pub regen_requested: bool,
}

const_assert_eq!(core::mem::size_of::<AnalogSample>(), 8);

impl AnalogSample {
    #[inline]
    pub const fn new(pedal_a: u16, pedal_b: u16, regen_slider: u16, regen_requested: bool) -> Self {
        Self {
            pedal_a,
            pedal_b,
            regen_slider,
            regen_requested,
        }
    }
}

/// Motor setpoint produced once per cycle.
///
/// `current_setpoint` and `rpm_setpoint` are both zero whenever `flags` is
/// non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Motor current as a fraction of rated current.
    pub current_setpoint: f32,
    /// Motor velocity target [rpm].
    pub rpm_setpoint: f32,
    /// Faults detected this cycle.
    pub flags: FaultFlags,
}

impl CommandOutput {
    /// Zero torque, zero speed, carrying the given faults.
    #[inline]
    pub const fn zero(flags: FaultFlags) -> Self {
        Self {
            current_setpoint: 0.0,
            rpm_setpoint: 0.0,
            flags,
        }
    }

    /// Returns true if neither current nor speed is requested.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.current_setpoint == 0.0 && self.rpm_setpoint == 0.0
    }
}
