//! Accelerator/regen plausibility latch.
//!
//! The fault sets when the accelerator is past `set_percent` while the regen
//! slider is actuated, and clears only once the accelerator drops to
//! `clear_percent` or below. Between the two thresholds the previous state
//! holds. That state is kept in [`PlausibilityLatch`], owned by exactly one
//! evaluator.

use tri_common::pedal::calibration::PlausibilityConfig;
use tri_common::pedal::fault::FaultFlags;

/// Next PLAUSIBILITY state from the current inputs and the previous state.
///
/// Regen slider position only matters for setting; clearing depends on the
/// accelerator alone.
#[inline]
pub fn plausibility_fault(
    cfg: &PlausibilityConfig,
    accel_percent: i32,
    regen_actuated: bool,
    latched: bool,
) -> bool {
    if accel_percent > cfg.set_percent && regen_actuated {
        true
    } else if latched {
        accel_percent > cfg.clear_percent
    } else {
        false
    }
}

/// Cross-cycle PLAUSIBILITY state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlausibilityLatch {
    latched: bool,
}

impl PlausibilityLatch {
    pub const fn new() -> Self {
        Self { latched: false }
    }

    #[inline]
    pub const fn is_latched(&self) -> bool {
        self.latched
    }

    /// Record the PLAUSIBILITY bit of this cycle's flags.
    #[inline]
    pub fn update(&mut self, flags: FaultFlags) {
        self.latched = flags.plausibility();
    }

    /// Drop the latch (power-up, or an explicit operator reset).
    #[inline]
    pub fn reset(&mut self) {
        self.latched = false;
    }
}
