//! Per-cycle pedal evaluation: detect → latch → compute.
//!
//! [`PedalEvaluator`] owns the validated calibration and the plausibility
//! latch. Everything else is recomputed from the current sample, so a call
//! with an identical sample, mode and latch state always yields the same
//! output.
//!
//! The cycle body allocates nothing and never blocks.

use tri_common::pedal::calibration::ValidatedCalibration;
use tri_common::pedal::command::{AnalogSample, CommandOutput};
use tri_common::pedal::mode::{DriveMode, ModeFamily};

use crate::control::setpoint::compute_setpoint;
use crate::safety::faults::{FaultReport, evaluate_faults};
use crate::safety::plausibility::PlausibilityLatch;

// ─── Cycle Statistics ───────────────────────────────────────────────

/// O(1) per-cycle counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Total cycles evaluated.
    pub cycle_count: u64,
    /// Cycles that ended with a non-empty fault set.
    pub faulted_cycles: u64,
    /// Transitions of the plausibility latch from clear to set.
    pub plausibility_trips: u64,
}

impl CycleStats {
    pub const fn new() -> Self {
        Self {
            cycle_count: 0,
            faulted_cycles: 0,
            plausibility_trips: 0,
        }
    }

    #[inline]
    fn record(&mut self, output: &CommandOutput, latch_was_set: bool) {
        self.cycle_count += 1;
        if !output.flags.is_clear() {
            self.faulted_cycles += 1;
        }
        if output.flags.plausibility() && !latch_was_set {
            self.plausibility_trips += 1;
        }
    }
}

// ─── Cycle Report ───────────────────────────────────────────────────

/// Command output plus the detector's detail for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub output: CommandOutput,
    pub faults: FaultReport,
}

// ─── Evaluator ──────────────────────────────────────────────────────

/// Pedal input evaluator for one drivetrain.
///
/// Exclusively owns the plausibility latch; `&mut self` on every cycle
/// keeps concurrent callers from racing on it.
#[derive(Debug, Clone)]
pub struct PedalEvaluator {
    calibration: ValidatedCalibration,
    latch: PlausibilityLatch,
    stats: CycleStats,
}

impl PedalEvaluator {
    /// Create an evaluator with a clear plausibility latch.
    pub const fn new(calibration: ValidatedCalibration) -> Self {
        Self {
            calibration,
            latch: PlausibilityLatch::new(),
            stats: CycleStats::new(),
        }
    }

    /// Evaluate one cycle for a known drive mode.
    #[inline]
    pub fn process(&mut self, sample: &AnalogSample, mode: DriveMode) -> CommandOutput {
        self.process_family(sample, mode.family())
    }

    /// Evaluate one cycle for a raw mode code. Unknown codes give zero output.
    #[inline]
    pub fn process_raw_mode(&mut self, sample: &AnalogSample, mode: u8) -> CommandOutput {
        self.process_family(sample, ModeFamily::from_raw(mode))
    }

    /// Evaluate one cycle for a mode family.
    #[inline]
    pub fn process_family(&mut self, sample: &AnalogSample, family: ModeFamily) -> CommandOutput {
        self.process_detailed(sample, family).output
    }

    /// Evaluate one cycle and keep the detector's detail.
    pub fn process_detailed(&mut self, sample: &AnalogSample, family: ModeFamily) -> CycleReport {
        let latch_was_set = self.latch.is_latched();
        let faults = evaluate_faults(&self.calibration, sample, latch_was_set);
        self.latch.update(faults.flags);
        let output = compute_setpoint(&self.calibration, sample, family, faults.flags);
        self.stats.record(&output, latch_was_set);
        CycleReport { output, faults }
    }

    /// True while the plausibility fault is latched.
    #[inline]
    pub const fn plausibility_latched(&self) -> bool {
        self.latch.is_latched()
    }

    /// Clear the plausibility latch. The next cycle re-evaluates from scratch.
    pub fn reset_latch(&mut self) {
        self.latch.reset();
    }

    #[inline]
    pub const fn calibration(&self) -> &ValidatedCalibration {
        &self.calibration
    }

    #[inline]
    pub const fn stats(&self) -> &CycleStats {
        &self.stats
    }
}
