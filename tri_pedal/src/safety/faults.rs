//! Pedal input fault detection.
//!
//! Range checks on both accelerator channels and the regen slider, the A/B
//! redundancy cross-check, and the accelerator/regen plausibility latch.
//! Drive mode plays no part here.

use tri_common::pedal::calibration::ValidatedCalibration;
use tri_common::pedal::command::AnalogSample;
use tri_common::pedal::fault::{ChannelFaults, FaultFlags};

use super::plausibility::plausibility_fault;

/// Everything fault detection learned about one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultReport {
    /// Aliased fault set that gates the setpoint.
    pub flags: FaultFlags,
    /// Which channel raised `ACCEL_LOW`/`ACCEL_HIGH`.
    pub channels: ChannelFaults,
    /// Pedal A travel [%], truncated.
    pub percent_a: i32,
    /// Pedal B travel [%], truncated.
    pub percent_b: i32,
}

/// Evaluate every fault check for one sample.
///
/// `plausibility_latched` is the PLAUSIBILITY state from the previous cycle;
/// all other checks ignore history.
pub fn evaluate_faults(
    cal: &ValidatedCalibration,
    sample: &AnalogSample,
    plausibility_latched: bool,
) -> FaultReport {
    let mut channels = ChannelFaults::empty();

    // ── Accelerator range ──
    channels.set(ChannelFaults::PEDAL_A_LOW, sample.pedal_a < cal.pedal_a.min);
    channels.set(ChannelFaults::PEDAL_A_HIGH, sample.pedal_a > cal.pedal_a.max);
    channels.set(ChannelFaults::PEDAL_B_LOW, sample.pedal_b < cal.pedal_b.min);
    channels.set(ChannelFaults::PEDAL_B_HIGH, sample.pedal_b > cal.pedal_b.max);
    let mut flags = channels.aliased();

    // ── Redundancy cross-check ──
    let percent_a = cal.pedal_a.percent(sample.pedal_a);
    let percent_b = cal.pedal_b.percent(sample.pedal_b);
    flags.set(
        FaultFlags::ACCEL_MISMATCH,
        channels_mismatch(percent_a, percent_b, cal.plausibility.mismatch_tolerance),
    );

    // ── Regen slider range ──
    flags.set(FaultFlags::BRAKE_LOW, sample.regen_slider < cal.regen.error_min);
    flags.set(FaultFlags::BRAKE_HIGH, sample.regen_slider > cal.regen.error_max);

    // ── Accelerator / regen plausibility ──
    flags.set(
        FaultFlags::PLAUSIBILITY,
        plausibility_fault(
            &cal.plausibility,
            percent_a,
            sample.regen_slider > cal.regen.travel_min,
            plausibility_latched,
        ),
    );

    FaultReport {
        flags,
        channels,
        percent_a,
        percent_b,
    }
}

/// Fault flags for one sample. See [`evaluate_faults`].
#[inline]
pub fn detect_faults(
    cal: &ValidatedCalibration,
    sample: &AnalogSample,
    plausibility_latched: bool,
) -> FaultFlags {
    evaluate_faults(cal, sample, plausibility_latched).flags
}

/// True if either percentage falls outside `(1 ± tolerance)` of the other.
///
/// Both directions are checked: with truncated integer percentages the
/// relation is not symmetric.
pub fn channels_mismatch(percent_a: i32, percent_b: i32, tolerance: f32) -> bool {
    outside_band(percent_a, percent_b, tolerance) || outside_band(percent_b, percent_a, tolerance)
}

fn outside_band(value: i32, reference: i32, tolerance: f32) -> bool {
    let deviation = (value - reference).abs() as f32;
    deviation > tolerance * reference.abs() as f32
}
