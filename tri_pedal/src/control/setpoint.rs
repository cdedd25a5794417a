//! Setpoint calculation.
//!
//! Maps a fault-free sample onto a motor current and rpm target according
//! to the drive mode family. Any fault short-circuits to zero output.
//!
//! Scaling order is clip → scale → clip: the raw offset is clipped into the
//! channel's travel before scaling, and the scaled value is clipped to its
//! maximum afterwards.

use tri_common::pedal::calibration::ValidatedCalibration;
use tri_common::pedal::command::{AnalogSample, CommandOutput};
use tri_common::pedal::fault::FaultFlags;
use tri_common::pedal::mode::ModeFamily;

/// Accelerator current demand from pedal A, in `[0, current_max]`.
#[inline]
pub fn pedal_magnitude(cal: &ValidatedCalibration, raw_a: u16) -> f32 {
    let current_max = cal.limits.current_max;
    let offset = f32::from(cal.pedal_a.clipped_offset(raw_a));
    let scaled = offset * current_max / f32::from(cal.pedal_a.travel());
    scaled.min(current_max)
}

/// Regen current demand from the slider, in `[0, regen_max]`.
#[inline]
pub fn regen_magnitude(cal: &ValidatedCalibration, raw_regen: u16) -> f32 {
    let regen_max = cal.regen.regen_max;
    let offset = f32::from(cal.regen.clipped_offset(raw_regen));
    let scaled = offset * regen_max / f32::from(cal.regen.travel());
    scaled.min(regen_max)
}

/// Compute this cycle's command.
///
/// `flags` is the fault detector's output for the same sample; the setpoint
/// math only runs when it is empty.
pub fn compute_setpoint(
    cal: &ValidatedCalibration,
    sample: &AnalogSample,
    family: ModeFamily,
    flags: FaultFlags,
) -> CommandOutput {
    if !flags.is_clear() {
        return CommandOutput::zero(flags);
    }

    let pedal = pedal_magnitude(cal, sample.pedal_a);
    let regen = regen_magnitude(cal, sample.regen_slider);

    let (current_setpoint, rpm_setpoint) = match family {
        ModeFamily::Reverse if sample.regen_requested => (regen, 0.0),
        ModeFamily::Reverse => (pedal, cal.limits.rpm_reverse),
        ModeFamily::Forward if sample.regen_requested => (regen, 0.0),
        ModeFamily::Forward => (pedal, cal.limits.rpm_forward),
        ModeFamily::Zero => (0.0, 0.0),
    };

    CommandOutput {
        current_setpoint,
        rpm_setpoint,
        flags,
    }
}
