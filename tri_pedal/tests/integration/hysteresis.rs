//! Integration test: accelerator/regen plausibility latch.
//!
//! Set at >25 % pedal with the regen slider actuated, held through any
//! non-zero pedal travel, cleared only when the pedal returns to 0 %.

use tri_common::pedal::command::AnalogSample;
use tri_common::pedal::fault::FaultFlags;
use tri_common::pedal::mode::DriveMode;

use super::{REGEN_REST, REGEN_TRAVEL_MIN, evaluator, pedal_at, pedal_sample};

fn with_regen(percent: u32, regen_slider: u16) -> AnalogSample {
    let p = pedal_at(percent);
    AnalogSample::new(p, p, regen_slider, false)
}

#[test]
fn set_hold_clear_sequence() {
    let mut ev = evaluator();

    let out = ev.process(&with_regen(30, 2000), DriveMode::DriveHigh);
    assert_eq!(out.flags, FaultFlags::PLAUSIBILITY);
    assert!(out.is_zero());

    // Regen released, pedal eased back but not released.
    let out = ev.process(&pedal_sample(5), DriveMode::DriveHigh);
    assert_eq!(out.flags, FaultFlags::PLAUSIBILITY);
    assert!(out.is_zero());

    let out = ev.process(&pedal_sample(1), DriveMode::DriveHigh);
    assert!(out.flags.plausibility());

    let out = ev.process(&pedal_sample(0), DriveMode::DriveHigh);
    assert!(out.flags.is_clear());
    assert!(!ev.plausibility_latched());

    // Back to normal driving.
    let out = ev.process(&pedal_sample(20), DriveMode::DriveHigh);
    assert!(out.flags.is_clear());
    assert!((out.current_setpoint - 0.2).abs() < 1e-6);
    assert_eq!(ev.stats().plausibility_trips, 1);
}

#[test]
fn regen_at_travel_min_is_not_actuated() {
    let mut ev = evaluator();
    let out = ev.process(&with_regen(80, REGEN_TRAVEL_MIN), DriveMode::DriveLow);
    assert!(out.flags.is_clear());
    let out = ev.process(&with_regen(80, REGEN_TRAVEL_MIN + 1), DriveMode::DriveLow);
    assert_eq!(out.flags, FaultFlags::PLAUSIBILITY);
}

#[test]
fn pedal_at_set_threshold_does_not_trip() {
    let mut ev = evaluator();
    let out = ev.process(&with_regen(25, 2000), DriveMode::DriveLow);
    assert!(out.flags.is_clear());
    let out = ev.process(&with_regen(26, 2000), DriveMode::DriveLow);
    assert!(out.flags.plausibility());
}

#[test]
fn latch_holds_regardless_of_mode() {
    let mut ev = evaluator();
    ev.process(&with_regen(50, 3000), DriveMode::Neutral);
    assert!(ev.plausibility_latched());
    for mode in DriveMode::ALL {
        let out = ev.process(&pedal_sample(10), mode);
        assert!(out.flags.plausibility(), "{mode:?}");
        assert!(out.is_zero(), "{mode:?}");
    }
}

#[test]
fn latch_survives_concurrent_range_fault() {
    let mut ev = evaluator();
    ev.process(&with_regen(50, 3000), DriveMode::DriveLow);

    // Regen slider disconnects while the pedal is still pressed.
    let p = pedal_at(40);
    let out = ev.process(&AnalogSample::new(p, p, 0, false), DriveMode::DriveLow);
    assert_eq!(out.flags, FaultFlags::PLAUSIBILITY | FaultFlags::BRAKE_LOW);

    // Slider recovers: range fault clears at once, latch stays.
    let out = ev.process(&AnalogSample::new(p, p, REGEN_REST, false), DriveMode::DriveLow);
    assert_eq!(out.flags, FaultFlags::PLAUSIBILITY);
}

#[test]
fn independent_evaluators_do_not_share_latch() {
    let mut left = evaluator();
    let mut right = evaluator();
    left.process(&with_regen(50, 3000), DriveMode::DriveLow);
    assert!(left.plausibility_latched());
    let out = right.process(&pedal_sample(10), DriveMode::DriveLow);
    assert!(out.flags.is_clear());
}
