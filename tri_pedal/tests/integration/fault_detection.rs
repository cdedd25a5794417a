//! Integration test: any input fault forces zero torque and zero speed.

use tri_common::pedal::command::AnalogSample;
use tri_common::pedal::fault::FaultFlags;
use tri_common::pedal::mode::DriveMode;

use super::{PEDAL_MAX, PEDAL_MIN, REGEN_REST, evaluator, pedal_at, pedal_sample};

#[test]
fn out_of_range_channels_zero_output_in_every_mode() {
    let mid = pedal_at(50);
    let cases = [
        (AnalogSample::new(PEDAL_MIN - 1, mid, REGEN_REST, false), FaultFlags::ACCEL_LOW),
        (AnalogSample::new(mid, PEDAL_MIN - 1, REGEN_REST, false), FaultFlags::ACCEL_LOW),
        (AnalogSample::new(PEDAL_MAX + 1, mid, REGEN_REST, false), FaultFlags::ACCEL_HIGH),
        (AnalogSample::new(mid, PEDAL_MAX + 1, REGEN_REST, false), FaultFlags::ACCEL_HIGH),
        (AnalogSample::new(mid, mid, 0, false), FaultFlags::BRAKE_LOW),
        (AnalogSample::new(mid, mid, 4095, false), FaultFlags::BRAKE_HIGH),
    ];

    for mode in DriveMode::ALL {
        for (sample, expected) in cases {
            let mut ev = evaluator();
            let out = ev.process(&sample, mode);
            assert!(out.flags.contains(expected), "{mode:?} {sample:?}");
            assert_eq!(out.current_setpoint, 0.0, "{mode:?} {sample:?}");
            assert_eq!(out.rpm_setpoint, 0.0, "{mode:?} {sample:?}");
        }
    }
}

#[test]
fn mismatch_sweep_matches_tolerance_rule() {
    let tolerance = 0.10_f32;
    for a in (0..=100u32).step_by(5) {
        for b in (0..=100u32).step_by(3) {
            let sample = AnalogSample::new(pedal_at(a), pedal_at(b), REGEN_REST, false);
            let out = evaluator().process(&sample, DriveMode::DriveLow);

            let (fa, fb) = (a as f32, b as f32);
            let violates =
                (fa - fb).abs() > tolerance * fb || (fb - fa).abs() > tolerance * fa;
            assert_eq!(
                out.flags.contains(FaultFlags::ACCEL_MISMATCH),
                violates,
                "a={a}% b={b}%"
            );
            if violates {
                assert!(out.is_zero(), "a={a}% b={b}%");
            }
        }
    }
}

#[test]
fn identical_input_gives_identical_output() {
    let mut ev = evaluator();
    let sample = pedal_sample(40);
    let first = ev.process(&sample, DriveMode::Reverse);
    let second = ev.process(&sample, DriveMode::Reverse);
    assert_eq!(first, second);
    assert!(!ev.plausibility_latched());
}

#[test]
fn recovery_after_transient_range_fault() {
    let mut ev = evaluator();
    let out = ev.process(&AnalogSample::new(0, 0, REGEN_REST, false), DriveMode::DriveHigh);
    assert!(out.flags.contains(FaultFlags::ACCEL_LOW));

    let out = ev.process(&pedal_sample(50), DriveMode::DriveHigh);
    assert!(out.flags.is_clear());
    assert_eq!(out.current_setpoint, 0.5);
    assert_eq!(ev.stats().faulted_cycles, 1);
}

#[test]
fn pedal_boundaries_never_exceed_limits() {
    let mut ev = evaluator();
    let at_min = ev.process(&pedal_sample(0), DriveMode::DriveLow);
    assert_eq!(at_min.current_setpoint, 0.0);

    let at_max = ev.process(&pedal_sample(100), DriveMode::DriveLow);
    assert_eq!(at_max.current_setpoint, 1.0);

    for raw in PEDAL_MIN..=PEDAL_MAX {
        let out = ev.process(&AnalogSample::new(raw, raw, REGEN_REST, false), DriveMode::DriveLow);
        if out.flags.is_clear() {
            assert!((0.0..=1.0).contains(&out.current_setpoint), "raw={raw}");
        } else {
            assert!(out.is_zero(), "raw={raw}");
        }
    }
}
