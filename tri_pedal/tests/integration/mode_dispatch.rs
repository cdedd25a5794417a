//! Integration test: drive mode dispatch table.

use tri_common::pedal::command::AnalogSample;
use tri_common::pedal::mode::{DriveMode, ModeFamily};

use super::{evaluator, pedal_at, pedal_sample};

const RPM_FORWARD: f32 = 12_000.0;
const RPM_REVERSE: f32 = -5_000.0;

fn expected_rpm(mode: DriveMode) -> f32 {
    match mode {
        DriveMode::Reverse => RPM_REVERSE,
        DriveMode::DriveLow | DriveMode::DriveHigh | DriveMode::BrakeLow | DriveMode::BrakeHigh => {
            RPM_FORWARD
        }
        DriveMode::Charge | DriveMode::Neutral | DriveMode::Start | DriveMode::On | DriveMode::Off => {
            0.0
        }
    }
}

#[test]
fn pedal_at_half_travel_without_regen() {
    for mode in DriveMode::ALL {
        let out = evaluator().process(&pedal_sample(50), mode);
        assert!(out.flags.is_clear(), "{mode:?}");
        assert_eq!(out.rpm_setpoint, expected_rpm(mode), "{mode:?}");
        let expected_current = if mode.family() == ModeFamily::Zero { 0.0 } else { 0.5 };
        assert_eq!(out.current_setpoint, expected_current, "{mode:?}");
    }
}

#[test]
fn regen_request_at_half_pedal_with_slider_at_rest() {
    for mode in DriveMode::ALL {
        let mut sample = pedal_sample(50);
        sample.regen_requested = true;
        let out = evaluator().process(&sample, mode);
        assert!(out.flags.is_clear(), "{mode:?}");
        // Slider at rest: regen magnitude is zero.
        assert_eq!(out.current_setpoint, 0.0, "{mode:?}");
        assert_eq!(out.rpm_setpoint, 0.0, "{mode:?}");
    }
}

#[test]
fn regen_request_with_slider_at_half_travel() {
    // Pedal kept below the plausibility threshold so the slider may move.
    let p = pedal_at(20);
    let sample = AnalogSample::new(p, p, 2000, true);
    for mode in DriveMode::ALL {
        let out = evaluator().process(&sample, mode);
        assert!(out.flags.is_clear(), "{mode:?}");
        let expected_current = match mode.family() {
            ModeFamily::Zero => 0.0,
            ModeFamily::Forward | ModeFamily::Reverse => 0.25,
        };
        assert_eq!(out.current_setpoint, expected_current, "{mode:?}");
        assert_eq!(out.rpm_setpoint, 0.0, "{mode:?}");
    }
}

#[test]
fn raw_mode_codes_match_enum_dispatch() {
    for mode in DriveMode::ALL {
        let by_enum = evaluator().process(&pedal_sample(50), mode);
        let by_raw = evaluator().process_raw_mode(&pedal_sample(50), mode as u8);
        assert_eq!(by_enum, by_raw, "{mode:?}");
    }
}

#[test]
fn unknown_raw_modes_are_fail_safe() {
    for raw in 10..=u8::MAX {
        let out = evaluator().process_raw_mode(&pedal_sample(50), raw);
        assert!(out.flags.is_clear(), "mode {raw}");
        assert!(out.is_zero(), "mode {raw}");
    }
}

#[test]
fn rpm_only_takes_configured_values() {
    let mut ev = evaluator();
    for mode in DriveMode::ALL {
        for percent in [0, 10, 50, 100] {
            for regen_requested in [false, true] {
                let mut sample = pedal_sample(percent);
                sample.regen_requested = regen_requested;
                let rpm = ev.process(&sample, mode).rpm_setpoint;
                assert!(
                    rpm == 0.0 || rpm == RPM_FORWARD || rpm == RPM_REVERSE,
                    "{mode:?} {percent}% -> {rpm}"
                );
            }
        }
    }
}
