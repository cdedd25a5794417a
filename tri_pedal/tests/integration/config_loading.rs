//! Integration test: configuration file → evaluator.

use std::io::Write;

use tempfile::NamedTempFile;
use tri_common::pedal::command::AnalogSample;
use tri_common::pedal::mode::DriveMode;
use tri_pedal::config::{ConfigError, load_config};
use tri_pedal::replay::run_replay;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn custom_calibration_changes_setpoints() {
    let file = write_config(
        r#"[shared]
service_name = "pedal-it"

[calibration.pedal_a]
min = 1000
max = 3000

[calibration.pedal_b]
min = 1000
max = 3000

[calibration.limits]
current_max = 0.6
rpm_forward = 8000.0
rpm_reverse = -1500.0
"#,
    );
    let loaded = load_config(file.path()).unwrap();
    let mut ev = loaded.evaluator();

    let out = ev.process(&AnalogSample::new(2000, 2000, 300, false), DriveMode::Reverse);
    assert!(out.flags.is_clear());
    assert!((out.current_setpoint - 0.3).abs() < 1e-6);
    assert_eq!(out.rpm_setpoint, -1500.0);

    // Default pedal minimum would have accepted this; the custom one does not.
    let out = ev.process(&AnalogSample::new(900, 900, 300, false), DriveMode::Reverse);
    assert!(out.is_zero());
    assert!(!out.flags.is_clear());
}

#[test]
fn invalid_calibration_file_rejected() {
    let file = write_config(
        r#"[shared]
service_name = "pedal-it"

[calibration.limits]
current_max = 2.0
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Calibration(_)));
}

#[test]
fn replay_from_loaded_config() {
    let file = write_config("[shared]\nservice_name = \"pedal-it\"\n");
    let mut ev = load_config(file.path()).unwrap().evaluator();
    let input = "\
{\"pedal_a\":1360,\"pedal_b\":1360,\"regen_slider\":2000,\"mode\":4}
{\"pedal_a\":560,\"pedal_b\":560,\"regen_slider\":300,\"mode\":4}
{\"pedal_a\":400,\"pedal_b\":400,\"regen_slider\":300,\"mode\":4}
";
    let mut out = Vec::new();
    let stats = run_replay(&mut ev, input.as_bytes(), &mut out).unwrap();
    assert_eq!(stats.cycle_count, 3);
    assert_eq!(stats.faulted_cycles, 2);
    assert_eq!(stats.plausibility_trips, 1);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
}

#[test]
fn shipped_config_and_capture_replay_cleanly() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../config");
    let loaded = load_config(&root.join("pedal.toml")).unwrap();
    assert_eq!(loaded.shared.service_name, "tri86-pedal");

    let capture = std::fs::File::open(root.join("capture.jsonl")).unwrap();
    let mut ev = loaded.evaluator();
    let stats = run_replay(&mut ev, std::io::BufReader::new(capture), std::io::sink()).unwrap();
    assert_eq!(stats.cycle_count, 8);
    // Plausibility set on the slider pull, held at 6 %, cleared at 0 %.
    assert_eq!(stats.plausibility_trips, 1);
    assert_eq!(stats.faulted_cycles, 2);
}
