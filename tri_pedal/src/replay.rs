//! Sample replay harness.
//!
//! Reads JSON-lines `ReplayRecord`s (one sample per control cycle), runs
//! each through a [`PedalEvaluator`] and writes one JSON `ReplayOutput`
//! line per cycle. Fault set changes are logged here, outside the cycle.
//!
//! ```text
//! {"pedal_a":2000,"pedal_b":2000,"regen_slider":300,"mode":4}
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use tri_common::pedal::command::{AnalogSample, CommandOutput};
use tri_common::pedal::fault::FaultFlags;

use crate::cycle::{CycleStats, PedalEvaluator};

/// Replay failure.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("replay I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("output encoding: {0}")]
    Encode(#[source] serde_json::Error),
}

/// One input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayRecord {
    pub pedal_a: u16,
    pub pedal_b: u16,
    pub regen_slider: u16,
    #[serde(default)]
    pub regen_requested: bool,
    /// Raw drive mode code; unknown codes are allowed and give zero output.
    pub mode: u8,
}

impl ReplayRecord {
    #[inline]
    pub const fn sample(&self) -> AnalogSample {
        AnalogSample::new(
            self.pedal_a,
            self.pedal_b,
            self.regen_slider,
            self.regen_requested,
        )
    }
}

/// One output line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutput {
    /// 1-based cycle number.
    pub cycle: u64,
    #[serde(flatten)]
    pub command: CommandOutput,
}

/// Replay every record from `reader`, writing outputs to `writer`.
///
/// Blank lines and lines starting with `#` are skipped. Returns the
/// evaluator's counters at end of input.
pub fn run_replay<R: BufRead, W: Write>(
    evaluator: &mut PedalEvaluator,
    reader: R,
    mut writer: W,
) -> Result<CycleStats, ReplayError> {
    let mut previous = FaultFlags::empty();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record: ReplayRecord = serde_json::from_str(trimmed).map_err(|source| {
            ReplayError::Parse {
                line: idx + 1,
                source,
            }
        })?;

        let command = evaluator.process_raw_mode(&record.sample(), record.mode);
        let cycle = evaluator.stats().cycle_count;
        log_transition(cycle, previous, command.flags);
        previous = command.flags;

        debug!(
            cycle,
            current = command.current_setpoint,
            rpm = command.rpm_setpoint,
            flags = command.flags.pack(),
            "cycle"
        );

        serde_json::to_writer(&mut writer, &ReplayOutput { cycle, command })
            .map_err(ReplayError::Encode)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    let stats = *evaluator.stats();
    info!(
        cycles = stats.cycle_count,
        faulted = stats.faulted_cycles,
        plausibility_trips = stats.plausibility_trips,
        "replay complete"
    );
    Ok(stats)
}

fn log_transition(cycle: u64, previous: FaultFlags, current: FaultFlags) {
    if previous == current {
        return;
    }
    if current.is_clear() {
        info!(cycle, "pedal faults cleared");
    } else {
        warn!(
            cycle,
            faults = ?current.names(),
            accel_range = current.accel_range_fault(),
            brake_range = current.brake_range_fault(),
            "pedal faults active, torque suppressed"
        );
    }
}
