//! Prelude module for common re-exports.
//!
//! ```rust
//! use tri_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::ADC_MAX;

// ─── Pedal Types ────────────────────────────────────────────────────
pub use crate::pedal::calibration::{
    Calibration, PedalChannelCalibration, PlausibilityConfig, RegenCalibration, SetpointLimits,
    ValidatedCalibration,
};
pub use crate::pedal::command::{AnalogSample, CommandOutput};
pub use crate::pedal::fault::{ChannelFaults, FaultFlags};
pub use crate::pedal::mode::{DriveMode, ModeFamily};
