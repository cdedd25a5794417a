//! TOML configuration loader with validation.
//!
//! Loads `PedalUnitConfig` (a `[shared]` table plus `[calibration.*]`
//! tables) and seals the calibration with bounds validation. An evaluator
//! can only be built from the result, so a zero travel span never reaches
//! the cycle.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use tri_common::config::{ConfigError as SharedConfigError, ConfigLoader, SharedConfig};
use tri_common::pedal::calibration::{Calibration, ValidatedCalibration};

use crate::cycle::PedalEvaluator;

// ─── Error Type ─────────────────────────────────────────────────────

/// Configuration loading/validation error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or parsing the file failed.
    #[error(transparent)]
    Load(#[from] SharedConfigError),
    /// Calibration bounds check failed.
    #[error("calibration: {0}")]
    Calibration(String),
}

// ─── Raw Config ─────────────────────────────────────────────────────

/// On-disk layout of the pedal unit configuration.
///
/// ```toml
/// [shared]
/// service_name = "tri86-pedal"
///
/// [calibration.pedal_a]
/// min = 400
/// max = 3600
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PedalUnitConfig {
    pub shared: SharedConfig,
    #[serde(default)]
    pub calibration: Calibration,
}

// ─── Loaded Config Bundle ───────────────────────────────────────────

/// Validated configuration, ready for runtime use.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub shared: SharedConfig,
    pub calibration: ValidatedCalibration,
}

impl LoadedConfig {
    /// Build an evaluator from the validated calibration.
    pub fn evaluator(&self) -> PedalEvaluator {
        PedalEvaluator::new(self.calibration)
    }
}

// ─── Loading Functions ──────────────────────────────────────────────

/// Load and validate the pedal unit configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let raw = PedalUnitConfig::load(path)?;
    let loaded = validate(raw)?;
    info!(
        path = %path.display(),
        service = %loaded.shared.service_name,
        "pedal configuration loaded"
    );
    Ok(loaded)
}

/// Load config from a TOML string (for testing).
pub fn load_config_from_str(toml: &str) -> Result<LoadedConfig, ConfigError> {
    let raw = PedalUnitConfig::from_toml(toml)?;
    validate(raw)
}

fn validate(raw: PedalUnitConfig) -> Result<LoadedConfig, ConfigError> {
    raw.shared.validate()?;
    let calibration = raw
        .calibration
        .validated()
        .map_err(ConfigError::Calibration)?;
    debug!(
        pedal_a_travel = calibration.pedal_a.travel(),
        pedal_b_travel = calibration.pedal_b.travel(),
        regen_travel = calibration.regen.travel(),
        current_max = calibration.limits.current_max,
        "calibration validated"
    );
    Ok(LoadedConfig {
        shared: raw.shared,
        calibration,
    })
}
