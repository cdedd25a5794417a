//! Pedal calibration structures.
//!
//! All types use `serde::Deserialize` for TOML loading, with defaults from
//! [`crate::consts`] for every omitted field. Calibration is immutable once
//! validated; [`ValidatedCalibration`] is the only form the evaluator accepts.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ADC_MAX, CURRENT_MAX_DEFAULT, CURRENT_SETPOINT_LIMIT, MISMATCH_TOLERANCE_DEFAULT,
    PEDAL_MAX_DEFAULT, PEDAL_MIN_DEFAULT, PLAUSIBILITY_CLEAR_PERCENT_DEFAULT,
    PLAUSIBILITY_SET_PERCENT_DEFAULT, REGEN_ERROR_MAX_DEFAULT, REGEN_ERROR_MIN_DEFAULT,
    REGEN_MAX_DEFAULT, REGEN_TRAVEL_MAX_DEFAULT, REGEN_TRAVEL_MIN_DEFAULT, RPM_FORWARD_DEFAULT,
    RPM_REVERSE_DEFAULT,
};

// ─── Pedal Channel ──────────────────────────────────────────────────

/// Linear mapping for one accelerator hall sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedalChannelCalibration {
    /// Lowest valid reading; also the zero-travel point [counts].
    #[serde(default = "default_pedal_min")]
    pub min: u16,
    /// Highest valid reading; also the full-travel point [counts].
    #[serde(default = "default_pedal_max")]
    pub max: u16,
}

fn default_pedal_min() -> u16 {
    PEDAL_MIN_DEFAULT
}
fn default_pedal_max() -> u16 {
    PEDAL_MAX_DEFAULT
}

impl Default for PedalChannelCalibration {
    fn default() -> Self {
        Self {
            min: PEDAL_MIN_DEFAULT,
            max: PEDAL_MAX_DEFAULT,
        }
    }
}

impl PedalChannelCalibration {
    /// Raw span between `min` and `max`.
    #[inline]
    pub const fn travel(&self) -> u16 {
        self.max.saturating_sub(self.min)
    }

    /// Travel percentage, truncated toward zero. Negative below `min`,
    /// above 100 beyond `max`.
    #[inline]
    pub fn percent(&self, raw: u16) -> i32 {
        (i32::from(raw) - i32::from(self.min)) * 100 / i32::from(self.travel())
    }

    /// Offset from `min`, clipped into `0..=travel`.
    #[inline]
    pub const fn clipped_offset(&self, raw: u16) -> u16 {
        let offset = raw.saturating_sub(self.min);
        let travel = self.travel();
        if offset > travel { travel } else { offset }
    }

    fn validate(&self, name: &str) -> Result<(), String> {
        if self.min >= self.max {
            return Err(format!(
                "{name}: min {} must be below max {}",
                self.min, self.max
            ));
        }
        if self.max > ADC_MAX {
            return Err(format!(
                "{name}: max {} exceeds ADC full scale {ADC_MAX}",
                self.max
            ));
        }
        Ok(())
    }
}

// ─── Regen Slider ───────────────────────────────────────────────────

/// Regen slider thresholds and scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegenCalibration {
    /// Readings below this raise `BRAKE_LOW` [counts].
    #[serde(default = "default_regen_error_min")]
    pub error_min: u16,
    /// Readings above this raise `BRAKE_HIGH` [counts].
    #[serde(default = "default_regen_error_max")]
    pub error_max: u16,
    /// Start of usable travel; also the "slider actuated" threshold [counts].
    #[serde(default = "default_regen_travel_min")]
    pub travel_min: u16,
    /// End of usable travel [counts].
    #[serde(default = "default_regen_travel_max")]
    pub travel_max: u16,
    /// Regen current at full travel (fraction of rated current).
    #[serde(default = "default_regen_max")]
    pub regen_max: f32,
}

fn default_regen_error_min() -> u16 {
    REGEN_ERROR_MIN_DEFAULT
}
fn default_regen_error_max() -> u16 {
    REGEN_ERROR_MAX_DEFAULT
}
fn default_regen_travel_min() -> u16 {
    REGEN_TRAVEL_MIN_DEFAULT
}
fn default_regen_travel_max() -> u16 {
    REGEN_TRAVEL_MAX_DEFAULT
}
fn default_regen_max() -> f32 {
    REGEN_MAX_DEFAULT
}

impl Default for RegenCalibration {
    fn default() -> Self {
        Self {
            error_min: REGEN_ERROR_MIN_DEFAULT,
            error_max: REGEN_ERROR_MAX_DEFAULT,
            travel_min: REGEN_TRAVEL_MIN_DEFAULT,
            travel_max: REGEN_TRAVEL_MAX_DEFAULT,
            regen_max: REGEN_MAX_DEFAULT,
        }
    }
}

impl RegenCalibration {
    /// Raw span of usable travel.
    #[inline]
    pub const fn travel(&self) -> u16 {
        self.travel_max.saturating_sub(self.travel_min)
    }

    /// Offset from `travel_min`, clipped into `0..=travel`.
    #[inline]
    pub const fn clipped_offset(&self, raw: u16) -> u16 {
        let offset = raw.saturating_sub(self.travel_min);
        let travel = self.travel();
        if offset > travel { travel } else { offset }
    }

    fn validate(&self) -> Result<(), String> {
        if self.travel_min >= self.travel_max {
            return Err(format!(
                "regen: travel_min {} must be below travel_max {}",
                self.travel_min, self.travel_max
            ));
        }
        if self.error_min > self.travel_min || self.travel_max > self.error_max {
            return Err(format!(
                "regen: travel [{}, {}] must lie inside error bounds [{}, {}]",
                self.travel_min, self.travel_max, self.error_min, self.error_max
            ));
        }
        if self.error_max > ADC_MAX {
            return Err(format!(
                "regen: error_max {} exceeds ADC full scale {ADC_MAX}",
                self.error_max
            ));
        }
        validate_current("regen.regen_max", self.regen_max)
    }
}

// ─── Setpoint Limits ────────────────────────────────────────────────

/// Output scaling for the setpoint calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetpointLimits {
    /// Pedal current at full travel (fraction of rated current).
    #[serde(default = "default_current_max")]
    pub current_max: f32,
    /// Velocity target in forward modes [rpm].
    #[serde(default = "default_rpm_forward")]
    pub rpm_forward: f32,
    /// Velocity target in reverse [rpm], zero or negative.
    #[serde(default = "default_rpm_reverse")]
    pub rpm_reverse: f32,
}

fn default_current_max() -> f32 {
    CURRENT_MAX_DEFAULT
}
fn default_rpm_forward() -> f32 {
    RPM_FORWARD_DEFAULT
}
fn default_rpm_reverse() -> f32 {
    RPM_REVERSE_DEFAULT
}

impl Default for SetpointLimits {
    fn default() -> Self {
        Self {
            current_max: CURRENT_MAX_DEFAULT,
            rpm_forward: RPM_FORWARD_DEFAULT,
            rpm_reverse: RPM_REVERSE_DEFAULT,
        }
    }
}

impl SetpointLimits {
    fn validate(&self) -> Result<(), String> {
        validate_current("limits.current_max", self.current_max)?;
        if !self.rpm_forward.is_finite() || self.rpm_forward < 0.0 {
            return Err(format!(
                "limits.rpm_forward {} must be finite and >= 0",
                self.rpm_forward
            ));
        }
        if !self.rpm_reverse.is_finite() || self.rpm_reverse > 0.0 {
            return Err(format!(
                "limits.rpm_reverse {} must be finite and <= 0",
                self.rpm_reverse
            ));
        }
        Ok(())
    }
}

fn validate_current(name: &str, value: f32) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 || value > CURRENT_SETPOINT_LIMIT {
        return Err(format!(
            "{name} {value} out of range (0, {CURRENT_SETPOINT_LIMIT}]"
        ));
    }
    Ok(())
}

// ─── Plausibility ───────────────────────────────────────────────────

/// Redundancy and accelerator/brake plausibility thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityConfig {
    /// Allowed relative deviation between pedal A and B percentages.
    #[serde(default = "default_mismatch_tolerance")]
    pub mismatch_tolerance: f32,
    /// Accelerator travel above which regen actuation raises PLAUSIBILITY [%].
    #[serde(default = "default_set_percent")]
    pub set_percent: i32,
    /// Accelerator travel at or below which PLAUSIBILITY clears [%].
    #[serde(default = "default_clear_percent")]
    pub clear_percent: i32,
}

fn default_mismatch_tolerance() -> f32 {
    MISMATCH_TOLERANCE_DEFAULT
}
fn default_set_percent() -> i32 {
    PLAUSIBILITY_SET_PERCENT_DEFAULT
}
fn default_clear_percent() -> i32 {
    PLAUSIBILITY_CLEAR_PERCENT_DEFAULT
}

impl Default for PlausibilityConfig {
    fn default() -> Self {
        Self {
            mismatch_tolerance: MISMATCH_TOLERANCE_DEFAULT,
            set_percent: PLAUSIBILITY_SET_PERCENT_DEFAULT,
            clear_percent: PLAUSIBILITY_CLEAR_PERCENT_DEFAULT,
        }
    }
}

impl PlausibilityConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.mismatch_tolerance > 0.0 && self.mismatch_tolerance < 1.0) {
            return Err(format!(
                "plausibility.mismatch_tolerance {} out of range (0, 1)",
                self.mismatch_tolerance
            ));
        }
        if !(0..=100).contains(&self.set_percent) {
            return Err(format!(
                "plausibility.set_percent {} out of range [0, 100]",
                self.set_percent
            ));
        }
        if self.clear_percent < 0 || self.clear_percent >= self.set_percent {
            return Err(format!(
                "plausibility.clear_percent {} must be in [0, set_percent {})",
                self.clear_percent, self.set_percent
            ));
        }
        Ok(())
    }
}

// ─── Top-Level Calibration ──────────────────────────────────────────

/// Complete pedal calibration.
///
/// # TOML Example
///
/// ```toml
/// [calibration.pedal_a]
/// min = 400
/// max = 3600
///
/// [calibration.limits]
/// rpm_forward = 9000.0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Accelerator hall sensor A.
    #[serde(default)]
    pub pedal_a: PedalChannelCalibration,
    /// Accelerator hall sensor B.
    #[serde(default)]
    pub pedal_b: PedalChannelCalibration,
    /// Regen slider.
    #[serde(default)]
    pub regen: RegenCalibration,
    /// Output scaling.
    #[serde(default)]
    pub limits: SetpointLimits,
    /// Plausibility thresholds.
    #[serde(default)]
    pub plausibility: PlausibilityConfig,
}

impl Calibration {
    /// Validate parameter bounds.
    ///
    /// Rejects anything that would divide by zero or produce a setpoint
    /// outside the motor controller's range.
    pub fn validate(&self) -> Result<(), String> {
        self.pedal_a.validate("pedal_a")?;
        self.pedal_b.validate("pedal_b")?;
        self.regen.validate()?;
        self.limits.validate()?;
        self.plausibility.validate()?;
        if self.regen.regen_max > self.limits.current_max {
            return Err(format!(
                "regen.regen_max {} exceeds limits.current_max {}",
                self.regen.regen_max, self.limits.current_max
            ));
        }
        Ok(())
    }

    /// Validate and seal.
    pub fn validated(self) -> Result<ValidatedCalibration, String> {
        self.validate()?;
        Ok(ValidatedCalibration(self))
    }
}

/// Calibration that passed [`Calibration::validate`]. Travel spans are
/// guaranteed non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedCalibration(Calibration);

impl ValidatedCalibration {
    #[inline]
    pub const fn get(&self) -> &Calibration {
        &self.0
    }
}

impl Deref for ValidatedCalibration {
    type Target = Calibration;

    fn deref(&self) -> &Calibration {
        &self.0
    }
}

impl TryFrom<Calibration> for ValidatedCalibration {
    type Error = String;

    fn try_from(cal: Calibration) -> Result<Self, String> {
        cal.validated()
    }
}
