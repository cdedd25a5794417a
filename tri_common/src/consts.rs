//! System-wide constants for the tri86 workspace.
//!
//! Single source of truth for ADC limits, calibration defaults and
//! default paths.

/// Full-scale reading of the 12-bit pedal ADC.
pub const ADC_MAX: u16 = 4095;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/tri86/pedal.toml";

// ─── Pedal Defaults ─────────────────────────────────────────────────

/// Default lowest valid pedal A/B reading [counts].
pub const PEDAL_MIN_DEFAULT: u16 = 400;
/// Default highest valid pedal A/B reading [counts].
pub const PEDAL_MAX_DEFAULT: u16 = 3600;

// ─── Regen Slider Defaults ──────────────────────────────────────────

/// Below this the regen slider is considered disconnected/shorted [counts].
pub const REGEN_ERROR_MIN_DEFAULT: u16 = 100;
/// Above this the regen slider is considered shorted to supply [counts].
pub const REGEN_ERROR_MAX_DEFAULT: u16 = 4000;
/// Start of the usable regen travel [counts].
pub const REGEN_TRAVEL_MIN_DEFAULT: u16 = 400;
/// End of the usable regen travel [counts].
pub const REGEN_TRAVEL_MAX_DEFAULT: u16 = 3600;

// ─── Setpoint Defaults ──────────────────────────────────────────────

/// Upper bound for any current setpoint (fraction of rated motor current).
pub const CURRENT_SETPOINT_LIMIT: f32 = 1.0;
/// Default pedal current at full travel.
pub const CURRENT_MAX_DEFAULT: f32 = 1.0;
/// Default regen current at full slider travel.
pub const REGEN_MAX_DEFAULT: f32 = 0.5;
/// Default forward velocity target [rpm].
pub const RPM_FORWARD_DEFAULT: f32 = 12_000.0;
/// Default reverse velocity target [rpm].
pub const RPM_REVERSE_DEFAULT: f32 = -5_000.0;

// ─── Plausibility Defaults ──────────────────────────────────────────

/// Allowed relative deviation between redundant pedal channels.
pub const MISMATCH_TOLERANCE_DEFAULT: f32 = 0.10;
/// Accelerator travel above which simultaneous regen raises PLAUSIBILITY [%].
pub const PLAUSIBILITY_SET_PERCENT_DEFAULT: i32 = 25;
/// Accelerator travel at or below which PLAUSIBILITY clears [%].
pub const PLAUSIBILITY_CLEAR_PERCENT_DEFAULT: i32 = 0;
