//! Drive mode enumeration and its setpoint family.
//!
//! `DriveMode` is selected by the mode-management layer and only read here.
//! `ModeFamily` is what the setpoint calculator actually dispatches on.

use serde::{Deserialize, Serialize};

/// Vehicle operating mode as reported by the mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DriveMode {
    /// Controller powered down.
    Off = 0,
    /// Ignition on, drive not yet enabled.
    On = 1,
    /// Precharge / start sequence running.
    Start = 2,
    /// Neutral: no tractive effort.
    Neutral = 3,
    /// Forward, low gear ratio.
    DriveLow = 4,
    /// Forward, high gear ratio.
    DriveHigh = 5,
    /// Reverse.
    Reverse = 6,
    /// Forward with light regen on lift-off.
    BrakeLow = 7,
    /// Forward with heavy regen on lift-off.
    BrakeHigh = 8,
    /// Charger connected.
    Charge = 9,
}

impl DriveMode {
    /// All modes, in wire-code order.
    pub const ALL: [DriveMode; 10] = [
        Self::Off,
        Self::On,
        Self::Start,
        Self::Neutral,
        Self::DriveLow,
        Self::DriveHigh,
        Self::Reverse,
        Self::BrakeLow,
        Self::BrakeHigh,
        Self::Charge,
    ];

    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            2 => Some(Self::Start),
            3 => Some(Self::Neutral),
            4 => Some(Self::DriveLow),
            5 => Some(Self::DriveHigh),
            6 => Some(Self::Reverse),
            7 => Some(Self::BrakeLow),
            8 => Some(Self::BrakeHigh),
            9 => Some(Self::Charge),
            _ => None,
        }
    }

    /// Setpoint family for this mode.
    ///
    /// Exhaustive on purpose: a new mode must be classified here before the
    /// crate compiles.
    #[inline]
    pub const fn family(self) -> ModeFamily {
        match self {
            Self::Reverse => ModeFamily::Reverse,
            Self::DriveLow | Self::DriveHigh | Self::BrakeLow | Self::BrakeHigh => {
                ModeFamily::Forward
            }
            Self::Charge | Self::Neutral | Self::Start | Self::On | Self::Off => ModeFamily::Zero,
        }
    }
}

impl Default for DriveMode {
    fn default() -> Self {
        Self::Off
    }
}

/// How a drive mode maps onto current/rpm setpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeFamily {
    /// Pedal current toward `rpm_reverse`, or regen at zero rpm.
    Reverse,
    /// Pedal current toward `rpm_forward`, or regen at zero rpm.
    Forward,
    /// No torque, no speed request.
    Zero,
}

impl ModeFamily {
    /// Family for a raw mode code. Unknown codes fall back to [`ModeFamily::Zero`].
    #[inline]
    pub const fn from_raw(value: u8) -> Self {
        match DriveMode::from_u8(value) {
            Some(mode) => mode.family(),
            None => Self::Zero,
        }
    }
}

impl From<DriveMode> for ModeFamily {
    fn from(mode: DriveMode) -> Self {
        mode.family()
    }
}
