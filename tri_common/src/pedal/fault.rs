//! Pedal input fault bitflags.
//!
//! `FaultFlags` is the aliased set carried in every `CommandOutput`.
//! `ChannelFaults` keeps the per-channel range detail that the aliased set
//! folds together; it is diagnostic only and never gates torque on its own.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

bitflags! {
    /// Input-plausibility faults for one control cycle.
    ///
    /// Any set bit forces zero current and zero rpm.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FaultFlags: u8 {
        /// Pedal A or B below its minimum valid reading.
        const ACCEL_LOW      = 0x01;
        /// Pedal A or B above its maximum valid reading.
        const ACCEL_HIGH     = 0x02;
        /// Pedal A and B disagree beyond the mismatch tolerance.
        const ACCEL_MISMATCH = 0x04;
        /// Regen slider below its error threshold.
        const BRAKE_LOW      = 0x08;
        /// Regen slider above its error threshold.
        const BRAKE_HIGH     = 0x10;
        /// Accelerator and regen actuated together. Latched until pedal release.
        const PLAUSIBILITY   = 0x20;
    }
}

const_assert_eq!(core::mem::size_of::<FaultFlags>(), 1);

/// Number of defined fault flags.
pub const FAULT_FLAG_COUNT: usize = FaultFlags::all().bits().count_ones() as usize;

impl FaultFlags {
    /// Range faults on the redundant accelerator channels.
    pub const ACCEL_RANGE_MASK: Self =
        Self::from_bits_truncate(Self::ACCEL_LOW.bits() | Self::ACCEL_HIGH.bits());

    /// Range faults on the regen slider.
    pub const BRAKE_RANGE_MASK: Self =
        Self::from_bits_truncate(Self::BRAKE_LOW.bits() | Self::BRAKE_HIGH.bits());

    /// Returns true if no fault is present and torque may be commanded.
    #[inline]
    pub const fn is_clear(&self) -> bool {
        self.is_empty()
    }

    /// Returns true if the plausibility latch is part of this set.
    #[inline]
    pub const fn plausibility(&self) -> bool {
        self.contains(Self::PLAUSIBILITY)
    }

    /// Pack into a single `u8` for the transmission layer.
    #[inline]
    pub const fn pack(&self) -> u8 {
        self.bits()
    }

    /// Unpack from a single `u8`. Unknown bits are dropped.
    #[inline]
    pub const fn unpack(v: u8) -> Self {
        Self::from_bits_truncate(v)
    }

    /// Names of the set flags, in bit order.
    pub fn names(&self) -> heapless::Vec<&'static str, FAULT_FLAG_COUNT> {
        let mut out = heapless::Vec::new();
        for (name, _) in self.iter_names() {
            let pushed = out.push(name);
            debug_assert!(pushed.is_ok());
        }
        out
    }

    /// True if either accelerator channel is out of range.
    #[inline]
    pub const fn accel_range_fault(&self) -> bool {
        self.intersects(Self::ACCEL_RANGE_MASK)
    }

    /// True if the regen slider is out of range.
    #[inline]
    pub const fn brake_range_fault(&self) -> bool {
        self.intersects(Self::BRAKE_RANGE_MASK)
    }
}

impl Default for FaultFlags {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags! {
    /// Per-channel range violations behind `ACCEL_LOW`/`ACCEL_HIGH`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ChannelFaults: u8 {
        /// Pedal A below minimum.
        const PEDAL_A_LOW  = 0x01;
        /// Pedal A above maximum.
        const PEDAL_A_HIGH = 0x02;
        /// Pedal B below minimum.
        const PEDAL_B_LOW  = 0x04;
        /// Pedal B above maximum.
        const PEDAL_B_HIGH = 0x08;
    }
}

impl ChannelFaults {
    /// Fold onto the shared accelerator flags: either channel raises the fault.
    #[inline]
    pub const fn aliased(&self) -> FaultFlags {
        let mut bits = 0;
        if self.intersects(Self::PEDAL_A_LOW.union(Self::PEDAL_B_LOW)) {
            bits |= FaultFlags::ACCEL_LOW.bits();
        }
        if self.intersects(Self::PEDAL_A_HIGH.union(Self::PEDAL_B_HIGH)) {
            bits |= FaultFlags::ACCEL_HIGH.bits();
        }
        FaultFlags::from_bits_truncate(bits)
    }
}

impl Default for ChannelFaults {
    fn default() -> Self {
        Self::empty()
    }
}
