//! Safety module root.
//!
//! Pedal range, redundancy and plausibility fault detection.

pub mod faults;
pub mod plausibility;
