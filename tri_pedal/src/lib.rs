//! # tri86 Pedal Evaluator Library
//!
//! Turns redundant accelerator pedal readings, a regen slider and the
//! selected drive mode into a motor current and rpm setpoint, once per
//! control cycle. Any implausible input forces zero torque.
//!
//! ## Cycle Phases
//!
//! 1. **Fault detection** ([`safety::faults`]): range, redundancy and
//!    plausibility checks, independent of drive mode
//! 2. **Setpoint calculation** ([`control::setpoint`]): pedal or regen
//!    scaling, dispatched on the mode family
//!
//! [`cycle::PedalEvaluator`] ties the two together and owns the only
//! cross-cycle state: the plausibility latch.
//!
//! ## Zero-Allocation Cycle
//!
//! Calibration is validated once at load time. The cycle itself performs no
//! heap allocation, no I/O and no logging.

pub mod config;
pub mod control;
pub mod cycle;
pub mod replay;
pub mod safety;
