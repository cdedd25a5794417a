//! Pedal evaluator shared types.
//!
//! Everything the evaluator exchanges with its collaborators lives here:
//! drive mode, fault bitflags, the per-cycle sample and command output,
//! and the calibration it is configured with.

pub mod calibration;
pub mod command;
pub mod fault;
pub mod mode;
