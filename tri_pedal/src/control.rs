//! Control module root.
//!
//! Scaling of pedal and regen inputs into motor setpoints.

pub mod setpoint;
