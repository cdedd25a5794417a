//! tri86 Common Library
//!
//! Shared types, constants and configuration loading for the tri86 drive
//! controller workspace.
//!
//! # Module Structure
//!
//! - [`pedal`] - Drive mode, fault flags, samples, command output and calibration
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - ADC limits and calibration defaults
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use tri_common::prelude::*;
//!
//! let cal = Calibration::default().validated().unwrap();
//! assert!(cal.pedal_a.travel() > 0);
//! ```

pub mod config;
pub mod consts;
pub mod pedal;
pub mod prelude;
