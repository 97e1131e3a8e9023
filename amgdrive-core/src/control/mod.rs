//! Drive loop
//!
//! Serializes throttle, brake and idle inputs into controller ticks and
//! forwards the resulting power to the motor output.

pub mod drive;

pub use drive::{DriveInput, DriveLoop};
