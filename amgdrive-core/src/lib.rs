//! Board-agnostic core logic for the AMG Drive motor controller
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Signal shaping math (interpolation, clamping, deadzones, easing)
//! - Power ramp controller (throttle, brake and engine brake ticks)
//! - Dirty-flag settings store for configuration and telemetry sync
//! - Drive loop that turns tick inputs into output commands
//! - Hardware abstraction traits

#![no_std]
#![deny(unsafe_code)]

pub mod control;
pub mod power;
pub mod settings;
pub mod signal;
pub mod traits;
