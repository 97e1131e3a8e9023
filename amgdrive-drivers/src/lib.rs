//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in amgdrive-core for the motor stage and the rider inputs:
//!
//! - Motor outputs (PWM duty via `embedded-hal`)
//! - Analog inputs (throttle pedal, centered throttle/brake lever)

#![no_std]
#![deny(unsafe_code)]

pub mod motor;
pub mod sensor;
