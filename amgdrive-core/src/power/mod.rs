//! Power ramp controller
//!
//! Turns per-tick throttle, brake and idle inputs into a ramped,
//! clamped motor power command.

pub mod controller;
pub mod rating;

pub use controller::{PowerController, SAFETY_BRAKE_VALUE};
pub use rating::{PowerRating, RatingError};
