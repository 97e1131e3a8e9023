//! Motor output implementations
//!
//! - PWM motor stage: commanded power mapped to duty cycle

pub mod pwm;

pub use pwm::{PwmMotor, PwmMotorConfig};
