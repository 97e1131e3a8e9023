//! PWM motor output
//!
//! Maps the controller's power command onto a PWM duty cycle:
//! - Zero power is zero duty (motor off)
//! - Any positive power starts at the minimum duty where the motor
//!   actually turns, then scales linearly up to full duty at
//!   `full_scale_power`
//!
//! # Usage
//!
//! ```ignore
//! let motor = PwmMotor::new(pwm_channel, PwmMotorConfig::default());
//! let mut drive = DriveLoop::new(motor);
//!
//! // Every control tick:
//! drive.tick(input)?;
//! ```

use amgdrive_core::signal::remap;
use amgdrive_core::traits::PowerOutput;
use embedded_hal::pwm::SetDutyCycle;

/// PWM motor configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmMotorConfig {
    /// Power that maps to 100% duty
    pub full_scale_power: f32,
    /// Minimum duty cycle percentage (below this the motor won't start)
    pub min_duty_percent: u8,
}

impl Default for PwmMotorConfig {
    fn default() -> Self {
        Self {
            full_scale_power: 100.0,
            min_duty_percent: 20,
        }
    }
}

/// Motor stage driven by one PWM channel
pub struct PwmMotor<P> {
    pwm: P,
    config: PwmMotorConfig,
    /// Last duty written to the channel
    duty: u16,
}

impl<P: SetDutyCycle> PwmMotor<P> {
    /// Create a motor output; the channel is not touched until the first
    /// power command
    pub fn new(pwm: P, config: PwmMotorConfig) -> Self {
        Self {
            pwm,
            config,
            duty: 0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &PwmMotorConfig {
        &self.config
    }

    /// Last duty written to the channel
    pub fn duty(&self) -> u16 {
        self.duty
    }

    /// Give back the PWM channel
    pub fn release(self) -> P {
        self.pwm
    }

    /// Convert a power command to a raw duty value
    ///
    /// Power above `full_scale_power` saturates at full duty. Zero,
    /// negative and NaN power all switch the motor off.
    pub fn power_to_duty(&self, power: f32) -> u16 {
        if power.is_nan() || power <= 0.0 {
            return 0;
        }
        let max_duty = f32::from(self.pwm.max_duty_cycle());
        let min_fraction = f32::from(self.config.min_duty_percent.min(100)) / 100.0;
        let fraction = remap(power, 0.0, self.config.full_scale_power, min_fraction, 1.0);
        (fraction * max_duty + 0.5) as u16
    }
}

impl<P: SetDutyCycle> PowerOutput for PwmMotor<P> {
    type Error = P::Error;

    fn apply_power(&mut self, power: f32) -> Result<(), Self::Error> {
        let duty = self.power_to_duty(power);
        self.pwm.set_duty_cycle(duty)?;
        self.duty = duty;
        Ok(())
    }
}
