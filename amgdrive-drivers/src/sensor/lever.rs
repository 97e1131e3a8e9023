//! Centered throttle/brake lever
//!
//! A spring-centered rocker: pushing forward requests throttle, pulling
//! back requests braking. The center band is a deadzone so a lever at
//! rest never produces a small residual command.

use amgdrive_core::control::DriveInput;
use amgdrive_core::signal::{median_with_deadzone, sign_of};

use super::{AdcReader, SensorError};

/// Lever calibration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LeverConfig {
    /// Reading at full back (full brake)
    pub adc_min: u16,
    /// Reading at full forward (full throttle)
    pub adc_max: u16,
    /// Fraction of half-travel around center treated as rest
    pub deadzone_ratio: f32,
    /// Throttle level at full forward
    pub throttle_scale: f32,
    /// Brake magnitude at full back
    pub brake_scale: f32,
}

impl Default for LeverConfig {
    fn default() -> Self {
        Self {
            adc_min: 0,
            adc_max: 4095,
            deadzone_ratio: 0.08,
            throttle_scale: 100.0,
            brake_scale: 100.0,
        }
    }
}

/// Centered lever on one ADC channel
pub struct Lever<ADC> {
    adc: ADC,
    config: LeverConfig,
}

impl<ADC> Lever<ADC> {
    /// Create a new lever
    pub fn new(adc: ADC, config: LeverConfig) -> Self {
        Self { adc, config }
    }

    /// Get the calibration
    pub fn config(&self) -> &LeverConfig {
        &self.config
    }

    /// Lever position in `[-1, 1]`, exactly `0.0` inside the deadzone
    pub fn position(&self, raw: u16) -> f32 {
        median_with_deadzone(
            f32::from(raw),
            f32::from(self.config.adc_min),
            f32::from(self.config.adc_max),
            self.config.deadzone_ratio,
        )
    }

    /// Convert a raw reading to a drive input
    pub fn input_for(&self, raw: u16) -> DriveInput {
        let position = self.position(raw);
        match sign_of(position) {
            1 => DriveInput::Throttle(position * self.config.throttle_scale),
            -1 => DriveInput::Brake(-position * self.config.brake_scale),
            _ => DriveInput::Idle,
        }
    }
}

impl<ADC: AdcReader> Lever<ADC> {
    /// Read the lever and convert it to a drive input
    pub fn read_input(&mut self) -> Result<DriveInput, SensorError> {
        let raw = self.adc.read()?;
        Ok(self.input_for(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::DummyAdc;

    fn approx(a: f32, b: f32) -> bool {
        let diff = a - b;
        diff < 1e-3 && diff > -1e-3
    }

    fn lever(raw: u16) -> Lever<DummyAdc> {
        Lever::new(DummyAdc(raw), LeverConfig::default())
    }

    #[test]
    fn test_center_is_idle() {
        for raw in [1900, 2047, 2048, 2200] {
            assert_eq!(lever(raw).read_input(), Ok(DriveInput::Idle));
        }
    }

    #[test]
    fn test_full_forward_is_full_throttle() {
        match lever(4095).read_input() {
            Ok(DriveInput::Throttle(level)) => assert!(approx(level, 100.0)),
            other => panic!("unexpected input: {:?}", other),
        }
    }

    #[test]
    fn test_full_back_is_full_brake() {
        match lever(0).read_input() {
            Ok(DriveInput::Brake(magnitude)) => assert!(approx(magnitude, 100.0)),
            other => panic!("unexpected input: {:?}", other),
        }
    }

    #[test]
    fn test_partial_travel_scales() {
        let config = LeverConfig {
            adc_min: 0,
            adc_max: 2000,
            deadzone_ratio: 0.2,
            throttle_scale: 40.0,
            brake_scale: 80.0,
        };
        let lever = Lever::new(DummyAdc(0), config);

        // 1600 -> 0.6 normalized -> (0.6 - 0.2) / 0.8 = 0.5
        match lever.input_for(1600) {
            DriveInput::Throttle(level) => assert!(approx(level, 20.0)),
            other => panic!("unexpected input: {:?}", other),
        }
        // 400 -> -0.6 normalized -> -0.5
        match lever.input_for(400) {
            DriveInput::Brake(magnitude) => assert!(approx(magnitude, 40.0)),
            other => panic!("unexpected input: {:?}", other),
        }
    }

    #[test]
    fn test_adc_error_propagates() {
        struct FailingAdc;

        impl AdcReader for FailingAdc {
            fn read(&mut self) -> Result<u16, SensorError> {
                Err(SensorError::ConversionError)
            }
        }

        let mut lever = Lever::new(FailingAdc, LeverConfig::default());
        assert_eq!(lever.read_input(), Err(SensorError::ConversionError));
    }
}
