//! Rider input sensors
//!
//! Analog throttle and brake inputs read through an ADC and shaped into
//! [`DriveInput`](amgdrive_core::control::DriveInput) values.

pub mod lever;
pub mod pedal;

pub use lever::{Lever, LeverConfig};
pub use pedal::{Pedal, PedalConfig};

/// Errors that can occur while reading an input sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Reading outside the wiring-valid window (open or shorted sensor)
    OutOfRange,
    /// ADC conversion error
    ConversionError,
    /// Calibration thresholds out of order
    InvalidCalibration,
}

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    fn read(&mut self) -> Result<u16, SensorError>;
}

/// Dummy ADC for testing (returns a fixed value)
#[cfg(test)]
pub struct DummyAdc(pub u16);

#[cfg(test)]
impl AdcReader for DummyAdc {
    fn read(&mut self) -> Result<u16, SensorError> {
        Ok(self.0)
    }
}
