//! Hall-effect throttle pedal
//!
//! A one-sided pedal whose output rises from a rest voltage to a full
//! travel voltage. Hall pedals never output the rails, so readings near
//! 0 or full scale mean a broken wire and are rejected instead of being
//! interpreted as "no throttle" or "full throttle".
//!
//! ```text
//!  0      fault_low   idle_threshold        full_travel   fault_high   4095
//!  |  fault  |     idle      |     throttle ramp     |  full  |  fault  |
//! ```

use amgdrive_core::control::DriveInput;
use amgdrive_core::signal::{bucket_index, remap_with_floor};

use super::{AdcReader, SensorError};

/// Throttle pedal calibration (12-bit ADC counts)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PedalConfig {
    /// Readings below this are a wiring fault
    pub fault_low: u16,
    /// Readings below this are the rest position
    pub idle_threshold: u16,
    /// Reading at full pedal travel
    pub full_travel: u16,
    /// Readings above this are a wiring fault
    pub fault_high: u16,
    /// Throttle level reported at full travel (controller power units)
    pub full_scale: f32,
}

impl Default for PedalConfig {
    fn default() -> Self {
        // 0.8 V rest, 4.2 V full on a 5 V sensor divided down to 3.3 V
        Self {
            fault_low: 200,
            idle_threshold: 1100,
            full_travel: 3500,
            fault_high: 3900,
            full_scale: 100.0,
        }
    }
}

impl PedalConfig {
    /// Check that the thresholds are ordered
    /// `fault_low <= idle_threshold < full_travel <= fault_high`
    pub fn validate(&self) -> Result<(), SensorError> {
        let ordered = self.fault_low <= self.idle_threshold
            && self.idle_threshold < self.full_travel
            && self.full_travel <= self.fault_high;
        if !ordered || !self.full_scale.is_finite() {
            return Err(SensorError::InvalidCalibration);
        }
        Ok(())
    }
}

/// Throttle pedal on one ADC channel
pub struct Pedal<ADC> {
    adc: ADC,
    config: PedalConfig,
}

impl<ADC> Pedal<ADC> {
    /// Create a new pedal
    pub fn new(adc: ADC, config: PedalConfig) -> Self {
        Self { adc, config }
    }

    /// Get the calibration
    pub fn config(&self) -> &PedalConfig {
        &self.config
    }

    /// Convert a raw reading to a throttle level
    ///
    /// Returns `0.0` in the rest band, otherwise scales the travel from
    /// `idle_threshold` to `full_travel` onto `[0, full_scale]`.
    pub fn level(&self, raw: u16) -> Result<f32, SensorError> {
        if raw < self.config.fault_low || raw > self.config.fault_high {
            return Err(SensorError::OutOfRange);
        }
        Ok(remap_with_floor(
            0.0,
            f32::from(raw),
            f32::from(self.config.idle_threshold),
            f32::from(self.config.full_travel),
            0.0,
            self.config.full_scale,
        ))
    }

    /// Convert a raw reading to a drive input
    ///
    /// Any positive level is a throttle request; the rest band is idle.
    pub fn input_for(&self, raw: u16) -> Result<DriveInput, SensorError> {
        let level = self.level(raw)?;
        if level > 0.0 {
            Ok(DriveInput::Throttle(level))
        } else {
            Ok(DriveInput::Idle)
        }
    }

    /// Quantize the pedal travel into `segments` steps (for a level gauge)
    ///
    /// The rest band is segment `0` and full travel is `segments - 1`.
    /// An unvalidated calibration never panics here; an inverted travel
    /// band counts from `idle_threshold` down to `full_travel`.
    pub fn segment(&self, raw: u16, segments: u8) -> u8 {
        let idle = self.config.idle_threshold;
        let full = self.config.full_travel;
        let raw = raw.max(idle.min(full)).min(idle.max(full));
        let index = bucket_index(
            i32::from(idle),
            i32::from(full),
            i32::from(raw),
            i32::from(segments),
        );
        index.clamp(0, i32::from(segments.saturating_sub(1))) as u8
    }
}

impl<ADC: AdcReader> Pedal<ADC> {
    /// Read the pedal and convert it to a drive input
    pub fn read_input(&mut self) -> Result<DriveInput, SensorError> {
        let raw = self.adc.read()?;
        self.input_for(raw)
    }
}
