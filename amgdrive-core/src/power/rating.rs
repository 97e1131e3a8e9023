//! Power rating configuration
//!
//! The three tunables of the power controller, as loaded from the
//! settings store at startup or on reconfiguration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::settings::{keys, SettingsError, SettingsStore};

/// Reasons a rating is rejected by [`PowerRating::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RatingError {
    /// A feedback multiplier is zero (would divide by zero every tick)
    ZeroFeedback,
    /// A value is NaN or infinite
    NonFinite,
    /// Maximum power is below zero
    NegativeMaxPower,
}

/// Ramp tuning and power ceiling for [`PowerController`]
///
/// [`PowerController`]: super::PowerController
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerRating {
    /// Divisor for throttle and brake ramping (larger = slower)
    pub feedback_multiplier: f32,
    /// Divisor for the engine brake decay (larger = slower)
    pub feedback_brake_multiplier: f32,
    /// Ceiling for the commanded power
    pub max_power: f32,
}

impl Default for PowerRating {
    /// Unconfigured rating: unit multipliers and zero deliverable power
    fn default() -> Self {
        Self::UNCONFIGURED
    }
}

impl PowerRating {
    /// Rating of a controller that has never been configured
    pub const UNCONFIGURED: Self = Self {
        feedback_multiplier: 1.0,
        feedback_brake_multiplier: 1.0,
        max_power: 0.0,
    };

    /// Create a new rating
    pub const fn new(feedback_multiplier: f32, feedback_brake_multiplier: f32, max_power: f32) -> Self {
        Self {
            feedback_multiplier,
            feedback_brake_multiplier,
            max_power,
        }
    }

    /// Check that the rating can be applied without breaking the ramp
    pub fn validate(&self) -> Result<(), RatingError> {
        let values = [
            self.feedback_multiplier,
            self.feedback_brake_multiplier,
            self.max_power,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(RatingError::NonFinite);
        }
        if self.feedback_multiplier == 0.0 || self.feedback_brake_multiplier == 0.0 {
            return Err(RatingError::ZeroFeedback);
        }
        if self.max_power < 0.0 {
            return Err(RatingError::NegativeMaxPower);
        }
        Ok(())
    }

    /// Read the rating from its named settings
    ///
    /// All three keys must be present and numeric. The rating is not
    /// validated here.
    pub fn from_settings<const N: usize>(store: &SettingsStore<N>) -> Result<Self, SettingsError> {
        Ok(Self {
            feedback_multiplier: store.get_f32(keys::FEEDBACK_MULTIPLIER)?,
            feedback_brake_multiplier: store.get_f32(keys::FEEDBACK_BRAKE_MULTIPLIER)?,
            max_power: store.get_f32(keys::MAX_POWER)?,
        })
    }

    /// Write the rating into its named settings
    ///
    /// Only values that actually changed are marked dirty.
    pub fn store_into<const N: usize>(&self, store: &mut SettingsStore<N>) -> Result<(), SettingsError> {
        store.set_f32(keys::FEEDBACK_MULTIPLIER, self.feedback_multiplier)?;
        store.set_f32(keys::FEEDBACK_BRAKE_MULTIPLIER, self.feedback_brake_multiplier)?;
        store.set_f32(keys::MAX_POWER, self.max_power)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delivers_no_power() {
        let rating = PowerRating::default();
        assert_eq!(rating.max_power, 0.0);
        assert_eq!(rating.feedback_multiplier, 1.0);
        assert_eq!(rating.feedback_brake_multiplier, 1.0);
        assert_eq!(rating.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_feedback() {
        assert_eq!(
            PowerRating::new(0.0, 1.0, 10.0).validate(),
            Err(RatingError::ZeroFeedback)
        );
        assert_eq!(
            PowerRating::new(1.0, 0.0, 10.0).validate(),
            Err(RatingError::ZeroFeedback)
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert_eq!(
            PowerRating::new(f32::NAN, 1.0, 10.0).validate(),
            Err(RatingError::NonFinite)
        );
        assert_eq!(
            PowerRating::new(2.0, 1.0, f32::INFINITY).validate(),
            Err(RatingError::NonFinite)
        );
    }

    #[test]
    fn test_validate_rejects_negative_ceiling() {
        assert_eq!(
            PowerRating::new(2.0, 2.0, -1.0).validate(),
            Err(RatingError::NegativeMaxPower)
        );
    }

    #[test]
    fn test_settings_round_trip() {
        let mut store: SettingsStore<8> = SettingsStore::new();
        let rating = PowerRating::new(4.0, 2.5, 50.0);
        rating.store_into(&mut store).unwrap();

        assert!(store.is_dirty(keys::MAX_POWER));
        assert_eq!(PowerRating::from_settings(&store), Ok(rating));
    }

    #[test]
    fn test_from_settings_missing_key() {
        let mut store: SettingsStore<8> = SettingsStore::new();
        store.set_f32(keys::FEEDBACK_MULTIPLIER, 2.0).unwrap();
        store.set_f32(keys::FEEDBACK_BRAKE_MULTIPLIER, 2.0).unwrap();

        assert_eq!(
            PowerRating::from_settings(&store),
            Err(SettingsError::Missing)
        );
    }

    #[test]
    fn test_from_settings_bad_number() {
        let mut store: SettingsStore<8> = SettingsStore::new();
        PowerRating::new(2.0, 2.0, 10.0).store_into(&mut store).unwrap();
        store.set(keys::MAX_POWER, "lots").unwrap();

        assert_eq!(
            PowerRating::from_settings(&store),
            Err(SettingsError::InvalidNumber)
        );
    }
}
