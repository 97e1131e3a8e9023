//! Power ramp state machine
//!
//! The controller holds a single continuous state, the commanded power,
//! and behaves like a rate-limited first-order filter with a floor at zero
//! and a ceiling at the configured maximum:
//!
//! - [`PowerController::empower`] eases toward the throttle and clamps to
//!   `[0, max_power]`
//! - [`PowerController::brake`] eases toward `-magnitude` and floors at zero
//! - [`PowerController::engine_brake`] eases toward [`SAFETY_BRAKE_VALUE`]
//!   with its own ramp rate and floors at zero
//!
//! The brake paths never consult the ceiling, so they can always bring
//! the power down to zero whatever `max_power` is.
//!
//! # Usage
//!
//! ```
//! use amgdrive_core::power::PowerController;
//!
//! let mut controller = PowerController::new();
//! controller.set_power_rating(2.0, 2.0, 100.0);
//!
//! assert_eq!(controller.empower(100.0), 50.0);
//! assert_eq!(controller.empower(100.0), 75.0);
//! assert_eq!(controller.brake(0.0), 37.5);
//! ```

use super::rating::{PowerRating, RatingError};
use crate::signal::{clamp, ease_toward_target};

/// Target used when no input is present
///
/// Slightly below zero so the passive decay crosses zero in a finite
/// number of ticks instead of approaching it asymptotically.
pub const SAFETY_BRAKE_VALUE: f32 = -0.1;

/// Ramped motor power controller
///
/// Owned by exactly one control loop and driven once per tick. After every
/// tick `0 <= cumulated_power <= max_power` holds, as long as the controller
/// is configured with `max_power >= 0`.
///
/// A fresh controller has `max_power = 0` and so delivers no power until
/// [`set_power_rating`](Self::set_power_rating) is called.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerController {
    /// Current commanded power
    cumulated_power: f32,
    /// Engine brake target (fixed at construction)
    safety_brake_value: f32,
    /// Ramp divisor for throttle and brake
    feedback_multiplier: f32,
    /// Ramp divisor for the engine brake
    feedback_brake_multiplier: f32,
    /// Power ceiling
    max_power: f32,
}

impl Default for PowerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerController {
    /// Create an unconfigured controller at zero power
    pub const fn new() -> Self {
        Self {
            cumulated_power: 0.0,
            safety_brake_value: SAFETY_BRAKE_VALUE,
            feedback_multiplier: PowerRating::UNCONFIGURED.feedback_multiplier,
            feedback_brake_multiplier: PowerRating::UNCONFIGURED.feedback_brake_multiplier,
            max_power: PowerRating::UNCONFIGURED.max_power,
        }
    }

    /// Ramp toward `throttle`
    ///
    /// The result is clamped to `[0, max_power]`, so a negative throttle
    /// never drives the power below zero and a large one never exceeds the
    /// ceiling.
    pub fn empower(&mut self, throttle: f32) -> f32 {
        let eased = ease_toward_target(throttle, self.cumulated_power, self.feedback_multiplier);
        self.cumulated_power = clamp(eased, 0.0, self.max_power);
        self.cumulated_power
    }

    /// Ramp toward `-magnitude`
    ///
    /// The result is floored at zero. No ceiling applies here. With
    /// `feedback_multiplier > 1` even a very large magnitude needs several
    /// ticks to reach zero; a multiplier of `1` or less stops in one tick.
    pub fn brake(&mut self, magnitude: f32) -> f32 {
        let eased = ease_toward_target(-magnitude, self.cumulated_power, self.feedback_multiplier);
        self.cumulated_power = self.settle_braking(eased);
        self.cumulated_power
    }

    /// Passive decay when no input is present
    ///
    /// Ramps toward [`SAFETY_BRAKE_VALUE`] using the brake multiplier and
    /// floors at zero, so the power reaches exactly zero after a finite
    /// number of ticks.
    pub fn engine_brake(&mut self) -> f32 {
        let eased = ease_toward_target(
            self.safety_brake_value,
            self.cumulated_power,
            self.feedback_brake_multiplier,
        );
        self.cumulated_power = self.settle_braking(eased);
        self.cumulated_power
    }

    /// Floor a braking step at zero and keep it from raising the power
    ///
    /// For non-negative magnitudes and positive multipliers the eased value
    /// is already below the current power and only the floor matters.
    fn settle_braking(&self, eased: f32) -> f32 {
        let settled = if eased > self.cumulated_power {
            self.cumulated_power
        } else {
            eased
        };
        if settled < 0.0 {
            0.0
        } else {
            settled
        }
    }

    /// Overwrite the ramp multipliers and power ceiling
    ///
    /// No validation is performed and the current power is left untouched.
    /// Use [`try_apply_rating`](Self::try_apply_rating) to reject unusable
    /// values first.
    ///
    /// # Contract
    /// Zero multipliers make every following tick divide by zero.
    pub fn set_power_rating(
        &mut self,
        feedback_multiplier: f32,
        feedback_brake_multiplier: f32,
        max_power: f32,
    ) {
        self.feedback_multiplier = feedback_multiplier;
        self.feedback_brake_multiplier = feedback_brake_multiplier;
        self.max_power = max_power;
    }

    /// Apply a rating without validation
    pub fn apply_rating(&mut self, rating: &PowerRating) {
        self.set_power_rating(
            rating.feedback_multiplier,
            rating.feedback_brake_multiplier,
            rating.max_power,
        );
    }

    /// Validate a rating and apply it
    ///
    /// On error the previous configuration stays in effect.
    pub fn try_apply_rating(&mut self, rating: &PowerRating) -> Result<(), RatingError> {
        if let Err(e) = rating.validate() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected power rating {}: {}", rating, e);
            return Err(e);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Power rating applied: {}", rating);

        self.apply_rating(rating);
        Ok(())
    }

    /// Drop the commanded power to zero immediately
    pub fn reset_cumulated_power(&mut self) {
        self.cumulated_power = 0.0;
    }

    /// Current commanded power
    pub fn cumulated_power(&self) -> f32 {
        self.cumulated_power
    }

    /// Current configuration
    pub fn rating(&self) -> PowerRating {
        PowerRating::new(
            self.feedback_multiplier,
            self.feedback_brake_multiplier,
            self.max_power,
        )
    }

    /// Configured power ceiling
    pub fn max_power(&self) -> f32 {
        self.max_power
    }
}
