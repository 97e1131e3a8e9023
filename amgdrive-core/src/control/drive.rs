//! Drive loop implementation
//!
//! One `DriveLoop` owns the power controller and the motor output. The
//! embedding firmware calls [`DriveLoop::tick`] once per control period
//! with whatever input arrived since the last tick; if several sources
//! exist (remote command link, physical pedal) they are merged into a
//! single [`DriveInput`] by the caller first.
//!
//! ```text
//! input ──► DriveLoop::tick ──► PowerController ──► PowerOutput
//!                                      │
//!                                      └──► SettingsStore (telemetry)
//! ```

use crate::power::{PowerController, PowerRating, RatingError};
use crate::settings::{keys, SettingsError, SettingsStore};
use crate::traits::PowerOutput;

/// Input for one control tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveInput {
    /// Requested throttle level (controller power units)
    Throttle(f32),
    /// Brake magnitude (controller power units)
    Brake(f32),
    /// No active input; the engine brake applies
    Idle,
}

/// Control loop driving one motor output
pub struct DriveLoop<O> {
    controller: PowerController,
    output: O,
    /// Remote command link is up
    link_up: bool,
    /// Throttle level of the last tick, for telemetry
    last_throttle: f32,
    /// Brake magnitude of the last tick, for telemetry
    last_brake: f32,
}

impl<O: PowerOutput> DriveLoop<O> {
    /// Create a drive loop with an unconfigured controller
    ///
    /// The controller delivers no power until [`configure`](Self::configure)
    /// succeeds. The link starts up, so loops without a remote command link
    /// never need to call [`set_link`](Self::set_link).
    pub fn new(output: O) -> Self {
        Self {
            controller: PowerController::new(),
            output,
            link_up: true,
            last_throttle: 0.0,
            last_brake: 0.0,
        }
    }

    /// Run one control tick
    ///
    /// Throttle ramps the power up, brake ramps it down, idle lets the
    /// engine brake decay it. While the command link is down a throttle
    /// input is handled as idle; braking never depends on the link.
    ///
    /// The controller advances before the output is driven, so an output
    /// error does not lose the tick.
    pub fn tick(&mut self, input: DriveInput) -> Result<f32, O::Error> {
        let power = match input {
            DriveInput::Throttle(level) if self.link_up => {
                self.last_throttle = level;
                self.last_brake = 0.0;
                self.controller.empower(level)
            }
            DriveInput::Brake(magnitude) => {
                self.last_throttle = 0.0;
                self.last_brake = magnitude;
                self.controller.brake(magnitude)
            }
            DriveInput::Throttle(_) | DriveInput::Idle => {
                self.last_throttle = 0.0;
                self.last_brake = 0.0;
                self.controller.engine_brake()
            }
        };

        self.output.apply_power(power)?;
        Ok(power)
    }

    /// Report a change of the remote command link
    pub fn set_link(&mut self, connected: bool) {
        if connected == self.link_up {
            return;
        }
        self.link_up = connected;

        #[cfg(feature = "defmt")]
        {
            if connected {
                defmt::info!("Command link restored");
            } else {
                defmt::warn!("Command link lost, throttle disabled");
            }
        }
    }

    /// Check if the remote command link is up
    pub fn is_link_up(&self) -> bool {
        self.link_up
    }

    /// Validate and apply a new power rating
    ///
    /// The current power is kept; the next tick ramps from it.
    pub fn configure(&mut self, rating: &PowerRating) -> Result<(), RatingError> {
        self.controller.try_apply_rating(rating)
    }

    /// Drop the power to zero and drive the output there
    pub fn reset(&mut self) -> Result<(), O::Error> {
        self.controller.reset_cumulated_power();
        self.last_throttle = 0.0;
        self.last_brake = 0.0;
        self.output.apply_power(0.0)
    }

    /// Record the current power and inputs for the telemetry path
    ///
    /// Only values that changed since the last publish are marked dirty.
    pub fn publish<const N: usize>(&self, store: &mut SettingsStore<N>) -> Result<(), SettingsError> {
        store.set_f32(keys::CUMULATED_POWER, self.controller.cumulated_power())?;
        store.set_f32(keys::ANALOG_THROTTLE, self.last_throttle)?;
        store.set_f32(keys::ANALOG_BRAKE, self.last_brake)?;
        Ok(())
    }

    /// The power controller
    pub fn controller(&self) -> &PowerController {
        &self.controller
    }

    /// The motor output
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consume the loop and return the motor output
    pub fn into_output(self) -> O {
        self.output
    }
}
