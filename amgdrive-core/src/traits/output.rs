//! Motor power output trait

/// Sink for the commanded power after each tick
///
/// Implementations translate the controller's power units into whatever
/// the motor stage needs (PWM duty, DAC level, a CAN frame).
pub trait PowerOutput {
    /// Error raised by the output stage
    type Error;

    /// Drive the motor at `power`
    ///
    /// `power` is never negative when it comes from the drive loop.
    fn apply_power(&mut self, power: f32) -> Result<(), Self::Error>;
}

impl<T: PowerOutput + ?Sized> PowerOutput for &mut T {
    type Error = T::Error;

    fn apply_power(&mut self, power: f32) -> Result<(), Self::Error> {
        (**self).apply_power(power)
    }
}
