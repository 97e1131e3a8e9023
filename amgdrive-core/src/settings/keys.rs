//! Setting and telemetry key names

/// Commanded power after the last tick
pub const CUMULATED_POWER: &str = "CUMULATED_POWER";

/// Last throttle input level
pub const ANALOG_THROTTLE: &str = "ANALOG_THROTTLE";

/// Last brake input magnitude
pub const ANALOG_BRAKE: &str = "ANALOG_BRAKE";

/// Ramp divisor for throttle and brake
pub const FEEDBACK_MULTIPLIER: &str = "FEEDBACK_MULTIPLIER";

/// Ramp divisor for the engine brake
pub const FEEDBACK_BRAKE_MULTIPLIER: &str = "FEEDBACK_BRAKE_MULTIPLIER";

/// Power ceiling
pub const MAX_POWER: &str = "MAX_POWER";
