//! Exponential approach primitive
//!
//! The single ramping step shared by acceleration, braking and passive
//! decay in the power controller.

/// Move `current` one step toward `target`, closing `1 / feedback` of the gap
///
/// Returns `current + (target - current) / feedback`. Repeated calls with
/// the same target converge geometrically: with `feedback = 2` each call
/// halves the remaining distance. `feedback = 1` jumps straight to the
/// target and `0 < feedback < 1` overshoots past it.
///
/// # Contract
/// `feedback` must be non-zero. Zero divides by zero and yields an
/// infinity (or NaN when `target == current`).
pub fn ease_toward_target(target: f32, current: f32, feedback: f32) -> f32 {
    current + (target - current) / feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halving_sequence() {
        let mut value = 0.0;
        let mut seen = [0.0f32; 4];
        for slot in seen.iter_mut() {
            value = ease_toward_target(100.0, value, 2.0);
            *slot = value;
        }
        assert_eq!(seen, [50.0, 75.0, 87.5, 93.75]);
    }

    #[test]
    fn test_unit_feedback_jumps_to_target() {
        assert_eq!(ease_toward_target(42.0, 7.0, 1.0), 42.0);
    }

    #[test]
    fn test_fractional_feedback_overshoots() {
        assert_eq!(ease_toward_target(10.0, 0.0, 0.5), 20.0);
    }

    #[test]
    fn test_moves_down_toward_lower_target() {
        assert_eq!(ease_toward_target(-20.0, 20.0, 4.0), 10.0);
    }

    #[test]
    fn test_at_target_is_fixed_point() {
        assert_eq!(ease_toward_target(3.0, 3.0, 5.0), 3.0);
    }

    #[test]
    fn test_zero_feedback_is_not_finite() {
        assert!(ease_toward_target(1.0, 0.0, 0.0).is_infinite());
        assert!(ease_toward_target(1.0, 1.0, 0.0).is_nan());
    }
}
