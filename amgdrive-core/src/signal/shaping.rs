//! Range mapping and input conditioning
//!
//! Clamping, linear remapping, idle floors, centered deadzones and
//! segment bucketing for raw throttle/brake readings.

/// Pin `value` into `[min, max]`
///
/// Unlike [`f32::clamp`], this never panics.
///
/// # Contract
/// Callers must pass `min <= max`. When they don't, the band is not
/// corrected: the upper bound is applied first and the lower bound last,
/// so `min` wins. NaN passes through unchanged.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    let mut value = value;
    if value > max {
        value = max;
    }
    if value < min {
        value = min;
    }
    value
}

/// Clamp `value` into `[from_min, from_max]` and rescale it linearly
/// onto `[to_min, to_max]`
///
/// The target range may be inverted (`to_min > to_max`).
///
/// # Contract
/// `from_min` and `from_max` must differ. Equal bounds divide by zero and
/// yield NaN.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    let value = clamp(value, from_min, from_max);
    let ratio = (value - from_min) / (from_max - from_min);
    ratio * (to_max - to_min) + to_min
}

/// Report `default_value` below `threshold`, otherwise remap
/// `[threshold, from_max]` onto `[to_min, to_max]`
///
/// Used for idle detection: a pedal that has not left its rest band
/// reports a fixed floor instead of a tiny ramp value.
///
/// # Contract
/// Same as [`remap`] with `from_min = threshold`.
pub fn remap_with_floor(
    default_value: f32,
    value: f32,
    threshold: f32,
    from_max: f32,
    to_min: f32,
    to_max: f32,
) -> f32 {
    if value < threshold {
        return default_value;
    }
    remap(value, threshold, from_max, to_min, to_max)
}

/// Normalize a centered reading to `[-1, 1]` with a snap-to-zero deadzone
///
/// The reading is first remapped from `[from_min, from_max]` onto
/// `[-1, 1]`. Magnitudes below `deadzone_ratio` return exactly `0.0`.
/// Outside the deadzone the remaining travel is stretched back onto
/// `[0, 1]` (positive side) or `[-1, 0]` (negative side), so full output is
/// still reachable and the output starts at zero right at the deadzone edge.
///
/// # Contract
/// `from_min != from_max` and `deadzone_ratio < 1.0`. A ratio of `1.0`
/// collapses the outer band and yields NaN.
pub fn median_with_deadzone(value: f32, from_min: f32, from_max: f32, deadzone_ratio: f32) -> f32 {
    let normalized = remap(value, from_min, from_max, -1.0, 1.0);
    if libm::fabsf(normalized) < deadzone_ratio {
        return 0.0;
    }
    if normalized > 0.0 {
        remap(normalized, deadzone_ratio, 1.0, 0.0, 1.0)
    } else {
        remap(normalized, -1.0, -deadzone_ratio, -1.0, 0.0)
    }
}

/// Map `value` from `[from, to]` onto `bucket_count` discrete indices
///
/// `from` maps to index `0` and `to` to `bucket_count - 1`; values in
/// between round to the nearest index, with exact halves rounding away
/// from zero. Values outside `[from, to]` are not clamped and produce
/// indices outside `0..bucket_count`.
///
/// Evaluated in `f64` so 32-bit inputs keep full precision.
///
/// # Contract
/// `from != to`. Equal bounds produce a non-finite intermediate, which
/// saturates on the integer conversion.
pub fn bucket_index(from: i32, to: i32, value: i32, bucket_count: i32) -> i32 {
    let span = f64::from(to) - f64::from(from);
    let scaled = (f64::from(bucket_count) - 1.0) * (f64::from(value) - f64::from(from)) / span;
    libm::round(scaled) as i32
}
