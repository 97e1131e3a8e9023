//! Two-axis magnitude and sign helpers

/// Euclidean magnitude of `(x, y)` after dividing `y` by `y_to_x_ratio`
///
/// Brings two axes with different physical ranges onto a common scale
/// before combining them into one intensity.
///
/// # Contract
/// `y_to_x_ratio` must be non-zero; zero yields an infinity (or NaN when
/// `y` is also zero).
pub fn scalar_magnitude(x: f32, y: f32, y_to_x_ratio: f32) -> f32 {
    let norm_y = y / y_to_x_ratio;
    libm::sqrtf(x * x + norm_y * norm_y)
}

/// Direction of `value`: `1`, `-1`, or `0` for exactly zero (and NaN)
pub fn sign_of(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
