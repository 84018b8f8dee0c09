/// Truncates `value` toward zero at `decimal_places` fractional digits.
///
/// This is truncation, not rounding: `trim_decimal(1.239, 2)` is `1.23`, and
/// `trim_decimal(-1.239, 2)` is `-1.23`.
///
/// ```
/// use spatial_core::math::trim_decimal;
///
/// assert_eq!(trim_decimal(3.14159, 2), 3.14);
/// assert_eq!(trim_decimal(-3.14159, 3), -3.141);
/// assert_eq!(trim_decimal(42.0, 0), 42.0);
/// ```
#[inline]
pub fn trim_decimal(value: f64, decimal_places: u32) -> f64 {
    let scale = libm::pow(10.0, decimal_places as f64);
    libm::trunc(value * scale) / scale
}

/// Clamps a finite value to the `acos` domain [-1, 1]. NaN passes through.
#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else if value < -1.0 {
        -1.0
    } else {
        value
    }
}
