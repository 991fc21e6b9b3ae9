/// Rounds `value` to `digits` decimals, resolving ties toward the lower magnitude.
///
/// `round_half_down(2.25, 1) == 2.2`, `round_half_down(-2.25, 1) == -2.2`.
/// Never returns negative zero.
pub fn round_half_down(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    let scaled = (value.abs() * factor - 0.5).ceil();
    if scaled <= 0.0 {
        return 0.0;
    }
    (scaled / factor).copysign(value)
}

/// Most decimals an `f64` angle in `[-360, 360]` can meaningfully be rounded to.
pub const MAX_ROUNDING_DIGITS: u32 = 15;

/// Rounds `value` to `digits` decimals, ties away from zero.
///
/// Beyond [`MAX_ROUNDING_DIGITS`] the value is returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let exponent = match i32::try_from(digits) {
        Ok(exponent) if digits <= MAX_ROUNDING_DIGITS => exponent,
        _ => return value,
    };
    let factor = 10f64.powi(exponent);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
