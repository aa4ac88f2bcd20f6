//! Decimal rounding and truncation.
//!
//! Elementary floating point helpers for money-ish values: threshold-based
//! rounding (the caller decides where the tie-break sits) and plain decimal
//! truncation.

/// Round `value` to `precision` decimal digits using `threshold` as the
/// tie-break boundary.
///
/// After scaling by `10^precision`, a fractional part whose magnitude is at
/// or above `threshold` rounds away from zero; below it rounds toward zero.
/// Negative values round symmetrically:
///
/// ```
/// use idkit::round;
///
/// assert!((round(2.558, 0.5, 1) - 2.6).abs() < f64::EPSILON);
/// assert!((round(-2.558, 0.5, 1) + 2.6).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn round(value: f64, threshold: f64, precision: i32) -> f64 {
    let pow = 10f64.powi(precision);
    let scaled = value.abs() * pow;
    let rounded = if scaled.fract() >= threshold {
        scaled.ceil()
    } else {
        scaled.floor()
    };
    (rounded / pow).copysign(value)
}

/// Truncate `value` to `precision` decimal digits without rounding.
///
/// Truncation is toward zero for both signs: `truncate(2.558, 2) == 2.55`
/// and `truncate(-2.558, 2) == -2.55`.
#[must_use]
pub fn truncate(value: f64, precision: i32) -> f64 {
    let pow = 10f64.powi(precision);
    (value * pow).trunc() / pow
}
