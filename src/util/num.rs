/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Formats a computed result for display.
///
/// Finite values with no fractional part print as integers, so `8 / 2`
/// displays as `4` rather than `4.0`. The integer rendering is only used
/// inside the range where `f64` represents integers exactly; outside it, and
/// for fractional or non-finite values, the default `f64` rendering is used.
///
/// ## Example
/// ```
/// use tally::util::num::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(-10.0), "-10");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INT {
        return format!("{}", value as i64);
    }
    format!("{value}")
}
