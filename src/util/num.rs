/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64`.
///
/// Integers beyond `2^53` lose precision; a calculator mixing integers and
/// floats accepts that, the same way a float literal would.
///
/// ## Example
/// ```
/// use clc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `u64` if the value is finite, non-negative, exactly
/// representable and not fractional.
///
/// # Returns
/// - `Some(u64)`: The converted value if safe.
/// - `None`: For non-finite, negative, too large or fractional values.
///
/// # Example
/// ```
/// use clc::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0), Some(7));
/// assert_eq!(f64_to_u64_checked(-5.0), None);
/// assert_eq!(f64_to_u64_checked(1.23), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u64_checked(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

/// Converts an `f64` to `i64` if the value is finite, within range and not
/// fractional.
///
/// # Example
/// ```
/// use clc::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_checked(1.5), None);
/// assert_eq!(f64_to_i64_checked(1e20), None);
/// assert_eq!(f64_to_i64_checked(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    // i64::MAX rounds up to 2^63 as a float, so the upper bound is exclusive.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as i64)
}

/// Converts an `i64` to `u32` if it fits.
///
/// Used for integer exponents.
///
/// # Example
/// ```
/// use clc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45), Some(45));
/// assert_eq!(i64_to_u32_checked(-1), None);
/// assert_eq!(i64_to_u32_checked(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32_checked(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}
