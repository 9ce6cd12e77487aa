/// Numeric conversion helpers.
///
/// This module provides checked conversions between integer and
/// floating-point types. The factorial, power and rounding code paths use them
/// to decide whether a value can stay an integer or must fail or fall back to
/// a float.
pub mod num;
