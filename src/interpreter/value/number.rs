use std::fmt;

use crate::util::num::i64_to_f64;

/// A numeric scalar, the only kind of value the calculator computes with.
///
/// Literals written with digits only become integers; everything with a
/// decimal point becomes a float. Integer arithmetic stays exact until an
/// operation needs a float (true division, negative exponents, most math
/// functions) or the other operand is already a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for Number {
    fn from(value: bool) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl Number {
    /// Parses a numeric literal lexeme.
    ///
    /// A lexeme made only of ASCII digits is an integer. Integers too large for
    /// `i64` fall back to a float instead of failing. Any other lexeme must
    /// parse as a float (`1.5`, `.5`, `3.`).
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::parse_literal("42"), Some(Number::Integer(42)));
    /// assert_eq!(Number::parse_literal("2.5"), Some(Number::Real(2.5)));
    /// assert_eq!(Number::parse_literal(".5"), Some(Number::Real(0.5)));
    /// assert_eq!(Number::parse_literal("x"), None);
    /// ```
    #[must_use]
    pub fn parse_literal(text: &str) -> Option<Self> {
        if !text.is_empty()
           && text.bytes().all(|b| b.is_ascii_digit())
           && let Ok(n) = text.parse::<i64>()
        {
            return Some(Self::Integer(n));
        }
        text.parse::<f64>().ok().map(Self::Real)
    }

    /// Returns the value as an `f64`.
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Interprets the value as a truth value: anything but zero is true.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::value::number::Number;
    ///
    /// assert!(Number::Integer(3).is_truthy());
    /// assert!(!Number::Real(0.0).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Integer(n) => n != 0,
            Self::Real(r) => r != 0.0,
        }
    }

    /// Returns `true` if the value is zero, used for divisor checks.
    #[must_use]
    pub fn is_zero(self) -> bool {
        !self.is_truthy()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` so floats stay recognizable.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
