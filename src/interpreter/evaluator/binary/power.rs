use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::number::Number,
    },
    util::num::i64_to_u32_checked,
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and stays an integer. Negative integer exponents and
    /// any float operand are computed in floating-point form with `powf`.
    ///
    /// # Parameters
    /// - `symbol`: The operator symbol, for error messages.
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<Number>` containing the result of `base ^ exponent`.
    ///
    /// # Errors
    /// - `Overflow` if an integer power does not fit in an `i64`.
    /// - `DivisionByZero` for zero raised to a negative power.
    /// - `Domain` for a negative base with a fractional exponent.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::{evaluator::core::Evaluator, value::number::Number};
    ///
    /// let result = Evaluator::eval_pow("^", Number::Integer(2), Number::Integer(10)).unwrap();
    /// assert_eq!(result, Number::Integer(1024));
    ///
    /// let result = Evaluator::eval_pow("^", Number::Integer(2), Number::Integer(-1)).unwrap();
    /// assert_eq!(result, Number::Real(0.5));
    /// ```
    pub fn eval_pow(symbol: &str, base: Number, exponent: Number) -> EvalResult<Number> {
        if base.is_zero() && exponent.as_real() < 0.0 {
            return Err(RuntimeError::DivisionByZero { operator: symbol.to_string() });
        }

        match (base, exponent) {
            (Number::Integer(b), Number::Integer(e)) if e >= 0 => match i64_to_u32_checked(e) {
                Some(e) => b.checked_pow(e)
                            .map(Number::Integer)
                            .ok_or_else(|| RuntimeError::Overflow { operator: symbol.to_string() }),
                // Only 0, 1 and -1 survive an exponent this large.
                None => match b {
                    0 | 1 => Ok(Number::Integer(b)),
                    -1 => Ok(Number::Integer(if e % 2 == 0 { 1 } else { -1 })),
                    _ => Err(RuntimeError::Overflow { operator: symbol.to_string() }),
                },
            },
            _ => {
                let (b, e) = (base.as_real(), exponent.as_real());
                if b < 0.0 && e.is_finite() && e.fract() != 0.0 {
                    return Err(RuntimeError::Domain { function: symbol.to_string(),
                                                      argument: base.to_string(), });
                }
                Ok(Number::Real(b.powf(e)))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pow(base: Number, exponent: Number) -> EvalResult<Number> {
        Evaluator::eval_pow("^", base, exponent)
    }

    #[test]
    fn integer_powers_stay_exact() {
        assert_eq!(pow(Number::Integer(3), Number::Integer(4)), Ok(Number::Integer(81)));
        assert_eq!(pow(Number::Integer(-1), Number::Integer(5_000_000_001)),
                   Ok(Number::Integer(-1)));
        assert!(matches!(pow(Number::Integer(10), Number::Integer(19)),
                         Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn float_powers() {
        assert_eq!(pow(Number::Real(4.0), Number::Real(0.5)), Ok(Number::Real(2.0)));
        assert_eq!(pow(Number::Integer(4), Number::Integer(-2)), Ok(Number::Real(0.0625)));
    }

    #[test]
    fn rejects_undefined_powers() {
        assert!(matches!(pow(Number::Integer(0), Number::Integer(-1)),
                         Err(RuntimeError::DivisionByZero { .. })));
        assert!(matches!(pow(Number::Real(-8.0), Number::Real(0.5)),
                         Err(RuntimeError::Domain { .. })));
    }
}
