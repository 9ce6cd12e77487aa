use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        operator::Operation,
        value::number::Number,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two resolved numbers.
    ///
    /// This function routes the operation to specialized handlers:
    /// arithmetic is computed here, power calls `eval_pow`, relational and
    /// equality operations use `eval_comparison` and logical operations call
    /// `eval_logic`.
    ///
    /// Two integer operands keep `+ - * // % ^` exact; any float operand makes
    /// the result a float. `/` always yields a float. `//` and `%` round toward
    /// negative infinity, so `-7 // 2` is `-4` and `-7 % 2` is `1`.
    ///
    /// # Parameters
    /// - `operation`: The operation.
    /// - `symbol`: The operator symbol, for error messages.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Number>` containing the evaluated result.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor in `/`, `//` or `%`.
    /// - `Overflow` if an integer result does not fit in an `i64`.
    /// - `NotEnoughOperands` if `operation` takes a single operand.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::{
    ///     evaluator::core::Evaluator, operator::Operation, value::number::Number,
    /// };
    ///
    /// let result = Evaluator::eval_binary(Operation::Add, "+", Number::Integer(3), Number::Integer(4));
    /// assert_eq!(result.unwrap(), Number::Integer(7));
    ///
    /// let result = Evaluator::eval_binary(Operation::Divide, "/", Number::Integer(7), Number::Integer(2));
    /// assert_eq!(result.unwrap(), Number::Real(3.5));
    /// ```
    pub fn eval_binary(operation: Operation,
                       symbol: &str,
                       left: Number,
                       right: Number)
                       -> EvalResult<Number> {
        use Operation::{
            Add, And, Divide, Equal, FloorDivide, Greater, GreaterEqual, Less, LessEqual, Modulo,
            Multiply, NotEqual, Or, Power, Subtract,
        };

        match operation {
            Add | Subtract | Multiply => Self::eval_arithmetic(operation, symbol, left, right),
            Divide | FloorDivide | Modulo => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero { operator: symbol.to_string() });
                }
                Self::eval_division(operation, symbol, left, right)
            },
            Power => Self::eval_pow(symbol, left, right),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(operation, symbol, left, right)
            },
            And | Or => Ok(Self::eval_logic(operation, left, right)),
            _ => Err(RuntimeError::NotEnoughOperands { operator: symbol.to_string() }),
        }
    }

    fn eval_arithmetic(operation: Operation,
                       symbol: &str,
                       left: Number,
                       right: Number)
                       -> EvalResult<Number> {
        match (left, right) {
            (Number::Integer(l), Number::Integer(r)) => {
                let result = match operation {
                    Operation::Add => l.checked_add(r),
                    Operation::Subtract => l.checked_sub(r),
                    _ => l.checked_mul(r),
                };
                result.map(Number::Integer)
                      .ok_or_else(|| RuntimeError::Overflow { operator: symbol.to_string() })
            },
            _ => {
                let (l, r) = (left.as_real(), right.as_real());
                Ok(Number::Real(match operation {
                                    Operation::Add => l + r,
                                    Operation::Subtract => l - r,
                                    _ => l * r,
                                }))
            },
        }
    }

    /// Division family with a divisor already known to be non-zero.
    fn eval_division(operation: Operation,
                     symbol: &str,
                     left: Number,
                     right: Number)
                     -> EvalResult<Number> {
        match (operation, left, right) {
            (Operation::Divide, ..) => Ok(Number::Real(left.as_real() / right.as_real())),
            (Operation::FloorDivide, Number::Integer(l), Number::Integer(r)) => {
                floor_div(l, r).map(Number::Integer)
                               .ok_or_else(|| RuntimeError::Overflow { operator: symbol.to_string() })
            },
            (Operation::FloorDivide, ..) => {
                Ok(Number::Real((left.as_real() / right.as_real()).floor()))
            },
            (_, Number::Integer(l), Number::Integer(r)) => {
                floor_mod(l, r).map(Number::Integer)
                               .ok_or_else(|| RuntimeError::Overflow { operator: symbol.to_string() })
            },
            _ => {
                let (l, r) = (left.as_real(), right.as_real());
                let rem = l % r;
                Ok(Number::Real(if rem != 0.0 && (rem < 0.0) != (r < 0.0) { rem + r } else { rem }))
            },
        }
    }
}

/// Integer division rounding toward negative infinity.
fn floor_div(l: i64, r: i64) -> Option<i64> {
    let quotient = l.checked_div(r)?;
    let rem = l.wrapping_rem(r);
    if rem != 0 && (rem < 0) != (r < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Integer remainder with the sign of the divisor.
fn floor_mod(l: i64, r: i64) -> Option<i64> {
    // `i64::MIN % -1` is 0, not an overflow.
    let rem = l.wrapping_rem(r);
    if rem != 0 && (rem < 0) != (r < 0) {
        rem.checked_add(r)
    } else {
        Some(rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(operation: Operation, left: Number, right: Number) -> EvalResult<Number> {
        Evaluator::eval_binary(operation, "op", left, right)
    }

    #[test]
    fn integer_arithmetic_is_exact() {
        assert_eq!(binary(Operation::Add, Number::Integer(2), Number::Integer(3)),
                   Ok(Number::Integer(5)));
        assert_eq!(binary(Operation::Multiply, Number::Integer(-4), Number::Integer(3)),
                   Ok(Number::Integer(-12)));
        assert!(matches!(binary(Operation::Add, Number::Integer(i64::MAX), Number::Integer(1)),
                         Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn floats_are_contagious() {
        assert_eq!(binary(Operation::Subtract, Number::Integer(1), Number::Real(0.5)),
                   Ok(Number::Real(0.5)));
        assert_eq!(binary(Operation::Divide, Number::Integer(6), Number::Integer(3)),
                   Ok(Number::Real(2.0)));
    }

    #[test]
    fn floored_division_and_modulo() {
        assert_eq!(binary(Operation::FloorDivide, Number::Integer(-7), Number::Integer(2)),
                   Ok(Number::Integer(-4)));
        assert_eq!(binary(Operation::Modulo, Number::Integer(-7), Number::Integer(2)),
                   Ok(Number::Integer(1)));
        assert_eq!(binary(Operation::Modulo, Number::Integer(7), Number::Integer(-2)),
                   Ok(Number::Integer(-1)));
        assert_eq!(binary(Operation::FloorDivide, Number::Real(7.5), Number::Integer(2)),
                   Ok(Number::Real(3.0)));
        assert_eq!(binary(Operation::Modulo, Number::Real(-1.5), Number::Integer(1)),
                   Ok(Number::Real(0.5)));
        assert!(matches!(binary(Operation::FloorDivide, Number::Integer(i64::MIN), Number::Integer(-1)),
                         Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn zero_divisors_fault() {
        for operation in [Operation::Divide, Operation::FloorDivide, Operation::Modulo] {
            assert!(matches!(binary(operation, Number::Integer(5), Number::Real(0.0)),
                             Err(RuntimeError::DivisionByZero { .. })));
        }
    }
}
