use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        operator::Operation,
        value::number::Number,
    },
    util::num::f64_to_u64_checked,
};

impl Evaluator<'_> {
    /// Evaluates a single-operand operation on a resolved number.
    ///
    /// Supported operations:
    /// - `Negate`: arithmetic negation; negating `i64::MIN` overflows.
    /// - `Not`: logical negation, yielding `1` or `0`.
    /// - `Factorial`: `n!` for non-negative integral operands. A float such as
    ///   `4.0` is accepted, and the result is always an integer.
    ///
    /// Increment and decrement write to a variable and are handled by the
    /// assignment family instead.
    ///
    /// # Parameters
    /// - `operation`: The operation to perform.
    /// - `symbol`: The operator symbol, for error messages.
    /// - `operand`: The operand.
    ///
    /// # Errors
    /// - `Overflow` if the result does not fit in an `i64`.
    /// - `InvalidFactorial` for negative or fractional factorial operands.
    /// - `NotEnoughOperands` if `operation` needs two operands.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::{
    ///     evaluator::core::Evaluator, operator::Operation, value::number::Number,
    /// };
    ///
    /// let n = Evaluator::eval_unary(Operation::Factorial, "!", Number::Integer(5)).unwrap();
    /// assert_eq!(n, Number::Integer(120));
    ///
    /// let n = Evaluator::eval_unary(Operation::Not, "!", Number::Real(0.0)).unwrap();
    /// assert_eq!(n, Number::Integer(1));
    /// ```
    pub fn eval_unary(operation: Operation, symbol: &str, operand: Number) -> EvalResult<Number> {
        match operation {
            Operation::Negate => match operand {
                Number::Integer(n) => n.checked_neg()
                                       .map(Number::Integer)
                                       .ok_or_else(|| overflow(symbol)),
                Number::Real(r) => Ok(Number::Real(-r)),
            },
            Operation::Not => Ok(Number::from(!operand.is_truthy())),
            Operation::Factorial => factorial(symbol, operand),
            // Every other operation takes two operands.
            _ => Err(RuntimeError::NotEnoughOperands { operator: symbol.to_string() }),
        }
    }
}

fn factorial(symbol: &str, operand: Number) -> EvalResult<Number> {
    let n = match operand {
        Number::Integer(n) => u64::try_from(n).ok(),
        Number::Real(r) => f64_to_u64_checked(r),
    };
    let Some(n) = n else {
        return Err(RuntimeError::InvalidFactorial { operand: operand.to_string() });
    };

    let mut product: i64 = 1;
    for k in 2..=n {
        product = i64::try_from(k).ok()
                                  .and_then(|k| product.checked_mul(k))
                                  .ok_or_else(|| overflow(symbol))?;
    }
    Ok(Number::Integer(product))
}

fn overflow(symbol: &str) -> RuntimeError {
    RuntimeError::Overflow { operator: symbol.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unary(operation: Operation, operand: Number) -> EvalResult<Number> {
        Evaluator::eval_unary(operation, "op", operand)
    }

    #[test]
    fn negation_keeps_the_operand_type() {
        assert_eq!(unary(Operation::Negate, Number::Integer(3)), Ok(Number::Integer(-3)));
        assert_eq!(unary(Operation::Negate, Number::Real(1.5)), Ok(Number::Real(-1.5)));
        assert!(matches!(unary(Operation::Negate, Number::Integer(i64::MIN)),
                         Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn factorial_accepts_integral_values_only() {
        assert_eq!(unary(Operation::Factorial, Number::Integer(0)), Ok(Number::Integer(1)));
        assert_eq!(unary(Operation::Factorial, Number::Real(4.0)), Ok(Number::Integer(24)));
        assert_eq!(unary(Operation::Factorial, Number::Integer(20)),
                   Ok(Number::Integer(2_432_902_008_176_640_000)));
        assert!(matches!(unary(Operation::Factorial, Number::Integer(21)),
                         Err(RuntimeError::Overflow { .. })));
        assert!(matches!(unary(Operation::Factorial, Number::Integer(-1)),
                         Err(RuntimeError::InvalidFactorial { .. })));
        assert!(matches!(unary(Operation::Factorial, Number::Real(2.5)),
                         Err(RuntimeError::InvalidFactorial { .. })));
    }

    #[test]
    fn not_uses_truthiness() {
        assert_eq!(unary(Operation::Not, Number::Integer(7)), Ok(Number::Integer(0)));
        assert_eq!(unary(Operation::Not, Number::Integer(0)), Ok(Number::Integer(1)));
    }
}
