use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        operator::Operation,
        value::number::Number,
    },
};

/// Compares two numbers, exactly for two integers and as floats otherwise.
///
/// Returns `None` when either operand is NaN.
fn compare(left: Number, right: Number) -> Option<Ordering> {
    match (left, right) {
        (Number::Integer(l), Number::Integer(r)) => Some(l.cmp(&r)),
        _ => left.as_real().partial_cmp(&right.as_real()),
    }
}

impl Evaluator<'_> {
    /// Evaluates a comparison of the form `Number <Operator> Number`.
    ///
    /// Integers compare exactly; mixed operands are compared as floats. Any
    /// comparison involving NaN is false except `!=`.
    ///
    /// # Parameters
    /// - `operation`: One of the six comparison operations.
    /// - `symbol`: The operator symbol, for error messages.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// `1` if the comparison holds, `0` otherwise.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::{
    ///     evaluator::core::Evaluator, operator::Operation, value::number::Number,
    /// };
    ///
    /// let result = Evaluator::eval_comparison(Operation::LessEqual,
    ///                                         "<=",
    ///                                         Number::Integer(2),
    ///                                         Number::Real(2.0)).unwrap();
    /// assert_eq!(result, Number::Integer(1));
    /// ```
    pub fn eval_comparison(operation: Operation,
                           symbol: &str,
                           left: Number,
                           right: Number)
                           -> EvalResult<Number> {
        let ordering = compare(left, right);
        let holds = match operation {
            Operation::Equal => ordering == Some(Ordering::Equal),
            Operation::NotEqual => ordering != Some(Ordering::Equal),
            Operation::Less => ordering == Some(Ordering::Less),
            Operation::Greater => ordering == Some(Ordering::Greater),
            Operation::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            Operation::GreaterEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            },
            _ => return Err(RuntimeError::NotEnoughOperands { operator: symbol.to_string() }),
        };
        Ok(Number::from(holds))
    }

    /// Evaluates `&&` and `||` on the truthiness of both operands.
    ///
    /// Both operands are already evaluated; there is no short-circuiting.
    #[must_use]
    pub fn eval_logic(operation: Operation, left: Number, right: Number) -> Number {
        let result = match operation {
            Operation::And => left.is_truthy() && right.is_truthy(),
            _ => left.is_truthy() || right.is_truthy(),
        };
        Number::from(result)
    }
}
