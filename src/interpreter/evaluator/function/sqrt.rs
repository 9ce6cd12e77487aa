use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::number::Number,
    },
    util::num::f64_to_i64_checked,
};

/// Computes the square root of a non-negative number as a float.
///
/// # Errors
/// `Domain` for negative arguments.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::sqrt::sqrt, value::number::Number};
///
/// assert_eq!(sqrt(&[Number::Integer(16)]).unwrap(), Number::Real(4.0));
/// assert!(sqrt(&[Number::Integer(-1)]).is_err());
/// ```
pub fn sqrt(args: &[Number]) -> EvalResult<Number> {
    check_arity("sqrt", args, 1)?;
    let x = args[0].as_real();
    if x < 0.0 {
        return Err(RuntimeError::Domain { function: "sqrt".to_string(),
                                          argument: args[0].to_string(), });
    }
    Ok(Number::Real(x.sqrt()))
}

/// Computes the n-th root: `nthroot(x, n) = x^(1 / n)`.
///
/// A negative `x` has a real root only for odd integral `n`, computed as
/// `-((-x)^(1 / n))`.
///
/// # Errors
/// - `DivisionByZero` for `n = 0`.
/// - `Domain` for a negative `x` with an even or fractional `n`.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::sqrt::nthroot, value::number::Number};
///
/// // 4th root of 16 -> 2
/// let r = nthroot(&[Number::Integer(16), Number::Integer(4)]).unwrap();
/// assert_eq!(r, Number::Real(2.0));
///
/// let r = nthroot(&[Number::Integer(-8), Number::Integer(3)]).unwrap();
/// assert_eq!(r, Number::Real(-2.0));
/// ```
pub fn nthroot(args: &[Number]) -> EvalResult<Number> {
    check_arity("nthroot", args, 2)?;
    let x = args[0].as_real();
    let n = args[1].as_real();

    if n == 0.0 {
        return Err(RuntimeError::DivisionByZero { operator: "nthroot".to_string() });
    }
    if x >= 0.0 {
        return Ok(Number::Real(x.powf(n.recip())));
    }

    match f64_to_i64_checked(n) {
        Some(k) if k % 2 != 0 => Ok(Number::Real(-(-x).powf(n.recip()))),
        _ => Err(RuntimeError::Domain { function: "nthroot".to_string(),
                                        argument: args[0].to_string(), }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nthroot_rejects_undefined_roots() {
        assert!(matches!(nthroot(&[Number::Integer(8), Number::Integer(0)]),
                         Err(RuntimeError::DivisionByZero { .. })));
        assert!(matches!(nthroot(&[Number::Integer(-16), Number::Integer(4)]),
                         Err(RuntimeError::Domain { .. })));
        assert!(matches!(nthroot(&[Number::Integer(-16), Number::Real(2.5)]),
                         Err(RuntimeError::Domain { .. })));
    }

    #[test]
    fn sqrt_of_float() {
        assert_eq!(sqrt(&[Number::Real(2.25)]).unwrap(), Number::Real(1.5));
    }
}
