use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::number::Number,
    },
    util::num::f64_to_i64_checked,
};

/// Applies a one-argument float function.
///
/// The generated functions accept exactly one argument. Integers are
/// converted to floats first, and the result is always a float.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::builtin::cos, value::number::Number};
///
/// let r = cos(&[Number::Integer(0)]).unwrap();
/// assert_eq!(r, Number::Real(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $name:literal, $real_fn:ident) => {
        #[doc = concat!("Computes `", $name, "(x)` as a float.")]
        pub fn $fname(args: &[Number]) -> EvalResult<Number> {
            check_arity($name, args, 1)?;
            Ok(Number::Real(args[0].as_real().$real_fn()))
        }
    };
}

real_builtin!(sin, "sin", sin);
real_builtin!(cos, "cos", cos);
real_builtin!(tan, "tan", tan);
real_builtin!(atan, "atan", atan);
real_builtin!(degrees, "deg", to_degrees);
real_builtin!(radians, "rad", to_radians);

/// Computes `asin(x)`; `x` must lie in `[-1, 1]`.
///
/// # Errors
/// `Domain` for arguments outside `[-1, 1]`.
pub fn asin(args: &[Number]) -> EvalResult<Number> {
    check_arity("asin", args, 1)?;
    let x = unit_interval("asin", args[0])?;
    Ok(Number::Real(x.asin()))
}

/// Computes `acos(x)`; `x` must lie in `[-1, 1]`.
///
/// # Errors
/// `Domain` for arguments outside `[-1, 1]`.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::builtin::acos, value::number::Number};
///
/// assert_eq!(acos(&[Number::Integer(1)]).unwrap(), Number::Real(0.0));
/// assert!(acos(&[Number::Integer(2)]).is_err());
/// ```
pub fn acos(args: &[Number]) -> EvalResult<Number> {
    check_arity("acos", args, 1)?;
    let x = unit_interval("acos", args[0])?;
    Ok(Number::Real(x.acos()))
}

fn unit_interval(function: &str, value: Number) -> EvalResult<f64> {
    let x = value.as_real();
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(RuntimeError::Domain { function: function.to_string(),
                                   argument: value.to_string(), })
    }
}

/// Computes the four-quadrant arctangent `atan2(y, x)`.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::builtin::atan2, value::number::Number};
///
/// let r = atan2(&[Number::Integer(1), Number::Integer(1)]).unwrap();
/// assert_eq!(r, Number::Real(std::f64::consts::FRAC_PI_4));
/// ```
pub fn atan2(args: &[Number]) -> EvalResult<Number> {
    check_arity("atan2", args, 2)?;
    Ok(Number::Real(args[0].as_real().atan2(args[1].as_real())))
}

/// Rounds a number down (`floor`) or up (`ceil`) to an integer.
///
/// Integers are returned unchanged. Floats become integers when the rounded
/// value fits in an `i64`; otherwise (infinities, NaN, huge values) the
/// rounded float is returned.
///
/// # Parameters
/// - `func_name`: `"floor"` or `"ceil"`.
/// - `args`: Slice containing one argument.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::builtin::unary_round, value::number::Number};
///
/// assert_eq!(unary_round("floor", &[Number::Real(-2.5)]).unwrap(), Number::Integer(-3));
/// assert_eq!(unary_round("ceil", &[Number::Real(2.1)]).unwrap(), Number::Integer(3));
/// ```
pub fn unary_round(func_name: &str, args: &[Number]) -> EvalResult<Number> {
    check_arity(func_name, args, 1)?;
    match args[0] {
        Number::Integer(n) => Ok(Number::Integer(n)),
        Number::Real(r) => {
            let rounded = if func_name == "ceil" { r.ceil() } else { r.floor() };
            Ok(f64_to_i64_checked(rounded).map_or(Number::Real(rounded), Number::Integer))
        },
    }
}

/// Computes the absolute value, keeping the operand's type.
///
/// # Errors
/// `Overflow` for `abs` of `i64::MIN`.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::builtin::abs, value::number::Number};
///
/// assert_eq!(abs(&[Number::Integer(-4)]).unwrap(), Number::Integer(4));
/// assert_eq!(abs(&[Number::Real(-0.5)]).unwrap(), Number::Real(0.5));
/// ```
pub fn abs(args: &[Number]) -> EvalResult<Number> {
    check_arity("abs", args, 1)?;
    match args[0] {
        Number::Integer(n) => {
            n.checked_abs()
             .map(Number::Integer)
             .ok_or_else(|| RuntimeError::Overflow { operator: "abs".to_string() })
        },
        Number::Real(r) => Ok(Number::Real(r.abs())),
    }
}

/// Returns `-1`, `0` or `1` according to the sign of the argument.
///
/// NaN has sign `0`.
pub fn sign(args: &[Number]) -> EvalResult<Number> {
    check_arity("sign", args, 1)?;
    let sign = match args[0] {
        Number::Integer(n) => n.signum(),
        Number::Real(r) if r > 0.0 => 1,
        Number::Real(r) if r < 0.0 => -1,
        Number::Real(_) => 0,
    };
    Ok(Number::Integer(sign))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn angle_conversions() {
        assert_eq!(degrees(&[Number::Real(PI)]).unwrap(), Number::Real(180.0));
        assert_eq!(radians(&[Number::Integer(180)]).unwrap(), Number::Real(PI));
    }

    #[test]
    fn inverse_trig_checks_its_domain() {
        assert_eq!(asin(&[Number::Integer(0)]).unwrap(), Number::Real(0.0));
        assert!(matches!(asin(&[Number::Real(1.5)]),
                         Err(RuntimeError::Domain { .. })));
    }

    #[test]
    fn rounding_of_unrepresentable_floats_stays_float() {
        assert_eq!(unary_round("floor", &[Number::Real(f64::INFINITY)]).unwrap(),
                   Number::Real(f64::INFINITY));
        assert_eq!(unary_round("ceil", &[Number::Integer(7)]).unwrap(), Number::Integer(7));
    }

    #[test]
    fn sign_of_each_kind() {
        assert_eq!(sign(&[Number::Integer(-9)]).unwrap(), Number::Integer(-1));
        assert_eq!(sign(&[Number::Real(0.0)]).unwrap(), Number::Integer(0));
        assert_eq!(sign(&[Number::Real(2.5)]).unwrap(), Number::Integer(1));
    }

    #[test]
    fn wrong_argument_count_is_reported() {
        assert!(matches!(sin(&[]), Err(RuntimeError::ArgumentCountMismatch { expected: 1, found: 0, .. })));
        assert!(matches!(abs(&[Number::Integer(i64::MIN)]),
                         Err(RuntimeError::Overflow { .. })));
    }
}
