use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::number::Number,
    },
};

/// Computes a fixed-base logarithm: `log10`, `log2` or `loge`.
///
/// Accepts exactly one positive argument. The result is always a float.
///
/// # Errors
/// `Domain` for arguments that are zero or negative.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::log::log_fixed, value::number::Number};
///
/// assert_eq!(log_fixed("log10", &[Number::Integer(1000)]).unwrap(), Number::Real(3.0));
/// assert_eq!(log_fixed("log2", &[Number::Integer(8)]).unwrap(), Number::Real(3.0));
/// assert!(log_fixed("loge", &[Number::Integer(0)]).is_err());
/// ```
pub fn log_fixed(func_name: &str, args: &[Number]) -> EvalResult<Number> {
    check_arity(func_name, args, 1)?;
    let x = positive(func_name, args[0])?;
    let result = match func_name {
        "log10" => x.log10(),
        "log2" => x.log2(),
        _ => x.ln(),
    };
    Ok(Number::Real(result))
}

/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two arguments: `value` and `base`, computing
/// `ln(value) / ln(base)`.
///
/// # Errors
/// - `Domain` if either argument is zero or negative.
/// - `DivisionByZero` for base `1`, where `ln(base)` is zero.
///
/// # Example
/// ```
/// use clc::interpreter::{evaluator::function::log::logbase, value::number::Number};
///
/// let result = logbase(&[Number::Integer(81), Number::Integer(3)]).unwrap();
/// assert_eq!(result, Number::Real(4.0));
/// ```
pub fn logbase(args: &[Number]) -> EvalResult<Number> {
    check_arity("logbase", args, 2)?;
    let value = positive("logbase", args[0])?;
    let base = positive("logbase", args[1])?;

    let ln_base = base.ln();
    if ln_base == 0.0 {
        return Err(RuntimeError::DivisionByZero { operator: "logbase".to_string() });
    }
    Ok(Number::Real(value.ln() / ln_base))
}

fn positive(function: &str, value: Number) -> EvalResult<f64> {
    let x = value.as_real();
    if x > 0.0 {
        Ok(x)
    } else {
        Err(RuntimeError::Domain { function: function.to_string(),
                                   argument: value.to_string(), })
    }
}
