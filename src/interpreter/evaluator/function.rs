/// Standard trigonometric, angle, rounding and sign functions.
pub mod builtin;

/// Function table, call dispatch and arity checking.
///
/// Generates the standard table with the `builtin_functions!` macro and
/// executes call markers on the evaluation stack.
pub mod core;

/// Logarithm function implementations.
///
/// Supports base 10, base 2, natural and arbitrary-base logarithms.
pub mod log;

/// Square root and n-th root.
pub mod sqrt;
