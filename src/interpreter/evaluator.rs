/// Assignment, compound assignment and increment/decrement.
///
/// The only operations that write to the variable environment. They take
/// the target as a name rather than a value.
pub mod assignment;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, exponentiation, comparisons and logical operators.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the stack machine, its stack items, the line result type and the
/// `EvalResult` alias shared by every evaluation routine.
pub mod core;

/// The variable environment.
///
/// Maps names to numbers across evaluations and provides the standard
/// constants.
pub mod environment;

/// Function evaluation.
///
/// Holds the function table, the standard math library and call dispatch with
/// argument checking.
pub mod function;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, logical NOT and factorial.
pub mod unary;
