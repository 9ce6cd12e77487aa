/// Binary operation dispatch and arithmetic.
///
/// Routes every two-operand operation and implements the arithmetic ones,
/// keeping integer results exact and checking for overflow.
pub mod core;

/// Comparison and logical operations.
///
/// Both produce `1` or `0`.
pub mod comparison;

/// Exponentiation.
pub mod power;
