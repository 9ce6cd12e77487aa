/// Numeric scalar representation.
///
/// Defines the `Number` type shared by every stage from literal resolution to
/// evaluation. Integers and floats coexist; the evaluator promotes integers
/// to floats only when an operation requires it.
pub mod number;
