use crate::error::ErrorKind;

/// Represents all errors that can occur while executing a postfix sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that has no binding.
    #[error("\"{name}\" does not exist as a variable name")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not in the function table.
    #[error("\"{name}\" does not exist as a function")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The value in front of a call's parentheses is not a name.
    #[error("{callee} is not callable")]
    NotCallable {
        /// Textual form of the callee.
        callee: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("\"{function}\" takes {expected} argument(s), but {found} were given")]
    ArgumentCountMismatch {
        /// The name of the function.
        function: String,
        /// Declared arity.
        expected: usize,
        /// Number of arguments in the call.
        found:    usize,
    },
    /// Division, floor division or modulo by zero.
    #[error("division by zero in '{operator}'")]
    DivisionByZero {
        /// The operator or function that divided.
        operator: String,
    },
    /// Factorial of a negative or fractional value.
    #[error("factorial is only defined for non-negative integers, found {operand}")]
    InvalidFactorial {
        /// Textual form of the operand.
        operand: String,
    },
    /// Integer arithmetic overflowed.
    #[error("integer overflow while computing '{operator}'")]
    Overflow {
        /// The operator or function that overflowed.
        operator: String,
    },
    /// A builtin received an argument outside its mathematical domain.
    #[error("math domain error in {function}({argument})")]
    Domain {
        /// The name of the function.
        function: String,
        /// Textual form of the rejected argument.
        argument: String,
    },
    /// An operator found fewer values on the stack than it consumes.
    #[error("not enough operands for '{operator}'")]
    NotEnoughOperands {
        /// The operator symbol, or the function name for calls.
        operator: String,
    },
    /// More than one value remained after the last operator.
    #[error("you are missing operator(s): {found} values remain")]
    MissingOperators {
        /// Number of values left on the stack.
        found: usize,
    },
    /// The left side of an assignment or the operand of `++`/`--` is not a
    /// variable name.
    #[error("cannot apply '{operator}' to {target}, a variable name is required")]
    InvalidAssignmentTarget {
        /// The assignment or increment operator.
        operator: String,
        /// Textual form of the rejected target.
        target:   String,
    },
    /// A structural token (parenthesis or comma) reached the evaluator.
    #[error("unexpected '{token}' in postfix sequence")]
    StructuralToken {
        /// The token text.
        token: String,
    },
}

impl RuntimeError {
    /// Returns the taxonomy category of this error.
    ///
    /// # Example
    /// ```
    /// use clc::error::{ErrorKind, RuntimeError};
    ///
    /// let e = RuntimeError::DivisionByZero { operator: "/".to_string() };
    /// assert_eq!(e.kind(), ErrorKind::ArithmeticFault);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. } | Self::UnknownFunction { .. } | Self::NotCallable { .. } => {
                ErrorKind::NameError
            },
            Self::ArgumentCountMismatch { .. } => ErrorKind::ArgumentError,
            Self::DivisionByZero { .. }
            | Self::InvalidFactorial { .. }
            | Self::Overflow { .. }
            | Self::Domain { .. } => ErrorKind::ArithmeticFault,
            Self::NotEnoughOperands { .. }
            | Self::MissingOperators { .. }
            | Self::InvalidAssignmentTarget { .. }
            | Self::StructuralToken { .. } => ErrorKind::SyntaxError,
        }
    }
}
