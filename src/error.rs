/// Parsing errors.
///
/// Defines all error types that can occur while turning a line of text into a
/// postfix token sequence: unrecognized characters, grammar violations,
/// misplaced operators, empty call arguments and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the stack machine
/// executes a postfix sequence, including unknown names, arity mismatches,
/// arithmetic faults and malformed operand stacks.
pub mod runtime_error;

use std::fmt;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The user-facing error taxonomy.
///
/// Every [`ParseError`] and [`RuntimeError`] variant belongs to exactly one of
/// these categories. The category is what the REPL prints in front of the
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside the recognized alphabet.
    LexError,
    /// Malformed input: unexpected end, invalid terminal, trailing symbols,
    /// unbalanced parentheses or a malformed operand stack.
    SyntaxError,
    /// Unknown variable or function.
    NameError,
    /// Function arity mismatch or an empty call argument.
    ArgumentError,
    /// An operator used in a position it cannot occupy.
    OperatorPositionError,
    /// Division or modulo by zero, invalid factorial operand, overflow or a
    /// math domain error.
    ArithmeticFault,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LexError => "LexError",
            Self::SyntaxError => "SyntaxError",
            Self::NameError => "NameError",
            Self::ArgumentError => "ArgumentError",
            Self::OperatorPositionError => "OperatorPositionError",
            Self::ArithmeticFault => "ArithmeticFault",
        };
        f.write_str(name)
    }
}

/// Any failure produced by the evaluation pipeline.
///
/// Each stage returns its own error type; this enum unifies them so that
/// callers running the whole pipeline can use a single `Result`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized, parsed, resolved or converted.
    #[error("{}: {}", .0.kind(), .0)]
    Parse(#[from] ParseError),
    /// The postfix sequence failed while being executed.
    #[error("{}: {}", .0.kind(), .0)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the taxonomy category of the underlying error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
