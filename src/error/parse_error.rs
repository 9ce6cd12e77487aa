use crate::{error::ErrorKind, interpreter::operator::OperatorPosition};

/// Represents all errors that can occur before evaluation starts.
///
/// Positions are byte offsets into the evaluated line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that belongs to no token class.
    #[error("unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// The grammar needed another token but the line ended.
    #[error("unexpected end of expression")]
    UnexpectedEndOfInput,
    /// A token did not match the terminal the grammar required.
    #[error("'{token}' is not a valid terminal at position {position}")]
    InvalidTerminal {
        /// The token text.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A token that cannot start an expression was found where one was
    /// expected.
    #[error("'{token}' cannot begin an expression (position {position})")]
    CannotBeginExpression {
        /// The token text.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The grammar accepted a prefix of the line and tokens remain.
    #[error("unexpected trailing symbols starting at '{token}' (position {position})")]
    TrailingSymbols {
        /// The first unconsumed token.
        token:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// A closing parenthesis without an opening one, or the reverse.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    /// No operator definition exists for the symbol in this position.
    #[error("'{symbol}' cannot be in that position (used as a {position} operator)")]
    MisplacedOperator {
        /// The operator symbol.
        symbol:   String,
        /// The position the grammar placed it in.
        position: OperatorPosition,
    },
    /// More than one operator definition matches the symbol and position.
    ///
    /// The grammar never produces this; it signals an inconsistent operator
    /// table.
    #[error("'{symbol}' is ambiguous as a {position} operator")]
    AmbiguousOperator {
        /// The operator symbol.
        symbol:   String,
        /// The position the grammar placed it in.
        position: OperatorPosition,
    },
    /// A call argument between commas is empty, as in `f(1,)`.
    #[error("argument {index} of {function} is invalid")]
    EmptyArgument {
        /// Name of the called function.
        function: String,
        /// One-based index of the empty argument.
        index:    usize,
    },
}

impl ParseError {
    /// Returns the taxonomy category of this error.
    ///
    /// # Example
    /// ```
    /// use clc::error::{ErrorKind, ParseError};
    ///
    /// let e = ParseError::UnbalancedParentheses;
    /// assert_eq!(e.kind(), ErrorKind::SyntaxError);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedCharacter { .. } => ErrorKind::LexError,
            Self::UnexpectedEndOfInput
            | Self::InvalidTerminal { .. }
            | Self::CannotBeginExpression { .. }
            | Self::TrailingSymbols { .. }
            | Self::UnbalancedParentheses => ErrorKind::SyntaxError,
            Self::MisplacedOperator { .. } | Self::AmbiguousOperator { .. } => {
                ErrorKind::OperatorPositionError
            },
            Self::EmptyArgument { .. } => ErrorKind::ArgumentError,
        }
    }
}
