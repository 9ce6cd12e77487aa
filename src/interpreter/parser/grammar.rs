use std::fmt;

use crate::interpreter::{
    lexer::{Token, TokenKind},
    operator::{OperatorPosition, OperatorTable},
};

/// A grammar symbol: either a nonterminal expanded through [`substitute`] or
/// a terminal matched against a single token.
///
/// The short tags used in traces are given in brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// The whole line `[Mn]`.
    Line,
    /// An expression `[Ex]`.
    Expression,
    /// What may follow an operand: an infix continuation, a postfix operator
    /// or a call `[Re]`. Nullable.
    Trailer,
    /// A parenthesized argument list after a callee `[Fc]`.
    Call,
    /// The first argument of a call `[Fb]`. Nullable at `)`.
    FirstArgument,
    /// An argument after a comma `[Fr]`. Nullable at `)`.
    NextArgument,
    /// The comma-separated remainder of an argument list `[Fa]`. Nullable.
    ArgumentTail,
    /// A prefix operator occurrence `[Pr]`.
    PrefixOperator,
    /// An infix operator occurrence `[In]`.
    InfixOperator,
    /// A postfix operator occurrence `[Po]`.
    PostfixOperator,
    /// A literal or identifier `[V]`.
    Value,
    /// `(` `[Op]`
    OpenParen,
    /// `)` `[Cp]`
    CloseParen,
    /// `,` `[Cm]`
    Comma,
}

impl Symbol {
    /// Returns `true` for symbols matched directly against a token.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self,
                 Self::PrefixOperator
                 | Self::InfixOperator
                 | Self::PostfixOperator
                 | Self::Value
                 | Self::OpenParen
                 | Self::CloseParen
                 | Self::Comma)
    }

    /// The operator position an operator terminal stands for.
    #[must_use]
    pub const fn operator_position(self) -> Option<OperatorPosition> {
        match self {
            Self::PrefixOperator => Some(OperatorPosition::Prefix),
            Self::InfixOperator => Some(OperatorPosition::Infix),
            Self::PostfixOperator => Some(OperatorPosition::Postfix),
            _ => None,
        }
    }

    /// Short grammar tag, as used in traces.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Line => "Mn",
            Self::Expression => "Ex",
            Self::Trailer => "Re",
            Self::Call => "Fc",
            Self::FirstArgument => "Fb",
            Self::NextArgument => "Fr",
            Self::ArgumentTail => "Fa",
            Self::PrefixOperator => "Pr",
            Self::InfixOperator => "In",
            Self::PostfixOperator => "Po",
            Self::Value => "V",
            Self::OpenParen => "Op",
            Self::CloseParen => "Cp",
            Self::Comma => "Cm",
        }
    }

    /// Checks whether a terminal symbol matches `token`.
    ///
    /// Operator terminals consult the operator table filtered by position;
    /// `Value` accepts literals and identifiers; punctuation terminals need the
    /// exact character. Nonterminals match nothing.
    #[must_use]
    pub fn accepts(self, token: &Token, operators: &OperatorTable) -> bool {
        match self {
            Self::PrefixOperator | Self::InfixOperator | Self::PostfixOperator => {
                token.kind == TokenKind::Operator
                && self.operator_position()
                       .is_some_and(|position| operators.supports(&token.text, position))
            },
            Self::Value => matches!(token.kind, TokenKind::Number | TokenKind::Identifier),
            Self::OpenParen => token.kind == TokenKind::LParen,
            Self::CloseParen => token.kind == TokenKind::RParen,
            Self::Comma => token.kind == TokenKind::Comma,
            Self::Line
            | Self::Expression
            | Self::Trailer
            | Self::Call
            | Self::FirstArgument
            | Self::NextArgument
            | Self::ArgumentTail => false,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The class of the next unconsumed token, which is all the decision table
/// looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookahead {
    /// No tokens remain.
    End,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// A literal or identifier.
    Value,
    /// An operator symbol and the positions it may occupy.
    Operator {
        /// Usable as a prefix operator.
        prefix:  bool,
        /// Usable as an infix operator.
        infix:   bool,
        /// Usable as a postfix operator.
        postfix: bool,
    },
}

impl Lookahead {
    /// Classifies the next token.
    #[must_use]
    pub fn classify(token: Option<&Token>, operators: &OperatorTable) -> Self {
        let Some(token) = token else {
            return Self::End;
        };
        match token.kind {
            TokenKind::Number | TokenKind::Identifier => Self::Value,
            TokenKind::LParen => Self::OpenParen,
            TokenKind::RParen => Self::CloseParen,
            TokenKind::Comma => Self::Comma,
            TokenKind::Operator => {
                Self::Operator { prefix:  operators.supports(&token.text, OperatorPosition::Prefix),
                                 infix:   operators.supports(&token.text, OperatorPosition::Infix),
                                 postfix: operators.supports(&token.text, OperatorPosition::Postfix), }
            },
        }
    }

    /// Returns `true` if the token can start an expression.
    const fn starts_expression(self) -> bool {
        matches!(self,
                 Self::Value | Self::OpenParen | Self::Operator { prefix: true, .. })
    }
}

use Symbol::{
    ArgumentTail, Call, CloseParen, Comma, Expression, FirstArgument, InfixOperator, NextArgument,
    OpenParen, PostfixOperator, PrefixOperator, Trailer, Value,
};

/// Looks up the substitution for `variable` given the lookahead class.
///
/// Returns the ordered children to parse in sequence, an empty slice for a
/// nullable variable that accepts nothing here, or `None` when the variable
/// cannot continue with this token.
///
/// Grammar (first matching rule wins):
/// ```text
///     Mn := Ex                      on "("
///         | Pr Ex                   on a prefix-capable operator
///         | In Ex                   on an infix-capable operator
///         | ε                       at end of input
///         | Ex                      otherwise
///     Ex := Op Ex Cp Re             on "("
///         | Pr Ex                   on a prefix-capable operator
///         | V Re                    on a literal or identifier
///     Re := Fc Re                   on "("
///         | In Ex                   on an infix-capable operator
///         | Po Re                   on a postfix-capable operator
///         | ε                       otherwise
///     Fc := Op Fb Cp                on "("
///     Fb := Ex Fa                   on an expression start
///         | ε                       on ")"
///     Fr := (same as Fb)
///     Fa := Cm Fr                   on ","
///         | ε                       otherwise
/// ```
///
/// # Example
/// ```
/// use clc::interpreter::parser::grammar::{Lookahead, Symbol, substitute};
///
/// let body = substitute(Symbol::Trailer, Lookahead::End).unwrap();
/// assert!(body.is_empty());
///
/// let body = substitute(Symbol::Expression, Lookahead::Value).unwrap();
/// assert_eq!(body, [Symbol::Value, Symbol::Trailer]);
///
/// assert!(substitute(Symbol::Expression, Lookahead::CloseParen).is_none());
/// ```
#[must_use]
pub const fn substitute(variable: Symbol, lookahead: Lookahead) -> Option<&'static [Symbol]> {
    match variable {
        Symbol::Line => match lookahead {
            Lookahead::OpenParen => Some(&[Expression]),
            Lookahead::Operator { prefix: true, .. } => Some(&[PrefixOperator, Expression]),
            Lookahead::Operator { infix: true, .. } => Some(&[InfixOperator, Expression]),
            Lookahead::End => Some(&[]),
            _ => Some(&[Expression]),
        },
        Symbol::Expression => match lookahead {
            Lookahead::OpenParen => Some(&[OpenParen, Expression, CloseParen, Trailer]),
            Lookahead::Operator { prefix: true, .. } => Some(&[PrefixOperator, Expression]),
            Lookahead::Value => Some(&[Value, Trailer]),
            _ => None,
        },
        Symbol::Trailer => match lookahead {
            Lookahead::OpenParen => Some(&[Call, Trailer]),
            Lookahead::Operator { infix: true, .. } => Some(&[InfixOperator, Expression]),
            Lookahead::Operator { postfix: true, .. } => Some(&[PostfixOperator, Trailer]),
            _ => Some(&[]),
        },
        Symbol::Call => match lookahead {
            Lookahead::OpenParen => Some(&[OpenParen, FirstArgument, CloseParen]),
            _ => None,
        },
        Symbol::FirstArgument | Symbol::NextArgument => {
            if lookahead.starts_expression() {
                Some(&[Expression, ArgumentTail])
            } else if matches!(lookahead, Lookahead::CloseParen) {
                Some(&[])
            } else {
                None
            }
        },
        Symbol::ArgumentTail => match lookahead {
            Lookahead::Comma => Some(&[Comma, NextArgument]),
            _ => Some(&[]),
        },
        // Terminals never expand.
        Symbol::PrefixOperator
        | Symbol::InfixOperator
        | Symbol::PostfixOperator
        | Symbol::Value
        | Symbol::OpenParen
        | Symbol::CloseParen
        | Symbol::Comma => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUS: Lookahead = Lookahead::Operator { prefix:  true,
                                                   infix:   true,
                                                   postfix: false, };
    const BANG: Lookahead = Lookahead::Operator { prefix:  true,
                                                  infix:   false,
                                                  postfix: true, };
    const STAR: Lookahead = Lookahead::Operator { prefix:  false,
                                                  infix:   true,
                                                  postfix: false, };

    #[test]
    fn line_prefers_prefix_over_implicit_answer() {
        assert_eq!(substitute(Symbol::Line, MINUS), Some(&[PrefixOperator, Expression][..]));
        assert_eq!(substitute(Symbol::Line, STAR), Some(&[InfixOperator, Expression][..]));
        assert_eq!(substitute(Symbol::Line, Lookahead::End), Some(&[][..]));
    }

    #[test]
    fn trailer_prefers_infix_over_postfix() {
        assert_eq!(substitute(Symbol::Trailer, MINUS), Some(&[InfixOperator, Expression][..]));
        assert_eq!(substitute(Symbol::Trailer, BANG), Some(&[PostfixOperator, Trailer][..]));
        assert_eq!(substitute(Symbol::Trailer, Lookahead::Comma), Some(&[][..]));
    }

    #[test]
    fn argument_lists() {
        assert_eq!(substitute(Symbol::FirstArgument, Lookahead::CloseParen), Some(&[][..]));
        assert_eq!(substitute(Symbol::NextArgument, MINUS), Some(&[Expression, ArgumentTail][..]));
        assert_eq!(substitute(Symbol::FirstArgument, Lookahead::Comma), None);
        assert_eq!(substitute(Symbol::ArgumentTail, Lookahead::Comma), Some(&[Comma, NextArgument][..]));
        assert_eq!(substitute(Symbol::Call, Lookahead::Value), None);
    }

    #[test]
    fn expression_rejects_tokens_that_cannot_start_it() {
        assert_eq!(substitute(Symbol::Expression, STAR), None);
        assert_eq!(substitute(Symbol::Expression, Lookahead::End), None);
    }
}
