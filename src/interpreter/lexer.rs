use std::{fmt, ops::Range};

use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The lexical class of a token.
///
/// Operators are a single class: which operator a symbol denotes depends on
/// where the grammar places it, so the lexer only records the symbol text.
/// Two-character operators are registered explicitly; any other pair of
/// operator characters is split into two one-character tokens by longest
/// match.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Numeric literals such as `42`, `2.5`, `.5` or `3.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// Identifiers; variable or function names such as `x` or `log10`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// Operator symbols. Two-character forms are listed first.
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("//")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("<")]
    #[token(">")]
    #[token("!")]
    #[token("^")]
    #[token("%")]
    Operator,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// A classified lexeme together with its byte span in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical class.
    pub kind: TokenKind,
    /// The exact source text.
    pub text: String,
    /// Byte range of the token in the source line.
    pub span: Range<usize>,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self { kind,
               text: text.into(),
               span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Splits a line into tokens.
///
/// Whitespace separates tokens and produces none.
///
/// # Errors
/// Returns `ParseError::UnrecognizedCharacter` for the first character that
/// belongs to no token class (for example `$`, or a lone `&`).
///
/// # Example
/// ```
/// use clc::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("3+4*2").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["3", "+", "4", "*", "2"]);
///
/// assert!(tokenize("3 $ 4").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), span)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(ParseError::UnrecognizedCharacter { character,
                                                               position: span.start });
            },
        }
    }

    trace!(count = tokens.len(), "tokenized line");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).unwrap().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_operator_runs_that_are_not_registered() {
        assert_eq!(texts("x=-3"), ["x", "=", "-", "3"]);
        assert_eq!(texts("!-x"), ["!", "-", "x"]);
        assert_eq!(texts("a---b"), ["a", "--", "-", "b"]);
    }

    #[test]
    fn keeps_registered_two_character_operators() {
        assert_eq!(texts("a//b"), ["a", "//", "b"]);
        assert_eq!(texts("x+=1"), ["x", "+=", "1"]);
        assert_eq!(texts("1<=2&&3!=4"), ["1", "<=", "2", "&&", "3", "!=", "4"]);
    }

    #[test]
    fn caret_and_percent_stand_alone() {
        assert_eq!(texts("2^^3"), ["2", "^", "^", "3"]);
        assert_eq!(texts("7%%2"), ["7", "%", "%", "2"]);
    }

    #[test]
    fn classifies_literals_identifiers_and_punctuation() {
        let tokens = tokenize("atan2(y_1, .5)").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds,
                   [TokenKind::Identifier,
                    TokenKind::LParen,
                    TokenKind::Identifier,
                    TokenKind::Comma,
                    TokenKind::Number,
                    TokenKind::RParen]);
        assert_eq!(tokens[4].span, 11..13);
    }

    #[test]
    fn whitespace_produces_no_tokens() {
        assert!(tokenize("  \t ").unwrap().is_empty());
        assert_eq!(texts(" 1 +\t2 "), ["1", "+", "2"]);
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert_eq!(tokenize("1 + $"),
                   Err(ParseError::UnrecognizedCharacter { character: '$',
                                                           position:  4, }));
        assert!(matches!(tokenize("a & b"),
                         Err(ParseError::UnrecognizedCharacter { character: '&', .. })));
    }
}
