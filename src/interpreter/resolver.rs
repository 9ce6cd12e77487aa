use std::fmt;

use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::environment::ANSWER_VARIABLE,
        lexer::{Token, TokenKind},
        operator::{OperatorDefinition, OperatorTable},
        parser::{
            core::ParseResult,
            grammar::Symbol,
            tree::{NodeId, ParseTree},
        },
        value::number::Number,
    },
};

/// A token whose meaning no longer depends on context.
///
/// Operators carry the definition selected by their grammar position, and
/// each function call is marked by a `Call` that replaces its opening
/// parenthesis and records how many arguments the call passes.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedToken {
    /// A numeric literal.
    Literal(Number),
    /// A variable or function name.
    Identifier(String),
    /// A concrete operator.
    Operator(&'static OperatorDefinition),
    /// The opening parenthesis of a call with `arity` arguments.
    Call {
        /// Number of arguments between the parentheses.
        arity: usize,
    },
    /// A grouping `(`.
    OpenParen,
    /// `)`, closing either a group or a call.
    CloseParen,
    /// `,` between call arguments.
    Comma,
}

impl fmt::Display for ResolvedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(definition) => write!(f, "{definition}"),
            Self::Call { arity } => write!(f, "call/{arity}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// Turns the terminals of a parse tree into context-free tokens.
///
/// Walks the terminals left to right and uses each one's grammar tag and
/// parent to decide what it means:
/// - operator terminals resolve by symbol and position;
/// - an infix operator directly under the line root has no left operand, so
///   the answer variable is inserted before it (`*2` means `ans * 2`);
/// - an opening parenthesis under a call becomes `Call { arity }`;
/// - numeric literals are converted to [`Number`].
///
/// # Parameters
/// - `tree`: The parse tree produced for `tokens`.
/// - `tokens`: The tokens the tree indexes into.
/// - `operators`: The operator set used to pick definitions.
///
/// # Returns
/// The resolved tokens in source order.
///
/// # Errors
/// - `MisplacedOperator` / `AmbiguousOperator` from the operator table.
/// - `EmptyArgument` if a call has an empty argument after a comma, as in
///   `f(1,)`.
///
/// # Example
/// ```
/// use clc::interpreter::{
///     lexer::tokenize,
///     operator::OperatorTable,
///     parser::core::parse,
///     resolver::{ResolvedToken, resolve_operators},
/// };
///
/// let operators = OperatorTable::standard();
/// let tokens = tokenize("max(1, 2)").unwrap();
/// let tree = parse(&tokens, &operators).unwrap();
/// let resolved = resolve_operators(&tree, &tokens, &operators).unwrap();
///
/// assert_eq!(resolved[1], ResolvedToken::Call { arity: 2 });
/// ```
pub fn resolve_operators(tree: &ParseTree,
                         tokens: &[Token],
                         operators: &OperatorTable)
                         -> ParseResult<Vec<ResolvedToken>> {
    let mut resolved = Vec::with_capacity(tokens.len() + 1);

    for id in tree.terminals() {
        let node = tree.node(id);
        let Some(index) = node.token else {
            continue;
        };
        let token = &tokens[index];
        let parent = node.parent.map(|p| tree.node(p).symbol);

        match node.symbol {
            Symbol::PrefixOperator | Symbol::InfixOperator | Symbol::PostfixOperator => {
                if node.symbol == Symbol::InfixOperator && parent == Some(Symbol::Line) {
                    resolved.push(ResolvedToken::Identifier(ANSWER_VARIABLE.to_string()));
                }
                let Some(position) = node.symbol.operator_position() else {
                    continue;
                };
                resolved.push(ResolvedToken::Operator(operators.resolve(&token.text, position)?));
            },
            Symbol::Value => resolved.push(resolve_value(token)?),
            Symbol::OpenParen => match node.parent {
                Some(call) if parent == Some(Symbol::Call) => {
                    let arity = count_arguments(tree, tokens, call, index)?;
                    resolved.push(ResolvedToken::Call { arity });
                },
                _ => resolved.push(ResolvedToken::OpenParen),
            },
            Symbol::CloseParen => resolved.push(ResolvedToken::CloseParen),
            Symbol::Comma => resolved.push(ResolvedToken::Comma),
            _ => {},
        }
    }

    debug!(tokens = %display_sequence(&resolved), "resolved operators");
    Ok(resolved)
}

fn resolve_value(token: &Token) -> ParseResult<ResolvedToken> {
    match token.kind {
        TokenKind::Number => {
            Number::parse_literal(&token.text).map(ResolvedToken::Literal)
                                              .ok_or_else(|| ParseError::InvalidTerminal { token:    token.text.clone(),
                                                                                           position: token.span.start, })
        },
        _ => Ok(ResolvedToken::Identifier(token.text.clone())),
    }
}

/// Counts the arguments of the call node `call` by following its
/// `Fb -> Fa -> Fr -> Fa ...` chain.
fn count_arguments(tree: &ParseTree,
                   tokens: &[Token],
                   call: NodeId,
                   open_paren: usize)
                   -> ParseResult<usize> {
    let Some(first) = tree.child(call, Symbol::FirstArgument) else {
        return Ok(0);
    };
    if tree.children(first).is_empty() {
        return Ok(0);
    }

    let mut arity = 1;
    let mut tail = tree.child(first, Symbol::ArgumentTail);
    while let Some(fa) = tail
          && let Some(next) = tree.child(fa, Symbol::NextArgument)
    {
        if tree.children(next).is_empty() {
            let function = open_paren.checked_sub(1)
                                     .and_then(|i| tokens.get(i))
                                     .map_or_else(String::new, |t| t.text.clone());
            return Err(ParseError::EmptyArgument { function,
                                                   index: arity + 1 });
        }
        arity += 1;
        tail = tree.child(next, Symbol::ArgumentTail);
    }
    Ok(arity)
}

/// Renders a token sequence separated by spaces, for traces and tests.
///
/// # Example
/// ```
/// use clc::interpreter::resolver::{ResolvedToken, display_sequence};
///
/// let tokens = [ResolvedToken::Identifier("f".into()), ResolvedToken::Call { arity: 0 }];
/// assert_eq!(display_sequence(&tokens), "f call/0");
/// ```
#[must_use]
pub fn display_sequence(tokens: &[ResolvedToken]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
