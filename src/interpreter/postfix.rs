use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        resolver::{ResolvedToken, display_sequence},
    },
};

/// Reorders resolved tokens into postfix (reverse Polish) order.
///
/// A shunting-yard conversion with one extension: the `Call` marker that
/// opens an argument list stays on the operator stack like a parenthesis and
/// is emitted when its `)` arrives, after the arguments, so the evaluator
/// finds the callee directly beneath them.
///
/// Grouping parentheses and commas never reach the output.
///
/// # Parameters
/// - `tokens`: Resolved tokens in source order.
///
/// # Returns
/// The same operands, operators and call markers in evaluation order.
///
/// # Errors
/// Returns `UnbalancedParentheses` if a `)` or `,` has no matching opener, or
/// an opener is never closed.
///
/// # Example
/// ```
/// use clc::interpreter::{
///     lexer::tokenize,
///     operator::OperatorTable,
///     parser::core::parse,
///     postfix::to_postfix,
///     resolver::{display_sequence, resolve_operators},
/// };
///
/// let operators = OperatorTable::standard();
/// let tokens = tokenize("2 + 3 * f(4, 5)").unwrap();
/// let tree = parse(&tokens, &operators).unwrap();
/// let resolved = resolve_operators(&tree, &tokens, &operators).unwrap();
///
/// let postfix = to_postfix(resolved).unwrap();
/// assert_eq!(display_sequence(&postfix), "2 3 f 4 5 call/2 * +");
/// ```
pub fn to_postfix(tokens: Vec<ResolvedToken>) -> ParseResult<Vec<ResolvedToken>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<ResolvedToken> = Vec::new();

    for token in tokens {
        match token {
            ResolvedToken::Literal(_) | ResolvedToken::Identifier(_) => output.push(token),
            ResolvedToken::OpenParen | ResolvedToken::Call { .. } => stack.push(token),
            ResolvedToken::Operator(incoming) => {
                while let Some(&ResolvedToken::Operator(top)) = stack.last()
                      && top.pops_before(incoming)
                {
                    output.push(ResolvedToken::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            },
            ResolvedToken::CloseParen => {
                flush_to_marker(&mut stack, &mut output)?;
                if let Some(marker @ ResolvedToken::Call { .. }) = stack.pop() {
                    output.push(marker);
                }
            },
            ResolvedToken::Comma => flush_to_marker(&mut stack, &mut output)?,
        }
    }

    while let Some(token) = stack.pop() {
        if !matches!(token, ResolvedToken::Operator(_)) {
            return Err(ParseError::UnbalancedParentheses);
        }
        output.push(token);
    }

    debug!(postfix = %display_sequence(&output), "converted to postfix");
    Ok(output)
}

/// Moves operators from the stack to the output until a `(` or `Call`
/// marker is on top. The marker itself stays.
fn flush_to_marker(stack: &mut Vec<ResolvedToken>,
                   output: &mut Vec<ResolvedToken>)
                   -> ParseResult<()> {
    loop {
        match stack.last() {
            Some(ResolvedToken::OpenParen | ResolvedToken::Call { .. }) => return Ok(()),
            Some(_) => {
                if let Some(token) = stack.pop() {
                    output.push(token);
                }
            },
            None => return Err(ParseError::UnbalancedParentheses),
        }
    }
}
