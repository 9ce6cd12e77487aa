//! # clc
//!
//! clc is a command line calculator written in Rust.
//! It evaluates single-line arithmetic and logical expressions with support
//! for variables, compound assignment, prefix and postfix operators, and a
//! library of math functions.
//!
//! A line passes through five stages, each of which may stop with an error:
//! tokenizer, grammar parser, operator resolver, postfix converter and
//! evaluator. [`evaluate_line`] runs all of them; [`Session`] adds the answer
//! variable and line repetition on top.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::{
        core::{Evaluation, evaluate},
        environment::VariableEnvironment,
        function::core::FunctionTable,
    },
    lexer::tokenize,
    operator::OperatorTable,
    parser::core::parse,
    postfix::to_postfix,
    resolver::resolve_operators,
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, resolving, converting or evaluating a line. Every error belongs
/// to one category of the user-facing taxonomy, which is printed in front of
/// its message.
///
/// # Responsibilities
/// - Defines error enums for the parse phase and the runtime phase.
/// - Maps every variant to an `ErrorKind`.
/// - Unifies both phases in a single `Error` for pipeline callers.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, parser, resolver, postfix converter,
/// evaluator and the numeric value type. Each stage is usable on its own;
/// [`evaluate_line`] chains them.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for each stage.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Interactive session state.
///
/// Wraps the environment and function table with the answer variable and the
/// repeat-last-line behaviour used by the REPL.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines between integer and
/// floating-point types that never lose data silently, used by the
/// evaluator and the math functions.
pub mod util;

pub use error::{Error, ErrorKind};
pub use session::Session;

/// Evaluates one line against an environment and a function table.
///
/// Runs the full pipeline with the standard operator table: tokenize, parse,
/// resolve operators, convert to postfix and evaluate. Variable writes are
/// committed as they happen and are not rolled back if a later step fails.
///
/// # Errors
/// Returns the first error raised by any stage.
///
/// # Examples
/// ```
/// use clc::{
///     ErrorKind, evaluate_line,
///     interpreter::evaluator::{environment::VariableEnvironment, function::core::FunctionTable},
/// };
///
/// let mut env = VariableEnvironment::with_constants();
/// let functions = FunctionTable::standard();
///
/// let result = evaluate_line("x = 2 + 3 * 4", &mut env, &functions).unwrap();
/// assert_eq!(result.to_string(), "x : 14");
///
/// let result = evaluate_line("sqrt(x + 2)", &mut env, &functions).unwrap();
/// assert_eq!(result.to_string(), "4.0");
///
/// let err = evaluate_line("5 / 0", &mut env, &functions).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ArithmeticFault);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(line = source))]
pub fn evaluate_line(source: &str,
                     environment: &mut VariableEnvironment,
                     functions: &FunctionTable)
                     -> Result<Evaluation, Error> {
    let operators = OperatorTable::standard();

    let tokens = tokenize(source)?;
    let tree = parse(&tokens, &operators)?;
    let resolved = resolve_operators(&tree, &tokens, &operators)?;
    let postfix = to_postfix(resolved)?;

    Ok(evaluate(&postfix, environment, functions)?)
}
