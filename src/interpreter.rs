/// The evaluator module executes postfix token sequences.
///
/// The evaluator is a stack machine: operands are pushed, operators and call
/// markers pop what they need and push their result. It owns no state beyond
/// its stack; variables live in a caller-owned environment and functions in
/// a read-only table.
///
/// # Responsibilities
/// - Applies every operator and calls native functions with checked arity.
/// - Reads and writes variables, reporting unknown names.
/// - Reports runtime errors such as division by zero or integer overflow.
pub mod evaluator;
/// The lexer module tokenizes a line of input.
///
/// The lexer reads the raw text and produces a flat list of tokens, each
/// classified as a number, identifier, operator symbol or punctuation and
/// carrying its byte span. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Splits operator runs into registered one- and two-character symbols.
/// - Skips whitespace.
/// - Reports characters that belong to no token class.
pub mod lexer;
/// Operator definitions and the operator table.
///
/// Declares every operator with its position, operand count and precedence.
/// The parser asks the table which positions a symbol may
/// occupy; the resolver asks it for the single matching definition.
pub mod operator;
/// The parser module builds a parse tree from tokens.
///
/// The grammar decides between prefix, infix and postfix readings of an
/// operator symbol from one token of lookahead, and recognizes function calls
/// and their argument lists.
///
/// # Responsibilities
/// - Expands grammar symbols top-down through a pure substitution table.
/// - Records an arena of nodes with parent links for the resolver.
/// - Reports syntax errors with the offending token and its position.
pub mod parser;
/// Shunting-yard conversion to postfix order.
///
/// Reorders resolved tokens by precedence, drops grouping
/// parentheses and commas, and places each call marker after its arguments.
pub mod postfix;
/// Context-dependent token resolution.
///
/// Uses the parse tree to give each operator its concrete definition, to mark
/// function calls with their argument count and to insert the answer variable
/// before a line that starts with an infix operator.
pub mod resolver;
/// The value module defines the numeric type used throughout evaluation.
///
/// Every literal, variable and result is a `Number`: an exact integer or a
/// float. The module provides literal parsing, conversion and truthiness.
pub mod value;
