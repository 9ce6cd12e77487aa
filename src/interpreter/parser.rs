/// Parser entry point and recursive expansion.
///
/// Drives the top-down expansion of `Symbol::Line` over a token slice and
/// reports syntax errors with the offending token and its position.
pub mod core;

/// Grammar symbols and the substitution table.
///
/// The table is a pure function from a nonterminal and the class of the next
/// token to the ordered symbols that replace it.
pub mod grammar;

/// Arena-backed parse tree.
///
/// Nodes are addressed by index and record their parent, so later stages can
/// inspect the context an operator or parenthesis appears in.
pub mod tree;
