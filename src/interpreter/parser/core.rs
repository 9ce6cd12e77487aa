use tracing::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        operator::OperatorTable,
        parser::{
            grammar::{Lookahead, Symbol, substitute},
            tree::{NodeId, ParseTree},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a tokenized line into a parse tree rooted at `Symbol::Line`.
///
/// Each nonterminal is expanded with the substitution chosen by the next
/// token alone; terminals consume exactly one token. The operator table is
/// consulted to decide which positions an operator symbol may occupy, so
/// `-` can start an expression while `*` cannot.
///
/// # Parameters
/// - `tokens`: The tokens of one line.
/// - `operators`: The operator set used to classify operator symbols.
///
/// # Returns
/// A tree whose root covers every token.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line stops where a symbol is required.
/// - `CannotBeginExpression` if an expression or argument starts with a token
///   that cannot begin one.
/// - `InvalidTerminal` if a required terminal does not match the next token.
/// - `TrailingSymbols` if tokens remain after the line is complete.
///
/// # Example
/// ```
/// use clc::interpreter::{
///     lexer::tokenize,
///     operator::OperatorTable,
///     parser::{core::parse, grammar::Symbol},
/// };
///
/// let tokens = tokenize("f(1, 2)").unwrap();
/// let tree = parse(&tokens, &OperatorTable::standard()).unwrap();
///
/// let root = tree.root().unwrap();
/// assert_eq!(tree.node(root).symbol, Symbol::Line);
/// assert_eq!(tree.terminals().len(), tokens.len());
///
/// assert!(parse(&tokenize("2 +").unwrap(), &OperatorTable::standard()).is_err());
/// ```
pub fn parse(tokens: &[Token], operators: &OperatorTable) -> ParseResult<ParseTree> {
    let mut parser = GrammarParser { tokens,
                                     operators,
                                     position: 0,
                                     tree: ParseTree::new() };
    parser.run()?;

    if let Some(token) = tokens.get(parser.position) {
        return Err(ParseError::TrailingSymbols { token:    token.text.clone(),
                                                 position: token.span.start, });
    }

    debug!(nodes = parser.tree.len(), "parsed line");
    Ok(parser.tree)
}

/// Pending parser work: expand a symbol under a parent, or record where a
/// finished nonterminal ends.
#[derive(Debug, Clone, Copy)]
enum Task {
    Expand(Symbol, Option<NodeId>),
    Close(NodeId),
}

/// Expansion state: the token cursor, the tree under construction and an
/// explicit work stack, so nesting depth is bounded by memory rather than by
/// the call stack.
struct GrammarParser<'a> {
    tokens:    &'a [Token],
    operators: &'a OperatorTable,
    position:  usize,
    tree:      ParseTree,
}

impl GrammarParser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Expands `Symbol::Line` depth-first, left to right.
    fn run(&mut self) -> ParseResult<()> {
        let mut tasks = vec![Task::Expand(Symbol::Line, None)];
        while let Some(task) = tasks.pop() {
            match task {
                Task::Expand(symbol, parent) => self.expand(symbol, parent, &mut tasks)?,
                Task::Close(id) => self.tree.close(id, self.position),
            }
        }
        Ok(())
    }

    /// Expands `symbol` at the cursor and links the new node under `parent`.
    /// A nonterminal schedules its body, then its own closing.
    fn expand(&mut self,
              symbol: Symbol,
              parent: Option<NodeId>,
              tasks: &mut Vec<Task>)
              -> ParseResult<()> {
        let id = self.tree.push(symbol, self.position, parent);

        if symbol.is_terminal() {
            return self.match_terminal(id, symbol);
        }

        let lookahead = Lookahead::classify(self.peek(), self.operators);
        let Some(body) = substitute(symbol, lookahead) else {
            return Err(self.no_substitution(symbol));
        };
        trace!(variable = %symbol,
               ?lookahead,
               body = ?body.iter().map(|s| s.tag()).collect::<Vec<_>>(),
               "substituted");

        tasks.push(Task::Close(id));
        tasks.extend(body.iter().rev().map(|&child| Task::Expand(child, Some(id))));
        Ok(())
    }

    fn match_terminal(&mut self, id: NodeId, symbol: Symbol) -> ParseResult<()> {
        let Some(token) = self.peek() else {
            return Err(ParseError::UnexpectedEndOfInput);
        };
        if !symbol.accepts(token, self.operators) {
            return Err(ParseError::InvalidTerminal { token:    token.text.clone(),
                                                     position: token.span.start, });
        }
        self.tree.bind_token(id, self.position);
        self.position += 1;
        Ok(())
    }

    fn no_substitution(&self, symbol: Symbol) -> ParseError {
        let Some(token) = self.peek() else {
            return ParseError::UnexpectedEndOfInput;
        };
        let token_text = token.text.clone();
        let position = token.span.start;
        match symbol {
            Symbol::Expression | Symbol::FirstArgument | Symbol::NextArgument => {
                ParseError::CannotBeginExpression { token: token_text,
                                                    position }
            },
            _ => ParseError::InvalidTerminal { token: token_text,
                                               position },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse_str(source: &str) -> ParseResult<ParseTree> {
        parse(&tokenize(source).unwrap(), &OperatorTable::standard())
    }

    fn terminal_tags(source: &str) -> Vec<&'static str> {
        let tree = parse_str(source).unwrap();
        tree.terminals()
            .into_iter()
            .map(|id| tree.node(id).symbol.tag())
            .collect()
    }

    #[test]
    fn disambiguates_minus_by_position() {
        assert_eq!(terminal_tags("-3-2"), ["Pr", "V", "In", "V"]);
        assert_eq!(terminal_tags("x--"), ["V", "Po"]);
        assert_eq!(terminal_tags("--x"), ["Pr", "V"]);
    }

    #[test]
    fn leading_infix_operator_hangs_off_the_line() {
        let tree = parse_str("*2").unwrap();
        let root = tree.root().unwrap();
        let first = tree.children(root)[0];
        assert_eq!(tree.node(first).symbol, Symbol::InfixOperator);
        assert_eq!(tree.parent(first), Some(root));
    }

    #[test]
    fn calls_nest_argument_chains() {
        assert_eq!(terminal_tags("f(1,g(2))"),
                   ["V", "Op", "V", "Cm", "V", "Op", "V", "Cp", "Cp"]);
        assert_eq!(terminal_tags("f()"), ["V", "Op", "Cp"]);
    }

    #[test]
    fn spans_are_the_concatenation_of_child_spans() {
        let tree = parse_str("a = f(1, -b!) * (2 + c)").unwrap();
        for (_, node) in tree.iter() {
            if node.symbol.is_terminal() {
                assert_eq!(node.end, node.start + 1);
                continue;
            }
            let mut cursor = node.start;
            for &child in &node.children {
                let child = tree.node(child);
                assert_eq!(child.start, cursor);
                cursor = child.end;
            }
            assert_eq!(cursor, node.end);
        }
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).end, 16);
    }

    #[test]
    fn blank_line_is_an_empty_tree() {
        let tree = parse_str("").unwrap();
        let root = tree.root().unwrap();
        assert!(tree.children(root).is_empty());
        assert!(tree.terminals().is_empty());
    }

    #[test]
    fn reports_syntax_errors() {
        assert_eq!(parse_str("(2+3"), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse_str("2+"), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse_str("2+*3"),
                   Err(ParseError::CannotBeginExpression { token:    "*".to_string(),
                                                           position: 2, }));
        assert_eq!(parse_str("f(,1)"),
                   Err(ParseError::CannotBeginExpression { token:    ",".to_string(),
                                                           position: 2, }));
        assert_eq!(parse_str("3--2"),
                   Err(ParseError::TrailingSymbols { token:    "2".to_string(),
                                                     position: 3, }));
        assert_eq!(parse_str("(1 2)"),
                   Err(ParseError::InvalidTerminal { token:    "2".to_string(),
                                                     position: 3, }));
    }

    #[test]
    fn deep_nesting_does_not_exhaust_the_stack() {
        let depth = 5000;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let tree = parse_str(&source).unwrap();
        assert_eq!(tree.terminals().len(), 2 * depth + 1);

        let source = format!("{}1", "! ".repeat(depth));
        let tree = parse_str(&source).unwrap();
        assert_eq!(tree.node(tree.root().unwrap()).end, depth + 1);

        let source = vec!["1"; depth].join("+");
        assert!(parse_str(&source).is_ok());

        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth - 1));
        assert_eq!(parse_str(&source), Err(ParseError::UnexpectedEndOfInput));
    }
}
