use std::fmt;

use tracing::trace;

use crate::error::ParseError;

/// Where an operator stands relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorPosition {
    /// Before its single operand, as in `-x`.
    Prefix,
    /// Between two operands, as in `x - y`.
    Infix,
    /// After its single operand, as in `x--`.
    Postfix,
}

impl fmt::Display for OperatorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Infix => write!(f, "infix"),
            Self::Postfix => write!(f, "postfix"),
        }
    }
}

/// The computation an operator performs once its operands are popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `+`
    Add,
    /// infix `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, always produces a float.
    Divide,
    /// `//`, floored division.
    FloorDivide,
    /// `%`, floored modulo.
    Modulo,
    /// `^`
    Power,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// prefix `!`
    Not,
    /// prefix `-`
    Negate,
    /// postfix `!`
    Factorial,
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubtractAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// prefix or postfix `++`
    Increment,
    /// prefix or postfix `--`
    Decrement,
}

impl Operation {
    /// For compound assignments, returns the binary operation applied to the
    /// variable's current value.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::operator::Operation;
    ///
    /// assert_eq!(Operation::AddAssign.compound_base(), Some(Operation::Add));
    /// assert_eq!(Operation::Assign.compound_base(), None);
    /// ```
    #[must_use]
    pub const fn compound_base(self) -> Option<Self> {
        match self {
            Self::AddAssign => Some(Self::Add),
            Self::SubtractAssign => Some(Self::Subtract),
            Self::MultiplyAssign => Some(Self::Multiply),
            Self::DivideAssign => Some(Self::Divide),
            _ => None,
        }
    }
}

/// A concrete operator: symbol, arity, position, precedence and semantics.
///
/// Several definitions may share a symbol (`-` is both prefix negation and
/// infix subtraction). Only the position tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorDefinition {
    /// The lexeme, such as `"+="`.
    pub symbol:     &'static str,
    /// Number of operands consumed: 1 for prefix/postfix, 2 for infix.
    pub operands:   usize,
    /// Prefix, infix or postfix.
    pub position:   OperatorPosition,
    /// Binding strength; higher binds tighter.
    pub precedence: u8,
    /// What the evaluator does with the operands.
    pub operation:  Operation,
}

impl OperatorDefinition {
    const fn prefix(symbol: &'static str, operation: Operation) -> Self {
        Self { symbol,
               operands: 1,
               position: OperatorPosition::Prefix,
               precedence: PREFIX_PRECEDENCE,
               operation }
    }

    const fn postfix(symbol: &'static str, operation: Operation) -> Self {
        Self { symbol,
               operands: 1,
               position: OperatorPosition::Postfix,
               precedence: POSTFIX_PRECEDENCE,
               operation }
    }

    const fn infix(symbol: &'static str, precedence: u8, operation: Operation) -> Self {
        Self { symbol,
               operands: 2,
               position: OperatorPosition::Infix,
               precedence,
               operation }
    }

    /// Decides whether `self`, sitting on the conversion stack, must be
    /// emitted before `incoming` is pushed.
    ///
    /// The stack top wins when it binds at least as tightly, so chains of
    /// equal precedence group left to right: `2^3^2` is `(2^3)^2`. Two prefix
    /// operators never pop each other, so `!-x` chains right to left as
    /// `!(-x)`.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::operator::{OperatorPosition, OperatorTable};
    ///
    /// let table = OperatorTable::standard();
    /// let mul = table.resolve("*", OperatorPosition::Infix).unwrap();
    /// let add = table.resolve("+", OperatorPosition::Infix).unwrap();
    /// let pow = table.resolve("^", OperatorPosition::Infix).unwrap();
    ///
    /// assert!(mul.pops_before(add));
    /// assert!(!add.pops_before(mul));
    /// assert!(pow.pops_before(pow));
    /// ```
    #[must_use]
    pub fn pops_before(&self, incoming: &Self) -> bool {
        if self.position == OperatorPosition::Prefix && incoming.position == OperatorPosition::Prefix {
            return false;
        }
        self.precedence >= incoming.precedence
    }
}

impl fmt::Display for OperatorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Precedence of every prefix operator.
pub const PREFIX_PRECEDENCE: u8 = 50;
/// Precedence of every postfix operator.
pub const POSTFIX_PRECEDENCE: u8 = 60;

/// The standard operator set, in lookup order.
static OPERATORS: &[OperatorDefinition] = &[
    OperatorDefinition::prefix("-", Operation::Negate),
    OperatorDefinition::prefix("!", Operation::Not),
    OperatorDefinition::prefix("++", Operation::Increment),
    OperatorDefinition::prefix("--", Operation::Decrement),
    OperatorDefinition::postfix("!", Operation::Factorial),
    OperatorDefinition::postfix("++", Operation::Increment),
    OperatorDefinition::postfix("--", Operation::Decrement),
    OperatorDefinition::infix("^", 40, Operation::Power),
    OperatorDefinition::infix("*", 30, Operation::Multiply),
    OperatorDefinition::infix("/", 30, Operation::Divide),
    OperatorDefinition::infix("//", 30, Operation::FloorDivide),
    OperatorDefinition::infix("%", 30, Operation::Modulo),
    OperatorDefinition::infix("+", 20, Operation::Add),
    OperatorDefinition::infix("-", 20, Operation::Subtract),
    OperatorDefinition::infix("==", 17, Operation::Equal),
    OperatorDefinition::infix("!=", 17, Operation::NotEqual),
    OperatorDefinition::infix("<", 17, Operation::Less),
    OperatorDefinition::infix(">", 17, Operation::Greater),
    OperatorDefinition::infix("<=", 17, Operation::LessEqual),
    OperatorDefinition::infix(">=", 17, Operation::GreaterEqual),
    OperatorDefinition::infix("&&", 14, Operation::And),
    OperatorDefinition::infix("||", 13, Operation::Or),
    OperatorDefinition::infix("=", 10, Operation::Assign),
    OperatorDefinition::infix("+=", 10, Operation::AddAssign),
    OperatorDefinition::infix("-=", 10, Operation::SubtractAssign),
    OperatorDefinition::infix("*=", 10, Operation::MultiplyAssign),
    OperatorDefinition::infix("/=", 10, Operation::DivideAssign),
];

/// An immutable, shareable view of an operator set.
///
/// The parser asks it which positions a symbol can occupy; the resolver asks
/// it for the single definition matching a symbol and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorTable {
    definitions: &'static [OperatorDefinition],
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl OperatorTable {
    /// The calculator's operator set.
    #[must_use]
    pub const fn standard() -> Self {
        Self { definitions: OPERATORS }
    }

    /// Builds a table over a custom definition list.
    #[must_use]
    pub const fn from_definitions(definitions: &'static [OperatorDefinition]) -> Self {
        Self { definitions }
    }

    /// All definitions in lookup order.
    #[must_use]
    pub const fn definitions(&self) -> &'static [OperatorDefinition] {
        self.definitions
    }

    /// Returns every definition with the given symbol and position.
    pub fn candidates<'a>(&self,
                          symbol: &'a str,
                          position: OperatorPosition)
                          -> impl Iterator<Item = &'static OperatorDefinition> + 'a {
        self.definitions
            .iter()
            .filter(move |d| d.symbol == symbol && d.position == position)
    }

    /// Returns `true` if `symbol` can be used in `position`.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::operator::{OperatorPosition, OperatorTable};
    ///
    /// let table = OperatorTable::standard();
    /// assert!(table.supports("-", OperatorPosition::Prefix));
    /// assert!(table.supports("-", OperatorPosition::Infix));
    /// assert!(!table.supports("-", OperatorPosition::Postfix));
    /// ```
    #[must_use]
    pub fn supports(&self, symbol: &str, position: OperatorPosition) -> bool {
        self.candidates(symbol, position).next().is_some()
    }

    /// Finds the single definition for `symbol` in `position`.
    ///
    /// # Errors
    /// - `MisplacedOperator` if no definition matches.
    /// - `AmbiguousOperator` if more than one does.
    pub fn resolve(&self,
                   symbol: &str,
                   position: OperatorPosition)
                   -> Result<&'static OperatorDefinition, ParseError> {
        let mut candidates = self.candidates(symbol, position);
        let Some(definition) = candidates.next() else {
            return Err(ParseError::MisplacedOperator { symbol: symbol.to_string(),
                                                       position });
        };
        if candidates.next().is_some() {
            return Err(ParseError::AmbiguousOperator { symbol: symbol.to_string(),
                                                       position });
        }
        trace!(symbol, %position, precedence = definition.precedence, "resolved operator");
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    static DUPLICATE_MINUS: [OperatorDefinition; 3] =
        [OperatorDefinition::prefix("-", Operation::Negate),
         OperatorDefinition::infix("-", 20, Operation::Subtract),
         OperatorDefinition::infix("-", 25, Operation::Subtract)];

    #[test]
    fn resolves_each_symbol_by_position() {
        let table = OperatorTable::standard();
        assert_eq!(table.resolve("-", OperatorPosition::Prefix).unwrap().operation,
                   Operation::Negate);
        assert_eq!(table.resolve("-", OperatorPosition::Infix).unwrap().operation,
                   Operation::Subtract);
        assert_eq!(table.resolve("!", OperatorPosition::Postfix).unwrap().operation,
                   Operation::Factorial);
    }

    #[test]
    fn missing_definition_is_misplaced() {
        let err = OperatorTable::standard().resolve("*", OperatorPosition::Prefix).unwrap_err();
        assert_eq!(err,
                   ParseError::MisplacedOperator { symbol:   "*".to_string(),
                                                   position: OperatorPosition::Prefix, });
        assert_eq!(err.kind(), ErrorKind::OperatorPositionError);
    }

    #[test]
    fn duplicate_definitions_are_ambiguous() {
        let table = OperatorTable::from_definitions(&DUPLICATE_MINUS);
        assert!(table.resolve("-", OperatorPosition::Prefix).is_ok());

        let err = table.resolve("-", OperatorPosition::Infix).unwrap_err();
        assert_eq!(err,
                   ParseError::AmbiguousOperator { symbol:   "-".to_string(),
                                                   position: OperatorPosition::Infix, });
        assert_eq!(err.kind(), ErrorKind::OperatorPositionError);
    }

    #[test]
    fn equal_precedence_pops_except_between_prefixes() {
        let table = OperatorTable::standard();
        let sub = table.resolve("-", OperatorPosition::Infix).unwrap();
        let add = table.resolve("+", OperatorPosition::Infix).unwrap();
        let assign = table.resolve("=", OperatorPosition::Infix).unwrap();
        let neg = table.resolve("-", OperatorPosition::Prefix).unwrap();
        let not = table.resolve("!", OperatorPosition::Prefix).unwrap();

        assert!(sub.pops_before(add));
        assert!(assign.pops_before(assign));
        assert!(neg.pops_before(sub));
        assert!(!neg.pops_before(not));
        assert!(!not.pops_before(neg));
    }
}
