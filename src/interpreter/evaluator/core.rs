use std::fmt;

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{environment::VariableEnvironment, function::core::FunctionTable},
        operator::{Operation, OperatorDefinition},
        resolver::ResolvedToken,
        value::number::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An entry on the evaluation stack.
///
/// Identifiers are pushed unresolved so assignment operators and calls can
/// see the name itself; every other consumer looks the name up on pop.
#[derive(Debug, Clone, PartialEq)]
pub enum StackItem {
    /// A computed or literal number.
    Number(Number),
    /// A variable or function name.
    Name(String),
}

impl fmt::Display for StackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// The outcome of evaluating one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The line contained no expression.
    Empty,
    /// The line produced a number.
    Value(Number),
    /// The line produced a variable name, typically from an assignment.
    Variable {
        /// The variable name.
        name:  String,
        /// Its value after evaluation.
        value: Number,
    },
}

impl Evaluation {
    /// The numeric value of the result, if any.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::{evaluator::core::Evaluation, value::number::Number};
    ///
    /// let result = Evaluation::Variable { name:  "x".to_string(),
    ///                                     value: Number::Integer(5), };
    /// assert_eq!(result.value(), Some(Number::Integer(5)));
    /// assert_eq!(result.to_string(), "x : 5");
    /// assert_eq!(Evaluation::Empty.value(), None);
    /// ```
    #[must_use]
    pub const fn value(&self) -> Option<Number> {
        match self {
            Self::Empty => None,
            Self::Value(value) | Self::Variable { value, .. } => Some(*value),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Value(value) => write!(f, "{value}"),
            Self::Variable { name, value } => write!(f, "{name} : {value}"),
        }
    }
}

/// Stack machine state for one postfix sequence.
///
/// The environment is borrowed mutably for the whole run; writes made by
/// assignments are visible to the rest of the sequence immediately and are
/// kept even if a later token fails.
pub struct Evaluator<'env> {
    stack:       Vec<StackItem>,
    environment: &'env mut VariableEnvironment,
    functions:   &'env FunctionTable,
}

/// Executes a postfix sequence.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by
///   [`to_postfix`](crate::interpreter::postfix::to_postfix).
/// - `environment`: Variables read and written by the expression.
/// - `functions`: Functions available to call markers.
///
/// # Returns
/// `Evaluation::Empty` for an empty sequence, otherwise the single value or
/// variable left on the stack.
///
/// # Errors
/// - `NotEnoughOperands` if an operator or call finds too few stack items.
/// - `MissingOperators` if more than one item remains at the end.
/// - `UnknownVariable`, `UnknownFunction`, `NotCallable` for name lookups.
/// - `ArgumentCountMismatch` if a call passes the wrong number of arguments.
/// - Arithmetic faults raised by operators and functions.
///
/// # Example
/// ```
/// use clc::interpreter::{
///     evaluator::{
///         core::{Evaluation, evaluate},
///         environment::VariableEnvironment,
///         function::core::FunctionTable,
///     },
///     operator::{OperatorPosition, OperatorTable},
///     resolver::ResolvedToken,
///     value::number::Number,
/// };
///
/// let operators = OperatorTable::standard();
/// let add = operators.resolve("+", OperatorPosition::Infix).unwrap();
/// let postfix = [ResolvedToken::Literal(Number::Integer(2)),
///                ResolvedToken::Literal(Number::Integer(3)),
///                ResolvedToken::Operator(add)];
///
/// let mut env = VariableEnvironment::new();
/// let result = evaluate(&postfix, &mut env, &FunctionTable::standard()).unwrap();
/// assert_eq!(result, Evaluation::Value(Number::Integer(5)));
/// ```
pub fn evaluate(postfix: &[ResolvedToken],
                environment: &mut VariableEnvironment,
                functions: &FunctionTable)
                -> EvalResult<Evaluation> {
    let mut evaluator = Evaluator::new(environment, functions);
    for token in postfix {
        evaluator.step(token)?;
    }
    let evaluation = evaluator.finish()?;
    debug!(result = %evaluation, "evaluated");
    Ok(evaluation)
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator with an empty stack.
    #[must_use]
    pub fn new(environment: &'env mut VariableEnvironment, functions: &'env FunctionTable) -> Self {
        Self { stack: Vec::new(),
               environment,
               functions }
    }

    /// Executes a single postfix token.
    ///
    /// # Errors
    /// Any error the token's operation raises. Grouping parentheses and
    /// commas are rejected with `StructuralToken`; they never appear in a
    /// well-formed postfix sequence.
    pub fn step(&mut self, token: &ResolvedToken) -> EvalResult<()> {
        match token {
            ResolvedToken::Literal(n) => self.stack.push(StackItem::Number(*n)),
            ResolvedToken::Identifier(name) => self.stack.push(StackItem::Name(name.clone())),
            ResolvedToken::Operator(definition) => self.apply_operator(definition)?,
            ResolvedToken::Call { arity } => {
                let result = self.call(*arity)?;
                self.stack.push(StackItem::Number(result));
            },
            ResolvedToken::OpenParen | ResolvedToken::CloseParen | ResolvedToken::Comma => {
                return Err(RuntimeError::StructuralToken { token: token.to_string() });
            },
        }
        Ok(())
    }

    /// Consumes the evaluator and produces the line's result.
    ///
    /// # Errors
    /// - `MissingOperators` if more than one item remains.
    /// - `UnknownVariable` if the remaining item is an unbound name.
    pub fn finish(mut self) -> EvalResult<Evaluation> {
        if self.stack.len() > 1 {
            return Err(RuntimeError::MissingOperators { found: self.stack.len() });
        }
        match self.stack.pop() {
            None => Ok(Evaluation::Empty),
            Some(StackItem::Number(value)) => Ok(Evaluation::Value(value)),
            Some(StackItem::Name(name)) => {
                let value = self.lookup(&name)?;
                Ok(Evaluation::Variable { name, value })
            },
        }
    }

    fn apply_operator(&mut self, definition: &OperatorDefinition) -> EvalResult<()> {
        let symbol = definition.symbol;
        let result = match definition.operation {
            Operation::Assign
            | Operation::AddAssign
            | Operation::SubtractAssign
            | Operation::MultiplyAssign
            | Operation::DivideAssign => {
                let value = self.pop(symbol)?;
                let target = self.pop(symbol)?;
                self.assign(definition, target, value)?
            },
            Operation::Increment | Operation::Decrement => {
                let target = self.pop(symbol)?;
                self.step_variable(definition, target)?
            },
            operation if definition.operands == 1 => {
                let operand = self.pop(symbol)?;
                let operand = self.resolve(operand)?;
                StackItem::Number(Self::eval_unary(operation, symbol, operand)?)
            },
            operation => {
                let rhs = self.pop(symbol)?;
                let lhs = self.pop(symbol)?;
                let lhs = self.resolve(lhs)?;
                let rhs = self.resolve(rhs)?;
                StackItem::Number(Self::eval_binary(operation, symbol, lhs, rhs)?)
            },
        };
        self.stack.push(result);
        Ok(())
    }

    /// Pops one stack item on behalf of `consumer`.
    ///
    /// # Errors
    /// `NotEnoughOperands` if the stack is empty.
    pub(crate) fn pop(&mut self, consumer: &str) -> EvalResult<StackItem> {
        self.stack
            .pop()
            .ok_or_else(|| RuntimeError::NotEnoughOperands { operator: consumer.to_string() })
    }

    /// Turns a stack item into a number, looking names up in the
    /// environment.
    pub(crate) fn resolve(&self, item: StackItem) -> EvalResult<Number> {
        match item {
            StackItem::Number(n) => Ok(n),
            StackItem::Name(name) => self.lookup(&name),
        }
    }

    pub(crate) fn lookup(&self, name: &str) -> EvalResult<Number> {
        self.environment
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    pub(crate) fn environment_mut(&mut self) -> &mut VariableEnvironment {
        self.environment
    }

    pub(crate) const fn functions(&self) -> &'env FunctionTable {
        self.functions
    }
}
