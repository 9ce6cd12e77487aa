use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, StackItem},
        operator::{Operation, OperatorDefinition},
        value::number::Number,
    },
};

impl Evaluator<'_> {
    /// Applies `=` or a compound assignment (`+=`, `-=`, `*=`, `/=`).
    ///
    /// The target must be a name. Plain assignment binds it to `value`;
    /// compound forms combine the current binding with `value` first, so the
    /// target must already exist.
    ///
    /// # Returns
    /// The target name, so the line reports `name : value`.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if `target` is a number.
    /// - `UnknownVariable` if `value` is an unbound name, or a compound
    ///   target is unbound.
    /// - Arithmetic faults from the compound operation.
    pub(crate) fn assign(&mut self,
                         definition: &OperatorDefinition,
                         target: StackItem,
                         value: StackItem)
                         -> EvalResult<StackItem> {
        let name = Self::target_name(definition, target)?;
        let value = self.resolve(value)?;

        let value = match definition.operation.compound_base() {
            Some(base) => {
                let current = self.lookup(&name)?;
                Self::eval_binary(base, definition.symbol, current, value)?
            },
            None => value,
        };

        debug!(%name, %value, operator = definition.symbol, "assigned");
        self.environment_mut().set(name.clone(), value);
        Ok(StackItem::Name(name))
    }

    /// Applies prefix or postfix `++`/`--` to a variable in place.
    ///
    /// Both positions behave the same: the variable is updated and the
    /// result is its name, which then reads as the updated value.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if `target` is a number.
    /// - `UnknownVariable` if the variable is unbound.
    /// - `Overflow` if the integer update overflows.
    pub(crate) fn step_variable(&mut self,
                                definition: &OperatorDefinition,
                                target: StackItem)
                                -> EvalResult<StackItem> {
        let name = Self::target_name(definition, target)?;
        let current = self.lookup(&name)?;
        let operation = match definition.operation {
            Operation::Decrement => Operation::Subtract,
            _ => Operation::Add,
        };
        let value = Self::eval_binary(operation, definition.symbol, current, Number::Integer(1))?;

        debug!(%name, %value, operator = definition.symbol, "stepped");
        self.environment_mut().set(name.clone(), value);
        Ok(StackItem::Name(name))
    }

    fn target_name(definition: &OperatorDefinition, target: StackItem) -> EvalResult<String> {
        match target {
            StackItem::Name(name) => Ok(name),
            StackItem::Number(n) => {
                Err(RuntimeError::InvalidAssignmentTarget { operator: definition.symbol.to_string(),
                                                            target:   n.to_string(), })
            },
        }
    }
}
