use std::{
    collections::{HashMap, hash_map},
    f64::consts::{E, PI, TAU},
};

use tracing::trace;

use crate::interpreter::value::number::Number;

/// Name of the variable holding the previous result.
///
/// A line that starts with an infix operator, such as `*2`, uses it as the
/// implicit left operand.
pub const ANSWER_VARIABLE: &str = "ans";

/// The variables visible to expressions, persisting across evaluations.
///
/// Only assignment operators and increment/decrement write to it during
/// evaluation; the caller owns it and may inspect or seed it between lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableEnvironment {
    variables: HashMap<String, Number>,
}

impl VariableEnvironment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment seeded with the standard constants:
    /// `pi`, `e`, `tau`, `inf`, `True`, `False`, and the answer variable set
    /// to `0`.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::{evaluator::environment::VariableEnvironment, value::number::Number};
    ///
    /// let env = VariableEnvironment::with_constants();
    /// assert_eq!(env.get("True"), Some(Number::Integer(1)));
    /// assert_eq!(env.get("ans"), Some(Number::Integer(0)));
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut env = Self::new();
        env.set("pi", Number::Real(PI));
        env.set("e", Number::Real(E));
        env.set("tau", Number::Real(TAU));
        env.set("inf", Number::Real(f64::INFINITY));
        env.set("True", Number::Integer(1));
        env.set("False", Number::Integer(0));
        env.set(ANSWER_VARIABLE, Number::Integer(0));
        env
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Number> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Number) {
        let name = name.into();
        trace!(%name, %value, "set variable");
        self.variables.insert(name, value);
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Removes a binding, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Number> {
        self.variables.remove(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variables are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Number> {
        self.variables.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_previous_binding() {
        let mut env = VariableEnvironment::new();
        assert!(env.is_empty());
        env.set("x", Number::Integer(1));
        env.set("x", Number::Real(2.5));
        assert_eq!(env.get("x"), Some(Number::Real(2.5)));
        assert_eq!(env.len(), 1);
        assert_eq!(env.remove("x"), Some(Number::Real(2.5)));
        assert!(!env.contains("x"));
    }

    #[test]
    fn constants_are_seeded() {
        let env = VariableEnvironment::with_constants();
        assert_eq!(env.get("pi"), Some(Number::Real(PI)));
        assert_eq!(env.get("inf"), Some(Number::Real(f64::INFINITY)));
        assert_eq!(env.len(), 7);
    }

    #[test]
    fn iterates_over_every_binding() {
        let mut env = VariableEnvironment::new();
        env.set("a", Number::Integer(1));
        env.set("b", Number::Integer(2));
        let mut bindings: Vec<(String, Number)> = env.iter().map(|(k, v)| (k.clone(), *v)).collect();
        bindings.sort_by(|l, r| l.0.cmp(&r.0));
        assert_eq!(bindings,
                   [("a".to_string(), Number::Integer(1)), ("b".to_string(), Number::Integer(2))]);
    }
}
