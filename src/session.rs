use tracing::debug;

use crate::{
    Error, evaluate_line,
    interpreter::{
        evaluator::{
            core::Evaluation,
            environment::{ANSWER_VARIABLE, VariableEnvironment},
            function::core::FunctionTable,
        },
        value::number::Number,
    },
};

/// An interactive calculator session.
///
/// Owns the variable environment and function table for a sequence of
/// lines, and adds the two behaviours an interactive user expects:
/// - every numeric result is stored in the answer variable (`ans`), so the
///   next line can start with an infix operator;
/// - a blank line repeats the previous non-blank line.
///
/// # Example
/// ```
/// use clc::{Session, interpreter::value::number::Number};
///
/// let mut session = Session::new();
/// session.submit("2 + 3").unwrap();
/// let result = session.submit("* 4").unwrap();
/// assert_eq!(result.value(), Some(Number::Integer(20)));
///
/// // A blank line repeats `* 4`.
/// let result = session.submit("").unwrap();
/// assert_eq!(result.value(), Some(Number::Integer(80)));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    environment: VariableEnvironment,
    functions:   FunctionTable,
    last_line:   Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the standard constants and functions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(VariableEnvironment::with_constants(), FunctionTable::standard())
    }

    /// Creates a session over a custom environment and function table.
    #[must_use]
    pub const fn with_parts(environment: VariableEnvironment, functions: FunctionTable) -> Self {
        Self { environment,
               functions,
               last_line: None }
    }

    /// Evaluates one line.
    ///
    /// A line made only of whitespace repeats the previous non-blank line, or
    /// evaluates to `Evaluation::Empty` if there is none. On success the
    /// result's value, if any, is stored in the answer variable. Variable
    /// writes made before a failure are kept.
    ///
    /// # Errors
    /// Any error raised by the pipeline.
    pub fn submit(&mut self, line: &str) -> Result<Evaluation, Error> {
        let line = if line.trim().is_empty() {
            match &self.last_line {
                Some(previous) => previous.clone(),
                None => return Ok(Evaluation::Empty),
            }
        } else {
            self.last_line = Some(line.to_string());
            line.to_string()
        };

        let result = evaluate_line(&line, &mut self.environment, &self.functions)?;
        if let Some(value) = result.value() {
            debug!(%value, "stored answer");
            self.environment.set(ANSWER_VARIABLE, value);
        }
        Ok(result)
    }

    /// The last stored result.
    #[must_use]
    pub fn answer(&self) -> Option<Number> {
        self.environment.get(ANSWER_VARIABLE)
    }

    /// The session's variables.
    #[must_use]
    pub const fn environment(&self) -> &VariableEnvironment {
        &self.environment
    }

    /// Mutable access to the session's variables.
    pub const fn environment_mut(&mut self) -> &mut VariableEnvironment {
        &mut self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn blank_first_line_is_empty() {
        let mut session = Session::new();
        assert_eq!(session.submit("   ").unwrap(), Evaluation::Empty);
        assert_eq!(session.answer(), Some(Number::Integer(0)));
    }

    #[test]
    fn assignment_results_update_the_answer() {
        let mut session = Session::new();
        let result = session.submit("x = 4").unwrap();
        assert_eq!(result.to_string(), "x : 4");
        assert_eq!(session.answer(), Some(Number::Integer(4)));
        assert_eq!(session.submit("ans + x").unwrap().to_string(), "8");
    }

    #[test]
    fn failed_lines_keep_earlier_writes() {
        let mut session = Session::new();
        let err = session.submit("y = 2, 1/0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SyntaxError);

        let err = session.submit("(z = 3) / 0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticFault);
        assert_eq!(session.environment().get("z"), Some(Number::Integer(3)));
        assert_eq!(session.answer(), Some(Number::Integer(0)));
    }

    #[test]
    fn failed_lines_are_still_repeated() {
        let mut session = Session::new();
        assert!(session.submit("q").is_err());
        session.environment_mut().set("q", Number::Integer(9));
        assert_eq!(session.submit("").unwrap().to_string(), "q : 9");
    }
}
