use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, StackItem},
            function::{builtin, log, sqrt},
        },
        value::number::Number,
    },
};

/// Type alias for native function handlers.
///
/// A function receives its evaluated arguments in call order.
pub type NativeFn = fn(&[Number]) -> EvalResult<Number>;

/// A callable entry: name, exact arity and implementation.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    /// The name used at call sites.
    pub name:  &'static str,
    /// The exact number of arguments.
    pub arity: usize,
    /// The implementation.
    pub func:  NativeFn,
}

/// Defines the standard functions by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - a function pointer implementing the function.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table copied into [`FunctionTable::standard`]),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the standard functions, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"     => { arity: 1, func: builtin::sin },
    "cos"     => { arity: 1, func: builtin::cos },
    "tan"     => { arity: 1, func: builtin::tan },
    "asin"    => { arity: 1, func: builtin::asin },
    "acos"    => { arity: 1, func: builtin::acos },
    "atan"    => { arity: 1, func: builtin::atan },
    "atan2"   => { arity: 2, func: builtin::atan2 },
    "deg"     => { arity: 1, func: builtin::degrees },
    "rad"     => { arity: 1, func: builtin::radians },
    "floor"   => { arity: 1, func: |args| builtin::unary_round("floor", args) },
    "ceil"    => { arity: 1, func: |args| builtin::unary_round("ceil", args) },
    "abs"     => { arity: 1, func: builtin::abs },
    "sign"    => { arity: 1, func: builtin::sign },
    "log10"   => { arity: 1, func: |args| log::log_fixed("log10", args) },
    "log2"    => { arity: 1, func: |args| log::log_fixed("log2", args) },
    "loge"    => { arity: 1, func: |args| log::log_fixed("loge", args) },
    "logbase" => { arity: 2, func: log::logbase },
    "sqrt"    => { arity: 1, func: sqrt::sqrt },
    "nthroot" => { arity: 2, func: sqrt::nthroot },
}

/// The functions callable from expressions.
///
/// The table is read-only during evaluation. [`FunctionTable::standard`]
/// holds the calculator's math library; [`FunctionTable::with`] registers
/// extra native functions or replaces existing ones.
#[derive(Debug, Clone)]
pub struct FunctionTable {
    functions: HashMap<&'static str, FunctionDef>,
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl FunctionTable {
    /// Creates a table with no functions.
    #[must_use]
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    /// Creates a table holding every standard function.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::evaluator::function::core::FunctionTable;
    ///
    /// let table = FunctionTable::standard();
    /// assert_eq!(table.get("atan2").unwrap().arity, 2);
    /// assert!(table.get("print").is_none());
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self { functions: BUILTIN_TABLE.iter().map(|def| (def.name, *def)).collect() }
    }

    /// Registers `func` under `name`, replacing any function with that name.
    ///
    /// # Example
    /// ```
    /// use clc::interpreter::{evaluator::function::core::FunctionTable, value::number::Number};
    ///
    /// let table = FunctionTable::new().with("one", 0, |_| Ok(Number::Integer(1)));
    /// assert_eq!(table.len(), 1);
    /// ```
    #[must_use]
    pub fn with(mut self, name: &'static str, arity: usize, func: NativeFn) -> Self {
        self.functions.insert(name, FunctionDef { name, arity, func });
        self
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Returns `true` if `name` is a registered function.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if no functions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Verifies that a native function received `expected` arguments.
///
/// The evaluator checks the popped stack items before resolving them, and
/// the native implementations check their numeric arguments when called
/// directly.
///
/// # Errors
/// `ArgumentCountMismatch` if the count differs.
pub fn check_arity<T>(function: &str, args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { function: function.to_string(),
                                                  expected,
                                                  found: args.len() })
    }
}

impl Evaluator<'_> {
    /// Executes a call marker with `arity` arguments.
    ///
    /// The arguments are the top `arity` stack items, with the callee name
    /// directly beneath them. The callee is checked before any argument is
    /// resolved, so an unknown function is reported ahead of unknown
    /// variables in its arguments.
    ///
    /// # Errors
    /// - `NotEnoughOperands` if the stack holds fewer than `arity + 1` items.
    /// - `NotCallable` if the callee is a number.
    /// - `UnknownFunction` if the name is not in the function table.
    /// - `ArgumentCountMismatch` if `arity` differs from the declared arity.
    /// - `UnknownVariable` for unbound argument names.
    /// - Errors raised by the function itself.
    pub(crate) fn call(&mut self, arity: usize) -> EvalResult<Number> {
        let consumer = format!("call/{arity}");
        let mut args = Vec::with_capacity(arity);
        for _ in 0..arity {
            args.push(self.pop(&consumer)?);
        }
        args.reverse();

        let name = match self.pop(&consumer)? {
            StackItem::Name(name) => name,
            StackItem::Number(n) => return Err(RuntimeError::NotCallable { callee: n.to_string() }),
        };
        let Some(function) = self.functions().get(&name) else {
            return Err(RuntimeError::UnknownFunction { name });
        };
        check_arity(function.name, &args[..], function.arity)?;

        let args = args.into_iter()
                       .map(|item| self.resolve(item))
                       .collect::<EvalResult<Vec<_>>>()?;
        let result = (function.func)(&args)?;

        debug!(function = function.name, ?args, %result, "called");
        Ok(result)
    }
}
