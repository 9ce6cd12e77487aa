use clc::{
    evaluate_line,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::evaluate,
            environment::VariableEnvironment,
            function::core::FunctionTable,
        },
        lexer::tokenize,
        operator::OperatorTable,
        resolver::ResolvedToken,
        value::number::Number,
    },
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Arithmetic over small integers and the variable `x`, fully parenthesized
/// wherever an operator could otherwise bind differently.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(-50i64..50).prop_map(|n| format!("({n})")),
                           Just("x".to_string()),
                           Just("pi".to_string())];

    leaf.prop_recursive(4, 24, 2, |inner| {
            prop_oneof![(inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "^"]), inner.clone())
                            .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
                        inner.clone().prop_map(|e| format!("-({e})")),
                        inner.clone().prop_map(|e| format!("abs({e})")),
                        (inner.clone(), inner).prop_map(|(a, b)| format!("atan2({a}, {b})"))]
        })
}

fn environment(x: i64) -> VariableEnvironment {
    let mut env = VariableEnvironment::with_constants();
    env.set("x", Number::Integer(x));
    env
}

fn operand(name: &str) -> ResolvedToken {
    ResolvedToken::Identifier(name.to_string())
}

proptest! {
    #[test]
    fn pure_expressions_are_referentially_transparent(source in expression(), x in -20i64..20) {
        let functions = FunctionTable::standard();
        let mut env = environment(x);

        let first = evaluate_line(&source, &mut env, &functions);
        let second = evaluate_line(&source, &mut env, &functions);
        // NaN never equals itself, so compare what the user would see.
        prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
        prop_assert_eq!(env.get("x"), Some(Number::Integer(x)));
    }

    #[test]
    fn tokens_cover_the_line_without_whitespace(source in "[0-9a-z+*/()=!<>%^&|,. -]{0,30}") {
        if let Ok(tokens) = tokenize(&source) {
            let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
            let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(joined, expected);

            for token in &tokens {
                prop_assert_eq!(&source[token.span.clone()], token.text.as_str());
            }
        }
    }

    #[test]
    fn integer_arithmetic_matches_checked_i64(a in -1_000_000i64..1_000_000, b in 1i64..1000) {
        let functions = FunctionTable::standard();
        let mut env = VariableEnvironment::new();
        let cases = [("+", a + b), ("-", a - b), ("*", a * b), ("//", a.div_euclid(b)), ("%", a.rem_euclid(b))];

        for (op, expected) in cases {
            let result = evaluate_line(&format!("({a}) {op} ({b})"), &mut env, &functions);
            prop_assert_eq!(result.map(|r| r.value()), Ok(Some(Number::Integer(expected))));
        }
    }

    #[test]
    fn every_operator_pops_exactly_its_operand_count(index in 0usize..64, x in 1i64..=5) {
        let definitions = OperatorTable::standard().definitions();
        let definition = &definitions[index % definitions.len()];
        let functions = FunctionTable::standard();

        let mut exact = vec![operand("x"); definition.operands];
        exact.push(ResolvedToken::Operator(definition));
        let mut env = environment(x);
        prop_assert!(evaluate(&exact, &mut env, &functions).is_ok(),
                     "'{}' failed with exactly {} operand(s)", definition.symbol, definition.operands);

        let mut short = vec![operand("x"); definition.operands - 1];
        short.push(ResolvedToken::Operator(definition));
        let mut env = environment(x);
        prop_assert_eq!(evaluate(&short, &mut env, &functions),
                        Err(RuntimeError::NotEnoughOperands { operator: definition.symbol.to_string() }));

        let mut extra = vec![ResolvedToken::Literal(Number::Integer(x))];
        extra.extend(exact);
        let mut env = environment(x);
        prop_assert_eq!(evaluate(&extra, &mut env, &functions),
                        Err(RuntimeError::MissingOperators { found: 2 }));
    }
}

#[test]
fn calls_pop_their_callee_and_arguments() {
    let functions = FunctionTable::standard();
    let mut env = environment(3);

    let call = [operand("atan2"), operand("x"), operand("x"), ResolvedToken::Call { arity: 2 }];
    assert!(evaluate(&call, &mut env, &functions).is_ok());

    let short = [operand("x"), ResolvedToken::Call { arity: 1 }];
    assert_eq!(evaluate(&short, &mut env, &functions),
               Err(RuntimeError::NotEnoughOperands { operator: "call/1".to_string() }));
}
