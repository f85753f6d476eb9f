//! Evaluator unit tests.

use super::{Environment, EvalError, EvalErrorKind, Value, eval_program};
use crate::parser::Parser;
use crate::scanner::Scanner;

/// Helper to run the full pipeline on `input` and return the final value.
fn eval(input: &str) -> Result<Value, EvalError> {
    let program = Parser::new(Scanner::new(input))
        .parse_program()
        .unwrap_or_else(|failure| panic!("parse failed for input {:?}: {}", input, failure));

    let mut env = Environment::new();
    eval_program(&program, &mut env)
}

/// Helper asserting that `input` evaluates to the expected value.
fn assert_eval(input: &str, expected: Value) {
    match eval(input) {
        Ok(value) => assert_eq!(value, expected, "wrong value for input {:?}", input),
        Err(error) => panic!("evaluation failed for input {:?}: {}", input, error),
    }
}

/// Helper asserting that `input` fails to evaluate with the given kind.
fn assert_eval_error(input: &str, kind: EvalErrorKind) {
    match eval(input) {
        Ok(value) => panic!(
            "expected evaluation of {:?} to fail, got value {}",
            input, value
        ),
        Err(error) => assert_eq!(error.kind(), kind, "wrong error kind: {}", error),
    }
}

// ===================
// Literals
// ===================

#[test]
fn test_integer_literals() {
    assert_eval("5", Value::Integer(5));
    assert_eval("10", Value::Integer(10));
}

#[test]
fn test_boolean_literals() {
    assert_eval("true", Value::Boolean(true));
    assert_eval("false", Value::Boolean(false));
}

#[test]
fn test_empty_program_is_null() {
    assert_eval("", Value::Null);
}

// ===================
// Prefix operators
// ===================

#[test]
fn test_bang_operator() {
    assert_eval("!true", Value::Boolean(false));
    assert_eval("!false", Value::Boolean(true));
    assert_eval("!5", Value::Boolean(false));
    assert_eval("!0", Value::Boolean(true));
    assert_eval("!!true", Value::Boolean(true));
    assert_eval("!!5", Value::Boolean(true));
}

#[test]
fn test_minus_operator() {
    assert_eval("-5", Value::Integer(-5));
    assert_eval("-(-10)", Value::Integer(10));
}

#[test]
fn test_minus_on_boolean_is_error() {
    assert_eval_error("-true", EvalErrorKind::TypeMismatch);
}

// ===================
// Infix arithmetic and comparison
// ===================

#[test]
fn test_integer_arithmetic() {
    assert_eval("5 + 5", Value::Integer(10));
    assert_eval("5 - 8", Value::Integer(-3));
    assert_eval("4 * 5", Value::Integer(20));
    assert_eval("10 / 2", Value::Integer(5));
}

#[test]
fn test_precedence() {
    assert_eval("1 + 2 * 3", Value::Integer(7));
    assert_eval("(1 + 2) * 3", Value::Integer(9));
    assert_eval("2 * 3 + 4 / 2", Value::Integer(8));
    assert_eval("10 - 2 - 3", Value::Integer(5));
}

#[test]
fn test_integer_comparison() {
    assert_eval("1 < 2", Value::Boolean(true));
    assert_eval("1 > 2", Value::Boolean(false));
    assert_eval("1 == 1", Value::Boolean(true));
    assert_eval("1 != 1", Value::Boolean(false));
}

#[test]
fn test_boolean_equality() {
    assert_eval("true == true", Value::Boolean(true));
    assert_eval("true != false", Value::Boolean(true));
    assert_eval("(1 < 2) == true", Value::Boolean(true));
}

#[test]
fn test_mixed_operands_coerce_to_boolean() {
    // A boolean on one side coerces the other by truthiness.
    assert_eval("true == 1", Value::Boolean(true));
    assert_eval("true == 0", Value::Boolean(false));
    assert_eval("5 != false", Value::Boolean(true));
}

#[test]
fn test_boolean_arithmetic_is_error() {
    assert_eval_error("true + true", EvalErrorKind::UnknownOperator);
    assert_eval_error("true < 1", EvalErrorKind::UnknownOperator);
}

#[test]
fn test_division_by_zero() {
    assert_eval_error("5 / 0", EvalErrorKind::DivisionByZero);
    assert_eval_error("5 / (1 - 1)", EvalErrorKind::DivisionByZero);
}

#[test]
fn test_error_carries_code() {
    match eval("5 / 0") {
        Err(error) => assert_eq!(error.code(), 3),
        Ok(value) => panic!("expected error, got {}", value),
    }
}

// ===================
// If expressions
// ===================

#[test]
fn test_if_else() {
    assert_eval("if (1 < 2) { 10 } else { 20 }", Value::Integer(10));
    assert_eval("if (1 > 2) { 10 } else { 20 }", Value::Integer(20));
}

#[test]
fn test_if_truthy_condition() {
    assert_eval("if 1 { 10 }", Value::Integer(10));
    assert_eval("if 0 { 10 } else { 20 }", Value::Integer(20));
}

#[test]
fn test_if_without_alternative_yields_null() {
    assert_eval("if false { 10 }", Value::Null);
}

#[test]
fn test_if_error_in_condition_propagates() {
    assert_eval_error("if (1 / 0) { 10 }", EvalErrorKind::DivisionByZero);
}

// ===================
// Return statements
// ===================

#[test]
fn test_return_unwraps_at_program_exit() {
    assert_eval("return 3; 4", Value::Integer(3));
    assert_eval("return 10", Value::Integer(10));
    assert_eval("return", Value::Null);
}

#[test]
fn test_return_short_circuits_statements() {
    assert_eval("return 1; 1 / 0", Value::Integer(1));
}

#[test]
fn test_return_propagates_out_of_block() {
    // The marker passes through the block so the outer statement sequence
    // stops too.
    assert_eval("if true { return 7; 8 }\n9", Value::Integer(7));
}

#[test]
fn test_call_container_is_a_return_boundary() {
    // Ending the statement in ';' keeps the call container around the if
    // expression, and the call boundary strips the return marker, so
    // evaluation continues past it.
    assert_eval("if true { return 7; 8 }; 9", Value::Integer(9));
}

// ===================
// Let bindings and identifiers
// ===================

#[test]
fn test_let_binds_value() {
    assert_eval("let x 5; x", Value::Integer(5));
    assert_eval("let x 5; let y 3; x * y", Value::Integer(15));
}

#[test]
fn test_let_without_initializer_binds_null() {
    assert_eval("let x; x", Value::Null);
}

#[test]
fn test_let_rebinding() {
    assert_eval("let x 1; let x 2; x", Value::Integer(2));
}

#[test]
fn test_undefined_identifier() {
    assert_eval_error("foobar + 1", EvalErrorKind::UndefinedIdentifier);
}

#[test]
fn test_let_statement_value_is_null() {
    assert_eval("let x 5", Value::Null);
}

// ===================
// Call expressions (placeholder semantics)
// ===================

#[test]
fn test_call_yields_first_child() {
    assert_eval("${ 5 }", Value::Integer(5));
    assert_eval("${ 1 + 2, 9 }", Value::Integer(3));
}

#[test]
fn test_empty_call_is_null() {
    assert_eval("${}", Value::Null);
}

#[test]
fn test_call_spans_lines() {
    assert_eval("${\n1 + 2,\n9\n}", Value::Integer(3));
}

// ===================
// Unsupported nodes
// ===================

#[test]
fn test_function_literal_is_unsupported() {
    assert_eval_error("fn(x) { x }", EvalErrorKind::Unsupported);
}
