//! Evaluation error integration tests.
//!
//! These tests verify that runtime errors fail fast, carry structured
//! kinds with stable integer codes, and point at the offending node.

mod common;

use common::eval;

use dang::evaluator::EvalErrorKind;

/// Helper asserting the error kind for an input.
fn assert_error(input: &str, kind: EvalErrorKind) {
    match eval(input) {
        Ok(value) => panic!("expected {:?} to fail, got value {}", input, value),
        Err(error) => assert_eq!(error.kind(), kind, "wrong kind: {}", error),
    }
}

#[test]
fn test_minus_on_non_integer() {
    assert_error("-true", EvalErrorKind::TypeMismatch);
    assert_error("-(1 == 1)", EvalErrorKind::TypeMismatch);
}

#[test]
fn test_type_mismatch_messages_name_the_types() {
    match eval("-true") {
        Err(error) => {
            assert!(
                error.message().contains("boolean"),
                "expected operand type in message: {}",
                error.message()
            );
        }
        Ok(value) => panic!("expected error, got {}", value),
    }
}

#[test]
fn test_boolean_arithmetic() {
    assert_error("true + false", EvalErrorKind::UnknownOperator);
    assert_error("true > false", EvalErrorKind::UnknownOperator);
}

#[test]
fn test_null_operand_infix() {
    // An if without a taken branch yields null, which no infix supports.
    assert_error("if false { 1 } + 2", EvalErrorKind::TypeMismatch);
}

#[test]
fn test_division_by_zero() {
    assert_error("1 / 0", EvalErrorKind::DivisionByZero);
    assert_error("let x 0; 10 / x", EvalErrorKind::DivisionByZero);
}

#[test]
fn test_undefined_identifier() {
    assert_error("missing", EvalErrorKind::UndefinedIdentifier);
    assert_error("let x y", EvalErrorKind::UndefinedIdentifier);
}

#[test]
fn test_errors_abort_evaluation() {
    // The failing statement is reached only because the ones before it
    // evaluated; nothing after it runs either.
    assert_error("let a 1\n1 / 0\nlet b 2", EvalErrorKind::DivisionByZero);
}

#[test]
fn test_error_codes_are_stable() {
    let cases = [
        ("-true", 1),
        ("true + true", 2),
        ("1 / 0", 3),
        ("missing", 4),
        ("fn() { }", 5),
    ];

    for (input, code) in cases {
        match eval(input) {
            Err(error) => assert_eq!(error.code(), code, "wrong code for {:?}", input),
            Ok(value) => panic!("expected {:?} to fail, got {}", input, value),
        }
    }
}

#[test]
fn test_error_span_points_at_failing_node() {
    match eval("let x 5\n1 / 0") {
        Err(error) => assert_eq!(error.span().line, 2),
        Ok(value) => panic!("expected error, got {}", value),
    }
}
