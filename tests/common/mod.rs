//! Shared helpers for the integration test suites.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use dang::ast::Program;
use dang::evaluator::{self, Environment, EvalError, Value};
use dang::parser::{ParseFailure, Parser};
use dang::scanner::Scanner;

/// Parses `input`, panicking with the rendered diagnostics on failure.
pub fn parse(input: &str) -> Program {
    Parser::new(Scanner::new(input))
        .parse_program()
        .unwrap_or_else(|failure| panic!("parse failed for input {:?}:\n{}", input, failure))
}

/// Parses `input`, panicking if it unexpectedly succeeds.
pub fn parse_failure(input: &str) -> ParseFailure {
    match Parser::new(Scanner::new(input)).parse_program() {
        Ok(program) => panic!(
            "expected parsing of {:?} to fail, got {} statements",
            input,
            program.statements.len()
        ),
        Err(failure) => failure,
    }
}

/// Runs the full scan/parse/eval pipeline on `input`.
pub fn eval(input: &str) -> Result<Value, EvalError> {
    let program = parse(input);
    let mut env = Environment::new();
    evaluator::eval_program(&program, &mut env)
}

/// Runs the pipeline and asserts the final value.
pub fn assert_eval(input: &str, expected: Value) {
    match eval(input) {
        Ok(value) => assert_eq!(value, expected, "wrong value for input {:?}", input),
        Err(error) => panic!("evaluation failed for input {:?}: {}", input, error),
    }
}
