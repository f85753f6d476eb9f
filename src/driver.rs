//! Pipeline orchestration for the CLI.
//!
//! The driver reads a source file, runs the scan/parse/eval pipeline, and
//! hands any diagnostics to the [`crate::diagnostics`] module for
//! rendering. Each entry point returns the process exit code.

use std::fs;

use dang::ast::Program;
use dang::evaluator::{self, Environment};
use dang::parser::Parser;
use dang::scanner::Scanner;

use crate::diagnostics;

/// Evaluates the program in `path` and prints its final value.
pub(crate) fn run(path: &str) -> i32 {
    let Some(source) = read_source(path) else {
        return 1;
    };

    let Some(program) = parse_source(path, &source) else {
        return 1;
    };

    let mut env = Environment::new();
    match evaluator::eval_program(&program, &mut env) {
        Ok(value) => {
            println!("{}", value);
            0
        }
        Err(error) => {
            diagnostics::report_eval_error(path, &source, &error);
            1
        }
    }
}

/// Parses the program in `path` and reports diagnostics without
/// evaluating.
pub(crate) fn check(path: &str) -> i32 {
    let Some(source) = read_source(path) else {
        return 1;
    };

    if parse_source(path, &source).is_some() { 0 } else { 1 }
}

fn read_source(path: &str) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(error) => {
            eprintln!("error: cannot read '{}': {}", path, error);
            None
        }
    }
}

fn parse_source(path: &str, source: &str) -> Option<Program> {
    match Parser::new(Scanner::new(source)).parse_program() {
        Ok(program) => Some(program),
        Err(failure) => {
            diagnostics::report_parse_failure(path, source, &failure);
            None
        }
    }
}
