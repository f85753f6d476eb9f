//! The Dang language interpreter library.
//!
//! Dang is a small dynamically-typed scripting language with
//! whitespace-sensitive statement termination and a `${ … }` call syntax.
//! This library provides the interpreter core as a pipeline of three
//! phases: scanning, parsing, and evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`scanner`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Pratt parser with context-sensitive terminators
//! - [`evaluator`] - Tree-walking evaluation
//!
//! # Example
//!
//! ```
//! use dang::evaluator::{self, Environment, Value};
//! use dang::parser::Parser;
//! use dang::scanner::Scanner;
//!
//! let source = "let answer 6 * 7\nif (answer == 42) { answer } else { 0 }";
//!
//! // Lexical analysis and parsing
//! let scanner = Scanner::new(source);
//! let program = Parser::new(scanner).parse_program().expect("parse error");
//!
//! // Evaluation
//! let mut env = Environment::new();
//! let value = evaluator::eval_program(&program, &mut env).expect("eval error");
//!
//! assert_eq!(value, Value::Integer(42));
//! ```

pub mod ast;
pub mod evaluator;
pub mod parser;
pub mod scanner;
pub mod token;
