//! End-to-end pipeline tests: source text through scanner, parser, and
//! evaluator.

mod common;

use common::{assert_eval, parse};

use dang::ast::StmtKind;
use dang::evaluator::Value;
use dang::scanner::Scanner;
use dang::token::TokenKind;

// ===================
// Scanner scenarios
// ===================

#[test]
fn test_scanner_punctuation_stream() {
    let mut scanner = Scanner::new("=+(){},;\n");
    let expected = [
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::LeftParen, "("),
        (TokenKind::RightParen, ")"),
        (TokenKind::LeftBrace, "{"),
        (TokenKind::RightBrace, "}"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Newline, "\n"),
        (TokenKind::Eof, ""),
    ];

    for (kind, text) in expected {
        let token = scanner.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.text, text);
    }
}

#[test]
fn test_scanner_token_count_matches_parser_consumption() {
    // The parser pulls every token the scanner produces, plus the final
    // Eof it keeps reading.
    let source = "let x 5; let y 10";
    // let, x, 5, ;, let, y, 10, Eof
    let token_count = Scanner::new(source).tokenize().len();
    assert_eq!(token_count, 8);

    let program = parse(source);
    assert_eq!(program.statements.len(), 2);
}

// ===================
// Parser scenarios
// ===================

#[test]
fn test_parse_let_statement_names() {
    let program = parse("let x 5; let y 10\nlet foobar 838383");
    assert_eq!(program.statements.len(), 3);

    let names: Vec<&str> = program
        .statements
        .iter()
        .map(|stmt| match &stmt.kind {
            StmtKind::Let { name, .. } => name.as_str(),
            other => panic!("expected let statement, got {:?}", other),
        })
        .collect();
    assert_eq!(names, ["x", "y", "foobar"]);
}

#[test]
fn test_parse_return_statements() {
    let program = parse("return 5; return 10\nreturn 838383");
    assert_eq!(program.statements.len(), 3);
    for stmt in &program.statements {
        assert!(matches!(stmt.kind, StmtKind::Return(Some(_))));
    }
}

// ===================
// Evaluator scenarios
// ===================

#[test]
fn test_eval_integer_literals() {
    assert_eval("5", Value::Integer(5));
    assert_eval("10", Value::Integer(10));
}

#[test]
fn test_eval_empty_input() {
    assert_eval("", Value::Null);
}

#[test]
fn test_eval_if_else() {
    assert_eval("if (1 < 2) { 10 } else { 20 }", Value::Integer(10));
    assert_eval("if (1 > 2) { 10 } else { 20 }", Value::Integer(20));
}

#[test]
fn test_eval_operators() {
    assert_eval("!true", Value::Boolean(false));
    assert_eval("-5", Value::Integer(-5));
    assert_eval("1 + 2 * 3", Value::Integer(7));
    assert_eval("(1 + 2) * 3", Value::Integer(9));
}

#[test]
fn test_eval_return_unwrap_at_program_exit() {
    assert_eval("return 3; 4", Value::Integer(3));
}

// ===================
// Whole programs
// ===================

#[test]
fn test_multi_statement_program() {
    let source = "let a 2\nlet b a * 3\nif (b > 5) { b - 1 } else { 0 }";
    assert_eval(source, Value::Integer(5));
}

#[test]
fn test_program_with_call_form() {
    let source = "let x 4\n${ x * 2 }";
    assert_eval(source, Value::Integer(8));
}

#[test]
fn test_render_and_reparse_evaluates_identically() {
    let source = "let a 2; let b 3\nif (a < b) { a + b } else { a - b }";
    let rendered = parse(source).to_string();

    assert_eval(source, Value::Integer(5));
    assert_eval(&rendered, Value::Integer(5));
}
