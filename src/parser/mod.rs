//! Parser for the Dang language.
//!
//! This module provides the [`Parser`] struct which transforms the token
//! stream into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! The parser is a Pratt (top-down operator precedence) parser: every token
//! kind has an optional prefix rule that can begin an expression, and infix
//! operators climb precedence to build correctly grouped trees. It pulls
//! tokens from a [`Scanner`] one at a time, keeping two tokens of lookahead
//! (`current` and `peek`).
//!
//! # Statement termination
//!
//! Dang statements end at `;`, a newline, end of file, or — inside braces —
//! at `}`. Which of these actually terminate depends on the syntactic
//! container being parsed:
//!
//! - `Body` (top level): `;` and newlines terminate; a `}` is stray
//! - `Block` (inside `{ … }`): `;`, newlines, and `}` all terminate
//! - `Call` (inside `${ … }`): only `}` terminates — calls span lines freely
//!
//! The container tag is threaded through the recursive parse functions as a
//! parameter, so each call site states the context explicitly and nothing
//! has to be saved and restored.
//!
//! # Grammar
//!
//! ```text
//! program      := (stmt (';' | '\n')+ )*
//! stmt         := let | return | expr_stmt
//! let          := 'let' IDENT expr? END
//! return       := 'return' expr? END
//! expr_stmt    := expr (','? expr)* END        -- juxtaposed call form
//! expr         := prefix (infix_op expr)*      -- precedence climbed
//! prefix       := INT | IDENT | 'true' | 'false'
//!               | ('!' | '-') expr
//!               | '(' expr ')'
//!               | if_expr | fn_lit | call_expr
//! if_expr      := 'if' expr block ('else' block)?
//! fn_lit       := 'fn' '(' (IDENT (',' IDENT)*)? ')' block
//! call_expr    := '${' expr (','? expr)* '}'
//! block        := '{' (stmt (';' | '\n')+ )* '}'
//! infix_op     := '+' | '-' | '*' | '/' | '==' | '!=' | '<' | '>'
//! END          := ';' | '\n' | EOF | '}' (context-dependent)
//! ```
//!
//! # Diagnostics
//!
//! Errors are accumulated, not fatal: a failed statement records a
//! diagnostic and the parser skips forward to the next statement boundary
//! (panic-mode recovery). [`Parser::parse_program`] succeeds only when the
//! diagnostic list is empty; otherwise it returns a [`ParseFailure`]
//! holding both the partial program and every diagnostic.
//!
//! # Examples
//!
//! ```
//! use dang::parser::Parser;
//! use dang::scanner::Scanner;
//!
//! let scanner = Scanner::new("let x 5; let y 10");
//! let program = Parser::new(scanner).parse_program().unwrap();
//! assert_eq!(program.statements.len(), 2);
//! ```
//!
//! # Module Structure
//!
//! - `error` - Parse error types
//! - `helpers` - Token navigation and terminator rules
//! - `stmt` - Statement and block parsing
//! - `expr` - Pratt expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::scanner`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::evaluator`] - Consumes the AST

mod error;
mod expr;
mod helpers;
mod stmt;


pub use error::{ParseError, ParseErrorKind, ParseFailure};

use crate::ast::Program;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// The syntactic container currently being parsed.
///
/// Determines which tokens terminate a statement; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Context {
    /// Top level of the program (or a function body).
    Body,
    /// Inside a braced block `{ … }`.
    Block,
    /// Inside a call form `${ … }`.
    Call,
}

/// A Pratt parser over the scanner's token stream.
///
/// Create a parser with [`Parser::new`], then call
/// [`Parser::parse_program`] to produce an AST.
pub struct Parser<'src> {
    /// The token source.
    scanner: Scanner<'src>,
    /// The token under the cursor.
    current: Token<'src>,
    /// One token of lookahead.
    peek: Token<'src>,
    /// Diagnostics accumulated so far.
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a new parser, priming two tokens of lookahead from the
    /// scanner.
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let current = scanner.next_token();
        let peek = scanner.next_token();

        Parser {
            scanner,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// Statements are parsed one at a time; separator runs between them are
    /// skipped. A statement that fails to parse records its diagnostic and
    /// parsing resumes at the next statement boundary.
    ///
    /// # Returns
    ///
    /// * `Ok(Program)` - if no diagnostics were recorded
    /// * `Err(ParseFailure)` - the partial program plus every diagnostic
    pub fn parse_program(mut self) -> Result<Program, ParseFailure> {
        let mut program = Program::new();

        loop {
            self.skip_separators();

            if self.current.kind == TokenKind::Eof {
                break;
            }

            match self.parse_statement(Context::Body) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.recover_to_statement_boundary();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(ParseFailure {
                program,
                errors: self.errors,
            })
        }
    }
}
