//! Parse error types.
//!
//! This module defines [`ParseError`], the diagnostic type the parser
//! accumulates, and [`ParseFailure`], the structured result of a parse in
//! which at least one diagnostic was recorded.

use std::fmt;

use crate::ast::Program;
use crate::token::{Span, Token, TokenKind};

/// The kind of parse error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The scanner produced an `Illegal` token and the parser consumed it
    /// in expression position.
    IllegalToken,
    /// A token with no prefix parse rule started an expression.
    UnexpectedToken,
    /// A separator (`,`, `;`, or newline) appeared where an expression was
    /// expected.
    StrayTerminator,
    /// A specific token was required but something else was found.
    ExpectedToken,
    /// An identifier was required but something else was found.
    ExpectedIdentifier,
    /// An integer literal does not fit in `i64`.
    IntegerOutOfRange,
    /// A `{ … }` block reached end of file before its closing `}`.
    UnterminatedBlock,
    /// A `${ … }` call reached end of file before its closing `}`.
    UnterminatedCall,
    /// A statement did not end at a valid terminator for its context.
    ExpectedEndOfStatement,
}

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message, the structured
/// [`ParseErrorKind`], and the source location where the error occurred,
/// enabling rich error reporting with tools like [`ariadne`].
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred.
    span: Span,
    /// The kind of error, for structured error handling.
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a new error with the given kind, message, and location.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Error for an `Illegal` token consumed in expression position.
    pub(super) fn illegal_token(token: &Token<'_>) -> Self {
        ParseError::new(
            ParseErrorKind::IllegalToken,
            format!("illegal token '{}'", token.text),
            token.span,
        )
    }

    /// Error for a token that cannot begin an expression.
    pub(super) fn unexpected_token(token: &Token<'_>) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken,
            format!("unexpected token {}", token.kind),
            token.span,
        )
    }

    /// Error for a separator found in expression position.
    pub(super) fn stray_terminator(token: &Token<'_>) -> Self {
        ParseError::new(
            ParseErrorKind::StrayTerminator,
            format!("stray {} in expression position", token.kind),
            token.span,
        )
    }

    /// Error for a required token that was not found.
    pub(super) fn expected_token(expected: TokenKind, found: &Token<'_>) -> Self {
        ParseError::new(
            ParseErrorKind::ExpectedToken,
            format!(
                "expected next token to be {}, got {} instead",
                expected, found.kind
            ),
            found.span,
        )
    }

    /// Error for a required identifier that was not found.
    pub(super) fn expected_identifier(found: &Token<'_>) -> Self {
        ParseError::new(
            ParseErrorKind::ExpectedIdentifier,
            format!("expected identifier, got {} instead", found.kind),
            found.span,
        )
    }

    /// Error for an integer lexeme exceeding the `i64` range.
    pub(super) fn integer_out_of_range(token: &Token<'_>) -> Self {
        ParseError::new(
            ParseErrorKind::IntegerOutOfRange,
            format!("integer literal '{}' does not fit in i64", token.text),
            token.span,
        )
    }

    /// Error for a block that hit end of file before `}`.
    pub(super) fn unterminated_block(open_span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::UnterminatedBlock,
            "block ended with end of file, expected '}'",
            open_span,
        )
    }

    /// Error for a `${` call that hit end of file before `}`.
    pub(super) fn unterminated_call(open_span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::UnterminatedCall,
            "call ended with end of file, expected '}'",
            open_span,
        )
    }

    /// Error for a statement missing its terminator.
    pub(super) fn expected_end_of_statement(found: &Token<'_>) -> Self {
        ParseError::new(
            ParseErrorKind::ExpectedEndOfStatement,
            format!("expected end of statement, got {} instead", found.kind),
            found.span,
        )
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// The result of a parse that recorded at least one diagnostic.
///
/// Parsing recovers at statement boundaries, so even a failed parse yields
/// the statements that did parse; both the partial [`Program`] and the
/// accumulated diagnostic list are kept.
#[derive(Debug)]
pub struct ParseFailure {
    /// The statements that parsed successfully.
    pub program: Program,
    /// The diagnostics, in source order. Never empty.
    pub errors: Vec<ParseError>,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}
