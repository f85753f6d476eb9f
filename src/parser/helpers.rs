//! Parser helper methods for token navigation and terminator rules.

use super::{Context, Parser};
use crate::parser::error::ParseError;
use crate::token::TokenKind;

/// Returns `true` if `kind` terminates a statement in the given context.
///
/// `}` terminates everywhere except at the top level (where it is a stray
/// token); `;` and newlines terminate everywhere except inside `${ … }`
/// (where calls span lines freely).
pub(super) fn ends_statement(kind: TokenKind, ctx: Context) -> bool {
    (ctx != Context::Body && kind == TokenKind::RightBrace)
        || (ctx != Context::Call && matches!(kind, TokenKind::Semicolon | TokenKind::Newline))
}

impl<'src> Parser<'src> {
    /// Advances the cursor: `peek` becomes `current` and the next token is
    /// pulled from the scanner.
    ///
    /// The scanner returns `Eof` indefinitely, so advancing past the end is
    /// harmless.
    pub(super) fn advance(&mut self) {
        self.current = self.peek;
        self.peek = self.scanner.next_token();
    }

    /// Returns `true` if the current token terminates a statement in the
    /// given context.
    pub(super) fn current_ends_statement(&self, ctx: Context) -> bool {
        ends_statement(self.current.kind, ctx)
    }

    /// Returns `true` if the peek token terminates a statement in the given
    /// context, or is end of file.
    pub(super) fn peek_ends_statement(&self, ctx: Context) -> bool {
        ends_statement(self.peek.kind, ctx) || self.peek.kind == TokenKind::Eof
    }

    /// Requires the statement to end here: the peek token must be a valid
    /// terminator for the context (or end of file), and the cursor moves
    /// onto it.
    pub(super) fn require_end_of_statement(&mut self, ctx: Context) -> Result<(), ParseError> {
        if self.peek_ends_statement(ctx) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::expected_end_of_statement(&self.peek))
        }
    }

    /// Advances if the peek token has the expected kind, errors otherwise.
    pub(super) fn expect_peek(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.peek.kind == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::expected_token(expected, &self.peek))
        }
    }

    /// Skips a run of statement separators (`;` and newlines).
    pub(super) fn skip_separators(&mut self) {
        while matches!(self.current.kind, TokenKind::Semicolon | TokenKind::Newline) {
            self.advance();
        }
    }

    /// Panic-mode recovery: advances until the current token is a top-level
    /// statement boundary (`;`, newline, or end of file).
    pub(super) fn recover_to_statement_boundary(&mut self) {
        while !matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::Newline | TokenKind::Eof
        ) {
            self.advance();
        }
    }
}
