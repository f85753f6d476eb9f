//! Lexical scanner for the Dang language.
//!
//! This module provides the [`Scanner`] struct which converts source text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The scanner is pull-based: each call to [`Scanner::next_token`] returns
//! the next token, and once the input is exhausted it returns
//! [`TokenKind::Eof`] indefinitely. It performs the following tasks:
//!
//! - Scans the input byte by byte with a one-byte read-ahead
//! - Skips horizontal whitespace (space, tab, carriage return) while
//!   keeping `\n` significant — newlines terminate statements, so they are
//!   emitted as tokens
//! - Recognizes identifiers, keywords, integer literals, and punctuation,
//!   including the two-byte operators `==`, `!=`, and `${`
//! - Tracks byte offsets and line/column numbers for error reporting
//!
//! # Failure
//!
//! The scanner never fails hard: bytes it cannot classify (including
//! non-ASCII sequences and a `$` not followed by `{`) become
//! [`TokenKind::Illegal`] tokens, which the parser reports as diagnostics.
//!
//! # Examples
//!
//! ```
//! use dang::scanner::Scanner;
//! use dang::token::TokenKind;
//!
//! let mut scanner = Scanner::new("let five = 5");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().text, "five");
//! ```
//!
//! # Module Structure
//!
//! - `cursor` - Position tracking and byte navigation
//! - `tokens` - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod tokens;


use crate::token::{Token, TokenKind};

/// A lexical scanner that tokenizes Dang source code.
///
/// The scanner maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used once
/// per source buffer.
///
/// # Lifetime
///
/// The `'src` lifetime parameter ties the scanner (and every token it
/// produces) to the input string slice: lexemes are views into the source,
/// so the source must outlive the tokens.
pub struct Scanner<'src> {
    /// The input source code being tokenized.
    pub(super) input: &'src str,
    /// Byte position of the current byte `ch`.
    pub(super) pos: usize,
    /// Byte position one past `ch` (the read-ahead position).
    pub(super) read_pos: usize,
    /// The current byte, or 0 as the end-of-input sentinel.
    pub(super) ch: u8,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'src> Scanner<'src> {
    /// Creates a new `Scanner` for the given input string.
    ///
    /// The scanner starts positioned on the first byte of the input with
    /// line and column numbers initialized to 1.
    pub fn new(input: &'src str) -> Self {
        let mut scanner = Scanner {
            input,
            pos: 0,
            read_pos: 0,
            ch: 0,
            line: 1,
            column: 0,
        };
        scanner.read_char();
        scanner
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// This is a convenience wrapper around [`next_token`](Self::next_token)
    /// that consumes the input from start to end. The returned vector always
    /// ends with exactly one [`TokenKind::Eof`] token, so it is never empty.
    pub fn tokenize(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }
}
