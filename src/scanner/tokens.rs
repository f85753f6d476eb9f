//! Token recognition and reading for the scanner.
//!
//! This module provides the main [`next_token`](super::Scanner::next_token)
//! dispatch plus the readers for multi-byte tokens (identifier and digit
//! runs, and illegal byte sequences).

use super::Scanner;
use crate::token::{Span, Token, TokenKind};

/// Returns `true` for bytes that may start an identifier.
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Returns `true` for bytes that may continue an identifier.
fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl<'src> Scanner<'src> {
    /// Returns the next token from the input.
    ///
    /// Skips horizontal whitespace, then dispatches on the current byte.
    /// At the end of input this returns an [`TokenKind::Eof`] token with an
    /// empty lexeme, and keeps returning it on every subsequent call.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        let start = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let kind = match self.ch {
            b'=' => {
                if self.peek_byte() == b'=' {
                    self.read_char();
                    TokenKind::Equal
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                if self.peek_byte() == b'=' {
                    self.read_char();
                    TokenKind::NotEqual
                } else {
                    TokenKind::Bang
                }
            }
            b'$' => {
                if self.peek_byte() == b'{' {
                    self.read_char();
                    TokenKind::DollarLBrace
                } else {
                    TokenKind::Illegal
                }
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'\n' => TokenKind::Newline,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            0 => {
                let span = Span::new(start, start, start_line, start_column);
                return Token::new(TokenKind::Eof, "", span);
            }
            b'0'..=b'9' => return self.read_number(start, start_line, start_column),
            byte if is_ident_start(byte) => {
                return self.read_identifier(start, start_line, start_column);
            }
            _ => return self.read_illegal(start, start_line, start_column),
        };

        self.read_char();
        let span = Span::new(start, self.pos, start_line, start_column);
        Token::new(kind, &self.input[start..self.pos], span)
    }

    /// Reads an integer literal: a run of ASCII digits.
    ///
    /// The lexeme is kept as text; conversion to `i64` (and the
    /// out-of-range diagnostic) happens in the parser.
    fn read_number(&mut self, start: usize, start_line: usize, start_column: usize) -> Token<'src> {
        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        let span = Span::new(start, self.pos, start_line, start_column);
        Token::new(TokenKind::Int, &self.input[start..self.pos], span)
    }

    /// Reads an identifier or keyword: an identifier-start byte followed by
    /// a run of identifier-continue bytes.
    fn read_identifier(
        &mut self,
        start: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token<'src> {
        while is_ident_continue(self.ch) {
            self.read_char();
        }

        let text = &self.input[start..self.pos];
        let span = Span::new(start, self.pos, start_line, start_column);
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Ident);

        Token::new(kind, text, span)
    }

    /// Consumes one unclassifiable character and returns it as an
    /// [`TokenKind::Illegal`] token.
    ///
    /// For non-ASCII input the whole UTF-8 sequence is consumed so the
    /// lexeme view stays on a character boundary.
    fn read_illegal(&mut self, start: usize, start_line: usize, start_column: usize) -> Token<'src> {
        self.read_char();
        while self.ch & 0xC0 == 0x80 {
            self.read_char();
        }

        let span = Span::new(start, self.pos, start_line, start_column);
        Token::new(TokenKind::Illegal, &self.input[start..self.pos], span)
    }
}
