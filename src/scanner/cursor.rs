//! Byte navigation and position tracking for the scanner.

use super::Scanner;

impl<'src> Scanner<'src> {
    /// Advances the scanner by one byte.
    ///
    /// Moves `pos` to `read_pos`, loads the next byte into `ch` (or the 0
    /// sentinel past the end of input), and updates line/column tracking.
    /// Advancing at the end of input is a no-op apart from keeping the
    /// sentinel in place, so callers may advance freely.
    pub(super) fn read_char(&mut self) {
        if self.ch == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.pos = self.read_pos;
        self.ch = self.input.as_bytes().get(self.read_pos).copied().unwrap_or(0);
        if self.read_pos <= self.input.len() {
            self.read_pos += 1;
        }
    }

    /// Returns the byte after the current one without consuming it, or 0
    /// at the end of input.
    pub(super) fn peek_byte(&self) -> u8 {
        self.input.as_bytes().get(self.read_pos).copied().unwrap_or(0)
    }

    /// Skips horizontal whitespace.
    ///
    /// Spaces, tabs, and carriage returns are insignificant. Newlines are
    /// NOT skipped: `\n` terminates statements and is emitted as a token.
    pub(super) fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\r') {
            self.read_char();
        }
    }
}
