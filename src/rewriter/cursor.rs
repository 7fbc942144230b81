// ExtractFX - An f/x string literal preprocessor for C++
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Line buffer and cursor for the rewriter.
//!
//! The cursor holds one physical line at a time, without its terminator.
//! End of line and end of input are explicit conditions rather than
//! sentinel bytes: scanners check [`CursorHelpers::at_line_end`] and decide
//! whether a line break is legal for the token they are consuming. The
//! terminator of the current line (`\n`, `\r\n`, or nothing on a final
//! unterminated line) is recorded so it can be replayed verbatim wherever
//! that line break ends up in the output.

use std::io::BufRead;
use std::io::Write;

use super::Rewriter;
use crate::error::Result;

/// Trait for cursor navigation operations.
pub(crate) trait CursorHelpers {
    /// Load the next physical line. Returns `false` at end of input.
    fn advance_line(&mut self) -> Result<bool>;

    /// Whether the cursor is past the last character of the current line.
    fn at_line_end(&self) -> bool;

    /// Peek at the current character without advancing.
    fn peek(&self) -> Option<char>;

    /// Peek `k` characters ahead without advancing.
    fn peek_at(&self, k: usize) -> Option<char>;

    /// Advance to the next character and return it.
    fn bump(&mut self) -> Option<char>;

    /// Current column number (1-indexed).
    fn column(&self) -> usize;

    /// Copy the remainder of the current line and move the cursor to its
    /// end.
    fn take_rest_of_line(&mut self) -> String;

    /// Whether the remainder of the current line is only whitespace.
    fn rest_is_blank(&self) -> bool;

    /// Whether everything before the cursor on this line is whitespace,
    /// i.e. the cursor sits on the first non-whitespace character.
    fn at_directive_position(&self) -> bool;
}

impl<R: BufRead, W: Write> CursorHelpers for Rewriter<'_, R, W> {
    fn advance_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self.input.read_line(&mut self.line)?;
        if n == 0 {
            return Ok(false);
        }

        if self.line.ends_with("\r\n") {
            self.line.truncate(self.line.len() - 2);
            self.term = "\r\n";
        } else if self.line.ends_with('\n') {
            self.line.truncate(self.line.len() - 1);
            self.term = "\n";
        } else {
            // Final line without a terminator; the output ends without one
            // as well.
            self.term = "";
        }

        self.line_no += 1;
        self.pos = 0;
        Ok(true)
    }

    fn at_line_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    fn peek_at(&self, k: usize) -> Option<char> {
        self.line[self.pos..].chars().nth(k)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn column(&self) -> usize {
        self.line[..self.pos].chars().count() + 1
    }

    fn take_rest_of_line(&mut self) -> String {
        let rest = self.line[self.pos..].to_string();
        self.pos = self.line.len();
        rest
    }

    fn rest_is_blank(&self) -> bool {
        self.line[self.pos..].chars().all(char::is_whitespace)
    }

    fn at_directive_position(&self) -> bool {
        self.line[..self.pos].chars().all(char::is_whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rewriter::Rewriter;

    macro_rules! cursor_over {
        ($name:ident, $source:expr) => {
            let config = Config::default();
            let mut $name = Rewriter::new(&config, $source.as_bytes(), Vec::new());
        };
    }

    #[test]
    fn test_lines_and_terminators() {
        cursor_over!(cur, "ab\ncd\r\nef");
        assert!(cur.advance_line().unwrap());
        assert_eq!(cur.line, "ab");
        assert_eq!(cur.term, "\n");
        assert!(cur.advance_line().unwrap());
        assert_eq!(cur.line, "cd");
        assert_eq!(cur.term, "\r\n");
        assert!(cur.advance_line().unwrap());
        assert_eq!(cur.line, "ef");
        assert_eq!(cur.term, "");
        assert!(!cur.advance_line().unwrap());
    }

    #[test]
    fn test_empty_input() {
        cursor_over!(cur, "");
        assert!(!cur.advance_line().unwrap());
    }

    #[test]
    fn test_peek_and_bump() {
        cursor_over!(cur, "a:b");
        cur.advance_line().unwrap();
        assert_eq!(cur.peek(), Some('a'));
        assert_eq!(cur.peek_at(1), Some(':'));
        assert_eq!(cur.peek_at(2), Some('b'));
        assert_eq!(cur.peek_at(3), None);
        assert_eq!(cur.bump(), Some('a'));
        assert_eq!(cur.column(), 2);
        cur.bump();
        cur.bump();
        assert!(cur.at_line_end());
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn test_take_rest_of_line() {
        cursor_over!(cur, "abc def");
        cur.advance_line().unwrap();
        cur.bump();
        assert_eq!(cur.take_rest_of_line(), "bc def");
        assert!(cur.at_line_end());
    }

    #[test]
    fn test_rest_is_blank() {
        cursor_over!(cur, "x   ");
        cur.advance_line().unwrap();
        assert!(!cur.rest_is_blank());
        cur.bump();
        assert!(cur.rest_is_blank());
    }

    #[test]
    fn test_directive_position() {
        cursor_over!(cur, "  #define X");
        cur.advance_line().unwrap();
        cur.bump();
        cur.bump();
        assert!(cur.at_directive_position());
        cur.bump();
        assert!(!cur.at_directive_position());
    }

    #[test]
    fn test_multibyte_navigation() {
        cursor_over!(cur, "å{x}");
        cur.advance_line().unwrap();
        assert_eq!(cur.bump(), Some('å'));
        assert_eq!(cur.peek(), Some('{'));
        assert_eq!(cur.column(), 2);
    }
}
