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

//! `#line` marker formatting.
//!
//! Hoisting an expression out of a literal moves it away from its source
//! position; when enabled, each hoisted argument is bracketed by `#line`
//! markers so downstream compiler diagnostics still point at the original
//! line and column.

/// A `#line` marker on its own physical line.
pub(crate) fn line_directive(line: usize, path: &str) -> String {
    format!("\n#line {} \"{}\"\n", line, path)
}

/// Space padding that places the following text at `width + 1` columns.
pub(crate) fn padding(width: usize) -> String {
    " ".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_directive_shape() {
        assert_eq!(line_directive(12, "a.cpp"), "\n#line 12 \"a.cpp\"\n");
    }

    #[test]
    fn test_padding() {
        assert_eq!(padding(0), "");
        assert_eq!(padding(3), "   ");
    }
}
