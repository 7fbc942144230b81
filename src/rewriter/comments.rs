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

//! Comment and directive scanning.
//!
//! Line comments and preprocessor directives both run to the end of the
//! physical line and both continue onto the next line when the last
//! non-whitespace character is `\`. Block comments may span any number of
//! lines; inside a non-raw literal's expression field they may only do so
//! through a backslash continuation, because the enclosing literal cannot
//! contain a bare line break.
//!
//! All scanners transcribe their input verbatim.

use std::io::BufRead;
use std::io::Write;

use super::cursor::CursorHelpers;
use super::Rewriter;
use crate::error::{ErrorCode, Result, RewriteError};

/// Where a block comment is being scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentContext {
    /// Ordinary code between literals.
    TopLevel,
    /// Inside an expression field; `raw` tells whether the enclosing
    /// literal tolerates bare line breaks.
    Expr { raw: bool },
}

/// Trait for comment and directive scanning operations.
pub(crate) trait CommentScanner {
    /// Scan a `/* … */` comment. The cursor sits on the opening `/`.
    fn scan_block_comment(&mut self, ctx: CommentContext) -> Result<String>;

    /// Scan a `// …` comment and any backslash continuation lines. The
    /// cursor sits on the first `/`.
    fn scan_line_comment(&mut self) -> Result<String>;

    /// Scan a `# …` preprocessor directive and any backslash continuation
    /// lines. The cursor sits on the `#`.
    fn scan_directive(&mut self) -> Result<String>;
}

impl<R: BufRead, W: Write> CommentScanner for Rewriter<'_, R, W> {
    fn scan_block_comment(&mut self, ctx: CommentContext) -> Result<String> {
        let mut out = String::new();
        out.push(self.bump().expect("caller checked '/'"));
        out.push(self.bump().expect("caller checked '*'"));

        loop {
            if self.at_line_end() {
                match ctx {
                    CommentContext::Expr { raw: false } => {
                        return Err(RewriteError::new(
                            ErrorCode::LineEndInComment,
                            "line ends inside a comment in an expression field",
                            self.line_no,
                        )
                        .with_hint("a comment here can only continue with a trailing '\\'"));
                    }
                    _ => {
                        out.push_str(self.term);
                        if !self.advance_line()? {
                            return Err(RewriteError::new(
                                ErrorCode::EndInBlockComment,
                                "'/*' unmatched to the end of the input",
                                self.line_no,
                            ));
                        }
                    }
                }
                continue;
            }

            let c = self.peek().expect("not at line end");
            if c == '*' && self.peek_at(1) == Some('/') {
                out.push(self.bump().expect("checked"));
                out.push(self.bump().expect("checked"));
                return Ok(out);
            }

            if c == '\\' && ctx == (CommentContext::Expr { raw: false }) {
                self.bump();
                out.push('\\');
                if self.rest_is_blank() {
                    out.push_str(&self.take_rest_of_line());
                    out.push_str(self.term);
                    if !self.advance_line()? {
                        return Err(RewriteError::new(
                            ErrorCode::EndInBlockComment,
                            "input ends after '\\' inside a comment in an expression field",
                            self.line_no,
                        ));
                    }
                } else if let Some(next) = self.bump() {
                    out.push(next);
                }
                continue;
            }

            out.push(c);
            self.bump();
        }
    }

    fn scan_line_comment(&mut self) -> Result<String> {
        self.scan_to_line_end_with_continuations(ErrorCode::EndInLineComment, "a '//' comment")
    }

    fn scan_directive(&mut self) -> Result<String> {
        self.scan_to_line_end_with_continuations(
            ErrorCode::EndInDirective,
            "a preprocessor directive",
        )
    }
}

impl<R: BufRead, W: Write> Rewriter<'_, R, W> {
    /// Copy the rest of the current line verbatim; while the line's last
    /// non-whitespace character is `\`, keep copying whole continuation
    /// lines.
    fn scan_to_line_end_with_continuations(
        &mut self,
        code: ErrorCode,
        what: &str,
    ) -> Result<String> {
        let mut out = self.take_rest_of_line();

        while self.line.trim_end().ends_with('\\') {
            out.push_str(self.term);
            if !self.advance_line()? {
                return Err(RewriteError::new(
                    code,
                    format!("input ends with a line ending in '\\' in {}", what),
                    self.line_no,
                ));
            }
            out.push_str(&self.take_rest_of_line());
        }

        Ok(out)
    }
}
