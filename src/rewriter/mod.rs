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

//! The tokenizing rewriter.
//!
//! A single streaming pass over a C++ translation unit that rewrites
//! `f`/`x` string literals into calls to a configured formatting function
//! and copies everything else through verbatim. The pass understands only
//! lexical structure: comments, preprocessor directives, plain/raw string
//! literals, character literals, and (inside f/x literals) balanced
//! expressions.
//!
//! # Module Structure
//!
//! - `cursor` - Line buffer and navigation (CursorHelpers trait)
//! - `comments` - Comment and directive scanning (CommentScanner trait)
//! - `literals` - Literal prefixes, bodies, and call assembly
//!   (LiteralScanner trait)
//! - `interp` - Interpolation inside f/x literal bodies
//!   (InterpolationScanner trait)
//! - `exprs` - Expression-field scanning (ExpressionScanner trait)
//! - `directives` - `#line` marker formatting

mod comments;
mod cursor;
mod directives;
mod exprs;
mod interp;
mod literals;

use std::io::BufRead;
use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use comments::{CommentContext, CommentScanner};
use cursor::CursorHelpers;
use literals::LiteralScanner;

/// The rewriter state for one streaming pass.
pub struct Rewriter<'config, R, W> {
    /// Rewrite configuration.
    pub(crate) config: &'config Config,
    /// Input character source.
    pub(crate) input: R,
    /// Output character sink.
    pub(crate) output: W,
    /// The current physical line, without its terminator.
    pub(crate) line: String,
    /// Terminator of the current line (`"\n"`, `"\r\n"`, or `""` on a
    /// final unterminated line).
    pub(crate) term: &'static str,
    /// Byte position in the current line.
    pub(crate) pos: usize,
    /// Current line number (1-indexed; 0 before the first line).
    pub(crate) line_no: usize,
}

impl<'config, R: BufRead, W: Write> Rewriter<'config, R, W> {
    /// Create a rewriter over the given streams.
    pub fn new(config: &'config Config, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
            line: String::new(),
            term: "",
            pos: 0,
            line_no: 0,
        }
    }

    /// Pump the whole input through the rewriter.
    ///
    /// Output is staged per logical line; nothing past the point of a
    /// failure is flushed.
    pub fn process(&mut self) -> Result<()> {
        let mut staged = String::new();

        while self.advance_line()? {
            while !self.at_line_end() {
                let c = self.peek().expect("not at line end");
                if c == '#' && self.at_directive_position() {
                    let directive = self.scan_directive()?;
                    staged.push_str(&directive);
                } else if c == '/' && self.peek_at(1) == Some('/') {
                    let comment = self.scan_line_comment()?;
                    staged.push_str(&comment);
                } else if c == '/' && self.peek_at(1) == Some('*') {
                    let comment = self.scan_block_comment(CommentContext::TopLevel)?;
                    staged.push_str(&comment);
                } else if c == '"' || c == '\'' {
                    let literal = self.rewrite_literal(&mut staged)?;
                    staged.push_str(&literal);
                } else {
                    staged.push(c);
                    self.bump();
                }
            }
            self.flush_line(&mut staged)?;
        }

        Ok(())
    }

    fn flush_line(&mut self, staged: &mut String) -> Result<()> {
        self.output.write_all(staged.as_bytes())?;
        self.output.write_all(self.term.as_bytes())?;
        staged.clear();
        Ok(())
    }
}

/// Rewrite a complete source string.
///
/// Convenience wrapper around [`Rewriter`] for in-memory use; the CLI runs
/// the streaming form directly.
pub fn rewrite(source: &str, config: &Config) -> Result<String> {
    let mut out: Vec<u8> = Vec::new();
    Rewriter::new(config, source.as_bytes(), &mut out).process()?;
    Ok(String::from_utf8(out).expect("rewriter output is valid UTF-8"))
}
