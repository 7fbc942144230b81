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

//! Literal-body scanning and interpolation.
//!
//! The body loop owns every character between the opening and closing
//! delimiters of a literal. For plain literals it only has to honor escape
//! and continuation rules (or the `)PREFIX"` terminator hunt in raw mode);
//! for f/x literals it additionally dispatches on braces:
//!
//! | input        | action                                                 |
//! |--------------|--------------------------------------------------------|
//! | `{{` / `}}`  | emitted verbatim, no field                             |
//! | `{expr…}`    | expression hoisted, placeholder `{[:spec]}` emitted    |
//! | lone `}`     | fatal                                                  |
//!
//! A field whose expression ends in `=` (the debug suffix) additionally
//! prepends the verbatim expression text to its placeholder and drops the
//! `=` from the hoisted argument.

use std::io::BufRead;
use std::io::Write;

use super::cursor::CursorHelpers;
use super::exprs::ExpressionScanner;
use super::literals::{FieldRecord, Fx, LiteralContext};
use super::Rewriter;
use crate::error::{ErrorCode, Result, RewriteError};

/// Trait for literal-body scanning operations.
pub(crate) trait InterpolationScanner {
    /// Consume the body of a literal up to and including its terminator,
    /// appending the (rewritten) format-string text to `body` and hoisted
    /// expressions to `fields`. The opening delimiter is already in `body`.
    fn scan_literal_body(
        &mut self,
        ctx: &LiteralContext,
        body: &mut String,
        fields: &mut Vec<FieldRecord>,
    ) -> Result<()>;
}

impl<R: BufRead, W: Write> InterpolationScanner for Rewriter<'_, R, W> {
    fn scan_literal_body(
        &mut self,
        ctx: &LiteralContext,
        body: &mut String,
        fields: &mut Vec<FieldRecord>,
    ) -> Result<()> {
        loop {
            if ctx.raw {
                if self.at_line_end() {
                    body.push_str(self.term);
                    if !self.advance_line()? {
                        return Err(RewriteError::new(
                            ErrorCode::EndInRawLiteral,
                            "input ends inside raw literal",
                            self.line_no,
                        ));
                    }
                    continue;
                }
                if self.peek() == Some(')') && self.raw_terminator_follows(ctx) {
                    body.push(')');
                    body.push_str(&ctx.prefix);
                    body.push(ctx.terminator);
                    for _ in 0..2 + ctx.prefix.chars().count() {
                        self.bump();
                    }
                    return Ok(());
                }
            } else {
                if self.at_line_end() {
                    return Err(RewriteError::new(
                        ErrorCode::LineEndInLiteral,
                        "line ends inside string literal",
                        self.line_no,
                    )
                    .with_hint("end the line with '\\' to continue the literal"));
                }
                let c = self.peek().expect("not at line end");
                if c == '\\' {
                    self.bump();
                    body.push('\\');
                    if self.rest_is_blank() {
                        // Continuation: the rest of the line and its break
                        // belong to the literal.
                        body.push_str(&self.take_rest_of_line());
                        body.push_str(self.term);
                        if !self.advance_line()? {
                            return Err(RewriteError::new(
                                ErrorCode::EndInLiteral,
                                "input ends with '\\' last on a line inside a string literal",
                                self.line_no,
                            ));
                        }
                    } else if let Some(next) = self.bump() {
                        body.push(next);
                    }
                    continue;
                }
                if c == ctx.terminator {
                    self.bump();
                    body.push(c);
                    return Ok(());
                }
            }

            let c = self.peek().expect("not at line end");
            if ctx.fx != Fx::None && c == '{' {
                if self.peek_at(1) == Some('{') {
                    body.push_str("{{");
                    self.bump();
                    self.bump();
                } else {
                    self.scan_field(ctx, body, fields)?;
                }
                continue;
            }
            if ctx.fx != Fx::None && c == '}' {
                if self.peek_at(1) == Some('}') {
                    body.push_str("}}");
                    self.bump();
                    self.bump();
                    continue;
                }
                return Err(RewriteError::new(
                    ErrorCode::LoneBrace,
                    "all right braces have to be doubled in f/x string literals",
                    self.line_no,
                )
                .with_column(self.column()));
            }

            body.push(c);
            self.bump();
        }
    }
}

impl<R: BufRead, W: Write> Rewriter<'_, R, W> {
    /// Whether the `)` under the cursor starts the raw terminator
    /// `)PREFIX"`.
    fn raw_terminator_follows(&self, ctx: &LiteralContext) -> bool {
        let after = &self.line[self.pos + 1..];
        match after.strip_prefix(ctx.prefix.as_str()) {
            Some(rest) => rest.starts_with(ctx.terminator),
            None => false,
        }
    }

    /// Scan one `{…}` field: hoist the expression, then copy the optional
    /// `:format-spec` tail (which may itself contain nested width fields).
    fn scan_field(
        &mut self,
        ctx: &LiteralContext,
        body: &mut String,
        fields: &mut Vec<FieldRecord>,
    ) -> Result<()> {
        let line = self.line_no;
        let column = self.column();
        self.bump(); // '{'

        let expr = self.scan_field_expr(ctx.raw)?;
        if expr.is_empty() {
            return Err(RewriteError::new(
                ErrorCode::EmptyField,
                "empty expression field",
                line,
            )
            .with_column(column));
        }

        // Debug suffix: `{expr = }` keeps the verbatim text in the format
        // string and hoists the expression without the '='.
        let trimmed = expr.trim_end();
        let arg = if trimmed.ends_with('=') {
            body.push_str(&expr);
            trimmed[..trimmed.len() - 1].to_string()
        } else {
            expr
        };
        fields.push(FieldRecord {
            line,
            column,
            expr: arg,
        });

        body.push('{');
        if self.peek() == Some(':') {
            self.bump();
            body.push(':');
            self.scan_format_spec(ctx, body, fields)?;
        }

        // The expression scanner only stops at a top-level ':' or '}', and
        // the format-spec copier only at '}'.
        debug_assert_eq!(self.peek(), Some('}'));
        self.bump();
        body.push('}');
        Ok(())
    }

    /// Copy a format-spec tail verbatim up to (not including) the closing
    /// `}`, hoisting nested `{…}` width/precision fields.
    fn scan_format_spec(
        &mut self,
        ctx: &LiteralContext,
        body: &mut String,
        fields: &mut Vec<FieldRecord>,
    ) -> Result<()> {
        loop {
            if self.at_line_end() {
                if !ctx.raw {
                    return Err(RewriteError::new(
                        ErrorCode::LineEndInLiteral,
                        "line ends inside format specification",
                        self.line_no,
                    ));
                }
                body.push_str(self.term);
                if !self.advance_line()? {
                    return Err(RewriteError::new(
                        ErrorCode::EndInRawLiteral,
                        "input ends inside raw literal",
                        self.line_no,
                    ));
                }
                continue;
            }

            let c = self.peek().expect("not at line end");
            if c == '}' {
                return Ok(());
            }
            if c == '{' {
                let line = self.line_no;
                let column = self.column();
                self.bump();
                let expr = self.scan_field_expr(ctx.raw)?;
                if expr.is_empty() {
                    return Err(RewriteError::new(
                        ErrorCode::EmptyField,
                        "empty width field",
                        line,
                    )
                    .with_column(column));
                }
                if self.peek() == Some(':') {
                    return Err(RewriteError::new(
                        ErrorCode::ColonInNestedField,
                        "':' is not allowed inside a nested width field",
                        self.line_no,
                    )
                    .with_column(self.column()));
                }
                debug_assert_eq!(self.peek(), Some('}'));
                self.bump();
                body.push_str("{}");
                fields.push(FieldRecord {
                    line,
                    column,
                    expr,
                });
                continue;
            }

            body.push(c);
            self.bump();
        }
    }
}
