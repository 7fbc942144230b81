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

//! Expression-field scanning.
//!
//! A field expression runs from the character after its opening `{` to a
//! `:` or `}` at the expression's top level. Getting "top level" right
//! means balancing `()`/`[]`/`{}`, counting `?` operators so the `:` of a
//! ternary is not mistaken for a format-spec separator, skipping `::`
//! scope operators, and re-entering the literal and comment scanners for
//! anything quoted or commented inside the expression. The scanner returns
//! the verbatim source substring; the only rewriting that happens inside
//! is of nested f/x literals, which are rewritten in place.

use std::io::BufRead;
use std::io::Write;

use super::comments::{CommentContext, CommentScanner};
use super::cursor::CursorHelpers;
use super::literals::LiteralScanner;
use super::Rewriter;
use crate::error::{ErrorCode, Result, RewriteError};

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Trait for expression-field scanning operations.
pub(crate) trait ExpressionScanner {
    /// Consume a field expression. On entry the cursor sits just past the
    /// opening `{`; on success it sits on the terminating `:` or `}`,
    /// which is not consumed. `raw` tells whether the enclosing literal
    /// tolerates bare line breaks.
    fn scan_field_expr(&mut self, raw: bool) -> Result<String>;
}

impl<R: BufRead, W: Write> ExpressionScanner for Rewriter<'_, R, W> {
    fn scan_field_expr(&mut self, raw: bool) -> Result<String> {
        let mut ret = String::new();
        let mut parens: Vec<char> = Vec::new();
        let mut ternaries: usize = 0;

        loop {
            if self.at_line_end() {
                if !raw {
                    return Err(RewriteError::new(
                        ErrorCode::LineEndInExpression,
                        "end of line inside expression field",
                        self.line_no,
                    ));
                }
                ret.push_str(self.term);
                if !self.advance_line()? {
                    return Err(RewriteError::new(
                        ErrorCode::EndInExpression,
                        "input ends inside an expression field in a raw literal",
                        self.line_no,
                    ));
                }
                continue;
            }

            let c = self.peek().expect("not at line end");

            // Matching closer for the innermost open bracket.
            if parens.last() == Some(&c) {
                ret.push(c);
                self.bump();
                parens.pop();
                continue;
            }

            match c {
                '(' => {
                    parens.push(')');
                    ret.push(c);
                    self.bump();
                }
                '[' => {
                    parens.push(']');
                    ret.push(c);
                    self.bump();
                }
                '{' => {
                    parens.push('}');
                    ret.push(c);
                    self.bump();
                }
                ')' | ']' => {
                    let message = match parens.last() {
                        Some(&expected) => format!(
                            "mismatched '{}' in expression field; expected '{}'",
                            c, expected
                        ),
                        None => format!("unbalanced '{}' in expression field", c),
                    };
                    return Err(RewriteError::new(
                        ErrorCode::UnbalancedParens,
                        message,
                        self.line_no,
                    )
                    .with_column(self.column()));
                }
                '}' => {
                    if let Some(&expected) = parens.last() {
                        return Err(RewriteError::new(
                            ErrorCode::UnbalancedParens,
                            format!("mismatched '}}' in expression field; expected '{}'", expected),
                            self.line_no,
                        )
                        .with_column(self.column()));
                    }
                    if ternaries > 0 {
                        return Err(RewriteError::new(
                            ErrorCode::UnmatchedTernary,
                            "'?' without matching ':' in expression field",
                            self.line_no,
                        )
                        .with_column(self.column()));
                    }
                    return Ok(ret); // terminator, not consumed
                }
                '?' => {
                    if parens.is_empty() {
                        ternaries += 1;
                    }
                    ret.push(c);
                    self.bump();
                }
                ':' => {
                    if self.peek_at(1) == Some(':') && self.peek_at(2).is_some_and(is_ident_start)
                    {
                        // Scope operator.
                        ret.push_str("::");
                        self.bump();
                        self.bump();
                    } else if !parens.is_empty() {
                        ret.push(c);
                        self.bump();
                    } else if ternaries > 0 {
                        ternaries -= 1;
                        ret.push(c);
                        self.bump();
                    } else {
                        return Ok(ret); // format-spec separator, not consumed
                    }
                }
                '\\' => {
                    if raw {
                        ret.push(c);
                        self.bump();
                    } else {
                        self.bump();
                        ret.push('\\');
                        if self.rest_is_blank() {
                            ret.push_str(&self.take_rest_of_line());
                            ret.push_str(self.term);
                            if !self.advance_line()? {
                                return Err(RewriteError::new(
                                    ErrorCode::EndInExpression,
                                    "input ends with '\\' last on a line inside an expression field",
                                    self.line_no,
                                ));
                            }
                        } else if let Some(next) = self.bump() {
                            ret.push(next);
                        }
                    }
                }
                '"' | '\'' => {
                    let lit = self.rewrite_literal(&mut ret)?;
                    ret.push_str(&lit);
                }
                '/' => {
                    if self.peek_at(1) == Some('*') {
                        let comment = self.scan_block_comment(CommentContext::Expr { raw })?;
                        ret.push_str(&comment);
                    } else if self.peek_at(1) == Some('/') {
                        // The comment runs to the end of the line; whether
                        // the expression may continue there is decided by
                        // the line-end handling above.
                        ret.push_str(&self.take_rest_of_line());
                    } else {
                        ret.push(c);
                        self.bump();
                    }
                }
                _ => {
                    ret.push(c);
                    self.bump();
                }
            }
        }
    }
}
