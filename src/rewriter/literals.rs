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

//! String and character literal scanning.
//!
//! When the main loop or the expression scanner reaches a `"`, the letters
//! immediately preceding it on the same line may form a literal prefix of
//! the shape `[encoding] [f|x] [R]` with `encoding` one of `L`, `U`, `u`,
//! `u8`. Those letters were already staged as ordinary output, so for an
//! f/x literal they are reclaimed from the tail of the staging buffer and
//! re-emitted as part of the rewritten call. Letters outside the recognized
//! set (`Wf"…"`) are left in the surrounding code untouched.
//!
//! Character literals share the body machinery but never interpolate.

use std::io::BufRead;
use std::io::Write;

use super::cursor::CursorHelpers;
use super::directives::{line_directive, padding};
use super::interp::InterpolationScanner;
use super::Rewriter;
use crate::error::{ErrorCode, Result, RewriteError};

/// Interpolation mode of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fx {
    /// Ordinary literal, copied through unchanged.
    None,
    /// `f` literal: rewritten into a call to the configured function.
    Format,
    /// `x` literal: rewritten into a bare format-string-plus-arguments.
    Extract,
}

/// Encoding prefix of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    None,
    Wide,
    Utf32,
    Utf16,
    Utf8,
}

impl Encoding {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Encoding::None => "",
            Encoding::Wide => "L",
            Encoding::Utf32 => "U",
            Encoding::Utf16 => "u",
            Encoding::Utf8 => "u8",
        }
    }
}

/// Everything known about the literal currently being scanned.
#[derive(Debug, Clone)]
pub(crate) struct LiteralContext {
    pub raw: bool,
    pub fx: Fx,
    pub encoding: Encoding,
    pub terminator: char,
    /// Raw-literal delimiter between `"` and `(`.
    pub prefix: String,
}

/// One hoisted expression field: where its `{` opened and the verbatim
/// source substring of its expression.
#[derive(Debug, Clone)]
pub(crate) struct FieldRecord {
    pub line: usize,
    pub column: usize,
    pub expr: String,
}

/// Outcome of looking back at the staged output for a literal prefix.
#[derive(Debug, Clone, Copy)]
struct PrefixInfo {
    raw: bool,
    fx: Fx,
    encoding: Encoding,
    /// Bytes to reclaim from the staging buffer when `fx` is present.
    reclaim: usize,
}

/// Trait for literal scanning operations.
pub(crate) trait LiteralScanner {
    /// Scan the literal whose opening quote the cursor sits on, reclaiming
    /// any f/x prefix letters from the tail of `staged`, and return its
    /// rewritten (or verbatim) text.
    fn rewrite_literal(&mut self, staged: &mut String) -> Result<String>;

    /// Scan a character literal verbatim. Character literals never
    /// interpolate.
    fn scan_char_literal(&mut self) -> Result<String>;
}

impl<R: BufRead, W: Write> LiteralScanner for Rewriter<'_, R, W> {
    fn rewrite_literal(&mut self, staged: &mut String) -> Result<String> {
        if self.peek() == Some('\'') {
            return self.scan_char_literal();
        }

        let info = self.detect_prefix();
        if info.fx != Fx::None {
            debug_assert!(staged.len() >= info.reclaim);
            staged.truncate(staged.len() - info.reclaim);
        }

        self.bump(); // opening quote

        let prefix = if info.raw {
            self.scan_raw_prefix()?
        } else {
            String::new()
        };

        let ctx = LiteralContext {
            raw: info.raw,
            fx: info.fx,
            encoding: info.encoding,
            terminator: '"',
            prefix,
        };

        let mut body = String::new();
        if ctx.raw {
            if ctx.fx != Fx::None {
                body.push('R');
            }
            body.push('"');
            body.push_str(&ctx.prefix);
            body.push('(');
        } else {
            body.push('"');
        }

        let mut fields = Vec::new();
        self.scan_literal_body(&ctx, &mut body, &mut fields)?;

        if ctx.fx == Fx::None {
            return Ok(body);
        }
        Ok(self.assemble_rewrite(&ctx, body, &fields))
    }

    fn scan_char_literal(&mut self) -> Result<String> {
        let mut out = String::new();
        out.push(self.bump().expect("caller checked '\\''"));

        loop {
            if self.at_line_end() {
                return Err(RewriteError::new(
                    ErrorCode::LineEndInLiteral,
                    "line ends inside character literal",
                    self.line_no,
                ));
            }
            let c = self.bump().expect("not at line end");
            if c == '\\' {
                out.push('\\');
                if self.rest_is_blank() {
                    out.push_str(&self.take_rest_of_line());
                    out.push_str(self.term);
                    if !self.advance_line()? {
                        return Err(RewriteError::new(
                            ErrorCode::EndInLiteral,
                            "input ends with '\\' last on a line inside a character literal",
                            self.line_no,
                        ));
                    }
                } else if let Some(next) = self.bump() {
                    out.push(next);
                }
                continue;
            }
            out.push(c);
            if c == '\'' {
                return Ok(out);
            }
        }
    }
}

impl<R: BufRead, W: Write> Rewriter<'_, R, W> {
    /// Look back at the characters preceding the opening quote on the
    /// current line for an `[encoding] [f|x] [R]` prefix. Only the letters
    /// of the recognized set participate; anything else stays part of the
    /// surrounding code.
    fn detect_prefix(&self) -> PrefixInfo {
        let mut head = &self.line[..self.pos];

        let raw = match head.strip_suffix('R') {
            Some(rest) => {
                head = rest;
                true
            }
            None => false,
        };

        let fx = match head.chars().last() {
            Some('f') | Some('F') => Fx::Format,
            Some('x') | Some('X') => Fx::Extract,
            _ => Fx::None,
        };
        if fx == Fx::None {
            // A plain or raw literal: nothing to reclaim, the `R` (if any)
            // was emitted as ordinary output and stays where it is.
            return PrefixInfo {
                raw,
                fx,
                encoding: Encoding::None,
                reclaim: 0,
            };
        }
        head = &head[..head.len() - 1];

        let encoding = if head.ends_with("u8") {
            Encoding::Utf8
        } else {
            match head.chars().last() {
                Some('L') => Encoding::Wide,
                Some('U') => Encoding::Utf32,
                Some('u') => Encoding::Utf16,
                _ => Encoding::None,
            }
        };

        let reclaim = 1 + usize::from(raw) + encoding.as_str().len();
        PrefixInfo {
            raw,
            fx,
            encoding,
            reclaim,
        }
    }

    /// Collect the raw-literal delimiter between `"` and `(`.
    fn scan_raw_prefix(&mut self) -> Result<String> {
        let mut prefix = String::new();
        loop {
            if self.at_line_end() {
                return Err(RewriteError::new(
                    ErrorCode::RawPrefixUnterminated,
                    "line ends in a raw literal prefix; '(' must follow the delimiter",
                    self.line_no,
                ));
            }
            let c = self.peek().expect("not at line end");
            if c == '(' {
                self.bump();
                return Ok(prefix);
            }
            if c == ')' || c == '\\' || c == '"' || c.is_whitespace() {
                return Err(RewriteError::new(
                    ErrorCode::RawPrefixForbiddenChar,
                    format!("'{}' is not allowed in a raw literal delimiter", c),
                    self.line_no,
                )
                .with_column(self.column()));
            }
            prefix.push(c);
            self.bump();
        }
    }

    /// Assemble the final rewrite of an f/x literal: call symbol, encoding
    /// prefix, format-string body, hoisted arguments, and `#line` markers
    /// when enabled.
    fn assemble_rewrite(
        &self,
        ctx: &LiteralContext,
        body: String,
        fields: &[FieldRecord],
    ) -> String {
        let mut out = String::new();

        if ctx.fx == Fx::Format {
            out.push_str(&self.config.call_name(fields.len()));
            out.push('(');
        }
        out.push_str(ctx.encoding.as_str());
        out.push_str(&body);

        if self.config.emit_line_directives && !fields.is_empty() {
            let path = &self.config.source_path;
            for field in fields {
                out.push_str(&line_directive(field.line, path));
                out.push_str(&padding(field.column.saturating_sub(2)));
                out.push_str(", ");
                out.push_str(&field.expr);
            }
            if ctx.fx == Fx::Format {
                out.push(')');
            }
            // Reposition diagnostics at the character following the closing
            // quote.
            out.push_str(&line_directive(self.line_no, path));
            out.push_str(&padding(self.column().saturating_sub(1)));
        } else {
            for field in fields {
                out.push_str(", ");
                out.push_str(&field.expr);
            }
            if ctx.fx == Fx::Format {
                out.push(')');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rewriter::rewrite;

    #[test]
    fn test_encoding_strings() {
        assert_eq!(Encoding::None.as_str(), "");
        assert_eq!(Encoding::Wide.as_str(), "L");
        assert_eq!(Encoding::Utf8.as_str(), "u8");
    }

    #[test]
    fn test_char_literals_pass_through() {
        let config = Config::default();
        for source in ["'a'", "'\"'", "'\\''", "'\\\\'", "'\"and\"'"] {
            assert_eq!(rewrite(source, &config).unwrap(), source);
        }
    }

    #[test]
    fn test_char_literal_line_end_fails() {
        let config = Config::default();
        let err = rewrite("'a\n'", &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::LineEndInLiteral);
    }

    #[test]
    fn test_raw_prefix_forbidden_char() {
        let config = Config::default();
        let err = rewrite("R\"a b(x)a b\"", &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::RawPrefixForbiddenChar);
    }

    #[test]
    fn test_raw_prefix_unterminated() {
        let config = Config::default();
        let err = rewrite("R\"abc", &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::RawPrefixUnterminated);
    }
}
