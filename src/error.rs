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

//! Error types for the ExtractFX rewriter.
//!
//! All malformed inputs surface as one of two error classes: early-end
//! errors (the input was exhausted while a token was still open) and
//! parsing errors (a malformed construct on a known line). Both classes
//! share the [`RewriteError`] carrier; the class is encoded in the
//! [`ErrorCode`].

use thiserror::Error;

/// Error codes for the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O (E000)
    Io,

    // Early-end errors (E001-E009): input exhausted mid-token
    EndInBlockComment,
    EndInLineComment,
    EndInDirective,
    EndInLiteral,
    EndInRawLiteral,
    EndInExpression,

    // Parsing errors (E101-E110)
    LineEndInLiteral,
    UnbalancedParens,
    LoneBrace,
    ColonInNestedField,
    UnmatchedTernary,
    RawPrefixForbiddenChar,
    LineEndInExpression,
    LineEndInComment,
    RawPrefixUnterminated,
    EmptyField,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Io => "E000",

            // Early-end errors
            ErrorCode::EndInBlockComment => "E001",
            ErrorCode::EndInLineComment => "E002",
            ErrorCode::EndInDirective => "E003",
            ErrorCode::EndInLiteral => "E004",
            ErrorCode::EndInRawLiteral => "E005",
            ErrorCode::EndInExpression => "E006",

            // Parsing errors
            ErrorCode::LineEndInLiteral => "E101",
            ErrorCode::UnbalancedParens => "E102",
            ErrorCode::LoneBrace => "E103",
            ErrorCode::ColonInNestedField => "E104",
            ErrorCode::UnmatchedTernary => "E105",
            ErrorCode::RawPrefixForbiddenChar => "E106",
            ErrorCode::LineEndInExpression => "E107",
            ErrorCode::LineEndInComment => "E108",
            ErrorCode::RawPrefixUnterminated => "E109",
            ErrorCode::EmptyField => "E110",
        }
    }

    /// Whether this code belongs to the early-end class (input exhausted
    /// while a comment, literal, or expression field was still open).
    pub fn is_early_end(&self) -> bool {
        matches!(
            self,
            ErrorCode::EndInBlockComment
                | ErrorCode::EndInLineComment
                | ErrorCode::EndInDirective
                | ErrorCode::EndInLiteral
                | ErrorCode::EndInRawLiteral
                | ErrorCode::EndInExpression
        )
    }
}

/// A rewrite error with source location.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct RewriteError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Line number (1-indexed) where the error occurred.
    pub line: usize,
    /// Column number (1-indexed), when known.
    pub column: Option<usize>,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl RewriteError {
    /// Create a new rewrite error.
    pub fn new(code: ErrorCode, message: impl Into<String>, line: usize) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            column: None,
            hint: None,
        }
    }

    /// Add a column to this error.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

impl From<std::io::Error> for RewriteError {
    fn from(err: std::io::Error) -> Self {
        RewriteError::new(ErrorCode::Io, err.to_string(), 0)
    }
}

/// Result type for rewriter operations.
pub type Result<T> = std::result::Result<T, RewriteError>;

/// Format an error for display on the error channel.
///
/// The rewriter streams its input, so unlike a whole-file compiler there is
/// no source excerpt to underline; the location line still follows the
/// `path:line:column` convention compilers understand.
pub fn format_error(error: &RewriteError, path: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));

    if error.line > 0 {
        match error.column {
            Some(col) => output.push_str(&format!("  --> {}:{}:{}\n", path, error.line, col)),
            None => output.push_str(&format!("  --> {}:{}\n", path, error.line)),
        }
    }

    if let Some(hint) = &error.hint {
        output.push_str(&format!("  = hint: {}\n", hint));
    }

    output
}
