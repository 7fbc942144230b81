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

//! ExtractFX Library
//!
//! A source-to-source preprocessor that extends C++ string literals with
//! two prefixes: `f` (formatting) and `x` (extraction). Interpolated
//! `{expression}` fields are lifted out of the literal and appended as
//! positional arguments, with the literal itself turned into a
//! `std::format`-style format string. Everything else in the translation
//! unit passes through byte-for-byte.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`config`] - Rewrite configuration
//! - [`rewriter`] - The streaming tokenizing rewriter
//! - [`selftest`] - Embedded self-test corpus behind the `--test` flag
//!
//! # Example
//!
//! ```
//! use extractfx::{rewrite, Config};
//!
//! let config = Config::default();
//! let out = rewrite("f\"The number is: {3 * 5}\"", &config).unwrap();
//! assert_eq!(out, "std::format(\"The number is: {}\", 3 * 5)");
//! ```

pub mod config;
pub mod error;
pub mod rewriter;
pub mod selftest;

// Re-export commonly used types
pub use config::Config;
pub use error::{format_error, ErrorCode, Result, RewriteError};
pub use rewriter::{rewrite, Rewriter};

/// The version of ExtractFX.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the tool.
pub const NAME: &str = "ExtractFX";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "ExtractFX");
    }
}
