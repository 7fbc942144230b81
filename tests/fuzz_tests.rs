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

//! Property-based fuzz tests for the rewriter.
//!
//! These use proptest to generate random inputs and verify that the
//! rewriter handles them gracefully (no panics). Unlike cargo-fuzz, they
//! run on stable Rust.

use extractfx::{rewrite, Config};
use proptest::prelude::*;

proptest! {
    /// Fuzz with random printable ASCII. The rewriter should never
    /// panic, only return Ok or Err.
    #[test]
    fn fuzz_ascii(source in "[ -~\\n\\r\\t]{0,500}") {
        let _ = rewrite(&source, &Config::default());
    }

    /// Fuzz with quote- and brace-heavy inputs to stress the literal and
    /// field scanners.
    #[test]
    fn fuzz_literal_shaped(source in "[fxRLuU8\"'(){}:?\\\\/ \\n]{0,200}") {
        let _ = rewrite(&source, &Config::default());
    }

    /// Fuzz with arbitrary Unicode.
    #[test]
    fn fuzz_unicode(source in "\\PC{0,200}") {
        let _ = rewrite(&source, &Config::default());
    }

    /// Fuzz the arity-templated configuration path.
    #[test]
    fn fuzz_starred_name(source in "[fx\"{}a ]{0,100}") {
        let config = Config::with_function_name("chk*");
        let _ = rewrite(&source, &config);
    }

    /// Fuzz with line directives enabled.
    #[test]
    fn fuzz_line_directives(source in "[fx\"{}ab\\n ]{0,150}") {
        let config = Config {
            function_name: "std::format".to_string(),
            source_path: "fuzz.cpp".to_string(),
            emit_line_directives: true,
        };
        let _ = rewrite(&source, &config);
    }
}
