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

//! Property-based tests for the rewriter.
//!
//! These verify the universal properties of the transformation using
//! proptest for random input generation.

use extractfx::{rewrite, Config};
use proptest::prelude::*;

/// Sources drawn from this alphabet contain no quotes, slashes, or
/// backslashes, so they can hold no literal, no comment, and no
/// continuation: the rewriter must pass them through untouched.
const INERT: &str = "[a-zA-Z0-9_ #{}()\\[\\]?:;=+*,.<>&|!\\n-]{0,300}";

proptest! {
    /// Property: inputs without literals or comments pass through
    /// byte-for-byte.
    #[test]
    fn prop_passthrough(source in INERT) {
        let out = rewrite(&source, &Config::default()).unwrap();
        prop_assert_eq!(out, source);
    }

    /// Property: the rewriter is deterministic.
    #[test]
    fn prop_deterministic(source in "[ -~\\n]{0,300}") {
        let config = Config::default();
        let first = rewrite(&source, &config);
        let second = rewrite(&source, &config);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.code, b.code),
            _ => prop_assert!(false, "inconsistent results"),
        }
    }

    /// Property: newline counts are preserved when line directives are
    /// off.
    #[test]
    fn prop_newline_count(source in "[a-z {}?:()\\n]{0,200}") {
        let config = Config::default();
        if let Ok(out) = rewrite(&source, &config) {
            prop_assert_eq!(
                source.matches('\n').count(),
                out.matches('\n').count()
            );
        }
    }

    /// Property: rewriting is idempotent; the output contains no f/x
    /// literals anymore.
    #[test]
    fn prop_idempotent(idents in prop::collection::vec("[a-z_][a-z0-9_]{0,6}", 1..5)) {
        let body: String = idents.iter().map(|i| format!("{{{}}} ", i)).collect();
        let source = format!("auto s = f\"{}\";\n", body);
        let config = Config::default();
        let once = rewrite(&source, &config).unwrap();
        let twice = rewrite(&once, &config).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: one placeholder per hoisted argument (parity), for
    /// simple identifier fields.
    #[test]
    fn prop_placeholder_parity(idents in prop::collection::vec("[a-z][a-z0-9]{0,5}", 1..8)) {
        let body: String = idents.iter().map(|i| format!("<{{{}}}>", i)).collect();
        let source = format!("x\"{}\"", body);
        let out = rewrite(&source, &Config::default()).unwrap();
        prop_assert_eq!(out.matches("{}").count(), idents.len());
        // The format string plus one argument per field.
        prop_assert_eq!(out.matches(", ").count(), idents.len());
    }

    /// Property: every simple field round-trips to the canonical call.
    #[test]
    fn prop_single_field(ident in "[a-z][a-z0-9_]{0,8}") {
        let source = format!("f\"v: {{{}}}\"", ident);
        let out = rewrite(&source, &Config::default()).unwrap();
        prop_assert_eq!(out, format!("std::format(\"v: {{}}\", {})", ident));
    }

    /// Property: balanced bracket runs survive hoisting unchanged.
    #[test]
    fn prop_balance(depth in 1usize..8) {
        let open: String = "(".repeat(depth);
        let close: String = ")".repeat(depth);
        let source = format!("f\"{{a{}b{}c}}\"", open, close);
        let out = rewrite(&source, &Config::default()).unwrap();
        let expected = format!("a{}b{}c", open, close);
        prop_assert!(out.contains(&expected));
    }
}
