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

//! Fuzz target checking newline preservation: with line directives off,
//! every successful rewrite keeps the input's newline count (hoisted
//! expressions carry their own line breaks with them).
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_newlines

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let config = extractfx::Config::default();
        if let Ok(out) = extractfx::rewrite(source, &config) {
            assert_eq!(
                source.matches('\n').count(),
                out.matches('\n').count(),
            );
        }
    }
});
