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

//! Fuzz target for the rewriter.
//!
//! Feeds random bytes to the rewriter to find crashes, panics, or other
//! unexpected behavior.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_rewriter
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_rewriter -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The rewriter consumes UTF-8 text; invalid inputs are rejected by
    // the conversion, valid ones must never panic.
    if let Ok(source) = std::str::from_utf8(data) {
        let config = extractfx::Config::default();
        let _ = extractfx::rewrite(source, &config);
    }
});
