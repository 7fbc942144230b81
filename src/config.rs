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

//! Rewriter configuration.

/// Immutable configuration for a single rewrite run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symbol the rewritten `f` literals call. A trailing `*` requests an
    /// arity-templated symbol: `check*` emits `check2(...)` for two
    /// arguments.
    pub function_name: String,
    /// Logical path of the input, used in `#line` directives and
    /// diagnostics.
    pub source_path: String,
    /// Emit `#line` markers around hoisted field expressions.
    pub emit_line_directives: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            function_name: "std::format".to_string(),
            source_path: "<stdin>".to_string(),
            emit_line_directives: false,
        }
    }
}

impl Config {
    /// Create a configuration with the given formatting function symbol.
    pub fn with_function_name(name: impl Into<String>) -> Self {
        Self {
            function_name: name.into(),
            ..Self::default()
        }
    }

    /// Resolve the call symbol for an `f` literal with `arity` hoisted
    /// arguments, applying the trailing-`*` arity-templated form.
    pub fn call_name(&self, arity: usize) -> String {
        match self.function_name.strip_suffix('*') {
            Some(stem) => format!("{}{}", stem, arity),
            None => self.function_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.function_name, "std::format");
        assert_eq!(config.source_path, "<stdin>");
        assert!(!config.emit_line_directives);
    }

    #[test]
    fn test_plain_call_name_ignores_arity() {
        let config = Config::default();
        assert_eq!(config.call_name(0), "std::format");
        assert_eq!(config.call_name(5), "std::format");
    }

    #[test]
    fn test_starred_call_name_appends_arity() {
        let config = Config::with_function_name("check_format*");
        assert_eq!(config.call_name(0), "check_format0");
        assert_eq!(config.call_name(3), "check_format3");
    }
}
