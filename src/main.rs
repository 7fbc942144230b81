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

//! ExtractFX CLI
//!
//! Reads a C++ translation unit, rewrites its f/x string literals, and
//! writes the result, so the output can be fed to an ordinary compiler.

use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use extractfx::error::format_error;
use extractfx::{selftest, Config, Rewriter};

/// ExtractFX - rewrite f/x string literals into formatting calls
#[derive(Parser, Debug)]
#[command(name = "extractfx")]
#[command(version)]
#[command(about = "Rewrite f/x string literals into std::format-style calls")]
#[command(long_about = r#"
ExtractFX reads a C++ translation unit and rewrites every f/x string
literal into a call to a formatting function, hoisting the interpolated
{expression} fields out of the literal as positional arguments:

  f"The number is: {3 * 5}"   becomes   std::format("The number is: {}", 3 * 5)

Everything else passes through byte-for-byte, so compiler diagnostics on
the output still point at recognizable code.

Example usage:
  extractfx main.fx.cpp main.cpp
  extractfx --name=fmt::format --line-directives main.fx.cpp main.cpp
  generator | extractfx | c++ -x c++ -
"#)]
struct Cli {
    /// Input file (reads standard input if omitted)
    input: Option<PathBuf>,

    /// Output file (writes standard output if omitted)
    output: Option<PathBuf>,

    /// Formatting function symbol; a trailing '*' appends the argument
    /// count to the symbol
    #[arg(short, long, default_value = "std::format")]
    name: String,

    /// Emit #line directives so diagnostics point at the original
    /// positions of hoisted expressions
    #[arg(short, long)]
    line_directives: bool,

    /// Run the embedded self-test and exit with the failure count
    #[arg(long)]
    test: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.test {
        eprintln!("Performing self test");
        let failures = selftest::run_self_test();
        return ExitCode::from(failures.min(255) as u8);
    }

    let source_path = match &cli.input {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    };

    let config = Config {
        function_name: cli.name.clone(),
        source_path: source_path.clone(),
        emit_line_directives: cli.line_directives,
    };

    let input: Box<dyn std::io::BufRead> = match &cli.input {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error: cannot read {}: {}", path.display(), e);
                return ExitCode::from(3);
            }
        },
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                eprintln!("Error: cannot write {}: {}", path.display(), e);
                return ExitCode::from(3);
            }
        },
        None => Box::new(BufWriter::new(std::io::stdout())),
    };

    let result = Rewriter::new(&config, input, &mut output).process();
    if let Err(e) = result {
        eprint!("{}", format_error(&e, &source_path));
        return ExitCode::from(1);
    }

    if let Err(e) = output.flush() {
        eprintln!("Error: cannot flush output: {}", e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
