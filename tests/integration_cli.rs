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

//! End-to-end CLI integration tests.

use std::io::Write;
use std::process::{Command, Stdio};

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_extractfx"))
}

fn run_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    let mut child = cargo_bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn extractfx");
    child
        .stdin
        .as_mut()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for extractfx")
}

/// Test --help flag.
#[test]
fn test_help_flag() {
    let output = cargo_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("extractfx"));
    assert!(stdout.contains("--name"));
    assert!(stdout.contains("--line-directives"));
}

/// Test --version flag.
#[test]
fn test_version_flag() {
    let output = cargo_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("extractfx"));
    assert!(stdout.contains("0.1.0"));
}

/// Test the stdin -> stdout pipeline.
#[test]
fn test_stdin_to_stdout() {
    let output = run_with_stdin(&[], "f\"{a}\"\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "std::format(\"{}\", a)\n"
    );
}

/// Test file -> file operation.
#[test]
fn test_file_to_file() {
    let temp_dir = std::env::temp_dir();
    let input_path = temp_dir.join("extractfx_in.fx.cpp");
    let output_path = temp_dir.join("extractfx_out.cpp");

    std::fs::write(&input_path, "auto s = f\"{n} items\";\n").unwrap();

    let output = cargo_bin()
        .arg(&input_path)
        .arg(&output_path)
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "Rewrite failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        std::fs::read_to_string(&output_path).unwrap(),
        "auto s = std::format(\"{} items\", n);\n"
    );

    std::fs::remove_file(&input_path).ok();
    std::fs::remove_file(&output_path).ok();
}

/// Test --name with both '=' and space-separated forms.
#[test]
fn test_name_option_forms() {
    for args in [&["--name=fmt::format"][..], &["--name", "fmt::format"][..]] {
        let output = run_with_stdin(args, "f\"{a}\"\n");
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "fmt::format(\"{}\", a)\n"
        );
    }
}

/// Test the arity-templated name form.
#[test]
fn test_starred_name() {
    let output = run_with_stdin(&["--name=check_format*"], "f\"{a} {b}\"\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "check_format2(\"{} {}\", a, b)\n"
    );
}

/// Test --line-directives names the input in the emitted markers.
#[test]
fn test_line_directives_flag() {
    let temp_dir = std::env::temp_dir();
    let input_path = temp_dir.join("extractfx_ld.fx.cpp");
    std::fs::write(&input_path, "f\"{a}\"\n").unwrap();

    let output = cargo_bin()
        .arg("--line-directives")
        .arg(&input_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#line 1"));
    assert!(stdout.contains(&input_path.display().to_string()));

    std::fs::remove_file(&input_path).ok();
}

/// Test exit status 1 and a diagnostic on parse errors.
#[test]
fn test_parse_error_exit_code() {
    let output = run_with_stdin(&[], "f\"{unterminated\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error["));
    assert!(stderr.contains("<stdin>:1"));
}

/// Test missing input file exit code.
#[test]
fn test_missing_input_file() {
    let output = cargo_bin()
        .arg("/nonexistent/extractfx_input.cpp")
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(3));
}

/// Test the embedded self-test.
#[test]
fn test_self_test_flag() {
    let output = cargo_bin()
        .arg("--test")
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "self test failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Test that passthrough input survives the pipeline byte-for-byte,
/// including a missing trailing newline.
#[test]
fn test_passthrough_without_trailing_newline() {
    let source = "int main() { return 0; }";
    let output = run_with_stdin(&[], source);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), source);
}
