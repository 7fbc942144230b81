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

//! Embedded self-test corpus.
//!
//! The corpus is compiled into the binary so that `extractfx --test` can
//! validate an installation without a checkout; the unit tests run the
//! same table. All cases use the default configuration (`std::format`,
//! no line directives).

use crate::config::Config;
use crate::rewriter::rewrite;

/// Expected outcome of one corpus case.
#[derive(Debug, Clone, Copy)]
pub enum Expect {
    /// Output equals the input byte-for-byte.
    Same,
    /// Output equals the given text.
    Output(&'static str),
    /// The rewrite must fail.
    Fail,
}

/// The self-test corpus: `(input, expected outcome)`.
pub const CASES: &[(&str, Expect)] = &[
    // Basic passthrough
    ("", Expect::Same),
    ("x = y", Expect::Same),
    ("x = y\n", Expect::Same),
    ("#x = y\n", Expect::Same),
    // Preprocessor directive with mismatched " is ok.
    ("#x = y\"\n", Expect::Same),
    // Mismatched " on a directive continuation line is ok.
    ("#x = y\\ \n\" c\"\\n", Expect::Same),
    ("#x = y\\ \nfoo \\\n\" c\"\\n", Expect::Same),
    ("xx // foo", Expect::Same),
    // Line comment continuation hides a mismatched ".
    ("xx // foo \\ \nc \"", Expect::Same),
    ("xx /* \" */ yy", Expect::Same),
    ("xx /* ss\n \" */ yy", Expect::Same),
    ("xx /* ss", Expect::Fail),
    ("xx /* ss\n \"/ yy *", Expect::Fail),
    ("#x = y \\", Expect::Fail),
    ("xx //  \\", Expect::Fail),

    // Non-raw literals
    (r#""""#, Expect::Same),
    (r#""foo.bar""#, Expect::Same),
    (r#""foo\"bar""#, Expect::Same),
    (r#""foo\\bar""#, Expect::Same),
    ("\"foo\\\n\\\"bar\"", Expect::Same),
    (r#"foo ""#, Expect::Fail),
    ("foo\n\"", Expect::Fail),
    ("\"foo\\ \nbar", Expect::Fail),
    (r#""foo\"#, Expect::Fail),

    // Raw literals
    (r#"R"()""#, Expect::Same),
    (r#"R"xy()xy""#, Expect::Same),
    (r#"R"xy(foo.bar)xy""#, Expect::Same),
    (r#"R"xy(foo".bar)xy""#, Expect::Same),
    (r#"R"xy(foo\"bar)xy""#, Expect::Same),
    (r#"R"xy(foo\\bar)xy""#, Expect::Same),
    (r#"R"xy(foo)"bar)yx"fum)xy""#, Expect::Same),
    ("R\"xy(foo\n\"bar)xy\"", Expect::Same),
    ("R\"xy(foo\n)xy\"", Expect::Same),
    (r#"R"abc"#, Expect::Fail),
    ("R\"abc\nd)", Expect::Fail),
    (r#"foo R"xy("#, Expect::Fail),
    ("foo\nR\"(xy)z\"", Expect::Fail),
    (r#"foo R"(xy)z""#, Expect::Fail),
    (r#"foo R"w(xy)z")""#, Expect::Fail),
    ("R\"(foo \nbar", Expect::Fail),
    ("R\"xy(foo \nbar", Expect::Fail),
    ("R\"xy(foo \nbar)yx\"", Expect::Fail),

    // Field extraction
    (
        r#"f"The number is: {3 * 5}""#,
        Expect::Output(r#"std::format("The number is: {}", 3 * 5)"#),
    ),
    (
        r#"x"The numbers are: {a} and {b}""#,
        Expect::Output(r#""The numbers are: {} and {}", a, b"#),
    ),
    (
        r#"x"The numbers are: {a:x} and {b:5}""#,
        Expect::Output(r#""The numbers are: {:x} and {:5}", a, b"#),
    ),
    (
        r#"f"The number is: {a:{b}}""#,
        Expect::Output(r#"std::format("The number is: {:{}}", a, b)"#),
    ),
    (
        r#"f"The number is: {a:x{b}d}""#,
        Expect::Output(r#"std::format("The number is: {:x{}d}", a, b)"#),
    ),
    (
        r#"f"The number is: {a ? b : c :4d}""#,
        Expect::Output(r#"std::format("The number is: {:4d}", a ? b : c )"#),
    ),
    (
        r#"f"The number is: {a ? b ? c : d : c :4d}""#,
        Expect::Output(r#"std::format("The number is: {:4d}", a ? b ? c : d : c )"#),
    ),
    (
        r#"f"The number is: {a ? b : c ? d : e :4d}""#,
        Expect::Output(r#"std::format("The number is: {:4d}", a ? b : c ? d : e )"#),
    ),
    (
        r#"f"The number is: {MyType{}}""#,
        Expect::Output(r#"std::format("The number is: {}", MyType{})"#),
    ),
    (
        r#"f"Just braces {{a}} {a}""#,
        Expect::Output(r#"std::format("Just braces {{a}} {}", a)"#),
    ),
    (
        r#"f"Use colon colon {std::rand()}""#,
        Expect::Output(r#"std::format("Use colon colon {}", std::rand())"#),
    ),
    (
        r#"f"Use colon colon {std::rand():fmt}""#,
        Expect::Output(r#"std::format("Use colon colon {:fmt}", std::rand())"#),
    ),
    (
        r#"f"{foo = }""#,
        Expect::Output(r#"std::format("foo = {}", foo )"#),
    ),
    (
        r#"Lf"The number is: {3 * 5}""#,
        Expect::Output(r#"std::format(L"The number is: {}", 3 * 5)"#),
    ),

    // Comments in field expressions
    (
        r#"f"The number is: {3 /* comment */ * 5}""#,
        Expect::Output(r#"std::format("The number is: {}", 3 /* comment */ * 5)"#),
    ),
    (
        r#"f"The number is: {3 /* : ignored */ * 5:fmt}""#,
        Expect::Output(r#"std::format("The number is: {:fmt}", 3 /* : ignored */ * 5)"#),
    ),
    (
        r#"f"The number is: {3 /* } ignored */ * 5:f{m}t}""#,
        Expect::Output(r#"std::format("The number is: {:f{}t}", 3 /* } ignored */ * 5, m)"#),
    ),
    (
        "f\"The number is: {3 /* comment \\\ncontinues */ * 5}\"",
        Expect::Output("std::format(\"The number is: {}\", 3 /* comment \\\ncontinues */ * 5)"),
    ),

    // Raw f/x literals
    (
        r#"xR"(The numbers are: {a} and {b})""#,
        Expect::Output(r#"R"(The numbers are: {} and {})", a, b"#),
    ),
    (
        r#"xR"xy(The numbers are: {a} and {b})xy""#,
        Expect::Output(r#"R"xy(The numbers are: {} and {})xy", a, b"#),
    ),
    (
        "fR\"(The number is: {3 /* comment\ncontinues */ * 5})\"",
        Expect::Output("std::format(R\"(The number is: {})\", 3 /* comment\ncontinues */ * 5)"),
    ),
    (
        "fR\"xy(The number is: {3 /* comment\nxy) )\" yx)\" continues */ * 5})xy\"",
        Expect::Output(
            "std::format(R\"xy(The number is: {})xy\", 3 /* comment\nxy) )\" yx)\" continues */ * 5)",
        ),
    ),

    // Negative cases
    (r#"f"Just braces {{} {a}""#, Expect::Fail),
    (r#"f"The number is: {a:x{b:x}d}""#, Expect::Fail),
    ("f\"The number is: {3\n* 5}\"", Expect::Fail),
    (r#"f"The number is: {3 * 5""#, Expect::Fail),
    (r#"fR"xy(The number is: {3 * 5)xy""#, Expect::Fail),
    (r#"f"The number is: {3 * 5: a""#, Expect::Fail),
    (r#"fR"xy(The number is: {3 * 5: a)xy""#, Expect::Fail),
    (r#"f"The number is: {3 * 5:{3""#, Expect::Fail),
    (r#"fR"xy(The number is: {3 * 5:{3)xy""#, Expect::Fail),
    (r#"f"The number is: {3 * 5 /*comment ""#, Expect::Fail),
    (r#"fR"x(The number is: {3 * 5 /*comment )x""#, Expect::Fail),
    (r#"f"The number is: {3 * 5 /*comment\"#, Expect::Fail),
    (r#"f"The number is: {3 // comment * 5}""#, Expect::Fail),

    // Literals in field expressions
    (
        r#"f"The number is: {std::strlen("He{ } j")}""#,
        Expect::Output(r#"std::format("The number is: {}", std::strlen("He{ } j"))"#),
    ),
    (
        r#"f"The number is: {std::strlen(R"(Hej)")}""#,
        Expect::Output(r#"std::format("The number is: {}", std::strlen(R"(Hej)"))"#),
    ),
    (
        "f\"The number is: {std::strlen(R\"xy(Hej\n{{}})xy\")}\"",
        Expect::Output("std::format(\"The number is: {}\", std::strlen(R\"xy(Hej\n{{}})xy\"))"),
    ),

    // f literals in f literal fields
    (
        r#"f"The number is: {f"Five: {5}"} end""#,
        Expect::Output(r#"std::format("The number is: {} end", std::format("Five: {}", 5))"#),
    ),
    (
        "f\"The number is: {f\"Fi\\\nve: {5}\"}\"",
        Expect::Output("std::format(\"The number is: {}\", std::format(\"Fi\\\nve: {}\", 5))"),
    ),
    (
        r#"f"The number is: {fR"xy(Five: {5})xy"}""#,
        Expect::Output(r#"std::format("The number is: {}", std::format(R"xy(Five: {})xy", 5))"#),
    ),
    (
        "f\"The number is: {fR\"xy(Fi\nve: {5})xy\"}\"",
        Expect::Output(
            "std::format(\"The number is: {}\", std::format(R\"xy(Fi\nve: {})xy\", 5))",
        ),
    ),
];

/// Run every corpus case, printing mismatches to stderr. Returns the
/// number of failing cases.
pub fn run_self_test() -> usize {
    let config = Config::default();
    let mut failures = 0;

    for (index, (input, expect)) in CASES.iter().enumerate() {
        let result = rewrite(input, &config);
        match expect {
            Expect::Fail => {
                if let Ok(out) = result {
                    eprintln!(
                        "ERROR: case #{} should have failed.\ninput:\n{}\noutput:\n{}",
                        index, input, out
                    );
                    failures += 1;
                }
            }
            Expect::Same | Expect::Output(_) => {
                let truth = match expect {
                    Expect::Output(truth) => truth,
                    _ => input,
                };
                match result {
                    Ok(out) if out == *truth => {}
                    Ok(out) => {
                        eprintln!(
                            "ERROR: case #{} produced erroneous output:\n{}\nexpected:\n{}",
                            index, out, truth
                        );
                        failures += 1;
                    }
                    Err(err) => {
                        eprintln!(
                            "ERROR: case #{} unexpectedly failed: {}\ninput:\n{}",
                            index, err, input
                        );
                        failures += 1;
                    }
                }
            }
        }
    }

    eprintln!("{} of {} self-test cases failed.", failures, CASES.len());
    failures
}
