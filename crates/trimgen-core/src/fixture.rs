//! Assembly of generated test files
//!
//! Every case is self-checked before its line is written, and literals are
//! emitted through `{:?}` so they come out as valid Rust string literals.

use std::fmt::Write;

use crate::check::{check_cond, check_loop_else, check_match};
use crate::combos::BoolTuples;
use crate::cond::{cond_case, CondParams};
use crate::config::{consts, GeneratorConfig};
use crate::error::Result;
use crate::loop_else::loop_else_cases;
use crate::matches::{match_case, OPTION_MATCH};
use crate::trim::{Profile, Sign, Slot};

/// A generated file, named relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub contents: String,
    /// Number of assertion macro invocations in `contents`
    pub cases: usize,
}

/// Which branch-trim test function to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CondSuite {
    /// `test_cond_ws`: minus glyph, renderer defaults
    Plain,
    /// `test_cond_ws_inverted`: plus glyph under the named config file
    Inverted { config: String },
}

impl CondSuite {
    fn name_extra(&self) -> &'static str {
        match self {
            CondSuite::Plain => "",
            CondSuite::Inverted { .. } => "_inverted",
        }
    }

    fn config_attr(&self) -> String {
        match self {
            CondSuite::Plain => String::new(),
            CondSuite::Inverted { config } => format!(", config = {config:?}"),
        }
    }

    fn profile(&self) -> Profile {
        match self {
            CondSuite::Plain => Profile::Plain,
            CondSuite::Inverted { .. } => Profile::Suppressing,
        }
    }

    /// Macro name used on every assertion line.
    pub fn macro_name(&self) -> String {
        format!("test_template{}", self.name_extra())
    }
}

fn header(out: &mut String, generator: &str) -> Result<()> {
    writeln!(
        out,
        "// This file is auto generated by `cargo xtask gen {generator}`. Do not edit.\n"
    )?;
    writeln!(out, "use askama::Template;")?;
    Ok(())
}

/// Writes one `macro_rules!` scaffold and test function for a branch suite.
/// Returns the number of assertion lines.
pub fn write_cond_tests(out: &mut String, suite: &CondSuite, max_branches: usize) -> Result<usize> {
    let name_extra = suite.name_extra();
    let config = suite.config_attr();
    write!(
        out,
        r#"
macro_rules! test_template{name_extra} {{
    ($source:literal, $rendered:expr) => {{{{
        #[derive(Template)]
        #[template(source = $source, ext = "txt"{config})]
        struct CondWs;

        assert_eq!(CondWs.render().unwrap(), $rendered);
    }}}};
}}

#[rustfmt::skip]
#[test]
fn test_cond_ws{name_extra}() {{
"#
    )?;

    let profile = suite.profile();
    let sign = profile.native_sign();
    let macro_name = suite.macro_name();
    let mut cases = 0;

    for branches in 1..=max_branches {
        for flags in BoolTuples::new((branches + 1) * 2) {
            let slots = Slot::pairs(&flags);

            for active in 0..branches {
                let params = CondParams {
                    slots: &slots,
                    active,
                    sign,
                    profile,
                };
                let case = cond_case(&params)?;
                check_cond(&params, &case)?;
                writeln!(out, "    {macro_name}!({:?}, {:?});", case.source, case.expected)?;
                cases += 1;

                // The minus glyph must keep trimming while the inverted config is on.
                if sign != Sign::Minus && slots.iter().any(|slot| slot.any()) {
                    let params = CondParams {
                        sign: Sign::Minus,
                        ..params
                    };
                    let case = cond_case(&params)?;
                    check_cond(&params, &case)?;
                    writeln!(out, "    {macro_name}!({:?}, {:?});", case.source, case.expected)?;
                    cases += 1;
                }
            }
        }

        if branches != max_branches {
            writeln!(out)?;
        }
    }
    writeln!(out, "}}")?;

    Ok(cases)
}

/// Writes the match scaffold and one line per marker assignment.
pub fn write_match_tests(out: &mut String) -> Result<usize> {
    write!(
        out,
        r#"
#[rustfmt::skip]
macro_rules! test_match {{
    ($source:literal, $some_rendered:expr, $none_rendered:expr) => {{{{
        #[derive(Template)]
        #[template(source = $source, ext = "txt")]
        struct MatchWs {{
            item: Option<&'static str>,
        }}

        assert_eq!(MatchWs {{ item: Some("foo") }}.render().unwrap(), $some_rendered);
        assert_eq!(MatchWs {{ item: None }}.render().unwrap(), $none_rendered);
    }}}};
}}

#[rustfmt::skip]
#[test]
fn test_match_ws() {{
"#
    )?;

    let mut cases = 0;
    for slots in OPTION_MATCH.assignments() {
        let case = match_case(&OPTION_MATCH, &slots)?;
        check_match(&OPTION_MATCH, &slots, &case)?;
        writeln!(
            out,
            "    test_match!({:?}, {:?}, {:?});",
            case.source, case.expected[0], case.expected[1]
        )?;
        cases += 1;
    }
    writeln!(out, "}}")?;

    Ok(cases)
}

/// `ws.rs`: plain and inverted branch suites followed by the match suite.
pub fn ws_file(config: &GeneratorConfig) -> Result<GeneratedFile> {
    config.validate()?;
    let branches = config.cond.branches;

    let mut contents = String::new();
    header(&mut contents, "ws")?;
    let mut cases = write_cond_tests(&mut contents, &CondSuite::Plain, branches)?;
    cases += write_cond_tests(
        &mut contents,
        &CondSuite::Inverted {
            config: config.cond.inverted_config.clone(),
        },
        branches,
    )?;
    cases += write_match_tests(&mut contents)?;

    Ok(GeneratedFile {
        name: consts::output::WS_FILE,
        contents,
        cases,
    })
}

/// `loop_else.rs`: a smoke test, then one struct and test per marker combination.
pub fn loop_else_file() -> Result<GeneratedFile> {
    let mut contents = String::new();
    header(&mut contents, "loop-else")?;
    write!(
        contents,
        r#"
#[derive(Template)]
#[template(
    source = "{{% for v in values %}}{{{{v}}}}{{% else %}}empty{{% endfor %}}",
    ext = "txt"
)]
struct ForElse<'a> {{
    values: &'a [i32],
}}

#[test]
fn test_for_else() {{
    let t = ForElse {{ values: &[1, 2, 3] }};
    assert_eq!(t.render().unwrap(), "123");

    let t = ForElse {{ values: &[] }};
    assert_eq!(t.render().unwrap(), "empty");
}}
"#
    )?;

    let mut cases = 0;
    for case in loop_else_cases() {
        check_loop_else(&case)?;
        let i = case.index;
        write!(
            contents,
            r#"
#[derive(Template)]
#[template(
    source = {source:?},
    ext = "txt"
)]
struct LoopElseTrim{i:02}<'a> {{
    values: &'a [i32],
}}

#[test]
fn test_loop_else_trim{i:02}() {{
    let t = LoopElseTrim{i:02} {{ values: &[1] }};
    assert_eq!(t.render().unwrap(), {some:?});

    let t = LoopElseTrim{i:02} {{ values: &[] }};
    assert_eq!(t.render().unwrap(), {none:?});
}}
"#,
            source = case.source,
            some = case.some,
            none = case.none,
        )?;
        cases += 1;
    }

    Ok(GeneratedFile {
        name: consts::output::LOOP_ELSE_FILE,
        contents,
        cases,
    })
}

/// Every artifact the driver knows about.
pub fn all_files(config: &GeneratorConfig) -> Result<Vec<GeneratedFile>> {
    Ok(vec![ws_file(config)?, loop_else_file()?])
}
