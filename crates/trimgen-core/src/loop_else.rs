//! Loop-with-fallback trimming: `for` / `else` / `endfor`
//!
//! Six marker flags, one per side of each directive. Case `i` sets flag `k`
//! when bit `k` of `i` is set.

use crate::trim::{trim_between, trim_side, Marker, Profile, Side, Sign, Slot};

/// Number of marker flags in the fixture.
pub const FLAGS: usize = 6;

const BEFORE: &str = "a ";
const LOOP_BODY: &str = "\t{{v}}\t";
const LOOP_BODY_RENDERED: &str = "\t1\t";
const ELSE_BODY: &str = "\nX\n";
const AFTER: &str = " b";

/// One loop case: source plus outputs for `values = [1]` and `values = []`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopElseCase {
    pub index: usize,
    pub source: String,
    pub some: String,
    pub none: String,
}

/// Directive slots `for`, `else`, `endfor` for case `index`.
pub fn slots(index: usize) -> [Slot; 3] {
    let flag = |bit: usize| index & (1 << bit) != 0;
    [
        Slot::new(flag(0), flag(1)),
        Slot::new(flag(2), flag(3)),
        Slot::new(flag(4), flag(5)),
    ]
}

fn render(slot: Slot, keyword: &str) -> String {
    // No padding spaces: `{%-for v in values-%}` and `{% for v in values %}`.
    let glyph = |flag: bool| Marker::from_flag(flag, Sign::Minus).glyph();
    format!("{{%{}{}{}%}}", glyph(slot.pre), keyword, glyph(slot.post))
}

pub fn loop_else_case(index: usize) -> LoopElseCase {
    let [open, fallback, close] = slots(index);
    let trim = |flag: bool| Marker::from_flag(flag, Sign::Minus).resolve(Profile::Plain);

    let source = format!(
        "{BEFORE}{}{LOOP_BODY}{}{ELSE_BODY}{}{AFTER}",
        render(open, "for v in values"),
        render(fallback, "else"),
        render(close, "endfor"),
    );

    let head = trim_side(BEFORE, Side::Right, trim(open.pre));
    let tail = trim_side(AFTER, Side::Left, trim(close.post));
    let some = format!(
        "{head}{}{tail}",
        trim_between(LOOP_BODY_RENDERED, trim(open.post), trim(fallback.pre))
    );
    let none = format!(
        "{head}{}{tail}",
        trim_between(ELSE_BODY, trim(fallback.post), trim(close.pre))
    );

    LoopElseCase {
        index,
        source,
        some,
        none,
    }
}

/// Every case, in index order.
pub fn loop_else_cases() -> impl Iterator<Item = LoopElseCase> {
    (0..1usize << FLAGS).map(loop_else_case)
}
