//! Self-check of generated fragments before they are emitted
//!
//! The combinators build source text from slot flags. This module reads that
//! text back with its own tokenizer and confirms every directive carries the
//! glyphs and keyword its slot asked for, so an off-by-one slot mapping fails
//! at generation time instead of in the downstream test run.

use std::collections::HashSet;

use crate::cond::{BranchKind, CondCase, CondParams, Segment};
use crate::error::{GenError, Result};
use crate::loop_else::{self, LoopElseCase};
use crate::matches::{MatchCase, MatchFixture};
use crate::trim::{Marker, Sign, Slot};

/// A `{% ... %}` block split into its marker glyphs and keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub pre: char,
    pub keyword: &'a str,
    pub post: char,
}

/// Literals and directives of a fragment; `literals.len() == directives.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens<'a> {
    pub literals: Vec<&'a str>,
    pub directives: Vec<Directive<'a>>,
}

/// Splits `source` at `{%` / `%}`. Expression blocks (`{{ }}`) stay in literals.
pub fn tokenize(source: &str) -> std::result::Result<Tokens<'_>, String> {
    let mut tokens = Tokens::default();
    let mut rest = source;

    while let Some(open) = rest.find("{%") {
        tokens.literals.push(&rest[..open]);
        let after_open = &rest[open + 2..];
        let close = after_open.find("%}").ok_or_else(|| {
            let offset = source.len() - rest.len() + open;
            format!("unclosed directive at byte {offset}")
        })?;
        let inner = &after_open[..close];

        let mut chars = inner.chars();
        let (pre, post) = match (chars.next(), chars.next_back()) {
            (Some(pre), Some(post)) => (pre, post),
            _ => return Err(format!("directive too short: {{%{inner}%}}")),
        };
        let keyword = inner[pre.len_utf8()..inner.len() - post.len_utf8()].trim();

        tokens.directives.push(Directive { pre, keyword, post });
        rest = &after_open[close + 2..];
    }
    tokens.literals.push(rest);

    Ok(tokens)
}

fn check_markers(
    case: &str,
    index: usize,
    directive: &Directive<'_>,
    slot: Slot,
    sign: Sign,
) -> Result<()> {
    let sides = [
        ("pre", directive.pre, slot.pre),
        ("post", directive.post, slot.post),
    ];
    for (side, glyph, flag) in sides {
        let expected = Marker::from_flag(flag, sign);
        if Marker::from_glyph(glyph) != Some(expected) {
            return Err(GenError::self_check(
                case,
                format!(
                    "directive {index} ({:?}): {side} glyph {glyph:?}, expected {:?}",
                    directive.keyword,
                    expected.glyph()
                ),
            ));
        }
    }
    Ok(())
}

fn check_counts(case: &str, tokens: &Tokens<'_>, directives: usize) -> Result<()> {
    if tokens.directives.len() != directives {
        return Err(GenError::self_check(
            case,
            format!(
                "found {} directives, expected {directives}",
                tokens.directives.len()
            ),
        ));
    }
    Ok(())
}

fn check_keyword(case: &str, index: usize, actual: &str, expected: &str) -> Result<()> {
    if actual != expected {
        return Err(GenError::self_check(
            case,
            format!("directive {index} is {actual:?}, expected {expected:?}"),
        ));
    }
    Ok(())
}

/// Checks a branch case against the parameters it was built from.
pub fn check_cond(params: &CondParams<'_>, case: &CondCase) -> Result<()> {
    let name = format!(
        "cond branches={} active={} sign={:?} profile={:?}",
        params.branches(),
        params.active,
        params.sign,
        params.profile
    );
    let tokens = tokenize(&case.source).map_err(|reason| GenError::self_check(&name, reason))?;
    check_counts(&name, &tokens, params.slots.len())?;

    let branches = params.branches();
    for (i, (directive, slot)) in tokens.directives.iter().zip(params.slots).enumerate() {
        check_markers(&name, i, directive, *slot, params.sign)?;
        let kind = BranchKind::classify(i, branches);
        check_keyword(&name, i, directive.keyword, &kind.keyword(i == params.active))?;
    }

    let truthy = tokens
        .directives
        .iter()
        .filter(|d| d.keyword.ends_with(" true"))
        .count();
    let active_kind = BranchKind::classify(params.active, branches);
    let expected_truthy = usize::from(active_kind != BranchKind::Else);
    if truthy != expected_truthy {
        return Err(GenError::self_check(
            &name,
            format!("{truthy} branches render, expected {expected_truthy} true condition"),
        ));
    }

    let mut seen = HashSet::new();
    for (i, literal) in tokens.literals.iter().enumerate() {
        if *literal != Segment::new(i).text() {
            return Err(GenError::self_check(
                &name,
                format!("segment {i} is {literal:?}"),
            ));
        }
        if !seen.insert(*literal) {
            return Err(GenError::self_check(
                &name,
                format!("segment {i} duplicates an earlier segment"),
            ));
        }
    }

    Ok(())
}

/// Checks a match case against its fixture and slots.
pub fn check_match(fixture: &MatchFixture, slots: &[Slot], case: &MatchCase) -> Result<()> {
    let flags: String = slots
        .iter()
        .flat_map(|s| [s.pre, s.post])
        .map(|f| if f { '1' } else { '0' })
        .collect();
    let name = format!("match slots={flags}");
    let tokens = tokenize(&case.source).map_err(|reason| GenError::self_check(&name, reason))?;
    check_counts(&name, &tokens, fixture.slot_count())?;

    let mut keywords = vec![format!("match {}", fixture.scrutinee)];
    keywords.extend(fixture.arms.iter().map(|arm| format!("when {}", arm.pattern)));
    keywords.push("endmatch".to_string());

    for (i, ((directive, slot), keyword)) in tokens
        .directives
        .iter()
        .zip(slots)
        .zip(&keywords)
        .enumerate()
    {
        check_markers(&name, i, directive, *slot, Sign::Minus)?;
        check_keyword(&name, i, directive.keyword, keyword)?;
    }

    let mut literals = vec![fixture.before, ""];
    literals.extend(fixture.arms.iter().map(|arm| arm.body));
    literals.push(fixture.after);
    if tokens.literals != literals {
        return Err(GenError::self_check(
            &name,
            format!("literals {:?}, expected {literals:?}", tokens.literals),
        ));
    }

    if case.expected.len() != fixture.arms.len() {
        return Err(GenError::self_check(
            &name,
            format!("{} expectations for {} arms", case.expected.len(), fixture.arms.len()),
        ));
    }

    Ok(())
}

/// Checks a loop-with-fallback case against the flags of its index.
pub fn check_loop_else(case: &LoopElseCase) -> Result<()> {
    let name = format!("loop-else #{:02}", case.index);
    let tokens = tokenize(&case.source).map_err(|reason| GenError::self_check(&name, reason))?;
    check_counts(&name, &tokens, 3)?;

    let keywords = ["for v in values", "else", "endfor"];
    let slots = loop_else::slots(case.index);
    for (i, ((directive, slot), keyword)) in tokens
        .directives
        .iter()
        .zip(slots)
        .zip(keywords)
        .enumerate()
    {
        check_markers(&name, i, directive, slot, Sign::Minus)?;
        check_keyword(&name, i, directive.keyword, keyword)?;
    }
    Ok(())
}
