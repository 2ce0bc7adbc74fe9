//! Branch-trim combinator for `if` / `else if` / `else` / `endif` chains
//!
//! A chain of `n` branches has `n + 1` directive slots and `n + 2` literal
//! segments, interleaved as `seg0 dir0 seg1 dir1 .. dirN segN+1`. Segment `i`
//! is the body of branch `i - 1`; `seg0` and the last segment surround the
//! whole chain.

use crate::error::{GenError, Result};
use crate::trim::{trim_between, trim_side, Profile, Side, Sign, Slot};

/// Directive kind by position in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    If,
    ElseIf,
    Else,
    EndIf,
}

impl BranchKind {
    /// Kind of slot `slot` (0-based) in a chain of `branches`.
    pub fn classify(slot: usize, branches: usize) -> Self {
        let position = slot + 1;
        if position == 1 {
            BranchKind::If
        } else if position > branches {
            BranchKind::EndIf
        } else if position == branches {
            BranchKind::Else
        } else {
            BranchKind::ElseIf
        }
    }

    /// Directive body, e.g. `else if true`.
    pub fn keyword(self, active: bool) -> String {
        match self {
            BranchKind::If => format!("if {active}"),
            BranchKind::ElseIf => format!("else if {active}"),
            BranchKind::Else => "else".to_string(),
            BranchKind::EndIf => "endif".to_string(),
        }
    }
}

/// Literal text around directive slots.
///
/// Segment `i` is `i + 1` line feeds, the number `i + 1`, then `i + 1` CRLF
/// pairs. Different lengths keep every segment of a chain distinct, so a
/// misplaced trim cannot produce the right string by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub index: usize,
}

impl Segment {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn number(self) -> usize {
        self.index + 1
    }

    pub fn leading(self) -> String {
        "\n".repeat(self.number())
    }

    pub fn trailing(self) -> String {
        "\r\n".repeat(self.number())
    }

    pub fn text(self) -> String {
        format!("{}{}{}", self.leading(), self.number(), self.trailing())
    }

    /// Segment without its trailing whitespace.
    pub fn text_before_eof(self) -> String {
        format!("{}{}", self.leading(), self.number())
    }
}

/// One generated stimulus and its oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondCase {
    pub source: String,
    pub expected: String,
}

/// Parameters of one branch case.
#[derive(Debug, Clone, Copy)]
pub struct CondParams<'a> {
    /// One slot per directive; `slots.len() - 1` branches
    pub slots: &'a [Slot],
    /// 0-based index of the branch whose body renders
    pub active: usize,
    pub sign: Sign,
    pub profile: Profile,
}

impl CondParams<'_> {
    pub fn branches(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    pub fn validate(&self) -> Result<()> {
        let branches = self.branches();
        if branches == 0 {
            return Err(GenError::InvalidChain(format!(
                "a chain needs at least 2 slots, got {}",
                self.slots.len()
            )));
        }
        if self.active >= branches {
            return Err(GenError::InvalidActiveBranch {
                active: self.active,
                branches,
            });
        }
        Ok(())
    }

    /// Rendered directive for each slot.
    pub fn directives(&self) -> Vec<String> {
        let branches = self.branches();
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let kind = BranchKind::classify(i, branches);
                slot.render(&kind.keyword(i == self.active), self.sign)
            })
            .collect()
    }

    pub fn segments(&self) -> Vec<Segment> {
        (0..self.slots.len() + 1).map(Segment::new).collect()
    }

    fn source(&self) -> String {
        let mut source = String::new();
        let segments = self.segments();
        for (segment, directive) in segments.iter().zip(self.directives()) {
            source.push_str(&segment.text());
            source.push_str(&directive);
        }
        if let Some(last) = segments.last() {
            source.push_str(&last.text());
        }
        source
    }

    /// Expected render output.
    ///
    /// Only three segments reach the output: the one before `if`, the active
    /// branch body and the one after `endif`. Whitespace after the last segment
    /// is left out, since the renderer does not emit it at end of input.
    fn expected(&self) -> String {
        let (sign, profile) = (self.sign, self.profile);
        let first = self.slots[0];
        let enter = self.slots[self.active];
        let leave = self.slots[self.active + 1];
        let end = self.slots[self.slots.len() - 1];

        let head = Segment::new(0).text();
        let body = Segment::new(self.active + 1).text();
        let tail = Segment::new(self.slots.len()).text_before_eof();

        let mut expected = String::new();
        expected.push_str(trim_side(&head, Side::Right, first.pre_trim(sign, profile)));
        expected.push_str(trim_between(
            &body,
            enter.post_trim(sign, profile),
            leave.pre_trim(sign, profile),
        ));
        expected.push_str(trim_side(&tail, Side::Left, end.post_trim(sign, profile)));
        expected
    }
}

/// Builds the `(source, expected)` pair for one branch case.
pub fn cond_case(params: &CondParams<'_>) -> Result<CondCase> {
    params.validate()?;
    Ok(CondCase {
        source: params.source(),
        expected: params.expected(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(slots: &[Slot], active: usize, sign: Sign, profile: Profile) -> CondParams<'_> {
        CondParams {
            slots,
            active,
            sign,
            profile,
        }
    }

    #[test]
    fn test_classify_single_branch() {
        assert_eq!(BranchKind::classify(0, 1), BranchKind::If);
        assert_eq!(BranchKind::classify(1, 1), BranchKind::EndIf);
    }

    #[test]
    fn test_classify_two_branches() {
        assert_eq!(BranchKind::classify(0, 2), BranchKind::If);
        assert_eq!(BranchKind::classify(1, 2), BranchKind::Else);
        assert_eq!(BranchKind::classify(2, 2), BranchKind::EndIf);
    }

    #[test]
    fn test_classify_three_branches() {
        let kinds: Vec<_> = (0..4).map(|i| BranchKind::classify(i, 3)).collect();
        assert_eq!(
            kinds,
            vec![
                BranchKind::If,
                BranchKind::ElseIf,
                BranchKind::Else,
                BranchKind::EndIf
            ]
        );
    }

    #[test]
    fn test_segment_text() {
        assert_eq!(Segment::new(0).text(), "\n1\r\n");
        assert_eq!(Segment::new(2).text(), "\n\n\n3\r\n\r\n\r\n");
        assert_eq!(Segment::new(2).text_before_eof(), "\n\n\n3");
    }

    #[test]
    fn test_single_branch_all_keep() {
        let slots = [Slot::KEEP, Slot::KEEP];
        let case = cond_case(&params(&slots, 0, Sign::Minus, Profile::Plain)).unwrap();
        assert_eq!(
            case.source,
            "\n1\r\n{%  if true  %}\n\n2\r\n\r\n{%  endif  %}\n\n\n3\r\n\r\n\r\n"
        );
        assert_eq!(case.expected, "\n1\r\n\n\n2\r\n\r\n\n\n\n3");
    }

    #[test]
    fn test_single_branch_all_suppress() {
        let slots = [Slot::new(true, true), Slot::new(true, true)];
        let case = cond_case(&params(&slots, 0, Sign::Minus, Profile::Plain)).unwrap();
        assert_eq!(
            case.source,
            "\n1\r\n{%- if true -%}\n\n2\r\n\r\n{%- endif -%}\n\n\n3\r\n\r\n\r\n"
        );
        assert_eq!(case.expected, "\n123");
    }

    #[test]
    fn test_else_branch_active() {
        // if false / else / endif, only the else body is kept
        let slots = [Slot::KEEP, Slot::new(false, true), Slot::new(true, false)];
        let case = cond_case(&params(&slots, 1, Sign::Minus, Profile::Plain)).unwrap();
        assert!(case.source.contains("{%  if false  %}"));
        assert!(case.source.contains("{%  else -%}"));
        assert_eq!(case.expected, "\n1\r\n3\n\n\n\n4");
    }

    #[test]
    fn test_inactive_branch_markers_are_ignored() {
        // markers around the skipped `if` body must not leak into the output
        let a = [Slot::new(false, true), Slot::KEEP, Slot::KEEP];
        let b = [Slot::new(false, false), Slot::KEEP, Slot::KEEP];
        let ea = cond_case(&params(&a, 1, Sign::Minus, Profile::Plain)).unwrap();
        let eb = cond_case(&params(&b, 1, Sign::Minus, Profile::Plain)).unwrap();
        assert_eq!(ea.expected, eb.expected);
    }

    #[test]
    fn test_plus_sign_under_suppressing_profile() {
        let slots = [Slot::new(true, false), Slot::new(false, true)];
        let case = cond_case(&params(&slots, 0, Sign::Plus, Profile::Suppressing)).unwrap();
        assert!(case.source.contains("{%+ if true  %}"));
        assert!(case.source.contains("{%  endif +%}"));
        assert_eq!(case.expected, "\n1\r\n2\n\n\n3");
    }

    #[test]
    fn test_minus_sign_under_suppressing_profile_strips_everything() {
        let slots = [Slot::new(true, false), Slot::new(false, true)];
        let case = cond_case(&params(&slots, 0, Sign::Minus, Profile::Suppressing)).unwrap();
        assert_eq!(case.expected, "\n123");
    }

    #[test]
    fn test_rejects_short_chain() {
        let slots = [Slot::KEEP];
        let err = cond_case(&params(&slots, 0, Sign::Minus, Profile::Plain)).unwrap_err();
        assert!(matches!(err, GenError::InvalidChain(_)));
    }

    #[test]
    fn test_rejects_active_outside_chain() {
        let slots = [Slot::KEEP, Slot::KEEP];
        let err = cond_case(&params(&slots, 1, Sign::Minus, Profile::Plain)).unwrap_err();
        assert!(matches!(
            err,
            GenError::InvalidActiveBranch {
                active: 1,
                branches: 1
            }
        ));
    }
}
