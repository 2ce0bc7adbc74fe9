//! Match-arm-trim combinator for `match` / `when` / `endmatch` blocks

use crate::combos::BoolTuples;
use crate::error::{GenError, Result};
use crate::trim::{trim_between, trim_side, Profile, Side, Sign, Slot};

/// One `when` arm: pattern and literal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arm {
    pub pattern: &'static str,
    pub body: &'static str,
}

/// Fixed literals of a match block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFixture {
    pub before: &'static str,
    pub scrutinee: &'static str,
    pub after: &'static str,
    pub arms: &'static [Arm],
}

/// Matches `item: Option<&str>` against `Some` and `None`.
pub const OPTION_MATCH: MatchFixture = MatchFixture {
    before: "before ",
    scrutinee: "item",
    after: "      after",
    arms: &[
        Arm {
            pattern: "Some with (item)",
            body: "  foo   ",
        },
        Arm {
            pattern: "None",
            body: "    bar     ",
        },
    ],
};

/// Source plus one expected output per arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCase {
    pub source: String,
    pub expected: Vec<String>,
}

impl MatchFixture {
    /// `match` + one per arm + `endmatch`.
    pub fn slot_count(&self) -> usize {
        self.arms.len() + 2
    }

    /// Number of enumerated flags: both markers of every arm plus the
    /// `endmatch` pre marker. The `match` markers and the `endmatch` post
    /// marker stay unset.
    pub fn free_flags(&self) -> usize {
        self.arms.len() * 2 + 1
    }

    /// Expands free flags into the full slot list.
    pub fn slots_from_flags(&self, flags: &[bool]) -> Vec<Slot> {
        let mut all = Vec::with_capacity(self.slot_count() * 2);
        all.extend([false, false]);
        all.extend_from_slice(flags);
        all.push(false);
        Slot::pairs(&all)
    }

    /// Every full slot assignment, in enumeration order.
    pub fn assignments(&self) -> impl Iterator<Item = Vec<Slot>> + '_ {
        BoolTuples::new(self.free_flags()).map(move |flags| self.slots_from_flags(&flags))
    }

    fn check_slots(&self, slots: &[Slot]) -> Result<()> {
        if slots.len() != self.slot_count() {
            return Err(GenError::InvalidMatchSlots {
                expected: self.slot_count(),
                actual: slots.len(),
            });
        }
        Ok(())
    }

    pub fn source(&self, slots: &[Slot]) -> Result<String> {
        self.check_slots(slots)?;
        let sign = Sign::Minus;

        let mut code = self.before.to_string();
        code.push_str(&slots[0].render(&format!("match {}", self.scrutinee), sign));
        for (arm, slot) in self.arms.iter().zip(&slots[1..]) {
            code.push_str(&slot.render(&format!("when {}", arm.pattern), sign));
            code.push_str(arm.body);
        }
        code.push_str(&slots[slots.len() - 1].render("endmatch", sign));
        code.push_str(self.after);
        Ok(code)
    }

    /// Expected output when arm `selected` matches.
    pub fn expected(&self, slots: &[Slot], selected: usize) -> Result<String> {
        self.check_slots(slots)?;
        let arm = self.arms.get(selected).ok_or(GenError::InvalidActiveBranch {
            active: selected,
            branches: self.arms.len(),
        })?;
        let (sign, profile) = (Sign::Minus, Profile::Plain);
        let open = slots[0];
        let when = slots[selected + 1];
        let next = slots[selected + 2];
        let end = slots[slots.len() - 1];

        let mut expected = String::new();
        expected.push_str(trim_side(self.before, Side::Right, open.pre_trim(sign, profile)));
        expected.push_str(trim_between(
            arm.body,
            when.post_trim(sign, profile),
            next.pre_trim(sign, profile),
        ));
        expected.push_str(trim_side(self.after, Side::Left, end.post_trim(sign, profile)));
        Ok(expected)
    }
}

/// Builds the source and one expectation per arm.
pub fn match_case(fixture: &MatchFixture, slots: &[Slot]) -> Result<MatchCase> {
    let source = fixture.source(slots)?;
    let expected = (0..fixture.arms.len())
        .map(|arm| fixture.expected(slots, arm))
        .collect::<Result<Vec<_>>>()?;
    Ok(MatchCase { source, expected })
}
