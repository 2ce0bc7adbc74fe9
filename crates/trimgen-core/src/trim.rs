//! Trim markers and the whitespace-stripping rule shared by every oracle
//!
//! A directive such as `{%- if x +%}` carries one optional marker on each
//! side. Whether a marker strips whitespace depends on its glyph and on the
//! renderer's whitespace profile:
//!
//! | marker | `Plain` profile | `Suppressing` profile |
//! |--------|-----------------|-----------------------|
//! | `-`    | suppress        | suppress              |
//! | `+`    | keep            | keep                  |
//! | none   | keep            | suppress              |
//!
//! so the plus convention under the suppressing profile is the minus
//! convention with every flag flipped.

/// Side of a literal that a directive marker touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Start of the literal (the directive precedes it)
    Left,
    /// End of the literal (the directive follows it)
    Right,
}

/// Resolved meaning of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    Keep,
    Suppress,
}

/// Glyph convention used when a marker flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Sign {
    pub fn glyph(self) -> char {
        match self {
            Sign::Minus => '-',
            Sign::Plus => '+',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '-' => Some(Sign::Minus),
            '+' => Some(Sign::Plus),
            _ => None,
        }
    }

    /// What an explicit marker of this sign does, regardless of profile.
    pub fn trim(self) -> Trim {
        match self {
            Sign::Minus => Trim::Suppress,
            Sign::Plus => Trim::Keep,
        }
    }
}

/// Renderer default for directives without an explicit marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// No config: whitespace is preserved unless `-` is given
    Plain,
    /// The inverted config is active: whitespace is stripped unless `+` is given
    Suppressing,
}

impl Profile {
    pub fn default_trim(self) -> Trim {
        match self {
            Profile::Plain => Trim::Keep,
            Profile::Suppressing => Trim::Suppress,
        }
    }

    /// Sign whose glyph flips the profile default.
    pub fn native_sign(self) -> Sign {
        match self {
            Profile::Plain => Sign::Minus,
            Profile::Suppressing => Sign::Plus,
        }
    }
}

/// A single marker position: absent or carrying a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(pub Option<Sign>);

impl Marker {
    /// Marker for a boolean flag under a sign convention.
    pub fn from_flag(flag: bool, sign: Sign) -> Self {
        Marker(flag.then_some(sign))
    }

    /// Character written between `{%`/`%}` and the keyword; a space when absent.
    pub fn glyph(self) -> char {
        self.0.map_or(' ', Sign::glyph)
    }

    /// Inverse of [`Marker::glyph`]. `None` for characters that are not markers.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            ' ' => Some(Marker(None)),
            other => Sign::from_glyph(other).map(|sign| Marker(Some(sign))),
        }
    }

    pub fn resolve(self, profile: Profile) -> Trim {
        self.0.map_or(profile.default_trim(), Sign::trim)
    }
}

/// Pre/post marker flags of one directive slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slot {
    pub pre: bool,
    pub post: bool,
}

impl Slot {
    pub const KEEP: Slot = Slot {
        pre: false,
        post: false,
    };

    pub fn new(pre: bool, post: bool) -> Self {
        Self { pre, post }
    }

    /// Pairs consecutive flags: `[a, b, c, d]` becomes `[(a, b), (c, d)]`.
    /// A trailing unpaired flag is ignored.
    pub fn pairs(flags: &[bool]) -> Vec<Slot> {
        flags
            .chunks_exact(2)
            .map(|pair| Slot::new(pair[0], pair[1]))
            .collect()
    }

    pub fn any(self) -> bool {
        self.pre || self.post
    }

    /// Render as `{%<pre> <body> <post>%}`.
    pub fn render(self, body: &str, sign: Sign) -> String {
        format!(
            "{{%{} {} {}%}}",
            Marker::from_flag(self.pre, sign).glyph(),
            body,
            Marker::from_flag(self.post, sign).glyph()
        )
    }

    pub fn pre_trim(self, sign: Sign, profile: Profile) -> Trim {
        Marker::from_flag(self.pre, sign).resolve(profile)
    }

    pub fn post_trim(self, sign: Sign, profile: Profile) -> Trim {
        Marker::from_flag(self.post, sign).resolve(profile)
    }
}

/// Applies one marker to one side of a literal.
pub fn trim_side(text: &str, side: Side, trim: Trim) -> &str {
    match (trim, side) {
        (Trim::Keep, _) => text,
        (Trim::Suppress, Side::Left) => text.trim_start(),
        (Trim::Suppress, Side::Right) => text.trim_end(),
    }
}

/// Applies a left and a right marker to a literal that sits between two directives.
pub fn trim_between(text: &str, left: Trim, right: Trim) -> &str {
    trim_side(trim_side(text, Side::Left, left), Side::Right, right)
}
