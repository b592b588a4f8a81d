use crate::error::Error;

/// A single bus bit in the nine-value alphabet of resolved HDL signals.
///
/// `DontCare` is a pattern-only value: it may appear in expectations and
/// write masks but never in a sampled [`LogicVector`](crate::LogicVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    /// `U` — never driven since elaboration.
    Uninit,
    /// `X` — conflicting or unknown strong drive.
    Unknown,
    /// `0` — strong low.
    Zero,
    /// `1` — strong high.
    One,
    /// `Z` — high impedance.
    HighZ,
    /// `W` — conflicting or unknown weak drive.
    Weak,
    /// `L` — weak low.
    WeakZero,
    /// `H` — weak high.
    WeakOne,
    /// `-` — wildcard, pattern positions only.
    DontCare,
}

/// Logical assertion state a bit resolves to when drive strength is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolved {
    High,
    Low,
    Undriven,
}

/// How strictly the comparator treats weak and undriven states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrictness {
    /// Compare by resolved assertion state: `1`/`H` are equal, `0`/`L` are
    /// equal, and the undriven states (`U`, `X`, `Z`, `W`) are
    /// interchangeable with each other.
    #[default]
    Std,
    /// Bit-for-bit identity including drive strength.
    Exact,
}

impl Logic {
    pub fn from_char(c: char) -> Result<Self, Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Logic::Uninit),
            'X' => Ok(Logic::Unknown),
            '0' => Ok(Logic::Zero),
            '1' => Ok(Logic::One),
            'Z' => Ok(Logic::HighZ),
            'W' => Ok(Logic::Weak),
            'L' => Ok(Logic::WeakZero),
            'H' => Ok(Logic::WeakOne),
            '-' => Ok(Logic::DontCare),
            _ => Err(Error::InvalidLogicChar(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Logic::Uninit => 'U',
            Logic::Unknown => 'X',
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::HighZ => 'Z',
            Logic::Weak => 'W',
            Logic::WeakZero => 'L',
            Logic::WeakOne => 'H',
            Logic::DontCare => '-',
        }
    }

    fn resolve(self) -> Resolved {
        match self {
            Logic::One | Logic::WeakOne => Resolved::High,
            Logic::Zero | Logic::WeakZero => Resolved::Low,
            _ => Resolved::Undriven,
        }
    }

    /// Compares this bit (the observed value) against an expected bit.
    ///
    /// A `DontCare` expectation passes regardless of the observed value and
    /// regardless of strictness; everything else is decided by the mode.
    pub fn matches(self, expected: Logic, strictness: MatchStrictness) -> bool {
        if expected == Logic::DontCare {
            return true;
        }
        match strictness {
            MatchStrictness::Std => self.resolve() == expected.resolve(),
            MatchStrictness::Exact => self == expected,
        }
    }
}

impl std::fmt::Display for Logic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
