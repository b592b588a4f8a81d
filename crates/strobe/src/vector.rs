use crate::error::Error;
use crate::logic::{Logic, MatchStrictness};
use itertools::Itertools;

/// A concrete sampled bus value.
///
/// Index 0 is the leftmost (most significant) bit of the textual form.
/// Construction rejects `DontCare`, so an observed value can never carry a
/// wildcard; use [`LogicPattern`] for expectations and write masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicVector {
    bits: Vec<Logic>,
}

/// An expectation or write-mask vector: the same alphabet as
/// [`LogicVector`] plus the `-` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicPattern {
    bits: Vec<Logic>,
}

impl LogicVector {
    pub fn new(bits: Vec<Logic>) -> Result<Self, Error> {
        if bits.contains(&Logic::DontCare) {
            return Err(Error::DontCareSample);
        }
        Ok(Self { bits })
    }

    /// Internal constructor for line snapshots, which cannot contain a
    /// wildcard by construction.
    pub(crate) fn from_line_bits(bits: Vec<Logic>) -> Self {
        debug_assert!(!bits.contains(&Logic::DontCare));
        Self { bits }
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn bits(&self) -> &[Logic] {
        &self.bits
    }

    pub fn to_bin_string(&self) -> String {
        bin_string(&self.bits)
    }

    pub fn to_hex_string(&self) -> String {
        hex_string(&self.bits)
    }

    /// Lifts the sample into a pattern, e.g. to re-drive an observed value.
    pub fn to_pattern(&self) -> LogicPattern {
        LogicPattern {
            bits: self.bits.clone(),
        }
    }
}

impl LogicPattern {
    pub fn new(bits: Vec<Logic>) -> Self {
        Self { bits }
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn bits(&self) -> &[Logic] {
        &self.bits
    }

    pub fn to_bin_string(&self) -> String {
        bin_string(&self.bits)
    }

    pub fn to_hex_string(&self) -> String {
        hex_string(&self.bits)
    }

    /// The shared comparison primitive: per index, a `-` in the pattern
    /// always passes; anything else is decided by `strictness`. Evaluation
    /// stops at the first failing index.
    ///
    /// Both vectors must have the same width; binding width checks happen at
    /// the operation boundary.
    pub fn matches(&self, observed: &LogicVector, strictness: MatchStrictness) -> bool {
        debug_assert_eq!(self.width(), observed.width());
        observed
            .bits
            .iter()
            .zip(&self.bits)
            .all(|(obs, exp)| obs.matches(*exp, strictness))
    }
}

impl std::str::FromStr for LogicVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bits = s.chars().map(Logic::from_char).collect::<Result<_, _>>()?;
        LogicVector::new(bits)
    }
}

impl std::str::FromStr for LogicPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bits = s.chars().map(Logic::from_char).collect::<Result<_, _>>()?;
        Ok(LogicPattern::new(bits))
    }
}

impl std::fmt::Display for LogicVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_bin_string())
    }
}

impl std::fmt::Display for LogicPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_bin_string())
    }
}

impl std::ops::Index<usize> for LogicVector {
    type Output = Logic;

    fn index(&self, index: usize) -> &Logic {
        &self.bits[index]
    }
}

impl std::ops::Index<usize> for LogicPattern {
    type Output = Logic;

    fn index(&self, index: usize) -> &Logic {
        &self.bits[index]
    }
}

fn bin_string(bits: &[Logic]) -> String {
    bits.iter().map(|b| b.to_char()).collect()
}

/// Renders MSB-first hex, one digit per nibble, padding the partial nibble
/// on the left. A nibble that is not pure strong binary renders as its
/// letter when homogeneous and as `X` when mixed.
fn hex_string(bits: &[Logic]) -> String {
    let digits: Vec<char> = bits
        .iter()
        .rev()
        .chunks(4)
        .into_iter()
        .map(|chunk| hex_digit(&chunk.copied().collect::<Vec<_>>()))
        .collect();
    digits.into_iter().rev().collect()
}

/// `nibble` is LSB-first.
fn hex_digit(nibble: &[Logic]) -> char {
    if nibble
        .iter()
        .all(|&b| matches!(b, Logic::Zero | Logic::One))
    {
        let mut v = 0u32;
        for (i, b) in nibble.iter().enumerate() {
            if *b == Logic::One {
                v |= 1 << i;
            }
        }
        char::from_digit(v, 16).map(|c| c.to_ascii_uppercase()).unwrap_or('X')
    } else if nibble.iter().all(|b| *b == nibble[0]) {
        nibble[0].to_char()
    } else {
        'X'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_wildcard_in_sample() {
        assert!("1-0-".parse::<LogicVector>().is_err());
        assert!("1-0-".parse::<LogicPattern>().is_ok());
    }

    #[test]
    fn hex_rendering() {
        let v: LogicVector = "1000".parse().unwrap();
        assert_eq!(v.to_hex_string(), "8");

        let v: LogicVector = "11111010".parse().unwrap();
        assert_eq!(v.to_hex_string(), "FA");

        // Partial leading nibble
        let v: LogicVector = "101010".parse().unwrap();
        assert_eq!(v.to_hex_string(), "2A");
    }

    #[test]
    fn hex_rendering_non_binary() {
        let v: LogicVector = "ZZZZ1010".parse().unwrap();
        assert_eq!(v.to_hex_string(), "ZA");

        let v: LogicVector = "X0101010".parse().unwrap();
        // X mixed into the high nibble poisons only that digit
        assert_eq!(v.to_hex_string(), "XA");
    }

    #[test]
    fn bin_round_trip() {
        let v: LogicVector = "1X0Z".parse().unwrap();
        assert_eq!(v.to_bin_string(), "1X0Z");
        assert_eq!(v.to_string(), "1X0Z");
    }

    #[test]
    fn matches_short_circuit_semantics() {
        let observed: LogicVector = "1010".parse().unwrap();
        let pattern: LogicPattern = "1-1-".parse().unwrap();
        assert!(pattern.matches(&observed, MatchStrictness::Std));
        assert!(pattern.matches(&observed, MatchStrictness::Exact));

        let pattern: LogicPattern = "0---".parse().unwrap();
        assert!(!pattern.matches(&observed, MatchStrictness::Std));
    }
}
