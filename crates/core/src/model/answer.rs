use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inputs accepted as an affirmative answer.
const TRUTH_LITERALS: [&str; 10] = [
    "T", "t", "TRUE", "True", "true", "yes", "Yes", "y", "Y", "YES",
];

/// Inputs accepted as a negative answer.
const FALSE_LITERALS: [&str; 10] = [
    "F", "f", "False", "false", "FALSE", "no", "No", "n", "N", "NO",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("not a recognized true/false answer: {raw:?}")]
pub struct ParseTruthError {
    raw: String,
}

/// A normalized true/false answer.
///
/// Raw input is matched against a fixed set of accepted literals; anything
/// else is rejected explicitly rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthValue {
    True,
    False,
}

impl TruthValue {
    /// Normalizes raw input, returning `None` for unrecognized text.
    ///
    /// Matching is exact: no trimming or case folding beyond the accepted
    /// literal spellings.
    #[must_use]
    pub fn from_input(raw: &str) -> Option<Self> {
        if TRUTH_LITERALS.contains(&raw) {
            Some(Self::True)
        } else if FALSE_LITERALS.contains(&raw) {
            Some(Self::False)
        } else {
            None
        }
    }

    /// The canonical answer string stored in question records.
    #[must_use]
    pub fn canonical(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
        }
    }
}

impl FromStr for TruthValue {
    type Err = ParseTruthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s).ok_or_else(|| ParseTruthError { raw: s.to_string() })
    }
}

impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_truthy_literal_normalizes_to_true() {
        for raw in TRUTH_LITERALS {
            assert_eq!(TruthValue::from_input(raw), Some(TruthValue::True), "{raw}");
        }
    }

    #[test]
    fn every_falsy_literal_normalizes_to_false() {
        for raw in FALSE_LITERALS {
            assert_eq!(TruthValue::from_input(raw), Some(TruthValue::False), "{raw}");
        }
    }

    #[test]
    fn unrecognized_input_is_rejected() {
        for raw in ["", "maybe", "tru", " True", "True ", "1", "0"] {
            assert_eq!(TruthValue::from_input(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn canonical_strings_round_trip() {
        assert_eq!("True".parse::<TruthValue>().unwrap(), TruthValue::True);
        assert_eq!(TruthValue::False.to_string(), "False");
        let err = "nah".parse::<TruthValue>().unwrap_err();
        assert_eq!(err.to_string(), "not a recognized true/false answer: \"nah\"");
    }
}
