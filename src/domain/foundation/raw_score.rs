//! Raw TLX rating value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A single raw subscale rating between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RawScore(u8);

impl RawScore {
    /// Lowest possible rating.
    pub const MIN: Self = Self(0);

    /// Highest possible rating.
    pub const MAX: Self = Self(100);

    /// Creates a RawScore, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX.0 {
            return Err(ValidationError::out_of_range(
                "raw_score",
                0,
                100,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a RawScore, clamping to the valid range.
    pub fn saturating(value: u8) -> Self {
        Self(value.min(Self::MAX.0))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RawScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<RawScore> for u8 {
    fn from(score: RawScore) -> Self {
        score.0
    }
}

impl fmt::Display for RawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_score_accepts_bounds() {
        assert_eq!(RawScore::try_new(0).unwrap().value(), 0);
        assert_eq!(RawScore::try_new(100).unwrap().value(), 100);
    }

    #[test]
    fn raw_score_rejects_above_100() {
        let err = RawScore::try_new(101).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Field 'raw_score' must be between 0 and 100, got 101"
        );
    }

    #[test]
    fn raw_score_saturating_clamps() {
        assert_eq!(RawScore::saturating(250), RawScore::MAX);
        assert_eq!(RawScore::saturating(42).value(), 42);
    }

    #[test]
    fn raw_score_deserialization_validates() {
        assert!(serde_json::from_str::<RawScore>("55").is_ok());
        assert!(serde_json::from_str::<RawScore>("150").is_err());
    }
}
