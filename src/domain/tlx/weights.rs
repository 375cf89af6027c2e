//! Weight distributions and raw score sets.

use serde::{Deserialize, Serialize};

use super::{Dimension, DimensionValues, PAIRS_PER_DIMENSION, PAIR_COUNT};
use crate::domain::foundation::{RawScore, ValidationError};

/// Per-dimension importance weights.
///
/// An elicited distribution tallies pairwise wins: every weight is in
/// `0..=5` and the weights sum to 15. The equal distribution (all ones,
/// sum 6) stands in when the pairwise step was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightDistribution(DimensionValues<u32>);

impl WeightDistribution {
    /// The all-ones distribution used when no weighting was elicited.
    pub fn equal() -> Self {
        Self(DimensionValues::splat(1))
    }

    /// A distribution with every weight at zero.
    pub fn zero() -> Self {
        Self(DimensionValues::splat(0))
    }

    /// Wraps raw per-dimension weights.
    pub fn from_values(values: DimensionValues<u32>) -> Self {
        Self(values)
    }

    /// Returns the weight of one dimension.
    pub fn weight(&self, dimension: Dimension) -> u32 {
        self.0[dimension]
    }

    /// Returns the underlying per-dimension record.
    pub fn values(&self) -> &DimensionValues<u32> {
        &self.0
    }

    /// Sum of all six weights, widened so it cannot overflow.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, w)| u64::from(*w)).sum()
    }

    /// Adds one win to a dimension.
    pub(crate) fn increment(&mut self, dimension: Dimension) {
        self.0[dimension] += 1;
    }

    /// Checks the shape of a completed pairwise tally.
    pub fn is_pairwise_tally(&self) -> bool {
        self.total() == PAIR_COUNT as u64
            && self.0.iter().all(|(_, w)| *w <= PAIRS_PER_DIMENSION)
    }
}

impl Default for WeightDistribution {
    fn default() -> Self {
        Self::equal()
    }
}

/// The six 0-100 ratings of one task evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawScoreSet(DimensionValues<RawScore>);

impl RawScoreSet {
    /// Wraps already-validated scores.
    pub fn new(scores: DimensionValues<RawScore>) -> Self {
        Self(scores)
    }

    /// Validates plain integers, naming the offending dimension on error.
    pub fn try_from_values(values: DimensionValues<u8>) -> Result<Self, ValidationError> {
        for (dimension, value) in values.iter() {
            if RawScore::try_new(*value).is_err() {
                return Err(ValidationError::out_of_range(
                    dimension.id(),
                    0,
                    100,
                    i32::from(*value),
                ));
            }
        }
        Ok(Self(values.map(|v| RawScore::saturating(*v))))
    }

    /// Returns the rating for one dimension.
    pub fn score(&self, dimension: Dimension) -> u8 {
        self.0[dimension].value()
    }

    /// Returns the underlying per-dimension record.
    pub fn values(&self) -> &DimensionValues<RawScore> {
        &self.0
    }

    /// Unweighted mean of the six ratings.
    pub fn mean(&self) -> f64 {
        let sum: u32 = self.0.iter().map(|(_, s)| u32::from(s.value())).sum();
        f64::from(sum) / Dimension::ALL.len() as f64
    }
}
