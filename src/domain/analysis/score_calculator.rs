//! Score Calculator - Weighted workload score for a single evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::tlx::{DimensionValues, RawScoreSet, WeightDistribution};

/// Result of combining one set of raw ratings with one weight distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedScore {
    /// raw × weight per dimension, not normalized.
    pub weighted_scores: DimensionValues<u64>,
    /// Σ weight.
    pub total_weight: u64,
    /// Σ(raw × weight) / Σ weight, on the 0-100 scale.
    pub total_weighted_score: f64,
}

/// Weighted TLX scoring.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Computes the overall weighted workload score.
    ///
    /// # Algorithm
    /// weighted[d] = raw[d] × weight[d]
    /// total = Σ weighted[d] / Σ weight[d]
    ///
    /// # Edge Cases
    /// - Zero total weight: total is 0 rather than NaN
    /// - Equal weights: total is the plain mean of the raw ratings
    /// - Any `u32` weights: products and sums are taken in `u64`, which
    ///   cannot overflow for six dimensions, and stay exact in `f64`
    pub fn compute(raw: &RawScoreSet, weights: &WeightDistribution) -> WeightedScore {
        let weighted_scores = raw.values().zip_with(weights.values(), |score, weight| {
            u64::from(score.value()) * u64::from(*weight)
        });

        let total_weight = weights.total();
        let weighted_sum: u64 = weighted_scores.iter().map(|(_, v)| *v).sum();

        let total_weighted_score = if total_weight > 0 {
            weighted_sum as f64 / total_weight as f64
        } else {
            0.0
        };

        WeightedScore {
            weighted_scores,
            total_weight,
            total_weighted_score,
        }
    }
}
