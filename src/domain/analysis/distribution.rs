//! Histogram of overall scores in ten-point bins.

use serde::{Deserialize, Serialize};

/// Number of bins covering the 0-100 scale.
pub const DISTRIBUTION_BINS: usize = 10;

/// Width of each bin in score points.
pub const BIN_WIDTH: u32 = 10;

/// Count of scores per ten-point bin: `[0,10)`, `[10,20)`, ..., `[90,100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub bins: [usize; DISTRIBUTION_BINS],
}

impl ScoreDistribution {
    /// Bins scores by their integer part.
    ///
    /// Scores of 100 or more land in the last bin. Negative and NaN scores
    /// are not counted.
    pub fn from_scores(scores: impl IntoIterator<Item = f64>) -> Self {
        let mut bins = [0usize; DISTRIBUTION_BINS];
        for score in scores {
            if score.is_nan() || score < 0.0 {
                continue;
            }
            let floored = score.floor();
            let index = if floored >= 100.0 {
                DISTRIBUTION_BINS - 1
            } else {
                (floored as usize) / BIN_WIDTH as usize
            };
            bins[index] += 1;
        }
        Self { bins }
    }

    /// Total number of counted scores.
    pub fn total(&self) -> usize {
        self.bins.iter().sum()
    }
}
