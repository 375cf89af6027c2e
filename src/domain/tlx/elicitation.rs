//! Pairwise weight elicitation.
//!
//! An evaluator answers fifteen forced-choice questions ("which contributed
//! more to workload?"), one per dimension pair. Each dimension's weight is
//! the number of pairs it won. Abandoning the procedure at any point
//! discards the partial answers and yields the equal distribution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Dimension, WeightDistribution, PAIRWISE_COMBINATIONS, PAIR_COUNT};

/// Which side of a pair was judged the larger workload contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairChoice {
    First,
    Second,
}

impl PairChoice {
    /// Resolves the winning dimension of a pair.
    pub fn winner(self, pair: (Dimension, Dimension)) -> Dimension {
        match self {
            PairChoice::First => pair.0,
            PairChoice::Second => pair.1,
        }
    }
}

/// Result of the weighting step for one evaluator in one study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElicitedWeights {
    pub weights: WeightDistribution,
    /// True only when all fifteen comparisons were answered.
    pub is_weighted: bool,
}

impl ElicitedWeights {
    /// Outcome of a skipped or abandoned procedure.
    pub fn skipped() -> Self {
        Self {
            weights: WeightDistribution::equal(),
            is_weighted: false,
        }
    }
}

/// Errors raised while answering the pairwise questions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElicitationError {
    #[error("Pair index {index} is out of range (0..15)")]
    PairIndexOutOfRange { index: usize },

    #[error("{winner} is not part of pair {index}")]
    WinnerNotInPair { index: usize, winner: Dimension },

    #[error("Only {answered} of 15 comparisons answered")]
    Incomplete { answered: usize },
}

/// Stateless tallying of pairwise outcomes.
pub struct WeightElicitor;

impl WeightElicitor {
    /// Tallies a full set of answers, one per pair in presentation order.
    pub fn tally(choices: &[PairChoice; PAIR_COUNT]) -> ElicitedWeights {
        let winners = PAIRWISE_COMBINATIONS
            .iter()
            .zip(choices.iter())
            .map(|(pair, choice)| choice.winner(*pair));

        ElicitedWeights {
            weights: Self::count_wins(winners),
            is_weighted: true,
        }
    }

    /// Counts wins per dimension, starting from zero.
    ///
    /// Accumulation is commutative: only the multiset of winners matters.
    pub fn count_wins(winners: impl IntoIterator<Item = Dimension>) -> WeightDistribution {
        let mut weights = WeightDistribution::zero();
        for winner in winners {
            weights.increment(winner);
        }
        weights
    }
}

/// An in-progress pairwise procedure.
///
/// Answers are keyed by pair index, so revisiting a question replaces the
/// earlier answer rather than adding a second win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairwiseElicitation {
    selections: [Option<Dimension>; PAIR_COUNT],
}

impl PairwiseElicitation {
    /// Starts a fresh procedure with no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pair shown at `index`.
    pub fn pair(index: usize) -> Option<(Dimension, Dimension)> {
        PAIRWISE_COMBINATIONS.get(index).copied()
    }

    /// First unanswered pair, if any.
    pub fn next_pair(&self) -> Option<(usize, (Dimension, Dimension))> {
        self.selections
            .iter()
            .position(Option::is_none)
            .map(|index| (index, PAIRWISE_COMBINATIONS[index]))
    }

    /// Records the winner of pair `index`.
    pub fn select(&mut self, index: usize, winner: Dimension) -> Result<(), ElicitationError> {
        let (a, b) = Self::pair(index).ok_or(ElicitationError::PairIndexOutOfRange { index })?;
        if winner != a && winner != b {
            return Err(ElicitationError::WinnerNotInPair { index, winner });
        }
        self.selections[index] = Some(winner);
        Ok(())
    }

    /// Records the answer to pair `index` by side.
    pub fn choose(&mut self, index: usize, choice: PairChoice) -> Result<(), ElicitationError> {
        let pair = Self::pair(index).ok_or(ElicitationError::PairIndexOutOfRange { index })?;
        self.select(index, choice.winner(pair))
    }

    /// Number of pairs answered so far.
    pub fn answered(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// True once every pair has an answer.
    pub fn is_complete(&self) -> bool {
        self.answered() == PAIR_COUNT
    }

    /// Completes the procedure, producing tallied weights.
    pub fn finish(self) -> Result<ElicitedWeights, ElicitationError> {
        if !self.is_complete() {
            return Err(ElicitationError::Incomplete {
                answered: self.answered(),
            });
        }

        Ok(ElicitedWeights {
            weights: WeightElicitor::count_wins(self.selections.into_iter().flatten()),
            is_weighted: true,
        })
    }

    /// Abandons the procedure; partial answers are discarded.
    pub fn abandon(self) -> ElicitedWeights {
        ElicitedWeights::skipped()
    }
}
