//! Stored pairwise comparison outcomes, keyed by evaluator and study.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ElicitedWeights, WeightDistribution};
use crate::domain::foundation::{EvaluatorId, StudyId};

/// Composite key: at most one comparison exists per evaluator and study.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonKey {
    pub evaluator_id: EvaluatorId,
    pub study_id: StudyId,
}

impl ComparisonKey {
    pub fn new(evaluator_id: EvaluatorId, study_id: StudyId) -> Self {
        Self {
            evaluator_id,
            study_id,
        }
    }
}

/// The weights an evaluator uses for every rating within one study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairwiseComparison {
    pub evaluator_id: EvaluatorId,
    pub study_id: StudyId,
    pub weights: WeightDistribution,
    /// Sole authority on whether the pairwise procedure was completed.
    pub is_weighted: bool,
}

impl PairwiseComparison {
    /// Stores the outcome of an elicitation for an evaluator and study.
    pub fn from_elicited(
        evaluator_id: EvaluatorId,
        study_id: StudyId,
        outcome: ElicitedWeights,
    ) -> Self {
        Self {
            evaluator_id,
            study_id,
            weights: outcome.weights,
            is_weighted: outcome.is_weighted,
        }
    }

    /// Equal weights with `is_weighted = false`, as after a reset.
    pub fn unweighted(evaluator_id: EvaluatorId, study_id: StudyId) -> Self {
        Self::from_elicited(evaluator_id, study_id, ElicitedWeights::skipped())
    }

    /// Returns the composite key of this record.
    pub fn key(&self) -> ComparisonKey {
        ComparisonKey::new(self.evaluator_id.clone(), self.study_id.clone())
    }
}

/// Lookup of comparisons by composite key.
///
/// Inserting for an existing key replaces the earlier record.
#[derive(Debug, Clone, Default)]
pub struct ComparisonBook {
    entries: HashMap<ComparisonKey, PairwiseComparison>,
}

impl ComparisonBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the comparison for its key, returning the replaced record.
    pub fn upsert(&mut self, comparison: PairwiseComparison) -> Option<PairwiseComparison> {
        self.entries.insert(comparison.key(), comparison)
    }

    /// Finds the comparison for an evaluator in a study.
    pub fn get(&self, evaluator_id: &EvaluatorId, study_id: &StudyId) -> Option<&PairwiseComparison> {
        self.entries
            .get(&ComparisonKey::new(evaluator_id.clone(), study_id.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored comparisons, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &PairwiseComparison> {
        self.entries.values()
    }
}

impl FromIterator<PairwiseComparison> for ComparisonBook {
    /// Later records win over earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = PairwiseComparison>>(iter: I) -> Self {
        let mut book = Self::new();
        for comparison in iter {
            book.upsert(comparison);
        }
        book
    }
}
