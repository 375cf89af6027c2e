//! Where an evaluator stands within a study.

use serde::Serialize;
use std::collections::HashSet;

use super::Rating;
use crate::domain::foundation::{EvaluatorId, MteId, StudyId};

/// The next thing an evaluator has to do in a study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStep {
    /// No weights recorded yet: run (or skip) the pairwise comparisons.
    PairwiseComparison,
    /// Weights recorded, some task elements still unrated.
    RateTasks,
    /// Every task element of the study has been rated.
    Summary,
}

/// Progress of one evaluator through one study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatorProgress {
    pub step: EvaluationStep,
    pub rated_mte_ids: Vec<MteId>,
    pub remaining_mte_ids: Vec<MteId>,
}

impl EvaluatorProgress {
    /// Determines progress from the study's task elements, whether a
    /// comparison exists, and the ratings submitted so far.
    ///
    /// A study with no task elements never reaches `Summary`.
    pub fn assess(
        evaluator_id: &EvaluatorId,
        study_id: &StudyId,
        study_mte_ids: &[MteId],
        has_comparison: bool,
        ratings: &[Rating],
    ) -> Self {
        let rated: HashSet<&MteId> = ratings
            .iter()
            .filter(|r| &r.evaluator_id == evaluator_id && &r.study_id == study_id)
            .map(|r| &r.mte_id)
            .collect();

        let (rated_mte_ids, remaining_mte_ids): (Vec<MteId>, Vec<MteId>) = study_mte_ids
            .iter()
            .cloned()
            .partition(|id| rated.contains(id));

        let step = if !study_mte_ids.is_empty() && remaining_mte_ids.is_empty() {
            EvaluationStep::Summary
        } else if !has_comparison {
            EvaluationStep::PairwiseComparison
        } else {
            EvaluationStep::RateTasks
        };

        Self {
            step,
            rated_mte_ids,
            remaining_mte_ids,
        }
    }
}
