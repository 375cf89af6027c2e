//! Computed scores - per-rating weighted results enriched for display and export.

use serde::{Deserialize, Serialize};

use super::ScoreCalculator;
use crate::domain::foundation::{EvaluatorId, MteId, ProjectId, RatingId, StudyId, Timestamp};
use crate::domain::tlx::{
    Catalog, ComparisonBook, DimensionValues, Rating, RawScoreSet, WeightDistribution,
};

/// Display name used when a referenced record no longer exists.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A rating combined with the weights of its evaluator and study.
///
/// Derived on demand; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedScore {
    pub rating_id: RatingId,
    pub evaluator_id: EvaluatorId,
    pub evaluator_name: String,
    pub study_id: StudyId,
    pub study_name: String,
    pub project_id: Option<ProjectId>,
    pub mte_id: MteId,
    /// `[ref] name` when the task element has a reference number.
    pub mte_name: String,
    pub mte_ref_number: String,
    pub raw_scores: RawScoreSet,
    pub weights: WeightDistribution,
    pub weighted_scores: DimensionValues<u64>,
    pub total_weight: u64,
    pub total_weighted_score: f64,
    pub is_weighted: bool,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Turns stored ratings into computed scores.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores one rating.
    ///
    /// Uses the comparison stored for the rating's evaluator and study. When
    /// none exists, the equal distribution applies and the score is marked
    /// unweighted. An existing comparison's `is_weighted` flag is carried
    /// as-is, whatever its weight values look like.
    pub fn score_rating(
        rating: &Rating,
        catalog: &Catalog,
        comparisons: &ComparisonBook,
    ) -> ComputedScore {
        let comparison = comparisons.get(&rating.evaluator_id, &rating.study_id);
        let (weights, is_weighted) = match comparison {
            Some(c) => (c.weights, c.is_weighted),
            None => (WeightDistribution::equal(), false),
        };

        let result = ScoreCalculator::compute(&rating.scores, &weights);

        let evaluator_name = catalog
            .evaluator(&rating.evaluator_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let study = catalog.study(&rating.study_id);
        let mte = catalog.mte(&rating.mte_id);

        ComputedScore {
            rating_id: rating.id.clone(),
            evaluator_id: rating.evaluator_id.clone(),
            evaluator_name,
            study_id: rating.study_id.clone(),
            study_name: study
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            project_id: study.and_then(|s| s.project_id.clone()),
            mte_id: rating.mte_id.clone(),
            mte_name: mte
                .map(|m| m.display_name())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            mte_ref_number: mte.map(|m| m.ref_number.clone()).unwrap_or_default(),
            raw_scores: rating.scores,
            weights,
            weighted_scores: result.weighted_scores,
            total_weight: result.total_weight,
            total_weighted_score: result.total_weighted_score,
            is_weighted,
            timestamp: rating.timestamp,
            comments: rating.comments.clone(),
        }
    }

    /// Scores every rating, preserving input order.
    pub fn score_all<'a>(
        ratings: impl IntoIterator<Item = &'a Rating>,
        catalog: &Catalog,
        comparisons: &ComparisonBook,
    ) -> Vec<ComputedScore> {
        ratings
            .into_iter()
            .map(|r| Self::score_rating(r, catalog, comparisons))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tlx::{
        Dimension, ElicitedWeights, Evaluator, Mte, PairwiseComparison, Study,
    };

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Evaluator {
                id: EvaluatorId::new("eval1").unwrap(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }],
            vec![],
            vec![Study {
                id: StudyId::new("study1").unwrap(),
                name: "Night Ops".to_string(),
                description: String::new(),
                project_id: Some(ProjectId::new("proj1").unwrap()),
                mte_ids: vec![MteId::new("mte1").unwrap()],
            }],
            vec![Mte {
                id: MteId::new("mte1").unwrap(),
                name: "Hover".to_string(),
                description: String::new(),
                ref_number: "H-1".to_string(),
            }],
        )
    }

    fn rating(evaluator: &str, study: &str, mte: &str) -> Rating {
        let values = [75u8, 30, 80, 20, 65, 40];
        Rating {
            id: RatingId::new("r1").unwrap(),
            evaluator_id: EvaluatorId::new(evaluator).unwrap(),
            study_id: StudyId::new(study).unwrap(),
            mte_id: MteId::new(mte).unwrap(),
            scores: RawScoreSet::try_from_values(DimensionValues::from_fn(|d| values[d.index()]))
                .unwrap(),
            timestamp: Timestamp::now(),
            comments: Some("windy".to_string()),
        }
    }

    fn elicited(is_weighted: bool) -> ComparisonBook {
        let weights = DimensionValues::from_fn(|d| [5u32, 1, 3, 2, 4, 0][d.index()]);
        std::iter::once(PairwiseComparison::from_elicited(
            EvaluatorId::new("eval1").unwrap(),
            StudyId::new("study1").unwrap(),
            ElicitedWeights {
                weights: WeightDistribution::from_values(weights),
                is_weighted,
            },
        ))
        .collect()
    }

    #[test]
    fn uses_stored_comparison_weights() {
        let score = ScoringEngine::score_rating(
            &rating("eval1", "study1", "mte1"),
            &catalog(),
            &elicited(true),
        );

        assert!(score.is_weighted);
        assert_eq!(score.total_weight, 15);
        assert!((score.total_weighted_score - 63.0).abs() < 1e-9);
        assert_eq!(score.weighted_scores[Dimension::Effort], 260);
    }

    #[test]
    fn missing_comparison_falls_back_to_equal_weights() {
        let score = ScoringEngine::score_rating(
            &rating("eval1", "study1", "mte1"),
            &catalog(),
            &ComparisonBook::new(),
        );

        assert!(!score.is_weighted);
        assert_eq!(score.weights, WeightDistribution::equal());
        assert!((score.total_weighted_score - 310.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn is_weighted_flag_is_taken_from_the_record() {
        let score = ScoringEngine::score_rating(
            &rating("eval1", "study1", "mte1"),
            &catalog(),
            &elicited(false),
        );

        assert!(!score.is_weighted);
        assert_eq!(score.total_weight, 15);
    }

    #[test]
    fn carries_display_fields() {
        let score = ScoringEngine::score_rating(
            &rating("eval1", "study1", "mte1"),
            &catalog(),
            &ComparisonBook::new(),
        );

        assert_eq!(score.evaluator_name, "Ada");
        assert_eq!(score.study_name, "Night Ops");
        assert_eq!(score.mte_name, "[H-1] Hover");
        assert_eq!(score.mte_ref_number, "H-1");
        assert_eq!(score.project_id, Some(ProjectId::new("proj1").unwrap()));
        assert_eq!(score.comments.as_deref(), Some("windy"));
    }

    #[test]
    fn unknown_references_get_placeholder_names() {
        let score = ScoringEngine::score_rating(
            &rating("ghost", "nowhere", "missing"),
            &catalog(),
            &ComparisonBook::new(),
        );

        assert_eq!(score.evaluator_name, UNKNOWN_NAME);
        assert_eq!(score.study_name, UNKNOWN_NAME);
        assert_eq!(score.mte_name, UNKNOWN_NAME);
        assert_eq!(score.mte_ref_number, "");
        assert!(score.project_id.is_none());
    }

    #[test]
    fn score_all_keeps_input_order() {
        let mut second = rating("eval1", "study1", "mte1");
        second.id = RatingId::new("r2").unwrap();
        let ratings = vec![rating("eval1", "study1", "mte1"), second];

        let scores = ScoringEngine::score_all(&ratings, &catalog(), &ComparisonBook::new());
        let ids: Vec<_> = scores.iter().map(|s| s.rating_id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }
}
