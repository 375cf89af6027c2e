//! Report Builder - Scoped scores, statistics, ranking and distribution.

use serde::{Deserialize, Serialize};

use super::{
    AggregatedMteStats, ComputedScore, ReportScope, ScoreDistribution, ScoringEngine,
    StatsAggregator,
};
use crate::domain::foundation::MteId;
use crate::domain::tlx::{Catalog, ComparisonBook, Rating};

/// Everything the task element dashboard shows for one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskElementReport {
    pub scope: ReportScope,
    /// One record per task element in scope, sorted by name.
    pub stats: Vec<AggregatedMteStats>,
    /// Rated task elements, highest average first.
    pub ranking: Vec<MteId>,
    /// Histogram of every in-scope overall score.
    pub distribution: ScoreDistribution,
}

impl TaskElementReport {
    /// Statistics of one task element, if it is in scope.
    pub fn stats_for(&self, mte_id: &MteId) -> Option<&AggregatedMteStats> {
        self.stats.iter().find(|s| &s.mte_id == mte_id)
    }

    /// Total number of ratings behind the report.
    pub fn total_evaluations(&self) -> usize {
        self.stats.iter().map(|s| s.number_of_evals).sum()
    }
}

/// Runs the scoring pipeline over one consistent snapshot.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Computed scores for every rating in scope, in input order.
    pub fn scores(
        scope: &ReportScope,
        ratings: &[Rating],
        comparisons: &ComparisonBook,
        catalog: &Catalog,
    ) -> Vec<ComputedScore> {
        ScoringEngine::score_all(scope.ratings(ratings, catalog), catalog, comparisons)
    }

    /// Builds the task element report for a scope.
    ///
    /// # Algorithm
    /// 1. Score every in-scope rating
    /// 2. Aggregate by task element over the task elements in scope
    /// 3. Rank rated task elements by average
    /// 4. Bin the overall scores
    pub fn build(
        scope: &ReportScope,
        ratings: &[Rating],
        comparisons: &ComparisonBook,
        catalog: &Catalog,
    ) -> TaskElementReport {
        let scores = Self::scores(scope, ratings, comparisons, catalog);
        Self::from_scores(scope, &scores, catalog)
    }

    /// Builds the report from scores that are already scoped.
    pub fn from_scores(
        scope: &ReportScope,
        scores: &[ComputedScore],
        catalog: &Catalog,
    ) -> TaskElementReport {
        let mtes = scope.mtes(catalog);
        let stats = StatsAggregator::aggregate(scores, &mtes, catalog);

        let ranking = StatsAggregator::rank_by_average(&stats)
            .into_iter()
            .map(|s| s.mte_id.clone())
            .collect();

        let distribution =
            ScoreDistribution::from_scores(scores.iter().map(|s| s.total_weighted_score));

        TaskElementReport {
            scope: scope.clone(),
            stats,
            ranking,
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EvaluatorId, ProjectId, RatingId, StudyId, Timestamp};
    use crate::domain::tlx::{
        DimensionValues, ElicitedWeights, Evaluator, Mte, PairwiseComparison, RawScoreSet, Study,
        WeightDistribution,
    };

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Evaluator {
                id: EvaluatorId::new("e1").unwrap(),
                name: "Ada".to_string(),
                email: String::new(),
            }],
            vec![],
            vec![
                Study {
                    id: StudyId::new("s1").unwrap(),
                    name: "Day".to_string(),
                    description: String::new(),
                    project_id: Some(ProjectId::new("p1").unwrap()),
                    mte_ids: vec![MteId::new("m1").unwrap(), MteId::new("m2").unwrap()],
                },
                Study {
                    id: StudyId::new("s2").unwrap(),
                    name: "Night".to_string(),
                    description: String::new(),
                    project_id: Some(ProjectId::new("p2").unwrap()),
                    mte_ids: vec![MteId::new("m3").unwrap()],
                },
            ],
            vec![
                Mte {
                    id: MteId::new("m1").unwrap(),
                    name: "Hover".to_string(),
                    description: String::new(),
                    ref_number: String::new(),
                },
                Mte {
                    id: MteId::new("m2").unwrap(),
                    name: "Approach".to_string(),
                    description: String::new(),
                    ref_number: String::new(),
                },
                Mte {
                    id: MteId::new("m3").unwrap(),
                    name: "Landing".to_string(),
                    description: String::new(),
                    ref_number: String::new(),
                },
            ],
        )
    }

    fn rating(study: &str, mte: &str, raw: u8) -> Rating {
        Rating {
            id: RatingId::generate(),
            evaluator_id: EvaluatorId::new("e1").unwrap(),
            study_id: StudyId::new(study).unwrap(),
            mte_id: MteId::new(mte).unwrap(),
            scores: RawScoreSet::try_from_values(DimensionValues::splat(raw)).unwrap(),
            timestamp: Timestamp::now(),
            comments: None,
        }
    }

    #[test]
    fn project_report_covers_project_task_elements_only() {
        let ratings = vec![rating("s1", "m1", 40), rating("s1", "m1", 60), rating("s2", "m3", 90)];
        let scope = ReportScope::project(ProjectId::new("p1").unwrap());

        let report = ReportBuilder::build(&scope, &ratings, &ComparisonBook::new(), &catalog());

        let names: Vec<_> = report.stats.iter().map(|s| s.mte_name.as_str()).collect();
        assert_eq!(names, vec!["Approach", "Hover"]);
        assert_eq!(report.total_evaluations(), 2);
        assert_eq!(report.ranking, vec![MteId::new("m1").unwrap()]);
        assert_eq!(report.distribution.bins[4], 1);
        assert_eq!(report.distribution.bins[6], 1);
        assert_eq!(report.distribution.total(), 2);

        let hover = report.stats_for(&MteId::new("m1").unwrap()).unwrap();
        assert!((hover.avg_overall_score - 50.0).abs() < 1e-9);
        assert!((hover.std_dev_overall_score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn unscoped_report_ranks_across_studies() {
        let ratings = vec![rating("s1", "m1", 40), rating("s2", "m3", 90)];
        let report =
            ReportBuilder::build(&ReportScope::all(), &ratings, &ComparisonBook::new(), &catalog());

        assert_eq!(report.stats.len(), 3);
        assert_eq!(
            report.ranking,
            vec![MteId::new("m3").unwrap(), MteId::new("m1").unwrap()]
        );
    }

    #[test]
    fn stored_comparison_changes_the_score() {
        let mut values = DimensionValues::splat(0u8);
        values.mental_demand = 100;
        let rated = Rating {
            scores: RawScoreSet::try_from_values(values).unwrap(),
            ..rating("s1", "m1", 0)
        };

        let weights = WeightDistribution::from_values(DimensionValues::from_fn(|d| {
            [5u32, 4, 3, 2, 1, 0][d.index()]
        }));
        let comparisons: ComparisonBook = std::iter::once(PairwiseComparison::from_elicited(
            EvaluatorId::new("e1").unwrap(),
            StudyId::new("s1").unwrap(),
            ElicitedWeights {
                weights,
                is_weighted: true,
            },
        ))
        .collect();

        let scores = ReportBuilder::scores(
            &ReportScope::all(),
            std::slice::from_ref(&rated),
            &comparisons,
            &catalog(),
        );
        assert_eq!(scores.len(), 1);
        assert!(scores[0].is_weighted);
        assert!((scores[0].total_weighted_score - 500.0 / 15.0).abs() < 1e-9);
    }
}
