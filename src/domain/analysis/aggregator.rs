//! Stats Aggregator - Per task element summaries of computed scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ComputedScore;
use crate::domain::foundation::MteId;
use crate::domain::tlx::{Catalog, DimensionValues, Mte};

/// Reporting statistics for one task element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedMteStats {
    pub mte_id: MteId,
    pub mte_name: String,
    pub mte_ref_number: String,
    pub number_of_evals: usize,
    pub avg_overall_score: f64,
    /// Population standard deviation (divisor n).
    pub std_dev_overall_score: f64,
    /// `None` when `number_of_evals == 0`: no dimension has a mean.
    pub avg_raw_scores: Option<DimensionValues<f64>>,
    pub study_names: Vec<String>,
}

impl AggregatedMteStats {
    /// Checks whether any rating contributed.
    pub fn has_evaluations(&self) -> bool {
        self.number_of_evals > 0
    }
}

/// Aggregation of computed scores by task element.
pub struct StatsAggregator;

impl StatsAggregator {
    /// Summarizes the scores of every task element in scope.
    ///
    /// Scores for task elements outside `mtes_in_scope` are ignored. Task
    /// elements without scores still get a zeroed record. Output is sorted
    /// by task element name ignoring case, then by exact name, then by id.
    pub fn aggregate(
        scores: &[ComputedScore],
        mtes_in_scope: &[&Mte],
        catalog: &Catalog,
    ) -> Vec<AggregatedMteStats> {
        let by_mte = Self::group_by_mte(scores);

        let mut stats: Vec<_> = mtes_in_scope
            .iter()
            .map(|mte| {
                let group = by_mte.get(&mte.id).map(Vec::as_slice).unwrap_or(&[]);
                Self::summarize(mte, group, catalog)
            })
            .collect();

        stats.sort_by_cached_key(|s| {
            (s.mte_name.to_lowercase(), s.mte_name.clone(), s.mte_id.clone())
        });
        stats
    }

    /// Partitions scores by task element, keeping input order within each group.
    pub fn group_by_mte(scores: &[ComputedScore]) -> HashMap<&MteId, Vec<&ComputedScore>> {
        let mut groups: HashMap<&MteId, Vec<&ComputedScore>> = HashMap::new();
        for score in scores {
            groups.entry(&score.mte_id).or_default().push(score);
        }
        groups
    }

    /// Builds the statistics for one task element.
    ///
    /// # Edge Cases
    /// - No scores: count, mean and deviation are 0, raw means are absent,
    ///   and study names come from the catalog rather than the scores
    pub fn summarize(mte: &Mte, scores: &[&ComputedScore], catalog: &Catalog) -> AggregatedMteStats {
        if scores.is_empty() {
            return AggregatedMteStats {
                mte_id: mte.id.clone(),
                mte_name: mte.name.clone(),
                mte_ref_number: mte.ref_number.clone(),
                number_of_evals: 0,
                avg_overall_score: 0.0,
                std_dev_overall_score: 0.0,
                avg_raw_scores: None,
                study_names: catalog.study_names_for(&mte.id),
            };
        }

        let overall: Vec<f64> = scores.iter().map(|s| s.total_weighted_score).collect();
        let avg_overall_score = Self::mean(&overall);
        let std_dev_overall_score = Self::population_std_dev(&overall);

        let n = scores.len() as f64;
        let avg_raw_scores = DimensionValues::from_fn(|dimension| {
            let sum: u32 = scores
                .iter()
                .map(|s| u32::from(s.raw_scores.score(dimension)))
                .sum();
            f64::from(sum) / n
        });

        let mut study_names: Vec<String> = Vec::new();
        for score in scores {
            if !study_names.contains(&score.study_name) {
                study_names.push(score.study_name.clone());
            }
        }

        AggregatedMteStats {
            mte_id: mte.id.clone(),
            mte_name: mte.name.clone(),
            mte_ref_number: mte.ref_number.clone(),
            number_of_evals: scores.len(),
            avg_overall_score,
            std_dev_overall_score,
            avg_raw_scores: Some(avg_raw_scores),
            study_names,
        }
    }

    /// Arithmetic mean; 0 for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation; 0 for an empty slice.
    pub fn population_std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }

    /// Rated task elements ordered by average score, highest first.
    pub fn rank_by_average(stats: &[AggregatedMteStats]) -> Vec<&AggregatedMteStats> {
        let mut ranked: Vec<_> = stats.iter().filter(|s| s.has_evaluations()).collect();
        ranked.sort_by(|a, b| b.avg_overall_score.total_cmp(&a.avg_overall_score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EvaluatorId, ProjectId, RatingId, StudyId, Timestamp};
    use crate::domain::tlx::{Dimension, RawScoreSet, Study, WeightDistribution};
    use proptest::prelude::*;

    fn mte(id: &str, name: &str) -> Mte {
        Mte {
            id: MteId::new(id).unwrap(),
            name: name.to_string(),
            description: String::new(),
            ref_number: format!("R-{}", id),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![],
            vec![],
            vec![
                Study {
                    id: StudyId::new("s1").unwrap(),
                    name: "Alpha".to_string(),
                    description: String::new(),
                    project_id: Some(ProjectId::new("p1").unwrap()),
                    mte_ids: vec![MteId::new("m1").unwrap(), MteId::new("m2").unwrap()],
                },
                Study {
                    id: StudyId::new("s2").unwrap(),
                    name: "Bravo".to_string(),
                    description: String::new(),
                    project_id: None,
                    mte_ids: vec![MteId::new("m2").unwrap()],
                },
            ],
            vec![mte("m1", "Landing"), mte("m2", "Approach")],
        )
    }

    fn score(mte_id: &str, study_name: &str, total: f64, raw: u8) -> ComputedScore {
        let raw_scores =
            RawScoreSet::try_from_values(DimensionValues::splat(raw)).unwrap();
        ComputedScore {
            rating_id: RatingId::generate(),
            evaluator_id: EvaluatorId::new("e1").unwrap(),
            evaluator_name: "Ada".to_string(),
            study_id: StudyId::new("s1").unwrap(),
            study_name: study_name.to_string(),
            project_id: None,
            mte_id: MteId::new(mte_id).unwrap(),
            mte_name: mte_id.to_string(),
            mte_ref_number: String::new(),
            raw_scores,
            weights: WeightDistribution::equal(),
            weighted_scores: DimensionValues::splat(u64::from(raw)),
            total_weight: 6,
            total_weighted_score: total,
            is_weighted: false,
            timestamp: Timestamp::now(),
            comments: None,
        }
    }

    #[test]
    fn two_scores_mean_and_population_deviation() {
        let catalog = catalog();
        let m1 = mte("m1", "Landing");
        let scores = vec![score("m1", "Alpha", 50.0, 40), score("m1", "Alpha", 100.0, 80)];

        let stats = StatsAggregator::aggregate(&scores, &[&m1], &catalog);
        assert_eq!(stats.len(), 1);

        let s = &stats[0];
        assert_eq!(s.number_of_evals, 2);
        assert!((s.avg_overall_score - 75.0).abs() < 1e-9);
        assert!((s.std_dev_overall_score - 25.0).abs() < 1e-9);

        let avg_raw = s.avg_raw_scores.unwrap();
        assert!((avg_raw[Dimension::Effort] - 60.0).abs() < 1e-9);
    }

    #[test]
    fn single_score_has_zero_deviation() {
        let catalog = catalog();
        let m1 = mte("m1", "Landing");
        let scores = vec![score("m1", "Alpha", 42.5, 10)];

        let stats = StatsAggregator::aggregate(&scores, &[&m1], &catalog);
        assert_eq!(stats[0].std_dev_overall_score, 0.0);
        assert!((stats[0].avg_overall_score - 42.5).abs() < 1e-9);
    }

    #[test]
    fn unrated_task_element_gets_zeroed_record() {
        let catalog = catalog();
        let m2 = mte("m2", "Approach");

        let stats = StatsAggregator::aggregate(&[], &[&m2], &catalog);
        let s = &stats[0];

        assert_eq!(s.number_of_evals, 0);
        assert_eq!(s.avg_overall_score, 0.0);
        assert_eq!(s.std_dev_overall_score, 0.0);
        assert!(s.avg_raw_scores.is_none());
        assert_eq!(s.study_names, vec!["Alpha".to_string(), "Bravo".to_string()]);
    }

    #[test]
    fn study_names_deduplicated_in_first_seen_order() {
        let catalog = catalog();
        let m2 = mte("m2", "Approach");
        let scores = vec![
            score("m2", "Bravo", 10.0, 10),
            score("m2", "Alpha", 20.0, 20),
            score("m2", "Bravo", 30.0, 30),
        ];

        let stats = StatsAggregator::aggregate(&scores, &[&m2], &catalog);
        assert_eq!(stats[0].study_names, vec!["Bravo".to_string(), "Alpha".to_string()]);
    }

    #[test]
    fn scores_outside_scope_are_ignored() {
        let catalog = catalog();
        let m1 = mte("m1", "Landing");
        let scores = vec![score("m1", "Alpha", 50.0, 50), score("m2", "Alpha", 90.0, 90)];

        let stats = StatsAggregator::aggregate(&scores, &[&m1], &catalog);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].mte_id.as_str(), "m1");
    }

    #[test]
    fn output_is_sorted_by_name() {
        let catalog = catalog();
        let m1 = mte("m1", "Landing");
        let m2 = mte("m2", "Approach");

        let stats = StatsAggregator::aggregate(&[], &[&m1, &m2], &catalog);
        let names: Vec<_> = stats.iter().map(|s| s.mte_name.as_str()).collect();
        assert_eq!(names, vec!["Approach", "Landing"]);
    }

    #[test]
    fn name_order_ignores_case() {
        let catalog = catalog();
        let m1 = mte("m1", "Zulu");
        let m2 = mte("m2", "approach");
        let m3 = mte("m3", "Bravo");

        let stats = StatsAggregator::aggregate(&[], &[&m1, &m2, &m3], &catalog);
        let names: Vec<_> = stats.iter().map(|s| s.mte_name.as_str()).collect();
        assert_eq!(names, vec!["approach", "Bravo", "Zulu"]);
    }

    #[test]
    fn ranking_skips_unrated_and_orders_descending() {
        let catalog = catalog();
        let m1 = mte("m1", "Landing");
        let m2 = mte("m2", "Approach");
        let m3 = Mte {
            id: MteId::new("m3").unwrap(),
            name: "Taxi".to_string(),
            description: String::new(),
            ref_number: String::new(),
        };
        let scores = vec![score("m1", "Alpha", 30.0, 30), score("m2", "Alpha", 80.0, 80)];

        let stats = StatsAggregator::aggregate(&scores, &[&m1, &m2, &m3], &catalog);
        let ranked: Vec<_> = StatsAggregator::rank_by_average(&stats)
            .iter()
            .map(|s| s.mte_id.as_str())
            .collect();
        assert_eq!(ranked, vec!["m2", "m1"]);
    }

    proptest! {
        #[test]
        fn aggregate_matches_direct_statistics(totals in prop::collection::vec(0.0f64..=100.0, 1..40)) {
            let catalog = catalog();
            let m1 = mte("m1", "Landing");
            let scores: Vec<_> = totals.iter().map(|t| score("m1", "Alpha", *t, 50)).collect();

            let stats = StatsAggregator::aggregate(&scores, &[&m1], &catalog);
            let s = &stats[0];

            let n = totals.len() as f64;
            let mean = totals.iter().sum::<f64>() / n;
            let var = totals.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;

            prop_assert_eq!(s.number_of_evals, totals.len());
            prop_assert!((s.avg_overall_score - mean).abs() < 1e-9);
            prop_assert!((s.std_dev_overall_score - var.sqrt()).abs() < 1e-9);
        }
    }
}
