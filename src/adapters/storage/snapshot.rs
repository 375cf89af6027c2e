//! Serialized form of every TLX record, as stored on disk.

use serde::{Deserialize, Serialize};

use crate::domain::tlx::{
    Catalog, ComparisonBook, Evaluator, Mte, PairwiseComparison, Project, Rating, Study,
};

/// All ratings, comparisons and catalog records at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TlxSnapshot {
    pub evaluators: Vec<Evaluator>,
    pub projects: Vec<Project>,
    pub studies: Vec<Study>,
    pub mtes: Vec<Mte>,
    pub ratings: Vec<Rating>,
    pub comparisons: Vec<PairwiseComparison>,
}

impl TlxSnapshot {
    /// Indexed catalog built from the snapshot's catalog records.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(
            self.evaluators.clone(),
            self.projects.clone(),
            self.studies.clone(),
            self.mtes.clone(),
        )
    }

    /// Comparisons keyed by evaluator and study; later entries win.
    pub fn comparison_book(&self) -> ComparisonBook {
        self.comparisons.iter().cloned().collect()
    }

    /// Inserts a comparison, dropping any earlier one with the same key.
    pub fn upsert_comparison(&mut self, comparison: PairwiseComparison) {
        let key = comparison.key();
        self.comparisons.retain(|c| c.key() != key);
        self.comparisons.push(comparison);
        self.sort_comparisons();
    }

    /// Orders comparisons by evaluator then study.
    pub(crate) fn sort_comparisons(&mut self) {
        self.comparisons.sort_by(|a, b| {
            a.evaluator_id
                .cmp(&b.evaluator_id)
                .then_with(|| a.study_id.cmp(&b.study_id))
        });
    }
}
