//! Pairwise comparison repository port.
//!
//! # Design
//!
//! - **Keyed by (evaluator, study)**: at most one comparison per key
//! - **Last write wins**: `upsert` replaces any earlier record for the key

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::tlx::{ComparisonKey, PairwiseComparison};

/// Port for the stored weights of each evaluator in each study
#[async_trait]
pub trait ComparisonRepository: Send + Sync {
    /// Insert or replace the comparison for its (evaluator, study) key.
    ///
    /// Returns the record that was replaced, if any.
    async fn upsert(
        &self,
        comparison: PairwiseComparison,
    ) -> Result<Option<PairwiseComparison>, RepositoryError>;

    /// Find the comparison for a key.
    ///
    /// Returns `None` if the evaluator has not weighted the study yet.
    async fn find(&self, key: &ComparisonKey) -> Result<Option<PairwiseComparison>, RepositoryError>;

    /// List all comparisons, in no particular order.
    async fn list(&self) -> Result<Vec<PairwiseComparison>, RepositoryError>;
}
