//! SubmitPairwiseComparisonHandler - Command handler for storing an
//! evaluator's weights in a study.
//!
//! Both paths write through `ComparisonRepository::upsert`, so a later
//! submission for the same evaluator and study replaces the earlier one.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, EvaluatorId, StudyId};
use crate::domain::tlx::{ElicitedWeights, PairwiseComparison, WeightDistribution};
use crate::ports::{CatalogReader, ComparisonRepository};

/// Command to store the outcome of a pairwise elicitation.
#[derive(Debug, Clone)]
pub struct SubmitPairwiseComparisonCommand {
    pub evaluator_id: EvaluatorId,
    pub study_id: StudyId,
    pub outcome: ElicitedWeights,
}

/// Command to discard an evaluator's weights in a study.
#[derive(Debug, Clone)]
pub struct ResetWeightsCommand {
    pub evaluator_id: EvaluatorId,
    pub study_id: StudyId,
}

/// Result of a stored comparison.
#[derive(Debug, Clone)]
pub struct SubmitPairwiseComparisonResult {
    pub comparison: PairwiseComparison,
    /// The record this submission replaced, if any.
    pub replaced: Option<PairwiseComparison>,
}

/// Handler for submitting and resetting pairwise comparisons.
pub struct SubmitPairwiseComparisonHandler {
    comparisons: Arc<dyn ComparisonRepository>,
    catalog: Arc<dyn CatalogReader>,
}

impl SubmitPairwiseComparisonHandler {
    pub fn new(
        comparisons: Arc<dyn ComparisonRepository>,
        catalog: Arc<dyn CatalogReader>,
    ) -> Self {
        Self {
            comparisons,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitPairwiseComparisonCommand,
    ) -> Result<SubmitPairwiseComparisonResult, DomainError> {
        if cmd.outcome.is_weighted && !cmd.outcome.weights.is_pairwise_tally() {
            return Err(DomainError::new(
                ErrorCode::ElicitationIncomplete,
                "Weighted outcome must come from all 15 comparisons",
            )
            .with_detail("total_weight", cmd.outcome.weights.total().to_string()));
        }

        if !cmd.outcome.is_weighted && cmd.outcome.weights != WeightDistribution::equal() {
            return Err(DomainError::validation(
                "weights",
                "Unweighted outcome must carry the equal distribution",
            ));
        }

        self.ensure_study(&cmd.study_id).await?;

        let comparison =
            PairwiseComparison::from_elicited(cmd.evaluator_id, cmd.study_id, cmd.outcome);
        self.store(comparison).await
    }

    /// Replaces the stored weights with the equal distribution and marks
    /// them unweighted.
    pub async fn reset(
        &self,
        cmd: ResetWeightsCommand,
    ) -> Result<SubmitPairwiseComparisonResult, DomainError> {
        self.ensure_study(&cmd.study_id).await?;
        self.store(PairwiseComparison::unweighted(cmd.evaluator_id, cmd.study_id))
            .await
    }

    async fn ensure_study(&self, study_id: &StudyId) -> Result<(), DomainError> {
        let studies = self.catalog.studies().await?;
        if studies.iter().any(|s| &s.id == study_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::StudyNotFound,
                format!("Study not found: {}", study_id),
            ))
        }
    }

    async fn store(
        &self,
        comparison: PairwiseComparison,
    ) -> Result<SubmitPairwiseComparisonResult, DomainError> {
        let replaced = self.comparisons.upsert(comparison.clone()).await?;

        info!(
            evaluator_id = %comparison.evaluator_id,
            study_id = %comparison.study_id,
            is_weighted = comparison.is_weighted,
            replaced = replaced.is_some(),
            "Pairwise comparison stored"
        );

        Ok(SubmitPairwiseComparisonResult {
            comparison,
            replaced,
        })
    }
}
