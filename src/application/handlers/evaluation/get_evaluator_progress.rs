//! GetEvaluatorProgressHandler - Query handler for an evaluator's position
//! within a study.
//!
//! Returns the next step (pairwise comparison, task rating or summary), the
//! rated and remaining task elements, and the evaluator's scores so far.
//! Task elements a study lists but the catalog no longer holds are ignored.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::reporting::ReportError;
use crate::domain::analysis::{ComputedScore, ScoringEngine};
use crate::domain::foundation::{EvaluatorId, MteId, StudyId};
use crate::domain::tlx::{ComparisonBook, ComparisonKey, EvaluatorProgress};
use crate::ports::{CatalogReader, ComparisonRepository, RatingRepository};

/// Query for one evaluator in one study.
#[derive(Debug, Clone)]
pub struct GetEvaluatorProgressQuery {
    pub evaluator_id: EvaluatorId,
    pub study_id: StudyId,
}

/// Progress plus the evaluator's computed scores in the study.
#[derive(Debug, Clone)]
pub struct GetEvaluatorProgressResult {
    pub progress: EvaluatorProgress,
    /// Whether the stored comparison came from a completed elicitation.
    pub is_weighted: bool,
    /// Whether the evaluator has any rating in the study, including ratings
    /// of task elements since removed from the catalog.
    pub has_previous_ratings: bool,
    pub summary: Vec<ComputedScore>,
}

/// Handler for evaluator progress.
pub struct GetEvaluatorProgressHandler {
    ratings: Arc<dyn RatingRepository>,
    comparisons: Arc<dyn ComparisonRepository>,
    catalog: Arc<dyn CatalogReader>,
}

impl GetEvaluatorProgressHandler {
    pub fn new(
        ratings: Arc<dyn RatingRepository>,
        comparisons: Arc<dyn ComparisonRepository>,
        catalog: Arc<dyn CatalogReader>,
    ) -> Self {
        Self {
            ratings,
            comparisons,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        query: GetEvaluatorProgressQuery,
    ) -> Result<GetEvaluatorProgressResult, ReportError> {
        let catalog = self.catalog.catalog().await?;
        let study = catalog
            .study(&query.study_id)
            .ok_or_else(|| ReportError::StudyNotFound(query.study_id.clone()))?;

        let study_mte_ids: Vec<MteId> = catalog
            .mtes_in_study(study)
            .into_iter()
            .map(|m| m.id.clone())
            .collect();

        let key = ComparisonKey::new(query.evaluator_id.clone(), query.study_id.clone());
        let comparison = self.comparisons.find(&key).await?;
        let has_previous_ratings = self
            .ratings
            .has_rating_in_study(&query.evaluator_id, &query.study_id)
            .await?;

        let ratings: Vec<_> = self
            .ratings
            .list()
            .await?
            .into_iter()
            .filter(|r| r.evaluator_id == query.evaluator_id && r.study_id == query.study_id)
            .collect();

        let progress = EvaluatorProgress::assess(
            &query.evaluator_id,
            &query.study_id,
            &study_mte_ids,
            comparison.is_some(),
            &ratings,
        );

        let is_weighted = comparison.as_ref().map_or(false, |c| c.is_weighted);
        let book: ComparisonBook = comparison.into_iter().collect();
        let summary = ScoringEngine::score_all(&ratings, &catalog, &book);

        debug!(
            evaluator_id = %query.evaluator_id,
            study_id = %query.study_id,
            step = ?progress.step,
            remaining = progress.remaining_mte_ids.len(),
            "Evaluator progress assessed"
        );

        Ok(GetEvaluatorProgressResult {
            progress,
            is_weighted,
            has_previous_ratings,
            summary,
        })
    }
}
