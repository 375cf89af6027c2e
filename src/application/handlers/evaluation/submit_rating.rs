//! SubmitRatingHandler - Command handler for recording a task rating.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{
    DomainError, ErrorCode, EvaluatorId, MteId, RatingId, StudyId, Timestamp,
};
use crate::domain::tlx::{DimensionValues, Rating, RawScoreSet};
use crate::ports::{CatalogReader, RatingRepository};

/// Command to record one evaluator's raw ratings for one task element.
#[derive(Debug, Clone)]
pub struct SubmitRatingCommand {
    pub evaluator_id: EvaluatorId,
    pub study_id: StudyId,
    pub mte_id: MteId,
    /// Slider values, 0-100 per dimension.
    pub scores: DimensionValues<u8>,
    pub comments: Option<String>,
}

/// Result of a stored rating.
#[derive(Debug, Clone)]
pub struct SubmitRatingResult {
    pub rating: Rating,
}

/// Handler for submitting ratings.
pub struct SubmitRatingHandler {
    ratings: Arc<dyn RatingRepository>,
    catalog: Arc<dyn CatalogReader>,
}

impl SubmitRatingHandler {
    pub fn new(ratings: Arc<dyn RatingRepository>, catalog: Arc<dyn CatalogReader>) -> Self {
        Self { ratings, catalog }
    }

    pub async fn handle(&self, cmd: SubmitRatingCommand) -> Result<SubmitRatingResult, DomainError> {
        // 1. Validate raw scores
        let scores = RawScoreSet::try_from_values(cmd.scores)?;

        // 2. Check references against the catalog
        let catalog = self.catalog.catalog().await?;
        if catalog.evaluator(&cmd.evaluator_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::EvaluatorNotFound,
                format!("Evaluator not found: {}", cmd.evaluator_id),
            ));
        }
        let study = catalog.study(&cmd.study_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::StudyNotFound,
                format!("Study not found: {}", cmd.study_id),
            )
        })?;
        if !study.contains_mte(&cmd.mte_id) {
            return Err(DomainError::new(
                ErrorCode::MteNotInStudy,
                format!("Task element {} is not part of study {}", cmd.mte_id, cmd.study_id),
            )
            .with_detail("mte_id", cmd.mte_id.as_str())
            .with_detail("study_id", cmd.study_id.as_str()));
        }

        // 3. Build and persist the rating
        let rating = Rating {
            id: RatingId::generate(),
            evaluator_id: cmd.evaluator_id,
            study_id: cmd.study_id,
            mte_id: cmd.mte_id,
            scores,
            timestamp: Timestamp::now(),
            comments: normalize_comments(cmd.comments),
        };

        debug!(
            rating_id = %rating.id,
            evaluator_id = %rating.evaluator_id,
            study_id = %rating.study_id,
            "Saving rating"
        );
        self.ratings.save(&rating).await?;
        info!(rating_id = %rating.id, mte_id = %rating.mte_id, "Rating submitted");

        Ok(SubmitRatingResult { rating })
    }
}

/// Trims comments; blank comments are dropped.
fn normalize_comments(comments: Option<String>) -> Option<String> {
    comments
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}
