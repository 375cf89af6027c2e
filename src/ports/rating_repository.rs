//! Rating repository port.
//!
//! Ratings are append-only: created once when an evaluator submits a task
//! rating and never updated through this port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::foundation::{EvaluatorId, StudyId};
use crate::domain::tlx::Rating;

/// Port for storing and listing ratings
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Save a new rating.
    ///
    /// # Errors
    ///
    /// - `DuplicateRating` if a rating with the same id exists
    /// - `IoError` / `SerializationFailed` on persistence failure
    async fn save(&self, rating: &Rating) -> Result<(), RepositoryError>;

    /// List all ratings in submission order.
    async fn list(&self) -> Result<Vec<Rating>, RepositoryError>;

    /// Check whether the evaluator has rated anything in the study.
    async fn has_rating_in_study(
        &self,
        evaluator_id: &EvaluatorId,
        study_id: &StudyId,
    ) -> Result<bool, RepositoryError>;
}
