//! In-Memory TLX Store Adapter
//!
//! Holds ratings and comparisons in memory behind async locks. Catalog
//! records are seeded through builder methods and read-only afterwards.
//! Useful for testing and as the working set of the file store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::TlxSnapshot;
use crate::domain::foundation::{EvaluatorId, StudyId};
use crate::domain::tlx::{ComparisonKey, Evaluator, Mte, PairwiseComparison, Project, Rating, Study};
use crate::ports::{CatalogReader, ComparisonRepository, RatingRepository, RepositoryError};

/// In-memory storage for ratings, comparisons and catalog records
#[derive(Debug, Clone, Default)]
pub struct InMemoryTlxStore {
    ratings: Arc<RwLock<Vec<Rating>>>,
    comparisons: Arc<RwLock<HashMap<ComparisonKey, PairwiseComparison>>>,
    evaluators: Vec<Evaluator>,
    projects: Vec<Project>,
    studies: Vec<Study>,
    mtes: Vec<Mte>,
}

impl InMemoryTlxStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding everything in a snapshot
    pub fn from_snapshot(snapshot: TlxSnapshot) -> Self {
        let comparisons = snapshot
            .comparisons
            .into_iter()
            .map(|c| (c.key(), c))
            .collect();

        Self {
            ratings: Arc::new(RwLock::new(snapshot.ratings)),
            comparisons: Arc::new(RwLock::new(comparisons)),
            evaluators: snapshot.evaluators,
            projects: snapshot.projects,
            studies: snapshot.studies,
            mtes: snapshot.mtes,
        }
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluators.push(evaluator);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    pub fn with_study(mut self, study: Study) -> Self {
        self.studies.push(study);
        self
    }

    pub fn with_mte(mut self, mte: Mte) -> Self {
        self.mtes.push(mte);
        self
    }

    /// Copy of every record currently held
    ///
    /// Comparisons are ordered by evaluator then study so snapshots are stable.
    pub async fn snapshot(&self) -> TlxSnapshot {
        let ratings = self.ratings.read().await.clone();
        let comparisons = self.comparisons.read().await.values().cloned().collect();

        let mut snapshot = TlxSnapshot {
            evaluators: self.evaluators.clone(),
            projects: self.projects.clone(),
            studies: self.studies.clone(),
            mtes: self.mtes.clone(),
            ratings,
            comparisons,
        };
        snapshot.sort_comparisons();
        snapshot
    }

    /// Get the number of stored ratings
    pub async fn rating_count(&self) -> usize {
        self.ratings.read().await.len()
    }

    /// Get the number of stored comparisons
    pub async fn comparison_count(&self) -> usize {
        self.comparisons.read().await.len()
    }
}

#[async_trait]
impl RatingRepository for InMemoryTlxStore {
    async fn save(&self, rating: &Rating) -> Result<(), RepositoryError> {
        let mut ratings = self.ratings.write().await;
        if ratings.iter().any(|r| r.id == rating.id) {
            return Err(RepositoryError::DuplicateRating(rating.id.to_string()));
        }
        ratings.push(rating.clone());
        debug!(rating_id = %rating.id, mte_id = %rating.mte_id, "Rating stored");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Rating>, RepositoryError> {
        Ok(self.ratings.read().await.clone())
    }

    async fn has_rating_in_study(
        &self,
        evaluator_id: &EvaluatorId,
        study_id: &StudyId,
    ) -> Result<bool, RepositoryError> {
        let ratings = self.ratings.read().await;
        Ok(ratings
            .iter()
            .any(|r| &r.evaluator_id == evaluator_id && &r.study_id == study_id))
    }
}

#[async_trait]
impl ComparisonRepository for InMemoryTlxStore {
    async fn upsert(
        &self,
        comparison: PairwiseComparison,
    ) -> Result<Option<PairwiseComparison>, RepositoryError> {
        let key = comparison.key();
        debug!(
            evaluator_id = %key.evaluator_id,
            study_id = %key.study_id,
            is_weighted = comparison.is_weighted,
            "Comparison stored"
        );
        let mut comparisons = self.comparisons.write().await;
        Ok(comparisons.insert(key, comparison))
    }

    async fn find(&self, key: &ComparisonKey) -> Result<Option<PairwiseComparison>, RepositoryError> {
        Ok(self.comparisons.read().await.get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<PairwiseComparison>, RepositoryError> {
        Ok(self.comparisons.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl CatalogReader for InMemoryTlxStore {
    async fn evaluators(&self) -> Result<Vec<Evaluator>, RepositoryError> {
        Ok(self.evaluators.clone())
    }

    async fn projects(&self) -> Result<Vec<Project>, RepositoryError> {
        Ok(self.projects.clone())
    }

    async fn studies(&self) -> Result<Vec<Study>, RepositoryError> {
        Ok(self.studies.clone())
    }

    async fn mtes(&self) -> Result<Vec<Mte>, RepositoryError> {
        Ok(self.mtes.clone())
    }
}
