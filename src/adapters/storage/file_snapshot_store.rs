//! File-based Snapshot Store Adapter
//!
//! Keeps every TLX record in a single YAML snapshot file. Reads are served
//! from memory; each write rewrites the whole file. The cached records only
//! change once the new file has been written, so a failed write leaves
//! both the file and the cache as they were.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{InMemoryTlxStore, TlxSnapshot};
use crate::domain::foundation::{EvaluatorId, StudyId};
use crate::domain::tlx::{ComparisonKey, Evaluator, Mte, PairwiseComparison, Project, Rating, Study};
use crate::ports::{CatalogReader, ComparisonRepository, RatingRepository, RepositoryError};

/// YAML file storage for ratings, comparisons and catalog records
#[derive(Debug)]
pub struct FileSnapshotStore {
    path: PathBuf,
    records: InMemoryTlxStore,
    write_lock: Mutex<()>,
}

impl FileSnapshotStore {
    /// Open the snapshot at `path`
    ///
    /// A missing file is treated as an empty snapshot; it is created on the
    /// first write.
    ///
    /// # Errors
    /// Returns `RepositoryError` if the file exists but cannot be read or parsed
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = Self::read_snapshot(&path).await?;

        info!(
            path = %path.display(),
            ratings = snapshot.ratings.len(),
            comparisons = snapshot.comparisons.len(),
            "Snapshot loaded"
        );

        Ok(Self {
            path,
            records: InMemoryTlxStore::from_snapshot(snapshot),
            write_lock: Mutex::new(()),
        })
    }

    /// Read and parse a snapshot file without opening a store
    pub async fn read_snapshot(path: &Path) -> Result<TlxSnapshot, RepositoryError> {
        if !fs::try_exists(path).await? {
            return Ok(TlxSnapshot::default());
        }

        let yaml = fs::read_to_string(path).await?;
        serde_yaml::from_str(&yaml)
            .map_err(|e| RepositoryError::DeserializationFailed(e.to_string()))
    }

    /// Write a snapshot file, creating parent directories as needed
    pub async fn write_snapshot(path: &Path, snapshot: &TlxSnapshot) -> Result<(), RepositoryError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let yaml = serde_yaml::to_string(snapshot)
            .map_err(|e| RepositoryError::SerializationFailed(e.to_string()))?;
        fs::write(path, yaml).await?;
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, candidate: &TlxSnapshot) -> Result<(), RepositoryError> {
        Self::write_snapshot(&self.path, candidate).await?;
        debug!(path = %self.path.display(), "Snapshot written");
        Ok(())
    }
}

#[async_trait]
impl RatingRepository for FileSnapshotStore {
    async fn save(&self, rating: &Rating) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut candidate = self.records.snapshot().await;
        if candidate.ratings.iter().any(|r| r.id == rating.id) {
            return Err(RepositoryError::DuplicateRating(rating.id.to_string()));
        }
        candidate.ratings.push(rating.clone());

        self.persist(&candidate).await?;
        self.records.save(rating).await
    }

    async fn list(&self) -> Result<Vec<Rating>, RepositoryError> {
        RatingRepository::list(&self.records).await
    }

    async fn has_rating_in_study(
        &self,
        evaluator_id: &EvaluatorId,
        study_id: &StudyId,
    ) -> Result<bool, RepositoryError> {
        self.records.has_rating_in_study(evaluator_id, study_id).await
    }
}

#[async_trait]
impl ComparisonRepository for FileSnapshotStore {
    async fn upsert(
        &self,
        comparison: PairwiseComparison,
    ) -> Result<Option<PairwiseComparison>, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut candidate = self.records.snapshot().await;
        candidate.upsert_comparison(comparison.clone());

        self.persist(&candidate).await?;
        self.records.upsert(comparison).await
    }

    async fn find(&self, key: &ComparisonKey) -> Result<Option<PairwiseComparison>, RepositoryError> {
        self.records.find(key).await
    }

    async fn list(&self) -> Result<Vec<PairwiseComparison>, RepositoryError> {
        ComparisonRepository::list(&self.records).await
    }
}

#[async_trait]
impl CatalogReader for FileSnapshotStore {
    async fn evaluators(&self) -> Result<Vec<Evaluator>, RepositoryError> {
        self.records.evaluators().await
    }

    async fn projects(&self) -> Result<Vec<Project>, RepositoryError> {
        self.records.projects().await
    }

    async fn studies(&self) -> Result<Vec<Study>, RepositoryError> {
        self.records.studies().await
    }

    async fn mtes(&self) -> Result<Vec<Mte>, RepositoryError> {
        self.records.mtes().await
    }
}
