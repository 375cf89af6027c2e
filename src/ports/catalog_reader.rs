//! Catalog reader port (read side).
//!
//! Evaluators, projects, studies and task elements are managed elsewhere;
//! reporting only reads them.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::tlx::{Catalog, Evaluator, Mte, Project, Study};

/// Read-only access to catalog records
#[async_trait]
pub trait CatalogReader: Send + Sync {
    async fn evaluators(&self) -> Result<Vec<Evaluator>, RepositoryError>;

    async fn projects(&self) -> Result<Vec<Project>, RepositoryError>;

    async fn studies(&self) -> Result<Vec<Study>, RepositoryError>;

    async fn mtes(&self) -> Result<Vec<Mte>, RepositoryError>;

    /// Load every catalog record into an indexed `Catalog`.
    async fn catalog(&self) -> Result<Catalog, RepositoryError> {
        Ok(Catalog::new(
            self.evaluators().await?,
            self.projects().await?,
            self.studies().await?,
            self.mtes().await?,
        ))
    }
}
