//! Errors returned by the reporting and progress queries.

use crate::domain::foundation::StudyId;
use crate::ports::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Study not found: {0}")]
    StudyNotFound(StudyId),

    #[error("Storage error: {0}")]
    Repository(#[from] RepositoryError),
}
