//! Report configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::ReportScope;
use crate::domain::foundation::{ProjectId, StudyId};

/// Default scope of the report binary
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Restrict the report to one project
    pub project_id: Option<String>,

    /// Restrict the report to one study
    pub study_id: Option<String>,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scope().map(|_| ())
    }

    /// Builds the report scope from the configured ids
    pub fn scope(&self) -> Result<ReportScope, ValidationError> {
        let project_id = self
            .project_id
            .as_deref()
            .map(ProjectId::new)
            .transpose()
            .map_err(|_| ValidationError::BlankScopeId { field: "project_id" })?;
        let study_id = self
            .study_id
            .as_deref()
            .map(StudyId::new)
            .transpose()
            .map_err(|_| ValidationError::BlankScopeId { field: "study_id" })?;

        Ok(ReportScope {
            project_id,
            study_id,
        })
    }
}
