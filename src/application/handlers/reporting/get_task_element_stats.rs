//! GetTaskElementStatsHandler - Query handler for the task element dashboard.
//!
//! Returns per task element statistics, the ranking by average score, and
//! the distribution of overall scores for one scope.

use std::sync::Arc;

use tracing::{debug, info};

use super::{ReportError, ReportSources};
use crate::domain::analysis::{ReportBuilder, ReportScope, TaskElementReport};
use crate::ports::{CatalogReader, ComparisonRepository, RatingRepository};

/// Query for the task element report of a scope.
#[derive(Debug, Clone, Default)]
pub struct GetTaskElementStatsQuery {
    pub scope: ReportScope,
}

/// Handler for task element statistics.
pub struct GetTaskElementStatsHandler {
    sources: ReportSources,
}

impl GetTaskElementStatsHandler {
    pub fn new(
        ratings: Arc<dyn RatingRepository>,
        comparisons: Arc<dyn ComparisonRepository>,
        catalog: Arc<dyn CatalogReader>,
    ) -> Self {
        Self {
            sources: ReportSources {
                ratings,
                comparisons,
                catalog,
            },
        }
    }

    pub async fn handle(
        &self,
        query: GetTaskElementStatsQuery,
    ) -> Result<TaskElementReport, ReportError> {
        let inputs = self.sources.load().await?;
        debug!(
            ratings = inputs.ratings.len(),
            comparisons = inputs.comparisons.len(),
            project_id = ?query.scope.project_id,
            study_id = ?query.scope.study_id,
            "Building task element report"
        );

        let report = ReportBuilder::build(
            &query.scope,
            &inputs.ratings,
            &inputs.comparisons,
            &inputs.catalog,
        );

        info!(
            task_elements = report.stats.len(),
            evaluations = report.total_evaluations(),
            "Task element report built"
        );
        Ok(report)
    }
}
