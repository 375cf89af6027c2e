//! ComputeScoresHandler - Query handler for per-rating weighted scores.

use std::sync::Arc;

use tracing::debug;

use super::{ReportError, ReportSources};
use crate::domain::analysis::{ComputedScore, ReportBuilder, ReportScope};
use crate::ports::{CatalogReader, ComparisonRepository, RatingRepository};

/// Query for the computed scores inside a scope.
#[derive(Debug, Clone, Default)]
pub struct ComputeScoresQuery {
    pub scope: ReportScope,
}

/// Handler for computed scores, one per in-scope rating.
pub struct ComputeScoresHandler {
    sources: ReportSources,
}

impl ComputeScoresHandler {
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

    pub async fn handle(&self, query: ComputeScoresQuery) -> Result<Vec<ComputedScore>, ReportError> {
        let inputs = self.sources.load().await?;
        let scores = ReportBuilder::scores(
            &query.scope,
            &inputs.ratings,
            &inputs.comparisons,
            &inputs.catalog,
        );

        debug!(
            total_ratings = inputs.ratings.len(),
            scored = scores.len(),
            "Computed scores"
        );
        Ok(scores)
    }
}
