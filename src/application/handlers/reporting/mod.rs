//! Reporting query handlers.
//!
//! Read-only handlers that load one consistent snapshot through the ports
//! and run the scoring pipeline over it.

mod compute_scores;
mod error;
mod get_task_element_stats;

pub use compute_scores::{ComputeScoresHandler, ComputeScoresQuery};
pub use error::ReportError;
pub use get_task_element_stats::{GetTaskElementStatsHandler, GetTaskElementStatsQuery};

use std::sync::Arc;

use crate::domain::tlx::{Catalog, ComparisonBook, Rating};
use crate::ports::{CatalogReader, ComparisonRepository, RatingRepository};

/// Records a report is computed from.
struct ReportInputs {
    ratings: Vec<Rating>,
    comparisons: ComparisonBook,
    catalog: Catalog,
}

/// Shared port set for the reporting handlers.
#[derive(Clone)]
struct ReportSources {
    ratings: Arc<dyn RatingRepository>,
    comparisons: Arc<dyn ComparisonRepository>,
    catalog: Arc<dyn CatalogReader>,
}

impl ReportSources {
    async fn load(&self) -> Result<ReportInputs, ReportError> {
        Ok(ReportInputs {
            ratings: self.ratings.list().await?,
            comparisons: self.comparisons.list().await?.into_iter().collect(),
            catalog: self.catalog.catalog().await?,
        })
    }
}
