use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use catlx::adapters::storage::{FileSnapshotStore, InMemoryTlxStore};
use catlx::application::{
    ComputeScoresHandler, ComputeScoresQuery, GetTaskElementStatsHandler,
    GetTaskElementStatsQuery,
};
use catlx::config::{AppConfig, StorageBackend};
use catlx::domain::analysis::{ComputedScore, ReportScope, TaskElementReport};
use catlx::ports::{CatalogReader, ComparisonRepository, RatingRepository};
use catlx::telemetry;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything printed to stdout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportOutput {
    scores: Vec<ComputedScore>,
    report: TaskElementReport,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.storage.backend,
        "Starting catlx report"
    );

    let scope = config.report.scope()?;
    let output = match config.storage.backend {
        StorageBackend::File => {
            let store = Arc::new(FileSnapshotStore::open(&config.storage.data_path).await?);
            build_report(store, scope).await?
        }
        StorageBackend::Memory => {
            warn!("Memory backend starts empty; the report will have no ratings");
            build_report(Arc::new(InMemoryTlxStore::new()), scope).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn build_report<S>(store: Arc<S>, scope: ReportScope) -> Result<ReportOutput, BoxError>
where
    S: RatingRepository + ComparisonRepository + CatalogReader + 'static,
{
    let scores = ComputeScoresHandler::new(store.clone(), store.clone(), store.clone())
        .handle(ComputeScoresQuery {
            scope: scope.clone(),
        })
        .await?;
    let report = GetTaskElementStatsHandler::new(store.clone(), store.clone(), store)
        .handle(GetTaskElementStatsQuery { scope })
        .await?;

    Ok(ReportOutput { scores, report })
}
