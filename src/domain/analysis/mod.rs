//! Analysis Module - Pure TLX scoring and aggregation.
//!
//! # Components
//!
//! - `ScoreCalculator` - Weighted workload score for one set of raw ratings
//! - `ScoringEngine` - Ratings enriched into `ComputedScore` records
//! - `StatsAggregator` - Per task element count, mean, deviation and raw means
//! - `ReportScope` - Explicit project/study filter
//! - `ScoreDistribution` - Ten-point histogram of overall scores
//! - `ReportBuilder` - The full pipeline for one scope
//!
//! # Design Philosophy
//!
//! Everything here is synchronous and infallible. Callers hand in a loaded
//! snapshot of ratings, comparisons and catalog records and get plain values
//! back; every call recomputes from scratch.

mod aggregator;
mod computed_score;
mod distribution;
mod report;
mod scope;
mod score_calculator;

pub use aggregator::{AggregatedMteStats, StatsAggregator};
pub use computed_score::{ComputedScore, ScoringEngine, UNKNOWN_NAME};
pub use distribution::{ScoreDistribution, BIN_WIDTH, DISTRIBUTION_BINS};
pub use report::{ReportBuilder, TaskElementReport};
pub use scope::ReportScope;
pub use score_calculator::{ScoreCalculator, WeightedScore};
