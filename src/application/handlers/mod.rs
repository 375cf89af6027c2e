//! Application handlers.
//!
//! Command and query handlers that orchestrate the ports and the pure
//! scoring pipeline.
//!
//! - `evaluation` - Rating and weight submission, evaluator progress
//! - `reporting` - Computed scores and task element statistics

pub mod evaluation;
pub mod reporting;

pub use evaluation::{
    GetEvaluatorProgressHandler, GetEvaluatorProgressQuery, GetEvaluatorProgressResult,
    ResetWeightsCommand, SubmitPairwiseComparisonCommand, SubmitPairwiseComparisonHandler,
    SubmitPairwiseComparisonResult, SubmitRatingCommand, SubmitRatingHandler, SubmitRatingResult,
};
pub use reporting::{
    ComputeScoresHandler, ComputeScoresQuery, GetTaskElementStatsHandler,
    GetTaskElementStatsQuery, ReportError,
};
