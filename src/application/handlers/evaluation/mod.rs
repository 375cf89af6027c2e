//! Evaluator workflow handlers.
//!
//! Commands for submitting ratings and weights, and the progress query that
//! decides which step an evaluator sees next.

mod get_evaluator_progress;
mod submit_pairwise_comparison;
mod submit_rating;

pub use get_evaluator_progress::{
    GetEvaluatorProgressHandler, GetEvaluatorProgressQuery, GetEvaluatorProgressResult,
};
pub use submit_pairwise_comparison::{
    ResetWeightsCommand, SubmitPairwiseComparisonCommand, SubmitPairwiseComparisonHandler,
    SubmitPairwiseComparisonResult,
};
pub use submit_rating::{SubmitRatingCommand, SubmitRatingHandler, SubmitRatingResult};
