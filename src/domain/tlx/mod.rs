//! TLX module - NASA Task Load Index vocabulary.
//!
//! # Components
//!
//! - `Dimension` - The six subscales, their questionnaire text, and the 15 comparison pairs
//! - `DimensionValues` - Fixed-arity record with one value per dimension
//! - `WeightDistribution` / `RawScoreSet` - Weights and raw 0-100 ratings
//! - `PairwiseElicitation` - The forced-choice weighting procedure
//! - `PairwiseComparison` / `ComparisonBook` - Stored weights per evaluator and study
//! - `Catalog` - Evaluators, projects, studies and task elements
//! - `EvaluatorProgress` - Next step for an evaluator within a study

mod catalog;
mod comparison;
mod dimension;
mod dimension_values;
mod elicitation;
mod progress;
mod records;
mod weights;

pub use catalog::Catalog;
pub use comparison::{ComparisonBook, ComparisonKey, PairwiseComparison};
pub use dimension::{
    Dimension, DimensionInfo, DIMENSIONS_INFO, DIMENSION_COUNT, PAIRS_PER_DIMENSION,
    PAIRWISE_COMBINATIONS, PAIR_COUNT,
};
pub use dimension_values::DimensionValues;
pub use elicitation::{
    ElicitationError, ElicitedWeights, PairChoice, PairwiseElicitation, WeightElicitor,
};
pub use progress::{EvaluationStep, EvaluatorProgress};
pub use records::{Evaluator, Mte, Project, Rating, Study};
pub use weights::{RawScoreSet, WeightDistribution};
