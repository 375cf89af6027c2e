//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the CATLX domain.

mod errors;
mod ids;
mod raw_score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EvaluatorId, MteId, ProjectId, RatingId, StudyId};
pub use raw_score::RawScore;
pub use timestamp::Timestamp;
