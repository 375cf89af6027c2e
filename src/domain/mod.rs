//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, raw scores, timestamps, errors)
//! - `tlx` - Dimensions, weights, pairwise elicitation, catalog records and ratings
//! - `analysis` - Pure scoring, aggregation and report services

pub mod analysis;
pub mod foundation;
pub mod tlx;
