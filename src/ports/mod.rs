//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the storage collaborator. Adapters implement these ports.
//!
//! - `RatingRepository` - Append-only rating storage
//! - `ComparisonRepository` - Upsert-by-key pairwise comparison storage
//! - `CatalogReader` - Evaluators, projects, studies and task elements

mod catalog_reader;
mod comparison_repository;
mod rating_repository;
mod repository_error;

pub use catalog_reader::CatalogReader;
pub use comparison_repository::ComparisonRepository;
pub use rating_repository::RatingRepository;
pub use repository_error::RepositoryError;
