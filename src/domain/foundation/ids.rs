//! Strongly-typed identifier value objects.
//!
//! Catalog records are keyed by opaque, non-empty strings supplied by the
//! data-access collaborator. Ratings created by this crate get a UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Generates a non-empty string identifier newtype.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a person who rates task elements.
    EvaluatorId,
    "evaluator_id"
);

string_id!(
    /// Identifier of a study grouping task elements.
    StudyId,
    "study_id"
);

string_id!(
    /// Identifier of a mission task element (MTE).
    MteId,
    "mte_id"
);

string_id!(
    /// Identifier of a project grouping studies.
    ProjectId,
    "project_id"
);

string_id!(
    /// Identifier of a submitted rating.
    RatingId,
    "rating_id"
);

impl RatingId {
    /// Generates a fresh random rating identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
