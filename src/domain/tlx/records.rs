//! Catalog records and submitted ratings.

use serde::{Deserialize, Serialize};

use super::RawScoreSet;
use crate::domain::foundation::{EvaluatorId, MteId, ProjectId, RatingId, StudyId, Timestamp};

/// A person who rates task elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluator {
    pub id: EvaluatorId,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A top-level grouping of studies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

/// A mission task element: the unit of work being rated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mte {
    pub id: MteId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ref_number: String,
}

impl Mte {
    /// Name prefixed with the reference number, e.g. `[MTE-01] Hover`.
    pub fn display_name(&self) -> String {
        if self.ref_number.is_empty() {
            self.name.clone()
        } else {
            format!("[{}] {}", self.ref_number, self.name)
        }
    }
}

/// A study: the set of task elements evaluators rate together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub id: StudyId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub mte_ids: Vec<MteId>,
}

impl Study {
    /// Checks whether the study includes a task element.
    pub fn contains_mte(&self, mte_id: &MteId) -> bool {
        self.mte_ids.contains(mte_id)
    }

    /// Checks whether the study belongs to a project.
    pub fn belongs_to(&self, project_id: &ProjectId) -> bool {
        self.project_id.as_ref() == Some(project_id)
    }
}

/// One evaluator's raw ratings for one task element in one study.
///
/// Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: RatingId,
    pub evaluator_id: EvaluatorId,
    pub study_id: StudyId,
    pub mte_id: MteId,
    pub scores: RawScoreSet,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
