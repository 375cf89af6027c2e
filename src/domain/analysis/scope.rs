//! Report scope - which ratings and task elements a report covers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{MteId, ProjectId, StudyId};
use crate::domain::tlx::{Catalog, Mte, Rating};

/// Explicit project/study filter for a report.
///
/// No filter means every rating and every task element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportScope {
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub study_id: Option<StudyId>,
}

impl ReportScope {
    /// Everything in the catalog.
    pub fn all() -> Self {
        Self::default()
    }

    /// One project.
    pub fn project(project_id: ProjectId) -> Self {
        Self {
            project_id: Some(project_id),
            study_id: None,
        }
    }

    /// One study, optionally within a project.
    pub fn study(study_id: StudyId) -> Self {
        Self {
            project_id: None,
            study_id: Some(study_id),
        }
    }

    /// Narrows the scope to a project.
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Checks whether a rating falls inside the scope.
    ///
    /// Ratings whose study is missing from the catalog are never in scope.
    pub fn includes_rating(&self, rating: &Rating, catalog: &Catalog) -> bool {
        let Some(study) = catalog.study(&rating.study_id) else {
            return false;
        };
        if let Some(project_id) = &self.project_id {
            if !study.belongs_to(project_id) {
                return false;
            }
        }
        if let Some(study_id) = &self.study_id {
            if &rating.study_id != study_id {
                return false;
            }
        }
        true
    }

    /// Ratings inside the scope, in input order.
    pub fn ratings<'a>(&self, ratings: &'a [Rating], catalog: &Catalog) -> Vec<&'a Rating> {
        ratings
            .iter()
            .filter(|r| self.includes_rating(r, catalog))
            .collect()
    }

    /// Task elements reported on, in catalog order.
    ///
    /// - Study filter: the study's task elements (none if the study is unknown)
    /// - Project filter only: task elements of any study in the project
    /// - No filter: every task element
    pub fn mtes<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Mte> {
        let allowed: Option<HashSet<&MteId>> = if let Some(study_id) = &self.study_id {
            Some(
                catalog
                    .study(study_id)
                    .map(|s| s.mte_ids.iter().collect())
                    .unwrap_or_default(),
            )
        } else {
            self.project_id.as_ref().map(|project_id| {
                catalog
                    .studies_in_project(project_id)
                    .flat_map(|s| s.mte_ids.iter())
                    .collect()
            })
        };

        catalog
            .mtes()
            .iter()
            .filter(|m| allowed.as_ref().map_or(true, |ids| ids.contains(&m.id)))
            .collect()
    }
}
