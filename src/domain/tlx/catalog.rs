//! Read-only lookup over the evaluator, project, study and task element records.

use std::collections::HashMap;

use super::{Evaluator, Mte, Project, Study};
use crate::domain::foundation::{EvaluatorId, MteId, ProjectId, StudyId};

/// Indexed snapshot of the catalog supplied by the data-access collaborator.
///
/// Records keep the order they were supplied in.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    evaluators: Vec<Evaluator>,
    projects: Vec<Project>,
    studies: Vec<Study>,
    mtes: Vec<Mte>,
    evaluator_index: HashMap<EvaluatorId, usize>,
    study_index: HashMap<StudyId, usize>,
    mte_index: HashMap<MteId, usize>,
}

impl Catalog {
    /// Builds the lookup indexes. Duplicate ids resolve to the last record.
    pub fn new(
        evaluators: Vec<Evaluator>,
        projects: Vec<Project>,
        studies: Vec<Study>,
        mtes: Vec<Mte>,
    ) -> Self {
        let evaluator_index = evaluators
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        let study_index = studies
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let mte_index = mtes
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id.clone(), i))
            .collect();

        Self {
            evaluators,
            projects,
            studies,
            mtes,
            evaluator_index,
            study_index,
            mte_index,
        }
    }

    pub fn evaluators(&self) -> &[Evaluator] {
        &self.evaluators
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn studies(&self) -> &[Study] {
        &self.studies
    }

    pub fn mtes(&self) -> &[Mte] {
        &self.mtes
    }

    pub fn evaluator(&self, id: &EvaluatorId) -> Option<&Evaluator> {
        self.evaluator_index.get(id).map(|&i| &self.evaluators[i])
    }

    pub fn study(&self, id: &StudyId) -> Option<&Study> {
        self.study_index.get(id).map(|&i| &self.studies[i])
    }

    pub fn mte(&self, id: &MteId) -> Option<&Mte> {
        self.mte_index.get(id).map(|&i| &self.mtes[i])
    }

    /// Studies of one project, in catalog order.
    pub fn studies_in_project<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> impl Iterator<Item = &'a Study> + 'a {
        self.studies.iter().filter(move |s| s.belongs_to(project_id))
    }

    /// Names of the studies that include a task element, in catalog order.
    pub fn study_names_for(&self, mte_id: &MteId) -> Vec<String> {
        self.studies
            .iter()
            .filter(|s| s.contains_mte(mte_id))
            .map(|s| s.name.clone())
            .collect()
    }

    /// Task elements of a study that exist in the catalog, in study order.
    pub fn mtes_in_study(&self, study: &Study) -> Vec<&Mte> {
        study.mte_ids.iter().filter_map(|id| self.mte(id)).collect()
    }
}
