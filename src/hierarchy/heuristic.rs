//! Heuristic "direct reports" for profile pages
//!
//! Colleagues in the same department whose title carries one of the role
//! markers. This relation is a display aid and may disagree with the
//! canonical [`OrgChart`](super::OrgChart).

use crate::config::HeuristicReportsConfig;
use crate::directory::{DirectoryStore, Employee, EmployeeId};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Precomputed heuristic reports for every employee
#[derive(Debug, Clone, Default)]
pub struct HeuristicReports {
    config: HeuristicReportsConfig,
    reports: FxHashMap<EmployeeId, Vec<EmployeeId>>,
}

impl HeuristicReports {
    pub fn build(store: &DirectoryStore, config: &HeuristicReportsConfig) -> Self {
        let mut heuristic = HeuristicReports {
            config: config.clone(),
            reports: FxHashMap::default(),
        };
        heuristic.refresh(store);
        heuristic
    }

    /// Recompute from the current store contents
    pub fn refresh(&mut self, store: &DirectoryStore) {
        let mut by_department: FxHashMap<&str, Vec<&Employee>> = FxHashMap::default();
        for employee in store.iter_employees() {
            if employee.title_contains_any(&self.config.role_markers) {
                by_department
                    .entry(employee.department.as_str())
                    .or_default()
                    .push(employee);
            }
        }

        self.reports.clear();
        for employee in store.iter_employees() {
            let picked: Vec<EmployeeId> = by_department
                .get(employee.department.as_str())
                .map(|candidates| {
                    candidates
                        .iter()
                        .filter(|c| c.id != employee.id)
                        .take(self.config.max_reports)
                        .map(|c| c.id.clone())
                        .collect()
                })
                .unwrap_or_default();
            self.reports.insert(employee.id.clone(), picked);
        }

        debug!(
            employees = self.reports.len(),
            departments = by_department.len(),
            "Heuristic reports computed"
        );
    }

    /// Ids listed under `id`; empty for unknown ids
    pub fn reports_for(&self, id: &str) -> &[EmployeeId] {
        self.reports.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Current store records for the reports of `id`
    pub fn resolve<'s>(&self, store: &'s DirectoryStore, id: &str) -> Vec<&'s Employee> {
        self.reports_for(id)
            .iter()
            .filter_map(|r| store.get_employee(r.as_str()))
            .collect()
    }

    pub fn config(&self) -> &HeuristicReportsConfig {
        &self.config
    }
}
