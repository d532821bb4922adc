//! Directory facade
//!
//! [`Directory`] wires the store, the canonical chart, the heuristic reports
//! relation and the query engine together behind one read API, plus the
//! `put`/`apply_edit` write path.

use crate::config::{ConfigError, DirectoryConfig};
use crate::directory::{
    DirectoryError, DirectoryResult, DirectoryStore, Employee, ProfileEdit, Team,
};
use crate::hierarchy::{
    ChartEntry, HeuristicReports, HierarchyError, OrgChart, OrganizationLevel,
};
use crate::insights::{profile_summary, TeamInsights};
use crate::query::{find_mentors, Interpretation, QueryEngine};
use crate::seed::{SeedData, SeedError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Anything that can stop a directory from loading
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// A loaded, validated employee directory
#[derive(Debug, Clone)]
pub struct Directory {
    config: DirectoryConfig,
    store: DirectoryStore,
    chart: OrgChart,
    heuristic: HeuristicReports,
    engine: QueryEngine,
}

impl Directory {
    /// Validate `seed` and build every derived structure
    pub fn load(seed: SeedData, config: DirectoryConfig) -> LoadResult<Self> {
        config.validate()?;

        let store = DirectoryStore::from_records(seed.employees, seed.teams)?;
        let chart = OrgChart::build(&store, &seed.hierarchy, config.max_hierarchy_depth)?;
        let heuristic = HeuristicReports::build(&store, &config.heuristic_reports);
        let engine = QueryEngine::with_vocabulary(config.vocabulary.clone());

        info!(
            employees = store.employee_count(),
            teams = store.team_count(),
            chart = chart.len(),
            "Directory ready"
        );

        Ok(Directory {
            config,
            store,
            chart,
            heuristic,
            engine,
        })
    }

    /// The bundled seed data with default configuration
    pub fn bundled() -> LoadResult<Self> {
        Self::load(SeedData::bundled()?, DirectoryConfig::default())
    }

    pub fn bundled_with_config(config: DirectoryConfig) -> LoadResult<Self> {
        Self::load(SeedData::bundled()?, config)
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn chart(&self) -> &OrgChart {
        &self.chart
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    // ---- entity lookups ----

    pub fn get_employee(&self, id: &str) -> Option<&Employee> {
        self.store.get_employee(id)
    }

    pub fn get_team(&self, id: &str) -> Option<&Team> {
        self.store.get_team(id)
    }

    pub fn all_employees(&self) -> Vec<&Employee> {
        self.store.all_employees()
    }

    pub fn all_teams(&self) -> Vec<&Team> {
        self.store.all_teams()
    }

    pub fn team_members(&self, team_id: &str) -> Vec<&Employee> {
        self.store.team_members(team_id)
    }

    pub fn team_of(&self, employee_id: &str) -> Option<&Team> {
        self.store.team_of(employee_id)
    }

    // ---- hierarchy ----

    /// The top of the canonical chart
    pub fn hierarchy_root(&self) -> Option<&Employee> {
        self.chart.root(&self.store)
    }

    pub fn reporting_chain(&self, target: &str) -> Option<Vec<&Employee>> {
        self.chart.reporting_chain(&self.store, target)
    }

    /// Canonical direct reports, in curated order
    pub fn direct_reports(&self, id: &str) -> Vec<&Employee> {
        self.chart.direct_reports(&self.store, id)
    }

    /// Profile-page reports from the department/title heuristic
    pub fn heuristic_reports(&self, id: &str) -> Vec<&Employee> {
        self.heuristic.resolve(&self.store, id)
    }

    pub fn total_reports(&self, id: &str) -> Option<usize> {
        self.chart.total_reports(id)
    }

    pub fn organization_level(&self, id: &str) -> Option<OrganizationLevel> {
        self.chart.organization_level(id)
    }

    /// Pre-order listing of the whole chart
    pub fn org_chart(&self) -> Vec<ChartEntry<'_>> {
        self.chart.entries(&self.store)
    }

    // ---- search ----

    pub fn search_employees(&self, query: &str) -> Vec<&Employee> {
        self.engine.search_employees(&self.store, query)
    }

    pub fn search_teams<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<&Team> {
        self.engine.search_teams(&self.store, keywords)
    }

    pub fn extract_keywords(&self, query: &str) -> Vec<String> {
        self.engine.extract_keywords(query)
    }

    pub fn interpret(&self, query: &str) -> Interpretation<'_> {
        self.engine.interpret(&self.store, query)
    }

    pub fn find_mentors<S: AsRef<str>>(&self, query: &str, topics: &[S]) -> Vec<&Employee> {
        find_mentors(&self.store, query, topics)
    }

    // ---- insights ----

    pub fn team_insights(&self, team_id: &str) -> Option<TeamInsights> {
        let team = self.store.get_team(team_id)?;
        let members = self.store.team_members(team_id);
        Some(TeamInsights::build(team, &members, &self.config.insights))
    }

    pub fn profile_summary(&self, id: &str) -> Option<String> {
        self.store.get_employee(id).map(profile_summary)
    }

    // ---- edits ----

    /// Replace an employee record and refresh derived relations
    pub fn put(&mut self, employee: Employee) -> DirectoryResult<Arc<Employee>> {
        let previous = self.store.put(employee)?;
        self.heuristic.refresh(&self.store);
        Ok(previous)
    }

    /// Apply a profile edit to the current record of `id`
    pub fn apply_edit(&mut self, id: &str, edit: &ProfileEdit) -> DirectoryResult<Arc<Employee>> {
        let current = self
            .store
            .get_employee(id)
            .ok_or_else(|| DirectoryError::EmployeeNotFound(id.into()))?;
        let updated = edit.apply(current);
        self.put(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_loads() {
        let dir = Directory::bundled().unwrap();
        assert_eq!(dir.all_employees().len(), 15);
        assert_eq!(dir.all_teams().len(), 6);
        assert_eq!(dir.hierarchy_root().unwrap().id.as_str(), "e001");
        assert_eq!(dir.org_chart().len(), 15);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DirectoryConfig {
            max_hierarchy_depth: 0,
            ..DirectoryConfig::default()
        };
        let err = Directory::bundled_with_config(config).unwrap_err();
        assert!(matches!(err, LoadError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_broken_hierarchy_rejected() {
        let mut seed = SeedData::bundled().unwrap();
        seed.hierarchy
            .reports
            .entry("e012".into())
            .or_default()
            .push("e404".into());
        let err = Directory::load(seed, DirectoryConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Hierarchy(HierarchyError::UnknownEmployee(_))
        ));
    }

    #[test]
    fn test_apply_edit_refreshes_heuristic() {
        let mut dir = Directory::bundled().unwrap();
        assert!(dir.heuristic_reports("e012").is_empty());

        let mut cfo = dir.get_employee("e005").unwrap().clone();
        cfo.title = "Finance Director".to_string();
        dir.put(cfo).unwrap();

        let reports: Vec<&str> = dir
            .heuristic_reports("e012")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(reports, vec!["e005"]);
        // The canonical chart is unaffected by edits
        assert_eq!(dir.direct_reports("e005").len(), 1);
    }

    #[test]
    fn test_apply_edit_unknown_employee() {
        let mut dir = Directory::bundled().unwrap();
        let err = dir.apply_edit("e999", &ProfileEdit::default()).unwrap_err();
        assert_eq!(err, DirectoryError::EmployeeNotFound("e999".into()));
    }
}
