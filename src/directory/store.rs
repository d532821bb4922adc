//! In-memory directory storage
//!
//! Holds the canonical flat employee and team lists with O(1) lookup by id.
//! Declaration order is preserved for listings and search results.

use super::employee::Employee;
use super::team::Team;
use super::types::{EmployeeId, TeamId};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading or editing the directory
#[derive(Error, Debug, PartialEq)]
pub enum DirectoryError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Employee {0} already exists")]
    EmployeeAlreadyExists(EmployeeId),

    #[error("Team {0} already exists")]
    TeamAlreadyExists(TeamId),

    #[error("Team {team} lists member {member} more than once")]
    DuplicateMember { team: TeamId, member: EmployeeId },
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// In-memory directory storage
///
/// - employees: EmployeeId -> Arc<Employee> (insertion ordered)
/// - teams: TeamId -> Team (insertion ordered)
/// - membership: EmployeeId -> TeamId, resolved once at load
///
/// Records sit behind `Arc` so cloning the store yields a cheap snapshot and
/// `put` swaps a record without touching copies held elsewhere.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    employees: IndexMap<EmployeeId, Arc<Employee>>,
    teams: IndexMap<TeamId, Team>,
    membership: FxHashMap<EmployeeId, TeamId>,
}

impl DirectoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load employees and teams, then resolve team membership
    pub fn from_records(employees: Vec<Employee>, teams: Vec<Team>) -> DirectoryResult<Self> {
        let mut store = DirectoryStore {
            employees: IndexMap::with_capacity(employees.len()),
            teams: IndexMap::with_capacity(teams.len()),
            membership: FxHashMap::default(),
        };

        for mut employee in employees {
            if store.employees.contains_key(&employee.id) {
                return Err(DirectoryError::EmployeeAlreadyExists(employee.id));
            }
            employee.team_id = None;
            store.employees.insert(employee.id.clone(), Arc::new(employee));
        }

        for team in teams {
            if store.teams.contains_key(&team.id) {
                return Err(DirectoryError::TeamAlreadyExists(team.id));
            }
            let mut seen = FxHashSet::default();
            for member in &team.members {
                if !seen.insert(member) {
                    return Err(DirectoryError::DuplicateMember {
                        team: team.id.clone(),
                        member: member.clone(),
                    });
                }
            }
            store.teams.insert(team.id.clone(), team);
        }

        store.assign_memberships();

        info!(
            employees = store.employees.len(),
            teams = store.teams.len(),
            assigned = store.membership.len(),
            "Directory store loaded"
        );
        Ok(store)
    }

    /// Resolve every employee's team: the first team listing the id wins
    fn assign_memberships(&mut self) {
        self.membership.clear();
        for team in self.teams.values() {
            for member in &team.members {
                if !self.employees.contains_key(member) {
                    warn!(team = %team.id, member = %member, "Team lists an unknown employee");
                    continue;
                }
                self.membership
                    .entry(member.clone())
                    .or_insert_with(|| team.id.clone());
            }
        }

        for (id, employee) in self.employees.iter_mut() {
            let team = self.membership.get(id).cloned();
            if employee.team_id != team {
                Arc::make_mut(employee).team_id = team;
            }
        }
    }

    /// Get an employee by id
    pub fn get_employee(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id).map(Arc::as_ref)
    }

    /// Get a shared handle to an employee record
    pub fn get_employee_shared(&self, id: &str) -> Option<Arc<Employee>> {
        self.employees.get(id).cloned()
    }

    /// Check if an employee exists
    pub fn has_employee(&self, id: &str) -> bool {
        self.employees.contains_key(id)
    }

    /// Get a team by id
    pub fn get_team(&self, id: &str) -> Option<&Team> {
        self.teams.get(id)
    }

    /// All employees in declaration order
    pub fn all_employees(&self) -> Vec<&Employee> {
        self.employees.values().map(Arc::as_ref).collect()
    }

    /// Iterate employees in declaration order
    pub fn iter_employees(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.employees.values().map(Arc::as_ref)
    }

    /// All teams in declaration order
    pub fn all_teams(&self) -> Vec<&Team> {
        self.teams.values().collect()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// The team an employee was assigned to at load
    pub fn team_of(&self, employee_id: &str) -> Option<&Team> {
        self.membership
            .get(employee_id)
            .and_then(|team_id| self.teams.get(team_id))
    }

    /// Resolve a team's roster in member order
    ///
    /// Ids that no longer resolve are dropped; an unknown team yields an empty roster.
    pub fn team_members(&self, team_id: &str) -> Vec<&Employee> {
        match self.teams.get(team_id) {
            Some(team) => team
                .members
                .iter()
                .filter_map(|id| self.get_employee(id.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Declaration position of an employee
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.employees.get_index_of(id)
    }

    /// Employee at a declaration position
    pub fn employee_at(&self, position: usize) -> Option<&Employee> {
        self.employees.get_index(position).map(|(_, e)| e.as_ref())
    }

    /// Replace an existing employee record (copy-on-write)
    ///
    /// The team back-reference is kept from the load-time assignment. The
    /// previous record is returned; any other holder of it is unaffected.
    pub fn put(&mut self, mut employee: Employee) -> DirectoryResult<Arc<Employee>> {
        employee.team_id = self.membership.get(&employee.id).cloned();

        let slot = match self.employees.get_mut(&employee.id) {
            Some(slot) => slot,
            None => return Err(DirectoryError::EmployeeNotFound(employee.id)),
        };

        debug!(employee = %employee.id, "Replacing employee record");
        Ok(std::mem::replace(slot, Arc::new(employee)))
    }
}
