//! Team records

use super::types::{EmployeeId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a team project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Planned,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Planned => "planned",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

/// A team: a named, ordered list of member ids plus its projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub description: String,
    /// Member ids in display order
    #[serde(default)]
    pub members: Vec<EmployeeId>,
    #[serde(default)]
    pub projects: Vec<TeamProject>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            members: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EmployeeId>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_project(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        status: ProjectStatus,
    ) -> Self {
        self.projects.push(TeamProject {
            name: name.into(),
            description: description.into(),
            status,
        });
        self
    }

    pub fn has_member(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.as_str() == id)
    }

    /// Projects with the given status, in declaration order
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<&TeamProject> {
        self.projects.iter().filter(|p| p.status == status).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_status_serde() {
        let json = r#"{"name": "SOC", "description": "Monitoring", "status": "planned"}"#;
        let p: TeamProject = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, ProjectStatus::Planned);
        assert_eq!(p.status.to_string(), "planned");
    }

    #[test]
    fn test_projects_with_status() {
        let team = Team::new("t1", "Ops", "Operations")
            .with_members(["e1", "e2"])
            .with_project("A", "first", ProjectStatus::Active)
            .with_project("B", "second", ProjectStatus::Completed)
            .with_project("C", "third", ProjectStatus::Active);

        let active: Vec<&str> = team
            .projects_with_status(ProjectStatus::Active)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(active, vec!["A", "C"]);
        assert!(team.has_member("e2"));
        assert!(!team.has_member("e3"));
    }
}
