//! Team insight cards

use super::aggregate::{distinct_locations, dominant_department, leaders, top_skills};
use crate::config::InsightsConfig;
use crate::directory::{Employee, ProjectStatus, Team};
use serde::Serialize;

/// Computed facts about one team's roster and projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamInsights {
    pub team_name: String,
    pub member_count: usize,
    pub dominant_department: Option<String>,
    /// Most frequent skills, truncated to the configured count
    pub top_skills: Vec<String>,
    pub project_count: usize,
    pub active_projects: Vec<String>,
    /// Names of members with a leadership title
    pub leaders: Vec<String>,
    pub locations: Vec<String>,
}

impl TeamInsights {
    /// Compute insights for `team` from its resolved roster
    pub fn build(team: &Team, members: &[&Employee], config: &InsightsConfig) -> Self {
        let mut skills = top_skills(members);
        skills.truncate(config.top_skills_shown);

        TeamInsights {
            team_name: team.name.clone(),
            member_count: members.len(),
            dominant_department: dominant_department(members),
            top_skills: skills,
            project_count: team.projects.len(),
            active_projects: team
                .projects_with_status(ProjectStatus::Active)
                .into_iter()
                .map(|p| p.name.clone())
                .collect(),
            leaders: leaders(members, &config.leadership_markers)
                .into_iter()
                .map(|m| m.name.clone())
                .collect(),
            locations: distinct_locations(members),
        }
    }

    /// Render the insights as display sentences
    pub fn sentences(&self) -> Vec<String> {
        let mut out = Vec::new();

        match &self.dominant_department {
            Some(department) => out.push(format!(
                "The {} team has {} members, primarily from the {} department.",
                self.team_name, self.member_count, department
            )),
            None => out.push(format!("The {} team has no members yet.", self.team_name)),
        }

        if !self.top_skills.is_empty() {
            out.push(format!(
                "This team's expertise is concentrated in {}.",
                self.top_skills.join(", ")
            ));
        }

        if self.project_count > 0 {
            let active = self.active_projects.len();
            if active == 0 {
                out.push("The team has no active projects.".to_string());
            } else {
                out.push(format!(
                    "The team is currently working on {} active {}: {}.",
                    active,
                    if active == 1 { "project" } else { "projects" },
                    self.active_projects.join(", ")
                ));
            }
        }

        if !self.leaders.is_empty() {
            out.push(format!("The team is led by {}.", self.leaders.join(", ")));
        }

        match self.locations.len() {
            0 => {}
            1 => out.push(format!("All team members are based in {}.", self.locations[0])),
            n => out.push(format!(
                "Team members are distributed across {} locations: {}.",
                n,
                self.locations.join(", ")
            )),
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team::new("t1", "Finance Transformation", "Modernising finance")
            .with_members(["e1", "e2"])
            .with_project("S/4 Migration", "ERP upgrade", ProjectStatus::Active)
            .with_project("Close Automation", "Faster month end", ProjectStatus::Completed)
    }

    fn people() -> Vec<Employee> {
        vec![
            Employee::new("e1", "Ziad", "Senior Finance Manager", "Finance")
                .with_location("Dhahran, Saudi Arabia")
                .with_skills(["SAP", "Budgeting", "Forecasting", "Audit"]),
            Employee::new("e2", "Fahad", "Financial Analyst", "Finance")
                .with_location("Dhahran, Saudi Arabia")
                .with_skills(["SAP"]),
        ]
    }

    #[test]
    fn test_build() {
        let people = people();
        let members: Vec<&Employee> = people.iter().collect();
        let insights = TeamInsights::build(&team(), &members, &InsightsConfig::default());

        assert_eq!(insights.member_count, 2);
        assert_eq!(insights.dominant_department.as_deref(), Some("Finance"));
        assert_eq!(insights.top_skills, vec!["SAP", "Budgeting", "Forecasting"]);
        assert_eq!(insights.active_projects, vec!["S/4 Migration"]);
        assert_eq!(insights.leaders, vec!["Ziad"]);
        assert_eq!(insights.locations.len(), 1);
    }

    #[test]
    fn test_sentences() {
        let people = people();
        let members: Vec<&Employee> = people.iter().collect();
        let sentences = TeamInsights::build(&team(), &members, &InsightsConfig::default()).sentences();

        assert_eq!(
            sentences,
            vec![
                "The Finance Transformation team has 2 members, primarily from the Finance department.",
                "This team's expertise is concentrated in SAP, Budgeting, Forecasting.",
                "The team is currently working on 1 active project: S/4 Migration.",
                "The team is led by Ziad.",
                "All team members are based in Dhahran, Saudi Arabia.",
            ]
        );
    }

    #[test]
    fn test_empty_roster() {
        let empty = Team::new("t9", "Ghost Squad", "Nobody here");
        let sentences = TeamInsights::build(&empty, &[], &InsightsConfig::default()).sentences();
        assert_eq!(sentences, vec!["The Ghost Squad team has no members yet."]);
    }
}
