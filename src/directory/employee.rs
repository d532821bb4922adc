//! Employee profile records
//!
//! An employee is a flat record: display scalars, ordered skill and interest
//! lists, and optional profile sections. Team membership is derived by the
//! store and never read from input.

use super::types::{EmployeeId, TeamId};
use serde::{Deserialize, Serialize};

/// A project an employee has worked on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProject {
    pub name: String,
    pub description: String,
    pub role: String,
    pub period: String,
}

/// A dated accomplishment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub date: String,
    pub description: String,
}

/// An external award
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub year: String,
    pub issuer: String,
}

/// Mentoring availability
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mentoring {
    pub available: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

/// An employee in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier
    pub id: EmployeeId,

    pub name: String,
    pub title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,

    /// Skills, most relevant first
    #[serde(default)]
    pub skills: Vec<String>,

    /// Professional interests, most relevant first
    #[serde(default)]
    pub interests: Vec<String>,

    #[serde(default)]
    pub projects: Vec<EmployeeProject>,

    #[serde(default)]
    pub achievements: Vec<Achievement>,

    #[serde(default)]
    pub awards: Vec<Award>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentoring: Option<Mentoring>,

    /// Team back-reference, assigned by the store from team member lists
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

impl Employee {
    /// Create an employee with the required display fields; contact fields start empty
    pub fn new(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
        title: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Employee {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            department: department.into(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            photo_url: None,
            bio: None,
            responsibilities: None,
            skills: Vec::new(),
            interests: Vec::new(),
            projects: Vec::new(),
            achievements: Vec::new(),
            awards: Vec::new(),
            mentoring: None,
            team_id: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_project(mut self, project: EmployeeProject) -> Self {
        self.projects.push(project);
        self
    }

    pub fn with_achievement(mut self, achievement: Achievement) -> Self {
        self.achievements.push(achievement);
        self
    }

    pub fn with_mentoring(mut self, mentoring: Mentoring) -> Self {
        self.mentoring = Some(mentoring);
        self
    }

    /// First `n` skills (display priority order)
    pub fn top_skills(&self, n: usize) -> &[String] {
        &self.skills[..self.skills.len().min(n)]
    }

    /// First `n` interests (display priority order)
    pub fn top_interests(&self, n: usize) -> &[String] {
        &self.interests[..self.interests.len().min(n)]
    }

    /// Whether the employee has opted in to mentoring
    pub fn is_available_mentor(&self) -> bool {
        self.mentoring.as_ref().is_some_and(|m| m.available)
    }

    /// Case-sensitive check of the title against a list of markers
    pub fn title_contains_any<S: AsRef<str>>(&self, markers: &[S]) -> bool {
        markers.iter().any(|m| self.title.contains(m.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_skills_truncates() {
        let e = Employee::new("e1", "A", "Engineer", "Upstream")
            .with_skills(["Drilling", "Well Engineering", "Downhole Technology", "Safety"]);
        assert_eq!(e.top_skills(3), &["Drilling", "Well Engineering", "Downhole Technology"]);
        assert_eq!(e.top_skills(10).len(), 4);
        assert!(e.top_interests(2).is_empty());
    }

    #[test]
    fn test_mentor_availability() {
        let e = Employee::new("e1", "A", "VP", "Finance");
        assert!(!e.is_available_mentor());

        let e = e.with_mentoring(Mentoring {
            available: true,
            topics: vec!["Leadership".into()],
            experience: None,
        });
        assert!(e.is_available_mentor());
    }

    #[test]
    fn test_title_markers_are_case_sensitive() {
        let e = Employee::new("e1", "A", "Drilling Engineer", "Upstream");
        assert!(e.title_contains_any(&["Director", "Engineer"]));
        assert!(!e.title_contains_any(&["engineer"]));
    }

    #[test]
    fn test_deserialize_ignores_authored_team_id() {
        let json = r#"{
            "id": "e100",
            "name": "Test Person",
            "title": "Analyst",
            "department": "Finance",
            "email": "t@example.com",
            "phone": "+1",
            "location": "Riyadh",
            "teamId": "t999"
        }"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.id.as_str(), "e100");
        assert!(e.team_id.is_none());
        assert!(e.skills.is_empty());
        assert!(e.mentoring.is_none());
    }
}
