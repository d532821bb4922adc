//! Field matching for employee and team search
//!
//! All matching is case-insensitive substring containment of an already
//! normalized needle.

use crate::directory::{Employee, Team};
use std::fmt;

/// Searchable employee fields, in the order they are tested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Name,
    Title,
    Department,
    Location,
    Skill,
    Interest,
    Bio,
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmployeeField::Name => "name",
            EmployeeField::Title => "title",
            EmployeeField::Department => "department",
            EmployeeField::Location => "location",
            EmployeeField::Skill => "skill",
            EmployeeField::Interest => "interest",
            EmployeeField::Bio => "bio",
        };
        write!(f, "{}", s)
    }
}

/// Trim and lowercase a query; None when nothing is left
pub fn normalize(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Every field of `employee` containing `needle` (one entry per field kind)
pub fn matching_fields(employee: &Employee, needle: &str) -> Vec<EmployeeField> {
    let mut fields = Vec::new();
    if contains(&employee.name, needle) {
        fields.push(EmployeeField::Name);
    }
    if contains(&employee.title, needle) {
        fields.push(EmployeeField::Title);
    }
    if contains(&employee.department, needle) {
        fields.push(EmployeeField::Department);
    }
    if contains(&employee.location, needle) {
        fields.push(EmployeeField::Location);
    }
    if employee.skills.iter().any(|s| contains(s, needle)) {
        fields.push(EmployeeField::Skill);
    }
    if employee.interests.iter().any(|i| contains(i, needle)) {
        fields.push(EmployeeField::Interest);
    }
    if employee.bio.as_deref().is_some_and(|b| contains(b, needle)) {
        fields.push(EmployeeField::Bio);
    }
    fields
}

/// Short-circuiting form of [`matching_fields`]
pub fn employee_matches(employee: &Employee, needle: &str) -> bool {
    contains(&employee.name, needle)
        || contains(&employee.title, needle)
        || contains(&employee.department, needle)
        || contains(&employee.location, needle)
        || employee.skills.iter().any(|s| contains(s, needle))
        || employee.interests.iter().any(|i| contains(i, needle))
        || employee.bio.as_deref().is_some_and(|b| contains(b, needle))
}

/// Team name, description, or any project name/description contains `needle`
pub fn team_matches(team: &Team, needle: &str) -> bool {
    contains(&team.name, needle)
        || contains(&team.description, needle)
        || team
            .projects
            .iter()
            .any(|p| contains(&p.name, needle) || contains(&p.description, needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::ProjectStatus;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Cyber "), Some("cyber".to_string()));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_matching_fields() {
        let e = Employee::new("e1", "Rania Ahmed", "IT Security Specialist", "Technical Services")
            .with_location("Dhahran, Saudi Arabia")
            .with_skills(["Cybersecurity", "Threat Analysis"])
            .with_interests(["Blockchain Security"])
            .with_bio("Leads security reviews");

        assert_eq!(
            matching_fields(&e, "security"),
            vec![
                EmployeeField::Title,
                EmployeeField::Skill,
                EmployeeField::Interest,
                EmployeeField::Bio
            ]
        );
        assert_eq!(matching_fields(&e, "dhahran"), vec![EmployeeField::Location]);
        assert!(matching_fields(&e, "finance").is_empty());
        assert!(employee_matches(&e, "rania"));
        assert!(!employee_matches(&e, "finance"));
    }

    #[test]
    fn test_email_is_not_searched() {
        let e = Employee::new("e1", "A", "B", "C").with_contact("zz-unique@example.com", "+1");
        assert!(!employee_matches(&e, "zz-unique"));
    }

    #[test]
    fn test_team_matches_projects() {
        let team = Team::new("t1", "Digital Office", "Enterprise platforms").with_project(
            "SOC",
            "Round-the-clock cybersecurity monitoring",
            ProjectStatus::Active,
        );
        assert!(team_matches(&team, "cybersecurity"));
        assert!(team_matches(&team, "soc"));
        assert!(team_matches(&team, "digital"));
        assert!(!team_matches(&team, "drilling"));
    }
}
