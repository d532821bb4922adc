//! Session-local profile edits
//!
//! A `ProfileEdit` mirrors the editable part of a profile in its form shape:
//! list fields are comma-separated text. Applying it yields a new record for
//! `DirectoryStore::put`; the original record is never mutated.

use super::employee::{Employee, Mentoring};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileEdit {
    pub bio: String,
    pub responsibilities: String,
    /// Comma-separated skills
    pub skills: String,
    /// Comma-separated interests
    pub interests: String,
    pub mentoring_available: bool,
    /// Comma-separated mentoring topics
    pub mentoring_topics: String,
    pub mentoring_experience: String,
}

impl ProfileEdit {
    /// Pre-fill an edit from the current record
    pub fn from_employee(employee: &Employee) -> Self {
        let mentoring = employee.mentoring.clone().unwrap_or_default();
        ProfileEdit {
            bio: employee.bio.clone().unwrap_or_default(),
            responsibilities: employee.responsibilities.clone().unwrap_or_default(),
            skills: employee.skills.join(", "),
            interests: employee.interests.join(", "),
            mentoring_available: mentoring.available,
            mentoring_topics: mentoring.topics.join(", "),
            mentoring_experience: mentoring.experience.unwrap_or_default(),
        }
    }

    /// Produce the edited copy of `employee`
    pub fn apply(&self, employee: &Employee) -> Employee {
        let mut updated = employee.clone();
        updated.bio = Some(self.bio.clone());
        updated.responsibilities = Some(self.responsibilities.clone());
        updated.skills = split_list(&self.skills);
        updated.interests = split_list(&self.interests);
        updated.mentoring = Some(Mentoring {
            available: self.mentoring_available,
            topics: split_list(&self.mentoring_topics),
            experience: Some(self.mentoring_experience.clone()),
        });
        updated
    }
}

/// Split comma-separated text, trimming entries and dropping empty ones
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" Python,  SQL ,, Rust,"), vec!["Python", "SQL", "Rust"]);
        assert!(split_list("  ").is_empty());
    }

    #[test]
    fn test_round_trip_through_form() {
        let e = Employee::new("e1", "Sarah", "Data Scientist", "Technical Services")
            .with_skills(["Machine Learning", "Python"])
            .with_interests(["NLP"]);
        let edit = ProfileEdit::from_employee(&e);
        assert_eq!(edit.skills, "Machine Learning, Python");
        assert!(!edit.mentoring_available);

        let same = edit.apply(&e);
        assert_eq!(same.skills, e.skills);
        assert_eq!(same.interests, e.interests);
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let e = Employee::new("e1", "Sarah", "Data Scientist", "Technical Services");
        let edit = ProfileEdit {
            bio: "Builds forecasting models".into(),
            skills: "Forecasting, Python".into(),
            mentoring_available: true,
            mentoring_topics: "Data Science, Career Development".into(),
            ..ProfileEdit::default()
        };
        let updated = edit.apply(&e);

        assert_eq!(updated.bio.as_deref(), Some("Builds forecasting models"));
        assert_eq!(updated.skills, vec!["Forecasting", "Python"]);
        assert!(updated.is_available_mentor());
        assert_eq!(
            updated.mentoring.as_ref().unwrap().topics,
            vec!["Data Science", "Career Development"]
        );
        assert!(e.bio.is_none());
        assert_eq!(updated.id, e.id);
    }
}
