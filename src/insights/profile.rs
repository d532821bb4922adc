//! Profile summary text

use crate::directory::Employee;

/// A short paragraph describing an employee, built from fixed templates
pub fn profile_summary(employee: &Employee) -> String {
    let mut parts = Vec::new();

    let mut intro = format!(
        "{} is a {} in the {} department",
        employee.name, employee.title, employee.department
    );
    if !employee.location.is_empty() {
        intro.push_str(", based in ");
        intro.push_str(&employee.location);
    }
    intro.push('.');
    parts.push(intro);

    let skills = employee.top_skills(3);
    if !skills.is_empty() {
        parts.push(format!("Their primary expertise includes {}.", skills.join(", ")));
    }

    if !employee.projects.is_empty() {
        let names: Vec<&str> = employee
            .projects
            .iter()
            .take(2)
            .map(|p| p.name.as_str())
            .collect();
        parts.push(format!(
            "{} has contributed to notable projects including {}.",
            employee.name,
            names.join(" and ")
        ));
    }

    if let Some(first) = employee.achievements.first() {
        parts.push(format!("Their accomplishments include {}.", first.title));
    }

    if let Some(mentoring) = employee.mentoring.as_ref().filter(|m| m.available) {
        let topics = if mentoring.topics.is_empty() {
            "various areas".to_string()
        } else {
            mentoring.topics.join(", ")
        };
        parts.push(format!("{} is available for mentoring in {}.", employee.name, topics));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Achievement, EmployeeProject, Mentoring};

    #[test]
    fn test_minimal_profile() {
        let e = Employee::new("e1", "Omar", "Drilling Engineer", "Upstream");
        assert_eq!(
            profile_summary(&e),
            "Omar is a Drilling Engineer in the Upstream department."
        );
    }

    #[test]
    fn test_full_profile() {
        let e = Employee::new("e1", "Rania Ahmed", "IT Security Specialist", "Technical Services")
            .with_location("Dhahran, Saudi Arabia")
            .with_skills(["Cybersecurity", "Threat Analysis", "Incident Response", "SIEM"])
            .with_project(EmployeeProject {
                name: "SOC Modernization".into(),
                description: "New monitoring stack".into(),
                role: "Lead".into(),
                period: "2022".into(),
            })
            .with_project(EmployeeProject {
                name: "Zero Trust".into(),
                description: "Network segmentation".into(),
                role: "Member".into(),
                period: "2023".into(),
            })
            .with_project(EmployeeProject {
                name: "Phishing Drills".into(),
                description: "Awareness".into(),
                role: "Owner".into(),
                period: "2021".into(),
            })
            .with_achievement(Achievement {
                title: "Security Excellence Award".into(),
                date: "2023".into(),
                description: "Recognised for incident handling".into(),
            })
            .with_mentoring(Mentoring {
                available: true,
                topics: vec!["Cybersecurity".into(), "Career Growth".into()],
                experience: None,
            });

        assert_eq!(
            profile_summary(&e),
            "Rania Ahmed is a IT Security Specialist in the Technical Services department, \
             based in Dhahran, Saudi Arabia. \
             Their primary expertise includes Cybersecurity, Threat Analysis, Incident Response. \
             Rania Ahmed has contributed to notable projects including SOC Modernization and Zero Trust. \
             Their accomplishments include Security Excellence Award. \
             Rania Ahmed is available for mentoring in Cybersecurity, Career Growth."
        );
    }

    #[test]
    fn test_unavailable_mentor_omitted() {
        let e = Employee::new("e1", "Ziad", "CFO", "Finance").with_mentoring(Mentoring {
            available: false,
            topics: vec!["Finance".into()],
            experience: None,
        });
        assert!(!profile_summary(&e).contains("mentoring"));
    }
}
