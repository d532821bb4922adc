//! Fixed keyword vocabularies for natural-language queries
//!
//! Extraction is plain substring matching of each vocabulary term against the
//! lowercased query. There is no tokenization, so short terms such as "it"
//! also match inside longer words ("digital").

use serde::{Deserialize, Serialize};

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The four keyword lists, tested in this order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub departments: Vec<String>,
    pub roles: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skills: terms(&[
                "cybersecurity",
                "it",
                "security",
                "engineering",
                "finance",
                "petroleum",
                "data",
                "analysis",
                "hr",
                "leadership",
                "sap",
            ]),
            locations: terms(&["dhahran", "riyadh", "jeddah", "saudi", "arabia", "dubai"]),
            departments: terms(&["hr", "finance", "technical", "upstream", "engineering", "it"]),
            roles: terms(&[
                "manager",
                "director",
                "vp",
                "senior",
                "specialist",
                "analyst",
                "engineer",
            ]),
        }
    }
}

impl Vocabulary {
    /// Every term contained in the lowercased query
    ///
    /// Output is skills, then locations, then departments, then roles. A term
    /// present in two lists is reported twice.
    pub fn extract(&self, query: &str) -> Vec<String> {
        let lowered = query.to_lowercase();
        [&self.skills, &self.locations, &self.departments, &self.roles]
            .into_iter()
            .flat_map(|list| list.iter())
            .filter(|term| !term.is_empty() && lowered.contains(term.to_lowercase().as_str()))
            .cloned()
            .collect()
    }

    /// Total number of terms across all lists
    pub fn len(&self) -> usize {
        self.skills.len() + self.locations.len() + self.departments.len() + self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
