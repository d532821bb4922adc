//! Query engine
//!
//! Rank-free substring search over employees and teams, plus keyword-driven
//! interpretation of natural-language questions. Results always follow store
//! declaration order; nothing is scored.
//!
//! # Example
//!
//! ```rust
//! use orgdir::directory::{DirectoryStore, Employee};
//! use orgdir::query::QueryEngine;
//!
//! let store = DirectoryStore::from_records(
//!     vec![Employee::new("e1", "Rania Ahmed", "IT Security Specialist", "Technical Services")
//!         .with_skills(["Cybersecurity"])],
//!     vec![],
//! ).unwrap();
//!
//! let engine = QueryEngine::new();
//! assert_eq!(engine.search_employees(&store, "CYBER").len(), 1);
//! assert!(engine.search_employees(&store, "   ").is_empty());
//! ```

pub mod matcher;
pub mod mentors;
pub mod vocabulary;

pub use matcher::{employee_matches, matching_fields, normalize, team_matches, EmployeeField};
pub use mentors::find_mentors;
pub use vocabulary::Vocabulary;

use crate::directory::{DirectoryStore, Employee, Team};
use tracing::debug;

/// Outcome of a natural-language query
#[derive(Debug, Clone)]
pub struct Interpretation<'a> {
    /// Extracted vocabulary terms, in extraction order
    pub keywords: Vec<String>,
    pub employees: Vec<&'a Employee>,
    pub teams: Vec<&'a Team>,
}

impl Interpretation<'_> {
    /// Whether extraction recognised nothing in the query
    pub fn is_unrecognized(&self) -> bool {
        self.keywords.is_empty()
    }

    /// One-line description of the people found
    pub fn summary(&self) -> String {
        format!(
            "I found {} people matching \"{}\"",
            self.employees.len(),
            self.keywords.join(", ")
        )
    }
}

/// Search and interpretation over a [`DirectoryStore`]
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    vocabulary: Vocabulary,
}

impl QueryEngine {
    /// Engine with the default vocabularies
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Employees with any searchable field containing `query`
    ///
    /// An empty or whitespace-only query returns nothing.
    pub fn search_employees<'s>(&self, store: &'s DirectoryStore, query: &str) -> Vec<&'s Employee> {
        let Some(needle) = normalize(query) else {
            return Vec::new();
        };
        let results: Vec<&Employee> = store
            .iter_employees()
            .filter(|e| employee_matches(e, &needle))
            .collect();
        debug!(query = %needle, hits = results.len(), "Employee search");
        results
    }

    /// Employees matching ANY of `terms`; blank terms are ignored
    pub fn search_employees_any<'s, S: AsRef<str>>(
        &self,
        store: &'s DirectoryStore,
        terms: &[S],
    ) -> Vec<&'s Employee> {
        let needles: Vec<String> = terms.iter().filter_map(|t| normalize(t.as_ref())).collect();
        if needles.is_empty() {
            return Vec::new();
        }
        store
            .iter_employees()
            .filter(|e| needles.iter().any(|n| employee_matches(e, n)))
            .collect()
    }

    /// Teams matching ANY keyword against name, description or projects
    pub fn search_teams<'s, S: AsRef<str>>(&self, store: &'s DirectoryStore, keywords: &[S]) -> Vec<&'s Team> {
        let needles: Vec<String> = keywords.iter().filter_map(|k| normalize(k.as_ref())).collect();
        if needles.is_empty() {
            return Vec::new();
        }
        let results: Vec<&Team> = store
            .all_teams()
            .into_iter()
            .filter(|t| needles.iter().any(|n| team_matches(t, n)))
            .collect();
        debug!(keywords = ?needles, hits = results.len(), "Team search");
        results
    }

    /// Vocabulary terms found in `query`
    pub fn extract_keywords(&self, query: &str) -> Vec<String> {
        self.vocabulary.extract(query)
    }

    /// Answer a free-text question through keyword extraction
    ///
    /// Employees and teams are matched against the extracted terms only. When
    /// nothing is extracted the result is empty; the raw text is not searched.
    pub fn interpret<'s>(&self, store: &'s DirectoryStore, query: &str) -> Interpretation<'s> {
        let keywords = self.extract_keywords(query);
        let employees = self.search_employees_any(store, keywords.as_slice());
        let teams = self.search_teams(store, keywords.as_slice());
        debug!(
            keywords = ?keywords,
            employees = employees.len(),
            teams = teams.len(),
            "Interpreted query"
        );
        Interpretation {
            keywords,
            employees,
            teams,
        }
    }
}
