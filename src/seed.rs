//! Seed data loading
//!
//! The directory ships with a bundled JSON document holding employees, teams
//! and the curated hierarchy. Alternative documents with the same shape can
//! be loaded from a string or a file.

use crate::directory::{Employee, Team};
use crate::hierarchy::HierarchySpec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const BUNDLED: &str = include_str!("../data/directory.json");

/// Seed loading errors
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SeedResult<T> = Result<T, SeedError>;

/// Raw directory contents before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub teams: Vec<Team>,
    pub hierarchy: HierarchySpec,
}

impl SeedData {
    /// The document compiled into the crate
    pub fn bundled() -> SeedResult<Self> {
        Self::from_json_str(BUNDLED)
    }

    pub fn from_json_str(json: &str) -> SeedResult<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        debug!(
            employees = seed.employees.len(),
            teams = seed.teams.len(),
            "Parsed seed data"
        );
        Ok(seed)
    }

    pub fn from_file(path: impl AsRef<Path>) -> SeedResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_parses() {
        let seed = SeedData::bundled().unwrap();
        assert_eq!(seed.employees.len(), 15);
        assert_eq!(seed.teams.len(), 6);
        assert_eq!(seed.hierarchy.root.as_str(), "e001");
        assert_eq!(seed.hierarchy.reports.len(), 6);
    }

    #[test]
    fn test_minimal_document() {
        let json = r#"{
            "employees": [
                {"id": "a", "name": "A", "title": "CEO", "department": "Exec",
                 "email": "a@example.com", "phone": "1", "location": "Riyadh"}
            ],
            "hierarchy": {"root": "a"}
        }"#;
        let seed = SeedData::from_json_str(json).unwrap();
        assert!(seed.teams.is_empty());
        assert!(seed.hierarchy.reports.is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let err = SeedData::from_json_str("{\"employees\": [}").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", BUNDLED).unwrap();
        let seed = SeedData::from_file(file.path()).unwrap();
        assert_eq!(seed.employees[10].name, "Rania Ahmed");
    }
}
