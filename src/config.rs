//! Directory configuration
//!
//! Tunables for hierarchy walks, the heuristic direct-reports relation,
//! keyword extraction and team insights. Every field has a default so a YAML
//! document only needs the keys it overrides.

use crate::query::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for the department/title heuristic behind profile "direct reports"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicReportsConfig {
    /// Title substrings that qualify a same-department colleague
    pub role_markers: Vec<String>,
    /// Maximum reports listed per employee
    pub max_reports: usize,
}

impl Default for HeuristicReportsConfig {
    fn default() -> Self {
        Self {
            role_markers: ["Director", "Specialist", "Analyst", "Engineer"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_reports: 3,
        }
    }
}

/// Settings for team insights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// How many of the team's top skills are shown
    pub top_skills_shown: usize,
    /// Title substrings that mark a team leader
    pub leadership_markers: Vec<String>,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            top_skills_shown: 3,
            leadership_markers: ["VP", "Director", "Senior", "Lead"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Top-level directory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Recursion cap for hierarchy walks
    pub max_hierarchy_depth: usize,
    pub heuristic_reports: HeuristicReportsConfig,
    pub vocabulary: Vocabulary,
    pub insights: InsightsConfig,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            max_hierarchy_depth: 64,
            heuristic_reports: HeuristicReportsConfig::default(),
            vocabulary: Vocabulary::default(),
            insights: InsightsConfig::default(),
        }
    }
}

impl DirectoryConfig {
    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: DirectoryConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading directory config");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_hierarchy_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_hierarchy_depth must be at least 1".to_string(),
            ));
        }
        if self.heuristic_reports.role_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::Invalid(
                "heuristic_reports.role_markers must not contain empty markers".to_string(),
            ));
        }
        Ok(())
    }
}
