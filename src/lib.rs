//! Orgdir Employee Directory
//!
//! An in-memory employee directory: flat employee and team records, a curated
//! reporting hierarchy, substring search with keyword interpretation, and
//! roster aggregations for team and profile pages.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! - [`directory`]: entity store with O(1) lookup and declaration order
//! - [`hierarchy`]: canonical org chart (validated tree) and the separate
//!   department/title heuristic for profile "direct reports"
//! - [`query`]: employee/team search, keyword extraction, mentor finder
//! - [`insights`]: dominant department, top skills, team and profile text
//! - [`api`]: the [`Directory`] facade tying the above together
//!
//! Tree algorithms (root paths, descendant counts, pre-order listing) live in
//! the `orgdir-algorithms` workspace crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use orgdir::Directory;
//!
//! let directory = Directory::bundled().unwrap();
//!
//! // Lookup by id
//! let rania = directory.get_employee("e011").unwrap();
//! assert_eq!(rania.name, "Rania Ahmed");
//!
//! // Root-to-target reporting chain
//! let chain = directory.reporting_chain("e011").unwrap();
//! let ids: Vec<&str> = chain.iter().map(|e| e.id.as_str()).collect();
//! assert_eq!(ids, vec!["e001", "e003", "e008", "e011"]);
//!
//! // Free-text search
//! assert!(!directory.search_employees("cybersecurity").is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod directory;
pub mod hierarchy;
pub mod insights;
pub mod query;
pub mod seed;

// Re-export main types for convenience
pub use api::{Directory, LoadError, LoadResult};

pub use config::{
    ConfigError, ConfigResult, DirectoryConfig, HeuristicReportsConfig, InsightsConfig,
};

pub use directory::{
    DirectoryError, DirectoryResult, DirectoryStore, Employee, EmployeeId, ProfileEdit,
    ProjectStatus, Team, TeamId,
};

pub use hierarchy::{
    ChartEntry, HeuristicReports, HierarchyError, HierarchyResult, HierarchySpec, OrgChart,
    OrganizationLevel,
};

pub use insights::{dominant_department, profile_summary, top_skills, TeamInsights};

pub use query::{Interpretation, QueryEngine, Vocabulary};

pub use seed::{SeedData, SeedError, SeedResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
