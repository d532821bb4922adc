//! Aggregations over team rosters and profile text

pub mod aggregate;
pub mod profile;
pub mod team;

pub use aggregate::{distinct_locations, dominant_department, leaders, top_skills};
pub use profile::profile_summary;
pub use team::TeamInsights;
