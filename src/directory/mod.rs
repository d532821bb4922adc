//! Directory entity model and store
//!
//! Employees and teams as flat records, held in declaration order with
//! O(1) lookup by id. Team membership back-references are resolved once
//! at load time.

pub mod edit;
pub mod employee;
pub mod store;
pub mod team;
pub mod types;

pub use edit::{split_list, ProfileEdit};
pub use employee::{Achievement, Award, Employee, EmployeeProject, Mentoring};
pub use store::{DirectoryError, DirectoryResult, DirectoryStore};
pub use team::{ProjectStatus, Team, TeamProject};
pub use types::{EmployeeId, TeamId};
