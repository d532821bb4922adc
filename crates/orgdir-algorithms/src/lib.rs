pub mod common;
pub mod pathfinding;
pub mod topology;

pub use common::{NodeId, TreeError, TreeView};
pub use pathfinding::{root_path, PathResult};
pub use topology::{depth_of, descendant_count, preorder};
