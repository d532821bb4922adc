//! Pathfinding on rooted trees
//!
//! Resolves the root-to-node path with a depth-first search.

use super::common::{NodeId, TreeView};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    /// Root first, target last
    pub path: Vec<NodeId>,
}

impl PathResult {
    /// Number of edges between source and target
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Depth-First Search from the root to `target`
///
/// Children are explored in curated order and the first path found is
/// returned. The tree invariant means at most one path exists. Branches deeper
/// than `max_depth` edges are not explored.
pub fn root_path(view: &TreeView, target: NodeId, max_depth: usize) -> Option<PathResult> {
    let target_idx = view.index_of(target)?;
    let mut path = Vec::new();

    if dfs(view, view.root, target_idx, 0, max_depth, &mut path) {
        let path: Vec<NodeId> = path.into_iter().map(|idx| view.index_to_node[idx]).collect();
        return Some(PathResult {
            source: view.root_node(),
            target,
            path,
        });
    }

    None
}

fn dfs(
    view: &TreeView,
    current: usize,
    target: usize,
    depth: usize,
    max_depth: usize,
    path: &mut Vec<usize>,
) -> bool {
    path.push(current);
    if current == target {
        return true;
    }

    if depth < max_depth {
        for &child in view.children(current) {
            if dfs(view, child, target, depth + 1, max_depth, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::sample_view;

    #[test]
    fn test_root_path_to_leaf() {
        let view = sample_view();
        let result = root_path(&view, 50, 16).unwrap();
        assert_eq!(result.path, vec![10, 20, 50]);
        assert_eq!(result.source, 10);
        assert_eq!(result.hops(), 2);
    }

    #[test]
    fn test_root_path_to_root() {
        let view = sample_view();
        let result = root_path(&view, 10, 16).unwrap();
        assert_eq!(result.path, vec![10]);
        assert_eq!(result.hops(), 0);
    }

    #[test]
    fn test_root_path_unknown_target() {
        let view = sample_view();
        assert!(root_path(&view, 999, 16).is_none());
    }

    #[test]
    fn test_root_path_respects_depth_cap() {
        let view = sample_view();
        assert!(root_path(&view, 60, 1).is_none());
        assert!(root_path(&view, 30, 1).is_some());
    }
}
