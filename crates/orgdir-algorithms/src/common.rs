//! Shared utilities for tree algorithms
//!
//! Provides a read-only, validated view of a rooted tree for algorithm execution.

use std::collections::{HashMap, VecDeque};
use thiserror::Error;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// Structural violations detected while assembling a [`TreeView`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("adjacency has {rows} rows for {nodes} nodes")]
    SizeMismatch { nodes: usize, rows: usize },

    #[error("index {0} is outside the tree")]
    IndexOutOfRange(usize),

    #[error("root node {0} is listed as a child")]
    RootHasParent(NodeId),

    #[error("node {node} has two parents ({first} and {second})")]
    MultipleParents {
        node: NodeId,
        first: NodeId,
        second: NodeId,
    },

    #[error("node {0} is not reachable from the root")]
    Unreachable(NodeId),
}

/// A dense, integer-indexed view of a rooted tree.
///
/// Children are stored in Compressed Sparse Row format so the curated order of
/// every child list is preserved. Construction guarantees the tree invariant:
/// the root has no parent, every other node has exactly one, and every node is
/// reachable from the root (which rules out cycles).
#[derive(Debug, Clone)]
pub struct TreeView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,
    /// Dense index of the root
    pub root: usize,
    /// Parent of each node (None only for the root)
    pub parent: Vec<Option<usize>>,

    /// Offsets into `child_targets`. Size = node_count + 1
    pub child_offsets: Vec<usize>,
    /// Contiguous array of child indices
    pub child_targets: Vec<usize>,
}

impl TreeView {
    /// Get the children of a node, in curated order
    pub fn children(&self, idx: usize) -> &[usize] {
        let start = self.child_offsets[idx];
        let end = self.child_offsets[idx + 1];
        &self.child_targets[start..end]
    }

    /// Number of direct children
    pub fn out_degree(&self, idx: usize) -> usize {
        self.child_offsets[idx + 1] - self.child_offsets[idx]
    }

    /// Dense index for a NodeId
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// NodeId of the root
    pub fn root_node(&self) -> NodeId {
        self.index_to_node[self.root]
    }

    /// Build a validated view from per-node child lists
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        root: usize,
        children: Vec<Vec<usize>>,
    ) -> Result<Self, TreeError> {
        let node_count = index_to_node.len();
        if children.len() != node_count {
            return Err(TreeError::SizeMismatch {
                nodes: node_count,
                rows: children.len(),
            });
        }
        if root >= node_count {
            return Err(TreeError::IndexOutOfRange(root));
        }

        let mut parent: Vec<Option<usize>> = vec![None; node_count];
        let mut child_offsets = Vec::with_capacity(node_count + 1);
        let mut child_targets = Vec::new();

        child_offsets.push(0);
        for (p, row) in children.into_iter().enumerate() {
            for c in row {
                if c >= node_count {
                    return Err(TreeError::IndexOutOfRange(c));
                }
                if c == root {
                    return Err(TreeError::RootHasParent(index_to_node[root]));
                }
                if let Some(existing) = parent[c] {
                    return Err(TreeError::MultipleParents {
                        node: index_to_node[c],
                        first: index_to_node[existing],
                        second: index_to_node[p],
                    });
                }
                parent[c] = Some(p);
                child_targets.push(c);
            }
            child_offsets.push(child_targets.len());
        }

        let view = TreeView {
            node_count,
            index_to_node,
            node_to_index,
            root,
            parent,
            child_offsets,
            child_targets,
        };

        // Single-parent nodes that the root cannot reach form detached chains or cycles
        let mut visited = vec![false; node_count];
        let mut queue = VecDeque::new();
        visited[root] = true;
        queue.push_back(root);
        while let Some(idx) = queue.pop_front() {
            for &c in view.children(idx) {
                if !visited[c] {
                    visited[c] = true;
                    queue.push_back(c);
                }
            }
        }
        if let Some(idx) = visited.iter().position(|v| !v) {
            return Err(TreeError::Unreachable(view.index_to_node[idx]));
        }

        Ok(view)
    }
}

#[cfg(test)]
pub(crate) fn sample_view() -> TreeView {
    //        10
    //      /    \
    //    20      30
    //   /  \       \
    //  40  50       60
    let index_to_node = vec![10, 20, 30, 40, 50, 60];
    let node_to_index = index_to_node
        .iter()
        .enumerate()
        .map(|(i, &n)| (n, i))
        .collect();
    let children = vec![vec![1, 2], vec![3, 4], vec![5], vec![], vec![], vec![]];
    TreeView::from_adjacency_list(index_to_node, node_to_index, 0, children).unwrap()
}
