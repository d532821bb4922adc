//! Tree topology analysis
//!
//! Descendant counting, depth lookup and pre-order flattening.

use super::common::{NodeId, TreeView};

/// Count every node below `node` (children, grandchildren, ...)
///
/// Recursion stops `max_depth` levels below `node`; nodes past the cap are
/// not counted. Returns None for an unknown node.
pub fn descendant_count(view: &TreeView, node: NodeId, max_depth: usize) -> Option<usize> {
    let idx = view.index_of(node)?;
    Some(count_below(view, idx, 0, max_depth))
}

fn count_below(view: &TreeView, idx: usize, depth: usize, max_depth: usize) -> usize {
    if depth >= max_depth {
        return 0;
    }
    view.children(idx)
        .iter()
        .map(|&child| 1 + count_below(view, child, depth + 1, max_depth))
        .sum()
}

/// Number of edges between the root and `node`
pub fn depth_of(view: &TreeView, node: NodeId) -> Option<usize> {
    let mut idx = view.index_of(node)?;
    let mut depth = 0;
    while let Some(parent) = view.parent[idx] {
        depth += 1;
        idx = parent;
        // Construction rules out cycles; this only guards a hand-built view
        if depth > view.node_count {
            return None;
        }
    }
    Some(depth)
}

/// Pre-order listing of `(node, depth)` pairs, children in curated order
pub fn preorder(view: &TreeView, max_depth: usize) -> Vec<(NodeId, usize)> {
    let mut out = Vec::with_capacity(view.node_count);
    let mut stack = vec![(view.root, 0usize)];

    while let Some((idx, depth)) = stack.pop() {
        out.push((view.index_to_node[idx], depth));
        if depth < max_depth {
            for &child in view.children(idx).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    out
}
