//! Canonical reporting hierarchy
//!
//! The org chart is curated data: a root id plus, per manager, the ordered
//! ids of their reports. It is assembled once into a validated tree view from
//! `orgdir-algorithms`. This module is the adapter between directory ids and
//! the dense node ids the algorithms work on.
//!
//! The department/title heuristic in [`heuristic`] is a separate relation and
//! is never consulted here.

pub mod heuristic;

pub use heuristic::HeuristicReports;

use crate::directory::{DirectoryStore, Employee, EmployeeId};
use indexmap::IndexMap;
use orgdir_algorithms::{
    depth_of, descendant_count, preorder, root_path, NodeId as AlgoNodeId, TreeError, TreeView,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::info;

/// Errors raised while assembling the canonical hierarchy
#[derive(Error, Debug, PartialEq)]
pub enum HierarchyError {
    #[error("Hierarchy references unknown employee {0}")]
    UnknownEmployee(EmployeeId),

    #[error("Root {0} is listed as someone's report")]
    RootHasManager(EmployeeId),

    #[error("Employee {employee} reports to both {first} and {second}")]
    MultipleManagers {
        employee: EmployeeId,
        first: EmployeeId,
        second: EmployeeId,
    },

    #[error("Employee {0} is not connected to the root")]
    Detached(EmployeeId),

    #[error("Malformed hierarchy: {0}")]
    Malformed(String),

    #[error("Employee {employee} sits {depth} levels deep, above the limit of {max}")]
    TooDeep {
        employee: EmployeeId,
        depth: usize,
        max: usize,
    },
}

pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Curated hierarchy as an adjacency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchySpec {
    /// The single top-of-tree employee
    pub root: EmployeeId,
    /// Manager id -> report ids, in display order
    #[serde(default)]
    pub reports: IndexMap<EmployeeId, Vec<EmployeeId>>,
}

impl HierarchySpec {
    pub fn new(root: impl Into<EmployeeId>) -> Self {
        Self {
            root: root.into(),
            reports: IndexMap::new(),
        }
    }

    pub fn with_reports<I, S>(mut self, manager: impl Into<EmployeeId>, reports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EmployeeId>,
    {
        self.reports
            .entry(manager.into())
            .or_default()
            .extend(reports.into_iter().map(Into::into));
        self
    }
}

/// Named organisation level for a depth in the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationLevel {
    Corporate,
    SeniorVicePresident,
    VicePresident,
    Department,
    Division,
    Section,
    UnitGroup,
}

impl OrganizationLevel {
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => OrganizationLevel::Corporate,
            1 => OrganizationLevel::SeniorVicePresident,
            2 => OrganizationLevel::VicePresident,
            3 => OrganizationLevel::Department,
            4 => OrganizationLevel::Division,
            5 => OrganizationLevel::Section,
            _ => OrganizationLevel::UnitGroup,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrganizationLevel::Corporate => "Corporate",
            OrganizationLevel::SeniorVicePresident => "Senior Vice President",
            OrganizationLevel::VicePresident => "Vice President",
            OrganizationLevel::Department => "Department",
            OrganizationLevel::Division => "Division",
            OrganizationLevel::Section => "Section",
            OrganizationLevel::UnitGroup => "Unit/Group",
        }
    }
}

impl fmt::Display for OrganizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of a flattened org chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry<'a> {
    pub employee: &'a Employee,
    pub depth: usize,
}

/// The canonical reporting tree
///
/// Node ids handed to the algorithms crate are store declaration positions;
/// `members` keeps chart order, which matches the view's dense order.
#[derive(Debug, Clone)]
pub struct OrgChart {
    root: EmployeeId,
    view: TreeView,
    members: IndexMap<EmployeeId, AlgoNodeId>,
    max_depth: usize,
}

impl OrgChart {
    /// Assemble and validate the tree against the store's employees
    pub fn build(
        store: &DirectoryStore,
        spec: &HierarchySpec,
        max_depth: usize,
    ) -> HierarchyResult<Self> {
        let mut members: IndexMap<EmployeeId, AlgoNodeId> = IndexMap::new();
        let mut children: Vec<Vec<usize>> = Vec::new();

        let root = intern(&mut members, &mut children, store, &spec.root)?;
        for (manager, reports) in &spec.reports {
            let m = intern(&mut members, &mut children, store, manager)?;
            for report in reports {
                let r = intern(&mut members, &mut children, store, report)?;
                children[m].push(r);
            }
        }

        let index_to_node: Vec<AlgoNodeId> = members.values().copied().collect();
        let node_to_index: HashMap<AlgoNodeId, usize> = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();

        let view = TreeView::from_adjacency_list(index_to_node, node_to_index, root, children)
            .map_err(|err| tree_error(store, err))?;

        let chart = OrgChart {
            root: spec.root.clone(),
            view,
            members,
            max_depth,
        };

        for (id, &node) in &chart.members {
            let depth = depth_of(&chart.view, node).unwrap_or(0);
            if depth > max_depth {
                return Err(HierarchyError::TooDeep {
                    employee: id.clone(),
                    depth,
                    max: max_depth,
                });
            }
        }

        info!(
            root = %spec.root,
            nodes = chart.members.len(),
            "Canonical hierarchy built"
        );
        Ok(chart)
    }

    /// Id of the hierarchy root
    pub fn root_id(&self) -> &EmployeeId {
        &self.root
    }

    /// Current store record of the root
    pub fn root<'s>(&self, store: &'s DirectoryStore) -> Option<&'s Employee> {
        store.get_employee(self.root_id().as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    /// Number of employees in the chart
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn id_at(&self, idx: usize) -> Option<&EmployeeId> {
        self.members.get_index(idx).map(|(id, _)| id)
    }

    fn id_for_node(&self, node: AlgoNodeId) -> Option<&EmployeeId> {
        self.id_at(self.view.index_of(node)?)
    }

    /// Manager of `id` in the chart (None for the root or unknown ids)
    pub fn parent_of(&self, id: &str) -> Option<&EmployeeId> {
        let idx = self.members.get_index_of(id)?;
        self.id_at(self.view.parent[idx]?)
    }

    /// Ids of the direct reports of `id`, in curated order
    pub fn children_of(&self, id: &str) -> Vec<&EmployeeId> {
        match self.members.get_index_of(id) {
            Some(idx) => self
                .view
                .children(idx)
                .iter()
                .filter_map(|&c| self.id_at(c))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Current store records of the direct reports of `id`
    pub fn direct_reports<'s>(&self, store: &'s DirectoryStore, id: &str) -> Vec<&'s Employee> {
        self.children_of(id)
            .into_iter()
            .filter_map(|c| store.get_employee(c.as_str()))
            .collect()
    }

    /// Ids on the path from the root to `target`, both ends included
    pub fn reporting_chain_ids(&self, target: &str) -> Option<Vec<EmployeeId>> {
        let node = *self.members.get(target)?;
        let result = root_path(&self.view, node, self.max_depth)?;
        result
            .path
            .iter()
            .map(|&n| self.id_for_node(n).cloned())
            .collect()
    }

    /// Employees on the path from the root to `target`, both ends included
    ///
    /// The root's own chain has length 1. None when `target` is not in the chart.
    pub fn reporting_chain<'s>(&self, store: &'s DirectoryStore, target: &str) -> Option<Vec<&'s Employee>> {
        self.reporting_chain_ids(target)?
            .iter()
            .map(|id| store.get_employee(id.as_str()))
            .collect()
    }

    /// Number of employees below `id` at any depth
    pub fn total_reports(&self, id: &str) -> Option<usize> {
        let node = *self.members.get(id)?;
        descendant_count(&self.view, node, self.max_depth)
    }

    /// Edges between the root and `id`
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        let node = *self.members.get(id)?;
        depth_of(&self.view, node)
    }

    pub fn organization_level(&self, id: &str) -> Option<OrganizationLevel> {
        self.depth_of(id).map(OrganizationLevel::from_depth)
    }

    /// Pre-order listing of the chart with depths
    pub fn entries<'s>(&self, store: &'s DirectoryStore) -> Vec<ChartEntry<'s>> {
        preorder(&self.view, self.max_depth)
            .into_iter()
            .filter_map(|(node, depth)| {
                let id = self.id_for_node(node)?;
                let employee = store.get_employee(id.as_str())?;
                Some(ChartEntry { employee, depth })
            })
            .collect()
    }
}

fn intern(
    members: &mut IndexMap<EmployeeId, AlgoNodeId>,
    children: &mut Vec<Vec<usize>>,
    store: &DirectoryStore,
    id: &EmployeeId,
) -> HierarchyResult<usize> {
    if let Some(idx) = members.get_index_of(id) {
        return Ok(idx);
    }
    let position = store
        .position_of(id.as_str())
        .ok_or_else(|| HierarchyError::UnknownEmployee(id.clone()))?;
    let (idx, _) = members.insert_full(id.clone(), position as AlgoNodeId);
    children.push(Vec::new());
    Ok(idx)
}

fn tree_error(store: &DirectoryStore, err: TreeError) -> HierarchyError {
    let id = |node: AlgoNodeId| {
        store
            .employee_at(node as usize)
            .map(|e| e.id.clone())
            .unwrap_or_else(|| EmployeeId::new(node.to_string()))
    };
    match err {
        TreeError::RootHasParent(node) => HierarchyError::RootHasManager(id(node)),
        TreeError::MultipleParents {
            node,
            first,
            second,
        } => HierarchyError::MultipleManagers {
            employee: id(node),
            first: id(first),
            second: id(second),
        },
        TreeError::Unreachable(node) => HierarchyError::Detached(id(node)),
        TreeError::SizeMismatch { .. } | TreeError::IndexOutOfRange(_) => {
            HierarchyError::Malformed(err.to_string())
        }
    }
}
