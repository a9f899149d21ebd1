//! The tree's data model.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One entry in the tree.
///
/// `children` holds only the pages fetched so far; `num_children` is the
/// authoritative count declared upstream. A collapsed node with an empty
/// `children` vector says nothing about whether children exist, only that
/// none have been loaded yet.
///
/// Derived `PartialEq` is the structural comparison used to decide whether
/// externally supplied data actually changed; ownership makes the comparison
/// total and cycle-free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeNode {
    /// Stable identifier, unique among siblings at minimum. Cache and
    /// reconciliation key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display-only description.
    pub description: String,
    /// Children fetched so far, in order. `children.len() <= num_children`.
    pub children: Vec<TreeNode>,
    /// Total number of children declared to exist upstream.
    pub num_children: usize,
    /// Number of child pages already fetched (0 = none). Only ever
    /// incremented, exactly once per successful fetch.
    pub page: usize,
    /// Whether the subtree is currently visible.
    pub expanded: bool,
    /// Whether the node is marked selected.
    pub selected: bool,
}

impl TreeNode {
    /// Create a node with no children.
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a node whose children are fully present.
    pub fn branch(id: impl Into<String>, name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        let num_children = children.len();
        Self {
            id: id.into(),
            name: name.into(),
            children,
            num_children,
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare the upstream child count without supplying the children.
    ///
    /// This is how a host marks a node lazily expandable: the children stay
    /// empty until the loader is asked for the first page.
    pub fn num_children(mut self, count: usize) -> Self {
        self.num_children = count;
        self
    }

    /// Mark the node expanded.
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }
}

/// Host-supplied normalization hook.
///
/// Applied uniformly to the initial forest and to every fetch result before
/// it enters controller state.
pub type ParseFn = Arc<dyn Fn(Vec<TreeNode>) -> Vec<TreeNode> + Send + Sync>;

/// Assign positional fallback ids to nodes that arrived without one.
///
/// Positional keys go stale when siblings are reordered; hosts should supply
/// real ids whenever they can.
pub fn normalize(nodes: &mut [TreeNode]) {
    assign_fallback_ids(nodes, "", 0);
}

/// Like [`normalize`], but for a fetched page: fallback ids are scoped under
/// the requesting parent and offset past the siblings already loaded, so
/// pages from different nodes or different fetches cannot collide.
pub fn normalize_under(nodes: &mut [TreeNode], parent_id: &str, offset: usize) {
    assign_fallback_ids(nodes, parent_id, offset);
}

fn assign_fallback_ids(nodes: &mut [TreeNode], parent: &str, offset: usize) {
    for (index, node) in nodes.iter_mut().enumerate() {
        if node.id.is_empty() {
            let position = offset + index;
            node.id = if parent.is_empty() {
                position.to_string()
            } else {
                format!("{parent}/{position}")
            };
            log::warn!(
                "node {:?} has no id, falling back to positional key {}",
                node.name,
                node.id
            );
        }
        let parent_id = node.id.clone();
        assign_fallback_ids(&mut node.children, &parent_id, 0);
    }
}
