//! Pure traversal helpers over the node model.

use std::collections::HashMap;

use crate::node::TreeNode;

/// Whether a node is expandable at all.
///
/// Decided by the declared count, not by the loaded children: a node whose
/// children have not been fetched yet still has children.
pub fn has_children(node: &TreeNode) -> bool {
    node.num_children > 0
}

/// Whether every declared child has been loaded.
pub fn is_fully_fetched(node: &TreeNode) -> bool {
    node.children.len() == node.num_children
}

/// Whether a load-more control should be offered for this node.
pub fn should_show_more(node: &TreeNode) -> bool {
    node.children.len() < node.num_children
}

/// Build an id-to-node map over a forest for O(1) lookup by id.
///
/// Rebuilt from the current forest whenever the structure changes; entries
/// are clones, so the map never aliases controller state across a
/// rehydration boundary.
pub fn build_cache(nodes: &[TreeNode]) -> HashMap<String, TreeNode> {
    let mut cache = HashMap::new();
    insert_nodes(&mut cache, nodes);
    cache
}

fn insert_nodes(cache: &mut HashMap<String, TreeNode>, nodes: &[TreeNode]) {
    for node in nodes {
        cache.insert(node.id.clone(), node.clone());
        if !node.children.is_empty() {
            insert_nodes(cache, &node.children);
        }
    }
}
