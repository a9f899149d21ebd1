//! Sample data and a paging loader for demos and tests.
//!
//! [`SampleLoader`] serves pages out of a fully materialized forest,
//! respecting the page limit and capping the last page at the remaining
//! count, which is exactly the contract a remote collaborator is expected
//! to honor.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::LoadError;
use crate::loader::ChildLoader;
use crate::node::TreeNode;

/// A fully materialized demo forest: a small organization.
pub fn sample_forest() -> Vec<TreeNode> {
    vec![
        TreeNode::branch(
            "org",
            "Acme Corp",
            vec![
                TreeNode::branch(
                    "eng",
                    "Engineering",
                    (1..=12)
                        .map(|i| {
                            TreeNode::leaf(format!("eng/{i}"), format!("Engineer {i}"))
                                .description("builds things")
                        })
                        .collect(),
                )
                .description("ships the product"),
                TreeNode::branch(
                    "design",
                    "Design",
                    (1..=5)
                        .map(|i| TreeNode::leaf(format!("design/{i}"), format!("Designer {i}")))
                        .collect(),
                ),
                TreeNode::branch(
                    "sales",
                    "Sales",
                    (1..=8)
                        .map(|i| TreeNode::leaf(format!("sales/{i}"), format!("Rep {i}")))
                        .collect(),
                )
                .description("talks to people"),
                TreeNode::leaf("office", "Office Dog").description("morale"),
            ],
        )
        .description("the whole company"),
    ]
}

/// Strip a forest down to its lazy shape: children cleared, declared counts
/// kept. This is what a host would hand the tree up front.
pub fn lazy_roots(full: &[TreeNode]) -> Vec<TreeNode> {
    full.iter().map(lazy_shape).collect()
}

fn lazy_shape(node: &TreeNode) -> TreeNode {
    TreeNode {
        children: Vec::new(),
        num_children: if node.children.is_empty() {
            node.num_children
        } else {
            node.children.len()
        },
        expanded: false,
        ..node.clone()
    }
}

/// A loader that pages children out of a fully materialized forest.
pub struct SampleLoader {
    catalog: HashMap<String, Vec<TreeNode>>,
    delay: Option<Duration>,
}

impl SampleLoader {
    /// Index a full forest by parent id.
    pub fn new(full: &[TreeNode]) -> Self {
        let mut catalog = HashMap::new();
        index_children(&mut catalog, full);
        Self {
            catalog,
            delay: None,
        }
    }

    /// Simulate network latency on every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

fn index_children(catalog: &mut HashMap<String, Vec<TreeNode>>, nodes: &[TreeNode]) {
    for node in nodes {
        if !node.children.is_empty() {
            catalog.insert(
                node.id.clone(),
                node.children.iter().map(lazy_shape).collect(),
            );
            index_children(catalog, &node.children);
        }
    }
}

#[async_trait]
impl ChildLoader for SampleLoader {
    async fn load_children(
        &self,
        node: &TreeNode,
        page_limit: Option<usize>,
    ) -> Result<Vec<TreeNode>, LoadError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let Some(all) = self.catalog.get(&node.id) else {
            return Ok(Vec::new());
        };
        // The already-loaded count is the offset of the next page.
        let offset = node.children.len().min(all.len());
        let end = match page_limit {
            Some(limit) => (offset + limit).min(all.len()),
            None => all.len(),
        };
        Ok(all[offset..end].to_vec())
    }
}
