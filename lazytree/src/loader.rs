//! The child-loading contract between the widget and its host.
//!
//! The widget never fetches anything on its own; when the state machine
//! decides a page of children is needed it calls the installed
//! [`ChildLoader`] with a snapshot of the requesting node and the configured
//! page limit. The snapshot carries the node's current `children` and
//! `page`, so a loader can compute the next offset from `children.len()`.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::node::TreeNode;

/// Loads pages of children for a node.
///
/// The result is treated as exactly one page and the loader, not the
/// widget, is responsible for capping the page at the remaining count.
///
/// # Example
///
/// ```ignore
/// struct ApiLoader {
///     client: Client,
/// }
///
/// #[async_trait]
/// impl ChildLoader for ApiLoader {
///     async fn load_children(
///         &self,
///         node: &TreeNode,
///         page_limit: Option<usize>,
///     ) -> Result<Vec<TreeNode>, LoadError> {
///         let offset = node.children.len();
///         self.client
///             .children(&node.id, offset, page_limit)
///             .await
///             .map_err(|e| LoadError::new(e.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait ChildLoader: Send + Sync {
    /// Fetch the next page of children for `node`.
    async fn load_children(
        &self,
        node: &TreeNode,
        page_limit: Option<usize>,
    ) -> Result<Vec<TreeNode>, LoadError>;
}

/// The default loader: returns the node's existing children unchanged.
///
/// Suitable for trees whose data is fully present up front, where expansion
/// should never go anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLoader;

#[async_trait]
impl ChildLoader for NoopLoader {
    async fn load_children(
        &self,
        node: &TreeNode,
        _page_limit: Option<usize>,
    ) -> Result<Vec<TreeNode>, LoadError> {
        Ok(node.children.clone())
    }
}
