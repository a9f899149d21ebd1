use crate::element::Element;
use crate::node::TreeNode;
use crate::theme::{Theme, resolve_style};

/// Props for the container that holds a run of sibling rows.
pub struct ListProps<'a> {
    pub theme: &'a dyn Theme,
    /// The parent node, or `None` for the root list.
    pub node: Option<&'a TreeNode>,
    pub children: Vec<Element>,
}

/// Renders the container for a node's children.
pub trait ListRender: Send + Sync {
    fn render(&self, props: ListProps<'_>) -> Element;
}

/// Default list: a plain column.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultList;

impl ListRender for DefaultList {
    fn render(&self, props: ListProps<'_>) -> Element {
        Element::col()
            .children(props.children)
            .style(resolve_style(props.theme, "list"))
    }
}
