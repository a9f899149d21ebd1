use crate::element::Element;
use crate::node::TreeNode;
use crate::theme::{Theme, resolve_style};

/// Props for one node's row.
pub struct ListItemProps<'a> {
    pub theme: &'a dyn Theme,
    pub node: &'a TreeNode,
    /// Element id the renderer must attach so activations route back.
    pub id: &'a str,
    /// Row contents, in order: depth padding, expander, checkbox, body.
    pub children: Vec<Element>,
}

/// Renders the row container for a single node.
pub trait ListItemRender: Send + Sync {
    fn render(&self, props: ListItemProps<'_>) -> Element;
}

/// Default row: clickable, focusable, one column of gap between parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultListItem;

impl ListItemRender for DefaultListItem {
    fn render(&self, props: ListItemProps<'_>) -> Element {
        Element::row()
            .id(props.id)
            .children(props.children)
            .gap(1)
            .style(resolve_style(props.theme, "list_item"))
            .focusable(true)
            .clickable(true)
    }
}
