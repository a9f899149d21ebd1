use crate::element::Element;
use crate::node::TreeNode;
use crate::theme::{Theme, resolve_style};

/// Props for the expand/collapse control.
pub struct ExpanderProps<'a> {
    pub theme: &'a dyn Theme,
    pub node: &'a TreeNode,
    pub expanded: bool,
    /// Element id the renderer must attach so activations route back.
    pub id: &'a str,
}

/// Renders the expand/collapse control.
pub trait ExpanderRender: Send + Sync {
    fn render(&self, props: ExpanderProps<'_>) -> Element;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExpander;

impl ExpanderRender for DefaultExpander {
    fn render(&self, props: ExpanderProps<'_>) -> Element {
        let icon = if props.expanded { "▼" } else { "▶" };
        Element::text(icon)
            .id(props.id)
            .style(resolve_style(props.theme, "expander"))
            .focusable(true)
            .clickable(true)
    }
}
