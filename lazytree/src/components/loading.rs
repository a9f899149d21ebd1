use crate::element::Element;
use crate::node::TreeNode;
use crate::theme::{Theme, resolve_style};

/// Props for the loading indicator shown while a fetch is in flight.
pub struct LoadingProps<'a> {
    pub theme: &'a dyn Theme,
    pub node: &'a TreeNode,
    pub depth: u16,
    pub indent_width: u16,
}

/// Renders the loading indicator.
pub trait LoadingRender: Send + Sync {
    fn render(&self, props: LoadingProps<'_>) -> Element;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLoading;

impl LoadingRender for DefaultLoading {
    fn render(&self, props: LoadingProps<'_>) -> Element {
        let indent = " ".repeat((props.depth * props.indent_width) as usize);
        Element::row()
            .style(resolve_style(props.theme, "loading"))
            .child(Element::text(indent))
            .child(Element::text("Loading...").style(resolve_style(props.theme, "loading_text")))
    }
}
