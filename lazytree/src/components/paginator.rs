use crate::element::Element;
use crate::node::TreeNode;
use crate::theme::{Theme, resolve_style};

/// Props for the load-more control shown after a partially fetched list.
pub struct PaginatorProps<'a> {
    pub theme: &'a dyn Theme,
    pub node: &'a TreeNode,
    pub depth: u16,
    pub indent_width: u16,
    /// Element id the renderer must attach so activations route back.
    pub id: &'a str,
}

/// Renders the load-more control.
pub trait PaginatorRender: Send + Sync {
    fn render(&self, props: PaginatorProps<'_>) -> Element;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPaginator;

impl PaginatorRender for DefaultPaginator {
    fn render(&self, props: PaginatorProps<'_>) -> Element {
        let indent = " ".repeat((props.depth * props.indent_width) as usize);
        Element::row()
            .id(props.id)
            .style(resolve_style(props.theme, "paginator"))
            .focusable(true)
            .clickable(true)
            .child(Element::text(indent))
            .child(Element::text("Load More").style(resolve_style(props.theme, "paginator_text")))
    }
}
