use crate::element::Element;

/// Props for the indentation spacer.
pub struct DepthPaddingProps {
    pub depth: u16,
    pub indent_width: u16,
}

/// Renders the hierarchical indentation. Width is `depth * indent_width`
/// columns.
pub trait DepthPaddingRender: Send + Sync {
    fn render(&self, props: DepthPaddingProps) -> Element;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDepthPadding;

impl DepthPaddingRender for DefaultDepthPadding {
    fn render(&self, props: DepthPaddingProps) -> Element {
        Element::text(" ".repeat((props.depth * props.indent_width) as usize))
    }
}
