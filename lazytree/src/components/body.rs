use crate::element::Element;
use crate::node::TreeNode;
use crate::theme::{Theme, resolve_style};

/// Props for the node's text body.
pub struct BodyProps<'a> {
    pub theme: &'a dyn Theme,
    pub node: &'a TreeNode,
    /// Element id the renderer must attach so activations route back.
    pub id: &'a str,
}

/// Renders the node's name and description.
pub trait BodyRender: Send + Sync {
    fn render(&self, props: BodyProps<'_>) -> Element;
}

/// Default body: the name, followed by the description in parentheses when
/// one is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBody;

impl BodyRender for DefaultBody {
    fn render(&self, props: BodyProps<'_>) -> Element {
        let text_style = resolve_style(props.theme, "body_text");
        let mut body = Element::row()
            .id(props.id)
            .gap(1)
            .style(resolve_style(props.theme, "body"))
            .focusable(true)
            .clickable(true)
            .child(Element::text(&props.node.name).style(text_style.clone()));
        if !props.node.description.is_empty() {
            body = body.child(
                Element::text(format!("({})", props.node.description)).style(text_style.italic()),
            );
        }
        body
    }
}
