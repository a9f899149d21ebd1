use crate::element::Element;
use crate::node::TreeNode;
use crate::theme::{Theme, resolve_style};

/// Props for the selection indicator.
pub struct CheckboxProps<'a> {
    pub theme: &'a dyn Theme,
    pub node: &'a TreeNode,
    pub checked: bool,
    /// Element id the renderer must attach so activations route back.
    pub id: &'a str,
}

/// Renders the selection indicator.
pub trait CheckboxRender: Send + Sync {
    fn render(&self, props: CheckboxProps<'_>) -> Element;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCheckbox;

impl CheckboxRender for DefaultCheckbox {
    fn render(&self, props: CheckboxProps<'_>) -> Element {
        let (icon, slot) = if props.checked {
            ("☑", "checkbox_checked")
        } else {
            ("☐", "checkbox")
        };
        Element::text(icon)
            .id(props.id)
            .style(resolve_style(props.theme, slot))
            .focusable(true)
            .clickable(true)
    }
}
