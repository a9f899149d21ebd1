//! The render adapter: pure translation from controller state to the
//! pluggable slot components.

use crate::components::{
    BodyProps, CheckboxProps, DepthPaddingProps, ExpanderProps, ListItemProps, ListProps,
    LoadingProps, PaginatorProps,
};
use crate::element::Element;
use crate::node::TreeNode;
use crate::theme::resolve_style;
use crate::util;

use super::Tree;
use super::state::TreeInner;

impl Tree {
    /// Render the forest into an element tree.
    ///
    /// Reads state only; rendering commits nothing and can be repeated
    /// freely. Interactive elements carry ids that
    /// [`Tree::dispatch`](super::Tree::dispatch) understands.
    pub fn render(&self) -> Element {
        let Ok(guard) = self.inner.read() else {
            return Element::col().id(self.id_string());
        };
        let rows = guard
            .roots
            .iter()
            .map(|node| self.render_node(node, 0, &guard))
            .collect();
        Element::col()
            .id(self.id_string())
            .children(rows)
            .style(resolve_style(self.theme.as_ref(), "tree"))
    }

    /// Render one node and, when expanded, its subtree.
    fn render_node(&self, node: &TreeNode, depth: u16, inner: &TreeInner) -> Element {
        let theme = self.theme.as_ref();
        let indent_width = self.config.indent_width;
        let row_id = format!("{}-node-{}", self.id, node.id);

        let padding = self
            .components
            .depth_padding
            .render(DepthPaddingProps { depth, indent_width });
        let expander = if util::has_children(node) {
            self.components.expander.render(ExpanderProps {
                theme,
                node,
                expanded: node.expanded,
                id: &format!("{row_id}-expander"),
            })
        } else {
            // Leaf spacer keeps the columns aligned.
            Element::text(" ").style(resolve_style(theme, "expander"))
        };
        let checkbox = self.components.checkbox.render(CheckboxProps {
            theme,
            node,
            checked: node.selected,
            id: &format!("{row_id}-checkbox"),
        });
        let body = self.components.body.render(BodyProps {
            theme,
            node,
            id: &format!("{row_id}-body"),
        });
        let item = self.components.list_item.render(ListItemProps {
            theme,
            node,
            id: &format!("{row_id}-item"),
            children: vec![padding, expander, checkbox, body],
        });

        let expander_loading = inner.expander_loading.contains(&node.id);
        let paginator_loading = inner.paginator_loading.contains(&node.id);

        let mut rows = Vec::new();
        if expander_loading {
            rows.push(self.components.loading.render(LoadingProps {
                theme,
                node,
                depth: depth + 1,
                indent_width,
            }));
        }
        if node.expanded {
            for child in &node.children {
                rows.push(self.render_node(child, depth + 1, inner));
            }
            if !node.children.is_empty() {
                if paginator_loading {
                    rows.push(self.components.loading.render(LoadingProps {
                        theme,
                        node,
                        depth: depth + 1,
                        indent_width,
                    }));
                } else if self.paginator_applies(node) {
                    rows.push(self.components.paginator.render(PaginatorProps {
                        theme,
                        node,
                        depth: depth + 1,
                        indent_width,
                        id: &format!("{row_id}-paginator"),
                    }));
                }
            }
        }

        if rows.is_empty() {
            item
        } else {
            let list = self.components.list.render(ListProps {
                theme,
                node: Some(node),
                children: rows,
            });
            Element::col().children(vec![item, list])
        }
    }

    /// Whether the load-more control should render for this node.
    fn paginator_applies(&self, node: &TreeNode) -> bool {
        util::should_show_more(node) && self.config.paginated && self.config.page_limit.is_some()
    }
}
