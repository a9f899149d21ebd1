//! Built-in themes.

use crate::color::Color;
use crate::style::Style;

use super::Theme;

/// The default theme, a dark scheme.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub tree: Style,
    pub list: Style,
    pub list_item: Style,
    pub body: Style,
    pub body_text: Style,
    pub expander: Style,
    pub checkbox: Style,
    pub checkbox_checked: Style,
    pub paginator: Style,
    pub paginator_text: Style,
    pub loading: Style,
    pub loading_text: Style,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl DefaultTheme {
    /// Create the default dark theme.
    pub fn dark() -> Self {
        Self {
            tree: Style::new().bg(Color::oklch(0.15, 0.0, 0.0)),
            list: Style::new(),
            list_item: Style::new().fg(Color::White),
            body: Style::new(),
            body_text: Style::new().fg(Color::White),
            expander: Style::new().fg(Color::Cyan),
            checkbox: Style::new().fg(Color::BrightBlack),
            checkbox_checked: Style::new().fg(Color::Cyan),
            paginator: Style::new(),
            paginator_text: Style::new().fg(Color::Blue).underline(),
            loading: Style::new(),
            loading_text: Style::new().fg(Color::BrightBlack).italic(),
        }
    }

    /// Create a light theme variant.
    pub fn light() -> Self {
        Self {
            tree: Style::new().bg(Color::White),
            list: Style::new(),
            list_item: Style::new().fg(Color::Black),
            body: Style::new(),
            body_text: Style::new().fg(Color::Black),
            expander: Style::new().fg(Color::Blue),
            checkbox: Style::new().fg(Color::BrightBlack),
            checkbox_checked: Style::new().fg(Color::Blue),
            paginator: Style::new(),
            paginator_text: Style::new().fg(Color::Blue).underline(),
            loading: Style::new(),
            loading_text: Style::new().fg(Color::BrightBlack).italic(),
        }
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, slot: &str) -> Option<Style> {
        match slot {
            "tree" => Some(self.tree.clone()),
            "list" => Some(self.list.clone()),
            "list_item" => Some(self.list_item.clone()),
            "body" => Some(self.body.clone()),
            "body_text" => Some(self.body_text.clone()),
            "expander" => Some(self.expander.clone()),
            "checkbox" => Some(self.checkbox.clone()),
            "checkbox_checked" => Some(self.checkbox_checked.clone()),
            "paginator" => Some(self.paginator.clone()),
            "paginator_text" => Some(self.paginator_text.clone()),
            "loading" => Some(self.loading.clone()),
            "loading_text" => Some(self.loading_text.clone()),
            _ => None,
        }
    }

    fn slot_names(&self) -> Vec<&'static str> {
        vec![
            "tree",
            "list",
            "list_item",
            "body",
            "body_text",
            "expander",
            "checkbox",
            "checkbox_checked",
            "paginator",
            "paginator_text",
            "loading",
            "loading_text",
        ]
    }

    fn clone_box(&self) -> Box<dyn Theme> {
        Box::new(self.clone())
    }
}

/// A theme that styles nothing, leaving presentation to the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalTheme;

impl Theme for MinimalTheme {
    fn resolve(&self, _slot: &str) -> Option<Style> {
        None
    }

    fn slot_names(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn clone_box(&self) -> Box<dyn Theme> {
        Box::new(*self)
    }
}
