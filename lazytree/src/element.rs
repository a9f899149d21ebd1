//! Declarative view tree produced by the render adapter.
//!
//! An [`Element`] describes what to draw, not how to draw it. The host
//! runtime walks the tree, lays it out, paints it with whatever backend it
//! uses, and reports activations (clicks, Enter presses) back to the widget
//! by element id via [`crate::tree::Tree::dispatch`].

use std::sync::atomic::{AtomicU64, Ordering};

use unicode_width::UnicodeWidthStr;

use crate::style::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Layout direction of a container element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Children stacked vertically
    #[default]
    Column,
    /// Children placed left to right
    Row,
}

/// What an element contains.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// One node of the view tree.
#[derive(Debug, Clone)]
pub struct Element {
    /// Identity, used by hosts to route activations back to the widget.
    pub id: String,

    pub content: Content,
    pub direction: Direction,

    /// Gap between children in columns.
    pub gap: u16,
    /// Intrinsic width hint in columns (display width for text).
    pub width: Option<u16>,

    pub style: Style,

    /// Whether this element participates in keyboard focus traversal.
    pub focusable: bool,
    /// Whether activating this element should be reported to the widget.
    pub clickable: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            direction: Direction::Column,
            gap: 0,
            width: None,
            style: Style::default(),
            focusable: false,
            clickable: false,
        }
    }
}

impl Element {
    /// A text leaf. The width hint is the display width of the content.
    pub fn text(content: impl Into<String>) -> Self {
        let content = content.into();
        let width = UnicodeWidthStr::width(content.as_str()) as u16;
        Self {
            content: Content::Text(content),
            width: Some(width),
            ..Default::default()
        }
    }

    /// A horizontal container.
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            content: Content::Children(Vec::new()),
            ..Default::default()
        }
    }

    /// A vertical container.
    pub fn col() -> Self {
        Self {
            direction: Direction::Column,
            content: Content::Children(Vec::new()),
            ..Default::default()
        }
    }

    /// Set the element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the intrinsic width hint.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the gap between children.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Mark this element focusable.
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Mark this element clickable.
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Append a child, converting content to children if necessary.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Replace all children.
    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    /// Iterate over direct children, if any.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// The text content, if this is a text leaf.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}
