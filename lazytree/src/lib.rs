//! A themeable, lazily-populated hierarchical list widget.

pub mod color;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod loader;
pub mod node;
pub mod sample;
pub mod style;
pub mod theme;
pub mod tree;
pub mod util;

pub use tree::{Tree, TreeId};

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::components::{
        BodyProps, BodyRender, CheckboxProps, CheckboxRender, Components, DepthPaddingProps,
        DepthPaddingRender, ExpanderProps, ExpanderRender, ListItemProps, ListItemRender,
        ListProps, ListRender, LoadingProps, LoadingRender, PaginatorProps, PaginatorRender,
    };
    pub use crate::config::{StateMode, TreeConfig};
    pub use crate::element::{Content, Direction, Element, find_element};
    pub use crate::error::LoadError;
    pub use crate::event::{Event, Key};
    pub use crate::loader::{ChildLoader, NoopLoader};
    pub use crate::node::TreeNode;
    pub use crate::style::Style;
    pub use crate::theme::{DefaultTheme, MinimalTheme, Theme, ThemeRef};
    pub use crate::tree::{
        DispatchOutcome, LoadMoreOutcome, SelectOutcome, ToggleOutcome, Tree, TreeId,
    };
    pub use crate::util::{build_cache, has_children, is_fully_fetched, should_show_more};

    pub use async_trait::async_trait;
}
