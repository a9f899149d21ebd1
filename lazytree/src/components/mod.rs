//! Pluggable presentational components.
//!
//! Each visual slot of the widget is a trait with one default
//! implementation. The controllers depend only on the traits, so a host can
//! swap any slot without touching the state machine. Interactive slots
//! receive the element id they must attach to their root element; that id is
//! what [`crate::tree::Tree::dispatch`] routes activations by.

mod body;
mod checkbox;
mod depth_padding;
mod expander;
mod list;
mod list_item;
mod loading;
mod paginator;

use std::sync::Arc;

pub use body::{BodyProps, BodyRender, DefaultBody};
pub use checkbox::{CheckboxProps, CheckboxRender, DefaultCheckbox};
pub use depth_padding::{DefaultDepthPadding, DepthPaddingProps, DepthPaddingRender};
pub use expander::{DefaultExpander, ExpanderProps, ExpanderRender};
pub use list::{DefaultList, ListProps, ListRender};
pub use list_item::{DefaultListItem, ListItemProps, ListItemRender};
pub use loading::{DefaultLoading, LoadingProps, LoadingRender};
pub use paginator::{DefaultPaginator, PaginatorProps, PaginatorRender};

/// The slot table: one renderer per visual slot.
///
/// A pure strategy table with no lifecycle. `Default` installs the built-in
/// renderer for every slot; builder methods override individual slots.
#[derive(Clone)]
pub struct Components {
    pub list: Arc<dyn ListRender>,
    pub list_item: Arc<dyn ListItemRender>,
    pub expander: Arc<dyn ExpanderRender>,
    pub checkbox: Arc<dyn CheckboxRender>,
    pub body: Arc<dyn BodyRender>,
    pub paginator: Arc<dyn PaginatorRender>,
    pub loading: Arc<dyn LoadingRender>,
    pub depth_padding: Arc<dyn DepthPaddingRender>,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            list: Arc::new(DefaultList),
            list_item: Arc::new(DefaultListItem),
            expander: Arc::new(DefaultExpander),
            checkbox: Arc::new(DefaultCheckbox),
            body: Arc::new(DefaultBody),
            paginator: Arc::new(DefaultPaginator),
            loading: Arc::new(DefaultLoading),
            depth_padding: Arc::new(DefaultDepthPadding),
        }
    }
}

impl Components {
    /// Create the default slot table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the List slot.
    pub fn list(mut self, renderer: impl ListRender + 'static) -> Self {
        self.list = Arc::new(renderer);
        self
    }

    /// Override the ListItem slot.
    pub fn list_item(mut self, renderer: impl ListItemRender + 'static) -> Self {
        self.list_item = Arc::new(renderer);
        self
    }

    /// Override the Expander slot.
    pub fn expander(mut self, renderer: impl ExpanderRender + 'static) -> Self {
        self.expander = Arc::new(renderer);
        self
    }

    /// Override the Checkbox slot.
    pub fn checkbox(mut self, renderer: impl CheckboxRender + 'static) -> Self {
        self.checkbox = Arc::new(renderer);
        self
    }

    /// Override the Body slot.
    pub fn body(mut self, renderer: impl BodyRender + 'static) -> Self {
        self.body = Arc::new(renderer);
        self
    }

    /// Override the Paginator slot.
    pub fn paginator(mut self, renderer: impl PaginatorRender + 'static) -> Self {
        self.paginator = Arc::new(renderer);
        self
    }

    /// Override the Loading slot.
    pub fn loading(mut self, renderer: impl LoadingRender + 'static) -> Self {
        self.loading = Arc::new(renderer);
        self
    }

    /// Override the DepthPadding slot.
    pub fn depth_padding(mut self, renderer: impl DepthPaddingRender + 'static) -> Self {
        self.depth_padding = Arc::new(renderer);
        self
    }
}
