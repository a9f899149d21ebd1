//! The tree controller.
//!
//! [`Tree`] owns the ordered forest of root nodes and the per-node
//! expansion/pagination/selection lifecycle. Handlers mutate state under a
//! single lock, fetches run outside it, and every committed change is
//! re-broadcast to the host through the registered callbacks.
//!
//! # Example
//!
//! ```ignore
//! use lazytree::prelude::*;
//!
//! let tree = Tree::new(TreeConfig::new().page_limit(20))
//!     .with_loader(ApiLoader::new(client))
//!     .on_update(|forest| persist(forest));
//! tree.sync(initial_nodes);
//!
//! // In the host's event loop:
//! let view = tree.render();
//! // ...and when the user activates an element:
//! tree.dispatch(&Event::Click, &element_id).await?;
//! ```

mod events;
mod render;
mod state;

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

pub use events::{DispatchOutcome, LoadMoreOutcome, SelectOutcome, ToggleOutcome};

use crate::components::Components;
use crate::config::{StateMode, TreeConfig};
use crate::error::LoadError;
use crate::event::Event;
use crate::loader::{ChildLoader, NoopLoader};
use crate::node::{self, ParseFn, TreeNode};
use crate::theme::{DefaultTheme, Theme, ThemeRef};
use crate::util;

use state::{TreeInner, find_node};

/// Unique identifier for a Tree instance.
///
/// Element ids rendered by the adapter are prefixed with this, so several
/// trees can coexist in one host without id collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(usize);

impl TreeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__tree_{}", self.0)
    }
}

type NodeCallback = Arc<dyn Fn(&Event, &TreeNode, &[TreeNode]) + Send + Sync>;
type UpdateCallback = Arc<dyn Fn(&[TreeNode]) + Send + Sync>;
type LoadErrorCallback = Arc<dyn Fn(&TreeNode, &LoadError) + Send + Sync>;

/// Host callbacks, all optional and fire-and-forget.
#[derive(Clone, Default)]
struct Callbacks {
    toggle: Option<NodeCallback>,
    select: Option<NodeCallback>,
    update: Option<UpdateCallback>,
    load_error: Option<LoadErrorCallback>,
}

/// A themeable, lazily-populated hierarchical list widget.
///
/// Cheap to clone; clones share state. The widget is safe to use across
/// async task boundaries: handlers on different nodes may have fetches in
/// flight concurrently, while operations on the same node are serialized by
/// a per-node loading guard.
pub struct Tree {
    /// Unique identifier.
    id: TreeId,
    /// Configuration, read once at construction.
    config: TreeConfig,
    /// Shared mutable state.
    inner: Arc<RwLock<TreeInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
    /// Child-loading collaborator.
    loader: Arc<dyn ChildLoader>,
    /// Optional normalization hook for incoming node data.
    parse: Option<ParseFn>,
    /// Style dictionary.
    theme: ThemeRef,
    /// Presentational slot table.
    components: Components,
    /// Host callbacks.
    callbacks: Callbacks,
}

impl Tree {
    /// Create an empty tree with the given configuration.
    pub fn new(config: TreeConfig) -> Self {
        Self {
            id: TreeId::new(),
            config,
            inner: Arc::new(RwLock::new(TreeInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            loader: Arc::new(NoopLoader),
            parse: None,
            theme: Arc::new(DefaultTheme::dark()),
            components: Components::default(),
            callbacks: Callbacks::default(),
        }
    }

    /// Create a tree and seed it with an initial forest.
    pub fn with_nodes(nodes: Vec<TreeNode>, config: TreeConfig) -> Self {
        let tree = Self::new(config);
        tree.sync(nodes);
        tree
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Install the child-loading collaborator.
    pub fn with_loader(mut self, loader: impl ChildLoader + 'static) -> Self {
        self.loader = Arc::new(loader);
        self
    }

    /// Install the parse hook, applied to the initial forest and to every
    /// fetch result before it enters controller state.
    pub fn with_parse(
        mut self,
        parse: impl Fn(Vec<TreeNode>) -> Vec<TreeNode> + Send + Sync + 'static,
    ) -> Self {
        self.parse = Some(Arc::new(parse));
        self
    }

    /// Install a theme.
    pub fn with_theme(mut self, theme: impl Theme) -> Self {
        self.theme = Arc::new(theme);
        self
    }

    /// Install a presentational slot table.
    pub fn with_components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }

    /// Called after every committed toggle with the event, the node, and a
    /// snapshot of the resulting forest.
    pub fn on_toggle(
        mut self,
        callback: impl Fn(&Event, &TreeNode, &[TreeNode]) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.toggle = Some(Arc::new(callback));
        self
    }

    /// Called after every committed selection change.
    pub fn on_select(
        mut self,
        callback: impl Fn(&Event, &TreeNode, &[TreeNode]) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.select = Some(Arc::new(callback));
        self
    }

    /// Called with a forest snapshot after every committed state change.
    pub fn on_update(mut self, callback: impl Fn(&[TreeNode]) + Send + Sync + 'static) -> Self {
        self.callbacks.update = Some(Arc::new(callback));
        self
    }

    /// Called when a child fetch fails. The node is left untouched and
    /// retriable; this callback is how the failure reaches the host.
    pub fn on_load_error(
        mut self,
        callback: impl Fn(&TreeNode, &LoadError) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.load_error = Some(Arc::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Identity and configuration
    // -------------------------------------------------------------------------

    /// Get the unique ID.
    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // External synchronization
    // -------------------------------------------------------------------------

    /// Feed externally supplied node data into the tree.
    ///
    /// In externally-controlled mode the forest is rehydrated whenever the
    /// input differs structurally from the current forest. In
    /// locally-controlled mode the input is compared against the last input
    /// instead, so internal mutations are never overwritten by a re-send of
    /// data the tree has already seen.
    ///
    /// Loading guards are keyed by id and survive a rehydration, so a node
    /// mid-fetch stays guarded across the swap.
    pub fn sync(&self, nodes: Vec<TreeNode>) {
        let incoming = self.prepare(nodes);
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        let changed = match self.config.state_mode {
            StateMode::ExternallyControlled => {
                if guard.roots != incoming {
                    guard.roots = incoming;
                    true
                } else {
                    false
                }
            }
            StateMode::LocallyControlled => {
                if guard.last_input != incoming {
                    guard.roots = incoming.clone();
                    guard.last_input = incoming;
                    true
                } else {
                    false
                }
            }
        };
        drop(guard);
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("tree {}: resynchronized from external input", self.id);
        }
    }

    /// Apply the parse hook and id normalization to an incoming forest.
    fn prepare(&self, nodes: Vec<TreeNode>) -> Vec<TreeNode> {
        let mut nodes = match self.parse.as_deref() {
            Some(parse) => parse(nodes),
            None => nodes,
        };
        node::normalize(&mut nodes);
        nodes
    }

    /// Apply the parse hook and id normalization to a fetched page.
    pub(super) fn prepare_children(
        &self,
        nodes: Vec<TreeNode>,
        parent_id: &str,
        offset: usize,
    ) -> Vec<TreeNode> {
        let mut nodes = match self.parse.as_deref() {
            Some(parse) => parse(nodes),
            None => nodes,
        };
        node::normalize_under(&mut nodes, parent_id, offset);
        nodes
    }

    // -------------------------------------------------------------------------
    // Node access
    // -------------------------------------------------------------------------

    /// Snapshot of the root forest.
    pub fn roots(&self) -> Vec<TreeNode> {
        self.inner
            .read()
            .map(|g| g.roots.clone())
            .unwrap_or_default()
    }

    /// Find a node by id anywhere in the tree.
    pub fn find(&self, id: &str) -> Option<TreeNode> {
        self.inner
            .read()
            .ok()
            .and_then(|g| find_node(&g.roots, id).cloned())
    }

    /// Build an id-to-node map over the current forest.
    pub fn cache(&self) -> HashMap<String, TreeNode> {
        self.inner
            .read()
            .map(|g| util::build_cache(&g.roots))
            .unwrap_or_default()
    }

    /// Whether a node is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|g| find_node(&g.roots, id).map(|n| n.expanded))
            .unwrap_or(false)
    }

    /// Whether a node is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|g| find_node(&g.roots, id).map(|n| n.selected))
            .unwrap_or(false)
    }

    /// Ids of all selected nodes, in traversal order.
    pub fn selected_ids(&self) -> Vec<String> {
        fn collect(nodes: &[TreeNode], out: &mut Vec<String>) {
            for node in nodes {
                if node.selected {
                    out.push(node.id.clone());
                }
                collect(&node.children, out);
            }
        }
        let mut out = Vec::new();
        if let Ok(guard) = self.inner.read() {
            collect(&guard.roots, &mut out);
        }
        out
    }

    /// Whether an expansion fetch is in flight for a node.
    pub fn is_expander_loading(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.expander_loading.contains(id))
            .unwrap_or(false)
    }

    /// Whether a load-more fetch is in flight for a node.
    pub fn is_paginator_loading(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.paginator_loading.contains(id))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the tree has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Callback emission
    // -------------------------------------------------------------------------

    pub(super) fn emit_toggle(&self, event: &Event, node: &TreeNode, forest: &[TreeNode]) {
        if let Some(callback) = self.callbacks.toggle.as_deref() {
            callback(event, node, forest);
        }
    }

    pub(super) fn emit_select(&self, event: &Event, node: &TreeNode, forest: &[TreeNode]) {
        if let Some(callback) = self.callbacks.select.as_deref() {
            callback(event, node, forest);
        }
    }

    pub(super) fn emit_update(&self, forest: &[TreeNode]) {
        if let Some(callback) = self.callbacks.update.as_deref() {
            callback(forest);
        }
    }

    pub(super) fn emit_load_error(&self, node: &TreeNode, error: &LoadError) {
        if let Some(callback) = self.callbacks.load_error.as_deref() {
            callback(node, error);
        }
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            config: self.config.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            loader: Arc::clone(&self.loader),
            parse: self.parse.clone(),
            theme: Arc::clone(&self.theme),
            components: self.components.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("id", &self.id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
