//! The per-node state machine: toggle, load-more, select, and activation
//! routing.
//!
//! Each node moves between collapsed, expanding (fetch in flight), expanded,
//! and expanded-with-pagination-in-flight. Selection is orthogonal and never
//! fetches. The one correctness-critical race is re-entry: a second toggle
//! or load-more on a node whose fetch has not settled must be a no-op, not a
//! second fetch. That guard is the loading set, armed under the lock before
//! the fetch is issued and cleared unconditionally once it settles.
//!
//! The lock is never held across an await; loaders run on snapshots. If the
//! node disappears while its fetch is in flight (an external resync swapped
//! the forest), the page is dropped on settle.

use std::sync::atomic::Ordering;

use crate::error::LoadError;
use crate::event::Event;
use crate::util;

use super::Tree;
use super::state::{find_node, find_node_mut};

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Guard hit, unknown node, or non-activating key: nothing happened.
    Ignored,
    /// The node is now expanded; `fetched` children were loaded to get
    /// there (0 when the children were already present).
    Expanded { fetched: usize },
    /// The node is now collapsed. Children are retained.
    Collapsed,
}

/// Result of a load-more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreOutcome {
    /// Guard hit, pagination not configured, already fully fetched, or
    /// unknown node.
    Ignored,
    /// One more page of `fetched` children was appended.
    Loaded { fetched: usize },
}

/// Result of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored,
    Selected,
    Deselected,
}

/// What an activation routed through [`Tree::dispatch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Toggle(ToggleOutcome),
    Select(SelectOutcome),
    LoadMore(LoadMoreOutcome),
    /// The element id does not belong to this tree's interactive slots.
    Unhandled,
}

impl Tree {
    // -------------------------------------------------------------------------
    // Toggle
    // -------------------------------------------------------------------------

    /// Expand or collapse a node.
    ///
    /// Expanding a node whose children are declared but not yet loaded
    /// fetches the first page through the installed loader. Expanding a node
    /// whose children are already present never re-fetches, and collapsing
    /// never discards children.
    pub async fn toggle(&self, event: &Event, id: &str) -> Result<ToggleOutcome, LoadError> {
        let pending = {
            let Ok(mut guard) = self.inner.write() else {
                return Ok(ToggleOutcome::Ignored);
            };
            if guard.expander_loading.contains(id) {
                log::debug!(
                    "tree {}: toggle on {id} ignored, expansion already in flight",
                    self.id
                );
                return Ok(ToggleOutcome::Ignored);
            }
            let Some(node) = find_node_mut(&mut guard.roots, id) else {
                return Ok(ToggleOutcome::Ignored);
            };
            if node.expanded || !node.children.is_empty() || !util::has_children(node) {
                // No fetch needed: flip in place. Children stay cached on
                // collapse so re-expansion is instantaneous.
                node.expanded = !node.expanded;
                let node = node.clone();
                let forest = guard.roots.clone();
                drop(guard);
                self.dirty.store(true, Ordering::SeqCst);
                self.emit_toggle(event, &node, &forest);
                self.emit_update(&forest);
                return Ok(if node.expanded {
                    ToggleOutcome::Expanded { fetched: 0 }
                } else {
                    ToggleOutcome::Collapsed
                });
            }
            let snapshot = node.clone();
            guard.expander_loading.insert(id.to_string());
            snapshot
        };
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("tree {}: loading children for {id}", self.id);

        let result = self.loader.load_children(&pending, self.config.page_limit).await;

        // Settle: the guard clears on every path so the node stays
        // actionable, success or failure.
        let Ok(mut guard) = self.inner.write() else {
            return Ok(ToggleOutcome::Ignored);
        };
        guard.expander_loading.remove(id);
        match result {
            Ok(children) => {
                let children = self.prepare_children(children, id, 0);
                let fetched = children.len();
                match find_node_mut(&mut guard.roots, id) {
                    Some(node) => {
                        node.children = children;
                        node.page += 1;
                        node.expanded = true;
                        let node = node.clone();
                        let forest = guard.roots.clone();
                        drop(guard);
                        self.dirty.store(true, Ordering::SeqCst);
                        self.emit_toggle(event, &node, &forest);
                        self.emit_update(&forest);
                        Ok(ToggleOutcome::Expanded { fetched })
                    }
                    None => {
                        // The node vanished mid-fetch (external resync); the
                        // page has nowhere to land.
                        log::debug!(
                            "tree {}: {id} vanished mid-fetch, dropping {fetched} children",
                            self.id
                        );
                        Ok(ToggleOutcome::Ignored)
                    }
                }
            }
            Err(err) => {
                let node = find_node(&guard.roots, id).cloned();
                drop(guard);
                self.dirty.store(true, Ordering::SeqCst);
                log::warn!("tree {}: child load for {id} failed: {err}", self.id);
                if let Some(node) = node {
                    self.emit_load_error(&node, &err);
                }
                Err(err)
            }
        }
    }

    /// Keyboard variant of [`Tree::toggle`]: Enter activates, anything else
    /// is ignored.
    pub async fn key_toggle(&self, event: &Event, id: &str) -> Result<ToggleOutcome, LoadError> {
        if event.is_enter() {
            self.toggle(event, id).await
        } else {
            Ok(ToggleOutcome::Ignored)
        }
    }

    // -------------------------------------------------------------------------
    // Load more
    // -------------------------------------------------------------------------

    /// Fetch and append the next page of children to a partially fetched
    /// node.
    ///
    /// Pages are strictly additive: repeated calls concatenate in order and
    /// never duplicate or drop previously fetched entries.
    pub async fn load_more(&self, _event: &Event, id: &str) -> Result<LoadMoreOutcome, LoadError> {
        if !self.config.paginated {
            return Ok(LoadMoreOutcome::Ignored);
        }
        let Some(limit) = self.config.page_limit else {
            return Ok(LoadMoreOutcome::Ignored);
        };

        let pending = {
            let Ok(mut guard) = self.inner.write() else {
                return Ok(LoadMoreOutcome::Ignored);
            };
            if guard.paginator_loading.contains(id) || guard.expander_loading.contains(id) {
                log::debug!(
                    "tree {}: load-more on {id} ignored, fetch already in flight",
                    self.id
                );
                return Ok(LoadMoreOutcome::Ignored);
            }
            let Some(node) = find_node(&guard.roots, id) else {
                return Ok(LoadMoreOutcome::Ignored);
            };
            if util::is_fully_fetched(node) {
                return Ok(LoadMoreOutcome::Ignored);
            }
            let snapshot = node.clone();
            guard.paginator_loading.insert(id.to_string());
            snapshot
        };
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("tree {}: loading page {} for {id}", self.id, pending.page + 1);

        let result = self.loader.load_children(&pending, Some(limit)).await;

        let Ok(mut guard) = self.inner.write() else {
            return Ok(LoadMoreOutcome::Ignored);
        };
        guard.paginator_loading.remove(id);
        match result {
            Ok(children) => {
                let children = self.prepare_children(children, id, pending.children.len());
                let fetched = children.len();
                match find_node_mut(&mut guard.roots, id) {
                    Some(node) => {
                        node.children.extend(children);
                        node.page += 1;
                        let forest = guard.roots.clone();
                        drop(guard);
                        self.dirty.store(true, Ordering::SeqCst);
                        self.emit_update(&forest);
                        Ok(LoadMoreOutcome::Loaded { fetched })
                    }
                    None => {
                        log::debug!(
                            "tree {}: {id} vanished mid-fetch, dropping {fetched} children",
                            self.id
                        );
                        Ok(LoadMoreOutcome::Ignored)
                    }
                }
            }
            Err(err) => {
                let node = find_node(&guard.roots, id).cloned();
                drop(guard);
                self.dirty.store(true, Ordering::SeqCst);
                log::warn!("tree {}: page load for {id} failed: {err}", self.id);
                if let Some(node) = node {
                    self.emit_load_error(&node, &err);
                }
                Err(err)
            }
        }
    }

    /// Keyboard variant of [`Tree::load_more`].
    pub async fn key_load_more(
        &self,
        event: &Event,
        id: &str,
    ) -> Result<LoadMoreOutcome, LoadError> {
        if event.is_enter() {
            self.load_more(event, id).await
        } else {
            Ok(LoadMoreOutcome::Ignored)
        }
    }

    // -------------------------------------------------------------------------
    // Select
    // -------------------------------------------------------------------------

    /// Toggle a node's selected flag.
    ///
    /// Synchronous and unconditional: selection is independent of expansion
    /// and never fetches.
    pub fn select(&self, event: &Event, id: &str) -> SelectOutcome {
        let Ok(mut guard) = self.inner.write() else {
            return SelectOutcome::Ignored;
        };
        let Some(node) = find_node_mut(&mut guard.roots, id) else {
            return SelectOutcome::Ignored;
        };
        node.selected = !node.selected;
        let node = node.clone();
        let forest = guard.roots.clone();
        drop(guard);
        self.dirty.store(true, Ordering::SeqCst);
        self.emit_select(event, &node, &forest);
        self.emit_update(&forest);
        if node.selected {
            SelectOutcome::Selected
        } else {
            SelectOutcome::Deselected
        }
    }

    /// Keyboard variant of [`Tree::select`].
    pub fn key_select(&self, event: &Event, id: &str) -> SelectOutcome {
        if event.is_enter() {
            self.select(event, id)
        } else {
            SelectOutcome::Ignored
        }
    }

    /// Activation on a node's row, body, or checkbox.
    ///
    /// Honors the double-click-select configuration: with it enabled, a
    /// single click does not select.
    pub fn item_activated(&self, event: &Event, id: &str) -> SelectOutcome {
        let selects = match event {
            Event::DoubleClick => true,
            Event::Click => !self.config.double_click_select,
            Event::Key(_) => event.is_enter(),
        };
        if selects {
            self.select(event, id)
        } else {
            SelectOutcome::Ignored
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Route an activation on a rendered element to the matching handler.
    ///
    /// Element ids follow `{tree_id}-node-{node_id}-{slot}`. The expander
    /// routes to toggle, the paginator to load-more, and the item, body, and
    /// checkbox to selection; the expander never cascades into select
    /// because it is its own element. Ids that do not belong to this tree
    /// return [`DispatchOutcome::Unhandled`].
    pub async fn dispatch(
        &self,
        event: &Event,
        element_id: &str,
    ) -> Result<DispatchOutcome, LoadError> {
        let prefix = format!("{}-node-", self.id);
        let Some(rest) = element_id.strip_prefix(prefix.as_str()) else {
            return Ok(DispatchOutcome::Unhandled);
        };
        let Some((node_id, slot)) = rest.rsplit_once('-') else {
            return Ok(DispatchOutcome::Unhandled);
        };
        match slot {
            "expander" => {
                let outcome = match event {
                    Event::Key(_) => self.key_toggle(event, node_id).await?,
                    _ => self.toggle(event, node_id).await?,
                };
                Ok(DispatchOutcome::Toggle(outcome))
            }
            "paginator" => {
                let outcome = match event {
                    Event::Key(_) => self.key_load_more(event, node_id).await?,
                    _ => self.load_more(event, node_id).await?,
                };
                Ok(DispatchOutcome::LoadMore(outcome))
            }
            "item" | "body" | "checkbox" => {
                Ok(DispatchOutcome::Select(self.item_activated(event, node_id)))
            }
            _ => Ok(DispatchOutcome::Unhandled),
        }
    }
}
