use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use lazytree::prelude::*;
use lazytree::sample::{SampleLoader, lazy_roots};

fn contains_text(element: &Element, needle: &str) -> bool {
    if element.text_content() == Some(needle) {
        return true;
    }
    element
        .child_elements()
        .iter()
        .any(|child| contains_text(child, needle))
}

fn partially_loaded(id: &str, loaded: usize, declared: usize) -> TreeNode {
    TreeNode {
        children: (0..loaded)
            .map(|i| TreeNode::leaf(format!("{id}.{i}"), format!("child {i}")))
            .collect(),
        num_children: declared,
        page: 1,
        expanded: true,
        ..TreeNode::leaf(id, id.to_uppercase())
    }
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn test_expander_only_for_expandable_nodes() {
    let tree = Tree::with_nodes(
        vec![
            TreeNode::leaf("branch", "Branch").num_children(4),
            TreeNode::leaf("leaf", "Leaf"),
        ],
        TreeConfig::new(),
    );
    let view = tree.render();
    let prefix = tree.id_string();

    assert!(find_element(&view, &format!("{prefix}-node-branch-expander")).is_some());
    assert!(find_element(&view, &format!("{prefix}-node-leaf-expander")).is_none());
    // Both still get a row.
    assert!(find_element(&view, &format!("{prefix}-node-leaf-item")).is_some());
}

#[test]
fn test_collapsed_node_renders_no_children() {
    let mut node = partially_loaded("n", 2, 2);
    node.expanded = false;
    let tree = Tree::with_nodes(vec![node], TreeConfig::new());
    let view = tree.render();
    let prefix = tree.id_string();

    assert!(find_element(&view, &format!("{prefix}-node-n.0-item")).is_none());
}

#[test]
fn test_indentation_grows_by_depth() {
    let tree = Tree::with_nodes(
        vec![partially_loaded("n", 2, 2)],
        TreeConfig::new().indent_width(4),
    );
    let view = tree.render();
    let prefix = tree.id_string();

    let root_item = find_element(&view, &format!("{prefix}-node-n-item")).unwrap();
    assert_eq!(root_item.child_elements()[0].width, Some(0));

    let child_item = find_element(&view, &format!("{prefix}-node-n.0-item")).unwrap();
    assert_eq!(child_item.child_elements()[0].width, Some(4));
}

#[test]
fn test_checkbox_reflects_selection() {
    let tree = Tree::with_nodes(vec![TreeNode::leaf("a", "A")], TreeConfig::new());
    let prefix = tree.id_string();

    let unchecked = tree.render();
    let checkbox = find_element(&unchecked, &format!("{prefix}-node-a-checkbox")).unwrap();
    assert_eq!(checkbox.text_content(), Some("☐"));

    tree.select(&Event::Click, "a");
    let checked = tree.render();
    let checkbox = find_element(&checked, &format!("{prefix}-node-a-checkbox")).unwrap();
    assert_eq!(checkbox.text_content(), Some("☑"));
}

// =============================================================================
// Paginator
// =============================================================================

#[test]
fn test_paginator_shown_while_more_children_remain() {
    let tree = Tree::with_nodes(
        vec![partially_loaded("n", 3, 5)],
        TreeConfig::new().page_limit(3),
    );
    let view = tree.render();
    let prefix = tree.id_string();
    assert!(find_element(&view, &format!("{prefix}-node-n-paginator")).is_some());
    assert!(contains_text(&view, "Load More"));
}

#[test]
fn test_paginator_hidden_when_fully_fetched() {
    let tree = Tree::with_nodes(
        vec![partially_loaded("n", 5, 5)],
        TreeConfig::new().page_limit(3),
    );
    let view = tree.render();
    let prefix = tree.id_string();
    assert!(find_element(&view, &format!("{prefix}-node-n-paginator")).is_none());
}

#[test]
fn test_paginator_requires_pagination_config() {
    let without_limit = Tree::with_nodes(vec![partially_loaded("n", 3, 5)], TreeConfig::new());
    let prefix = without_limit.id_string();
    assert!(
        find_element(
            &without_limit.render(),
            &format!("{prefix}-node-n-paginator")
        )
        .is_none()
    );

    let disabled = Tree::with_nodes(
        vec![partially_loaded("n", 3, 5)],
        TreeConfig::new().page_limit(3).paginated(false),
    );
    let prefix = disabled.id_string();
    assert!(
        find_element(&disabled.render(), &format!("{prefix}-node-n-paginator")).is_none()
    );
}

// =============================================================================
// Loading indicator
// =============================================================================

struct GatedLoader {
    started: Arc<Notify>,
    gate: Arc<Notify>,
}

#[async_trait]
impl ChildLoader for GatedLoader {
    async fn load_children(
        &self,
        _node: &TreeNode,
        _page_limit: Option<usize>,
    ) -> Result<Vec<TreeNode>, LoadError> {
        self.started.notify_one();
        self.gate.notified().await;
        Ok(vec![TreeNode::leaf("c0", "c0")])
    }
}

#[tokio::test]
async fn test_loading_indicator_tracks_fetch_lifecycle() {
    let started = Arc::new(Notify::new());
    let gate = Arc::new(Notify::new());
    let tree = Tree::with_nodes(
        vec![TreeNode::leaf("n", "N").num_children(1)],
        TreeConfig::new().page_limit(1),
    )
    .with_loader(GatedLoader {
        started: started.clone(),
        gate: gate.clone(),
    });

    assert!(!contains_text(&tree.render(), "Loading..."));

    let task_tree = tree.clone();
    let pending = tokio::spawn(async move { task_tree.toggle(&Event::Click, "n").await });
    started.notified().await;
    assert!(contains_text(&tree.render(), "Loading..."));

    gate.notify_one();
    pending.await.unwrap().unwrap();
    assert!(!contains_text(&tree.render(), "Loading..."));
}

// =============================================================================
// Dispatch
// =============================================================================

#[tokio::test]
async fn test_dispatch_routes_by_slot() {
    let full = vec![TreeNode::branch(
        "n",
        "N",
        (0..5)
            .map(|i| TreeNode::leaf(format!("c{i}"), format!("child {i}")))
            .collect(),
    )];
    let tree = Tree::with_nodes(lazy_roots(&full), TreeConfig::new().page_limit(3))
        .with_loader(SampleLoader::new(&full));
    let prefix = tree.id_string();

    let outcome = tree
        .dispatch(&Event::Click, &format!("{prefix}-node-n-expander"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        DispatchOutcome::Toggle(ToggleOutcome::Expanded { fetched: 3 })
    );

    let outcome = tree
        .dispatch(&Event::Click, &format!("{prefix}-node-n-paginator"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        DispatchOutcome::LoadMore(LoadMoreOutcome::Loaded { fetched: 2 })
    );

    let outcome = tree
        .dispatch(&Event::Click, &format!("{prefix}-node-c0-item"))
        .await
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::Select(SelectOutcome::Selected));
    assert!(tree.is_selected("c0"));

    // Expander activation never cascades into selection.
    assert!(!tree.is_selected("n"));

    let outcome = tree
        .dispatch(&Event::Click, "someone-elses-element")
        .await
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::Unhandled);
}

#[tokio::test]
async fn test_dispatch_keyboard_requires_enter() {
    let tree = Tree::with_nodes(
        vec![TreeNode::branch("n", "N", vec![TreeNode::leaf("c", "C")])],
        TreeConfig::new(),
    );
    let prefix = tree.id_string();

    let outcome = tree
        .dispatch(
            &Event::Key(Key::Char('x')),
            &format!("{prefix}-node-n-expander"),
        )
        .await
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::Toggle(ToggleOutcome::Ignored));

    let outcome = tree
        .dispatch(&Event::Key(Key::Enter), &format!("{prefix}-node-n-expander"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        DispatchOutcome::Toggle(ToggleOutcome::Expanded { fetched: 0 })
    );
}

#[tokio::test]
async fn test_double_click_select_config() {
    let tree = Tree::with_nodes(
        vec![TreeNode::leaf("a", "A")],
        TreeConfig::new().double_click_select(true),
    );
    let prefix = tree.id_string();
    let item = format!("{prefix}-node-a-item");

    let outcome = tree.dispatch(&Event::Click, &item).await.unwrap();
    assert_eq!(outcome, DispatchOutcome::Select(SelectOutcome::Ignored));
    assert!(!tree.is_selected("a"));

    let outcome = tree.dispatch(&Event::DoubleClick, &item).await.unwrap();
    assert_eq!(outcome, DispatchOutcome::Select(SelectOutcome::Selected));
}
