use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use lazytree::prelude::*;
use lazytree::sample::{SampleLoader, lazy_roots};

struct GatedLoader {
    started: Arc<Notify>,
    gate: Arc<Notify>,
    page: Vec<TreeNode>,
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
        Ok(self.page.clone())
    }
}

fn input_forest() -> Vec<TreeNode> {
    vec![
        TreeNode::branch(
            "a",
            "A",
            vec![TreeNode::leaf("a1", "A1"), TreeNode::leaf("a2", "A2")],
        ),
        TreeNode::leaf("b", "B"),
    ]
}

// =============================================================================
// Externally-controlled mode
// =============================================================================

#[test]
fn test_external_identical_input_is_a_noop() {
    let tree = Tree::with_nodes(input_forest(), TreeConfig::new());
    tree.clear_dirty();

    tree.sync(input_forest());
    assert!(!tree.is_dirty());
    assert_eq!(tree.roots(), input_forest());
}

#[test]
fn test_external_changed_input_rehydrates() {
    let tree = Tree::with_nodes(input_forest(), TreeConfig::new());

    let mut changed = input_forest();
    changed.push(TreeNode::leaf("c", "C"));
    tree.sync(changed.clone());

    assert!(tree.is_dirty());
    assert_eq!(tree.roots(), changed);
}

#[tokio::test]
async fn test_external_mode_reflects_internal_mutations_back() {
    // A host that folds on_update snapshots into its canonical copy and
    // re-sends them must not bounce the tree's own mutations.
    let tree = Tree::with_nodes(input_forest(), TreeConfig::new());
    tree.toggle(&Event::Click, "a").await.unwrap();
    assert!(tree.is_expanded("a"));

    tree.sync(tree.roots());
    assert!(tree.is_expanded("a"));
}

#[tokio::test]
async fn test_resync_during_fetch_keeps_loading_guard() {
    let started = Arc::new(Notify::new());
    let gate = Arc::new(Notify::new());
    let tree = Tree::with_nodes(
        vec![TreeNode::leaf("n", "N").num_children(2)],
        TreeConfig::new().page_limit(2),
    )
    .with_loader(GatedLoader {
        started: started.clone(),
        gate: gate.clone(),
        page: vec![TreeNode::leaf("c0", "c0"), TreeNode::leaf("c1", "c1")],
    });

    let task_tree = tree.clone();
    let pending = tokio::spawn(async move { task_tree.toggle(&Event::Click, "n").await });
    started.notified().await;
    assert!(tree.is_expander_loading("n"));

    // A structurally identical re-send must not drop the in-flight guard.
    tree.sync(tree.roots());
    assert!(tree.is_expander_loading("n"));

    gate.notify_one();
    assert_eq!(
        pending.await.unwrap().unwrap(),
        ToggleOutcome::Expanded { fetched: 2 }
    );
    assert!(!tree.is_expander_loading("n"));
    assert_eq!(tree.find("n").unwrap().children.len(), 2);
}

#[tokio::test]
async fn test_node_removed_during_fetch_drops_the_page() {
    let started = Arc::new(Notify::new());
    let gate = Arc::new(Notify::new());
    let tree = Tree::with_nodes(
        vec![
            TreeNode::leaf("n", "N").num_children(2),
            TreeNode::leaf("other", "Other"),
        ],
        TreeConfig::new().page_limit(2),
    )
    .with_loader(GatedLoader {
        started: started.clone(),
        gate: gate.clone(),
        page: vec![TreeNode::leaf("c0", "c0")],
    });

    let task_tree = tree.clone();
    let pending = tokio::spawn(async move { task_tree.toggle(&Event::Click, "n").await });
    started.notified().await;

    tree.sync(vec![TreeNode::leaf("other", "Other")]);

    gate.notify_one();
    assert_eq!(pending.await.unwrap().unwrap(), ToggleOutcome::Ignored);
    assert!(!tree.is_expander_loading("n"));
    assert!(tree.find("n").is_none());
}

// =============================================================================
// Locally-controlled mode
// =============================================================================

#[tokio::test]
async fn test_local_mode_ignores_resend_of_same_input() {
    let tree = Tree::with_nodes(input_forest(), TreeConfig::new().locally_controlled());
    tree.toggle(&Event::Click, "a").await.unwrap();
    tree.select(&Event::Click, "b");

    // The host re-renders with the same prop; internal mutations survive.
    tree.sync(input_forest());
    assert!(tree.is_expanded("a"));
    assert!(tree.is_selected("b"));
}

#[tokio::test]
async fn test_local_mode_reforks_on_changed_input() {
    let tree = Tree::with_nodes(input_forest(), TreeConfig::new().locally_controlled());
    tree.toggle(&Event::Click, "a").await.unwrap();

    let mut changed = input_forest();
    changed.push(TreeNode::leaf("c", "C"));
    tree.sync(changed);

    assert!(!tree.is_expanded("a"));
    assert!(tree.find("c").is_some());
}

// =============================================================================
// Parse and normalization
// =============================================================================

#[tokio::test]
async fn test_parse_hook_applies_to_input_and_fetch_results() {
    fn shout(mut nodes: Vec<TreeNode>) -> Vec<TreeNode> {
        for node in &mut nodes {
            node.name = node.name.to_uppercase();
            node.children = shout(std::mem::take(&mut node.children));
        }
        nodes
    }

    let full = vec![TreeNode::branch(
        "n",
        "quiet",
        vec![TreeNode::leaf("c0", "whisper")],
    )];
    let tree = Tree::new(TreeConfig::new().page_limit(5))
        .with_parse(shout)
        .with_loader(SampleLoader::new(&full));
    tree.sync(lazy_roots(&full));

    assert_eq!(tree.find("n").unwrap().name, "QUIET");

    tree.toggle(&Event::Click, "n").await.unwrap();
    assert_eq!(tree.find("c0").unwrap().name, "WHISPER");
}

#[test]
fn test_missing_ids_get_positional_fallbacks() {
    let tree = Tree::with_nodes(
        vec![
            TreeNode::leaf("", "first"),
            TreeNode::branch("p", "parent", vec![TreeNode::leaf("", "anon child")]),
        ],
        TreeConfig::new(),
    );

    let roots = tree.roots();
    assert_eq!(roots[0].id, "0");
    assert_eq!(roots[1].children[0].id, "p/0");
}

// =============================================================================
// Cache
// =============================================================================

#[test]
fn test_cache_rebuilds_from_current_forest() {
    let tree = Tree::with_nodes(input_forest(), TreeConfig::new());
    let cache = tree.cache();
    assert_eq!(cache.len(), 4);
    assert_eq!(cache["a1"].name, "A1");

    tree.sync(vec![TreeNode::leaf("solo", "Solo")]);
    let cache = tree.cache();
    assert_eq!(cache.len(), 1);
    assert!(cache.contains_key("solo"));
}
