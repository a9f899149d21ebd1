use std::sync::{Arc, Mutex};

use lazytree::prelude::*;
use lazytree::sample::{SampleLoader, lazy_roots};

fn full_forest() -> Vec<TreeNode> {
    vec![TreeNode::branch(
        "n",
        "N",
        (0..4)
            .map(|i| TreeNode::leaf(format!("c{i}"), format!("child {i}")))
            .collect(),
    )]
}

#[tokio::test]
async fn test_toggle_callback_gets_node_and_forest_snapshot() {
    let seen: Arc<Mutex<Vec<(String, bool, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let tree = Tree::new(TreeConfig::new().page_limit(2))
        .with_loader(SampleLoader::new(&full_forest()))
        .on_toggle(move |_event, node, forest| {
            sink.lock().unwrap().push((
                node.id.clone(),
                node.expanded,
                forest[0].children.len(),
            ));
        });
    tree.sync(lazy_roots(&full_forest()));

    tree.toggle(&Event::Click, "n").await.unwrap();
    tree.toggle(&Event::Click, "n").await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        [
            ("n".to_string(), true, 2),
            ("n".to_string(), false, 2),
        ]
    );
}

#[tokio::test]
async fn test_update_fires_after_every_committed_change() {
    let updates = Arc::new(Mutex::new(Vec::new()));
    let sink = updates.clone();
    let tree = Tree::new(TreeConfig::new().page_limit(2))
        .with_loader(SampleLoader::new(&full_forest()))
        .on_update(move |forest| {
            sink.lock().unwrap().push(forest[0].children.len());
        });
    tree.sync(lazy_roots(&full_forest()));

    tree.toggle(&Event::Click, "n").await.unwrap();
    tree.load_more(&Event::Click, "n").await.unwrap();
    tree.select(&Event::Click, "n");

    assert_eq!(updates.lock().unwrap().as_slice(), [2, 4, 4]);
}

#[test]
fn test_select_callback_is_independent_of_toggle() {
    let selects = Arc::new(Mutex::new(Vec::new()));
    let toggles = Arc::new(Mutex::new(Vec::new()));
    let select_sink = selects.clone();
    let toggle_sink = toggles.clone();
    let tree = Tree::with_nodes(vec![TreeNode::leaf("a", "A")], TreeConfig::new())
        .on_select(move |_event, node, _forest| {
            select_sink.lock().unwrap().push(node.selected);
        })
        .on_toggle(move |_event, node, _forest| {
            toggle_sink.lock().unwrap().push(node.id.clone());
        });

    tree.select(&Event::Click, "a");
    tree.select(&Event::Click, "a");

    assert_eq!(selects.lock().unwrap().as_slice(), [true, false]);
    assert!(toggles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_load_error_reaches_the_host() {
    struct FailingLoader;

    #[async_trait]
    impl ChildLoader for FailingLoader {
        async fn load_children(
            &self,
            _node: &TreeNode,
            _page_limit: Option<usize>,
        ) -> Result<Vec<TreeNode>, LoadError> {
            Err(LoadError::new("boom"))
        }
    }

    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = errors.clone();
    let tree = Tree::with_nodes(
        vec![TreeNode::leaf("n", "N").num_children(3)],
        TreeConfig::new().page_limit(3),
    )
    .with_loader(FailingLoader)
    .on_load_error(move |node, error| {
        sink.lock().unwrap().push((node.id.clone(), error.message.clone()));
    });

    assert!(tree.toggle(&Event::Click, "n").await.is_err());
    assert_eq!(
        errors.lock().unwrap().as_slice(),
        [("n".to_string(), "boom".to_string())]
    );
}
