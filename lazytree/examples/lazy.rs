//! Lazy loading example - demonstrates the tree widget end to end:
//! - Children fetched on first expansion, one page at a time
//! - "Load More" pagination on long sibling lists
//! - Selection, independent of expansion
//!
//! There is no terminal runtime here; the rendered element tree is printed
//! as plain text after each interaction.

use std::fs::File;
use std::time::Duration;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use lazytree::prelude::*;
use lazytree::sample::{SampleLoader, lazy_roots, sample_forest};

/// Flatten an element tree into printable lines.
fn render_text(element: &Element) -> String {
    let mut lines = Vec::new();
    collect_lines(element, &mut lines);
    lines.join("\n")
}

fn collect_lines(element: &Element, lines: &mut Vec<String>) {
    match element.direction {
        Direction::Row => {
            let mut line = String::new();
            collect_row(element, &mut line);
            lines.push(line.trim_end().to_string());
        }
        Direction::Column => match &element.content {
            Content::Text(text) => lines.push(text.clone()),
            Content::Children(children) => {
                for child in children {
                    collect_lines(child, lines);
                }
            }
            Content::None => {}
        },
    }
}

fn collect_row(element: &Element, line: &mut String) {
    match &element.content {
        Content::Text(text) => {
            line.push_str(text);
            line.push(' ');
        }
        Content::Children(children) => {
            for child in children {
                collect_row(child, line);
            }
        }
        Content::None => {}
    }
}

#[tokio::main]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("lazy.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let full = sample_forest();
    let tree = Tree::with_nodes(lazy_roots(&full), TreeConfig::new().page_limit(5))
        .with_loader(SampleLoader::new(&full).with_delay(Duration::from_millis(200)))
        .on_update(|forest| log::debug!("forest updated, {} roots", forest.len()));

    println!("Initial view:\n{}\n", render_text(&tree.render()));

    tree.toggle(&Event::Click, "org")
        .await
        .expect("load departments");
    println!(
        "After expanding the company:\n{}\n",
        render_text(&tree.render())
    );

    tree.toggle(&Event::Click, "eng")
        .await
        .expect("load engineers");
    println!(
        "After expanding Engineering (first page):\n{}\n",
        render_text(&tree.render())
    );

    tree.load_more(&Event::Click, "eng")
        .await
        .expect("load more engineers");
    println!(
        "After Load More (second page):\n{}\n",
        render_text(&tree.render())
    );

    tree.select(&Event::Click, "eng/3");
    println!(
        "After selecting Engineer 3:\n{}\n",
        render_text(&tree.render())
    );
    println!("Selected: {:?}", tree.selected_ids());
}
