// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small 2D tree over points, then walk the leaf view.
//!
//! Run:
//! - `cargo run -p parcel_demos --example quadtree_basics`

use kurbo::{Point, Rect};
use parcel_geom::QuadtreePolicy;
use parcel_tree::Tree;

fn main() {
    env_logger::init();

    let points = [
        Point::new(10.0, 10.0),
        Point::new(90.0, 10.0),
        Point::new(10.0, 90.0),
        Point::new(90.0, 90.0),
        Point::new(50.0, 50.0),
    ];

    // Split while a node holds more than one point, down to 3 levels.
    let policy = QuadtreePolicy::new(1, 3);
    let mut tree = Tree::new(Rect::new(0.0, 0.0, 100.0, 100.0), points, 2);
    tree.build(&policy).unwrap();

    println!(
        "built {} nodes, {} leaves",
        tree.nodes().len(),
        tree.leaves().len()
    );

    // The typical consumer pattern: iterate leaves, group work per region.
    for &leaf in tree.leaves() {
        let node = tree.node(leaf);
        if node.items().is_empty() {
            continue;
        }
        println!(
            "leaf {:?} (depth {}) holds {:?}",
            node.bound(),
            node.depth(),
            node.items()
        );
    }

    // The center point straddles every quadrant corner and is duplicated by
    // index rather than clipped, so deduplicate when aggregating.
    let mut all: Vec<usize> = tree
        .leaves()
        .iter()
        .flat_map(|&leaf| tree.node(leaf).items().iter().copied())
        .collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), points.len(), "every point reaches some leaf");
}
