// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree over 3D points.
//!
//! Run:
//! - `cargo run -p parcel_demos --example octree_points`

use parcel_geom::{Aabb3, OctreePolicy};
use parcel_tree::Tree;

fn main() {
    env_logger::init();

    // A loose cluster near one corner plus a few strays.
    let points: Vec<[f64; 3]> = vec![
        [1.0, 1.0, 1.0],
        [2.0, 1.5, 1.0],
        [1.5, 2.0, 2.5],
        [2.5, 2.5, 2.0],
        [9.0, 9.0, 9.0],
        [9.0, 1.0, 9.0],
    ];

    let policy = OctreePolicy::new(1, 4);
    let mut tree = Tree::new(Aabb3::new([0.0; 3], [10.0; 3]), points, 3);
    tree.build(&policy).unwrap();

    println!(
        "dimensions={} combinations={} nodes={} leaves={}",
        tree.dimensions(),
        tree.combinations(),
        tree.nodes().len(),
        tree.leaves().len()
    );

    let occupied = tree
        .leaves()
        .iter()
        .filter(|&&leaf| !tree.node(leaf).items().is_empty())
        .count();
    println!("{occupied} occupied leaves");

    // Appending an item leaves the built structure stale until the next build.
    tree.add([5.0, 5.0, 5.0]);
    let before = tree.leaves().len();
    tree.build(&policy).unwrap();
    println!("leaves before rebuild: {before}, after: {}", tree.leaves().len());
}
