// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strict unresolved-intersection reporting.
//!
//! The default build silently drops an item the policy cannot route into any
//! child. Strict mode turns that into an error so the drop can be audited.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p parcel_demos --example strict_mode`

use parcel_tree::{BuildOptions, FnPolicy, Node, Tree};

fn main() {
    env_logger::init();

    // A deliberately broken 1-D policy: child bounds are computed with a gap
    // in the middle, so points near the midpoint resolve into neither child.
    let policy = FnPolicy::new(
        |p: &f64, b: &(f64, f64)| *p >= b.0 && *p <= b.1,
        |node: &Node<(f64, f64)>| node.items().len() > 1 && node.depth() < 4,
        |b: &(f64, f64), child| {
            let mid = 0.5 * (b.0 + b.1);
            let gap = 0.05 * (b.1 - b.0);
            if child == 0 { (b.0, mid - gap) } else { (mid + gap, b.1) }
        },
        |bounds: &[(f64, f64)], p: &f64, hits: &mut Vec<usize>| {
            for (child, b) in bounds.iter().enumerate() {
                if *p >= b.0 && *p <= b.1 {
                    hits.push(child);
                }
            }
            !hits.is_empty()
        },
    );

    let items = [1.0, 5.0, 5.1, 9.0];
    let mut tree = Tree::new((0.0, 10.0), items, 1);

    // Default: the midpoint items vanish below the root (watch RUST_LOG=debug).
    tree.build(&policy).unwrap();
    let reachable = tree
        .leaves()
        .iter()
        .flat_map(|&leaf| tree.node(leaf).items())
        .count();
    println!("default build: {reachable} of {} items reachable", items.len());

    // Strict: the first unresolved item aborts the build.
    match tree.build_with(&policy, BuildOptions::strict()) {
        Ok(()) => println!("strict build succeeded"),
        Err(err) => println!("strict build failed: {err}"),
    }
    assert!(tree.nodes().is_empty(), "failed build leaves no partial tree");
}
