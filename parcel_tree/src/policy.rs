// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Policy trait supplying the geometric semantics the tree is agnostic to.

use alloc::vec::Vec;

use crate::node::Node;

/// Geometric policy driving subdivision of a [`Tree`](crate::Tree).
///
/// The tree never interprets bounds or items itself; all geometry goes through
/// these four operations. `B` is the bound type and `T` the item type.
///
/// # Termination
///
/// The tree imposes no depth limit of its own (unless the caller opts into
/// [`BuildOptions::max_depth`](crate::BuildOptions::max_depth)). Along every
/// subdivision path, [`should_subdivide`](Self::should_subdivide) must
/// eventually return `false`; a policy that always answers `true` makes the
/// build run until memory is exhausted.
pub trait Policy<B, T> {
    /// Does the item intersect the bound?
    ///
    /// Called only against the root bound, to decide whether an item is a
    /// candidate for the tree at all.
    fn intersects(&self, item: &T, bound: &B) -> bool;

    /// With these items loaded, should this node subdivide any further?
    fn should_subdivide(&self, node: &Node<B>) -> bool;

    /// The sub-region owned by child `child` of a node with bound `bound`.
    ///
    /// `child` ranges over `0..2^D`. The mapping from child index to spatial
    /// quadrant/octant is up to the policy; the tree treats child slots as
    /// opaque ordered positions.
    fn subdivide_bound(&self, bound: &B, child: usize) -> B;

    /// Which of the just-created children does `item` intersect?
    ///
    /// `child_bounds` holds all `2^D` child bounds in child-index order.
    /// Implementations append the hit child indices to `hits` (cleared by the
    /// caller) and return `true`. Returning `false` means no usable
    /// intersection was found for any child; the tree then drops the item
    /// from the subtree, or aborts in strict mode.
    fn resolve_intersections(&self, child_bounds: &[B], item: &T, hits: &mut Vec<usize>) -> bool;
}

/// A [`Policy`] assembled from four closures.
///
/// Useful for tests and one-off trees where defining a policy type is noise:
///
/// ```
/// use parcel_tree::{FnPolicy, Node, Tree};
///
/// // One-dimensional tree over (lo, hi) intervals holding f64 points.
/// let policy = FnPolicy::new(
///     |p: &f64, b: &(f64, f64)| *p >= b.0 && *p <= b.1,
///     |node: &Node<(f64, f64)>| node.items().len() > 1,
///     |b: &(f64, f64), child| {
///         let mid = 0.5 * (b.0 + b.1);
///         if child == 0 { (b.0, mid) } else { (mid, b.1) }
///     },
///     |bounds: &[(f64, f64)], p: &f64, hits: &mut Vec<usize>| {
///         hits.extend(bounds.iter().enumerate().filter(|(_, b)| *p >= b.0 && *p <= b.1).map(|(i, _)| i));
///         !hits.is_empty()
///     },
/// );
///
/// let mut tree = Tree::new((0.0, 8.0), [1.0, 7.0], 1);
/// tree.build(&policy).unwrap();
/// assert_eq!(tree.leaves().len(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnPolicy<FI, FS, FB, FR> {
    intersects: FI,
    should_subdivide: FS,
    subdivide_bound: FB,
    resolve_intersections: FR,
}

impl<FI, FS, FB, FR> FnPolicy<FI, FS, FB, FR> {
    /// Bundle the four policy operations into one value.
    pub const fn new(
        intersects: FI,
        should_subdivide: FS,
        subdivide_bound: FB,
        resolve_intersections: FR,
    ) -> Self {
        Self {
            intersects,
            should_subdivide,
            subdivide_bound,
            resolve_intersections,
        }
    }
}

impl<B, T, FI, FS, FB, FR> Policy<B, T> for FnPolicy<FI, FS, FB, FR>
where
    FI: Fn(&T, &B) -> bool,
    FS: Fn(&Node<B>) -> bool,
    FB: Fn(&B, usize) -> B,
    FR: Fn(&[B], &T, &mut Vec<usize>) -> bool,
{
    fn intersects(&self, item: &T, bound: &B) -> bool {
        (self.intersects)(item, bound)
    }

    fn should_subdivide(&self, node: &Node<B>) -> bool {
        (self.should_subdivide)(node)
    }

    fn subdivide_bound(&self, bound: &B, child: usize) -> B {
        (self.subdivide_bound)(bound, child)
    }

    fn resolve_intersections(&self, child_bounds: &[B], item: &T, hits: &mut Vec<usize>) -> bool {
        (self.resolve_intersections)(child_bounds, item, hits)
    }
}
