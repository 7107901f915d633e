// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: construction, build, queries.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::BuildError;
use crate::node::Node;
use crate::policy::Policy;
use crate::types::{BuildFlags, BuildOptions, NodeId};

/// N-dimensional spatial partitioning tree.
///
/// A `Tree` owns an ordered item sequence, an arena of [`Node`]s, and a
/// derived leaf view. [`build`](Self::build) recursively subdivides the root
/// bound according to a [`Policy`], assigning each item (by index) to every
/// node region it intersects. See the crate docs for the full model.
///
/// `B` is the bound type, `T` the item type; the tree interprets neither.
pub struct Tree<B, T> {
    dimensions: usize,
    bound: B,
    items: Vec<T>,
    nodes: Vec<Node<B>>,
    leaves: Vec<NodeId>,
}

impl<B, T> core::fmt::Debug for Tree<B, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("dimensions", &self.dimensions)
            .field("items", &self.items.len())
            .field("nodes", &self.nodes.len())
            .field("leaves", &self.leaves.len())
            .finish_non_exhaustive()
    }
}

impl<B, T> Tree<B, T> {
    /// Create a tree over `bound` holding `items`, with `dimensions` axes.
    ///
    /// The tree starts unbuilt: no nodes, no leaves. Call [`build`](Self::build).
    ///
    /// # Panics
    ///
    /// Panics if `dimensions` is `0` or too large for `2^dimensions` child
    /// slots to be representable.
    pub fn new(bound: B, items: impl IntoIterator<Item = T>, dimensions: usize) -> Self {
        assert!(dimensions >= 1, "dimensions must be at least 1");
        assert!(
            dimensions < usize::BITS as usize,
            "2^dimensions must fit in usize"
        );
        Self {
            dimensions,
            bound,
            items: items.into_iter().collect(),
            nodes: Vec::new(),
            leaves: Vec::new(),
        }
    }

    /// Dimensionality of this tree (2 or 3, usually).
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of children per subdivision: `2^dimensions`.
    pub fn combinations(&self) -> usize {
        1 << self.dimensions
    }

    /// The root bound.
    pub fn bound(&self) -> &B {
        &self.bound
    }

    /// The tree's items, in insertion order.
    ///
    /// Nodes refer to items by index into this slice.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// All nodes of the last build, in creation (arena) order. Index 0 is the
    /// root. Empty before the first build and after [`clear`](Self::clear).
    pub fn nodes(&self) -> &[Node<B>] {
        &self.nodes
    }

    /// Access a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a node of the current build.
    pub fn node(&self, id: NodeId) -> &Node<B> {
        &self.nodes[id.idx()]
    }

    /// Ids of the leaf nodes of the last build, in arena order.
    ///
    /// This is the query surface for consumers: iterate leaves, read each
    /// leaf's [`bound`](Node::bound) and [`items`](Node::items). An item
    /// straddling subdivision boundaries appears under several leaves;
    /// deduplicate by item index when aggregating across leaves.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Append an item.
    ///
    /// Does not update a previously built structure; the node and leaf views
    /// are stale with respect to the new item until the next [`build`](Self::build).
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Clears items, nodes, and leaves together.
    pub fn clear(&mut self) {
        self.leaves.clear();
        self.nodes.clear();
        self.items.clear();
    }
}

impl<B: Clone, T> Tree<B, T> {
    /// Build the tree with default [`BuildOptions`].
    ///
    /// With default options the build cannot fail; the `Result` only carries
    /// errors for the opt-in strict and depth-guard modes of
    /// [`build_with`](Self::build_with).
    ///
    /// # Errors
    ///
    /// None with default options; see [`build_with`](Self::build_with).
    pub fn build<P: Policy<B, T>>(&mut self, policy: &P) -> Result<(), BuildError> {
        self.build_with(policy, BuildOptions::default())
    }

    /// Build the tree, discarding any previous structure.
    ///
    /// Seeds the root with every item intersecting the root bound (in item
    /// order), subdivides per the policy, then recomputes the leaf view.
    /// Repeated builds with a pure policy and unchanged items produce
    /// identical node and leaf structures.
    ///
    /// # Errors
    ///
    /// [`BuildError::UnresolvedIntersection`] in strict mode,
    /// [`BuildError::DepthLimitExceeded`] with a depth guard. On error the
    /// tree is left cleared (items kept), never partially built.
    pub fn build_with<P: Policy<B, T>>(
        &mut self,
        policy: &P,
        options: BuildOptions,
    ) -> Result<(), BuildError> {
        self.leaves.clear();
        self.nodes.clear();

        let mut root = Node::new(self.bound.clone(), 0);

        // No items: the root is the sole leaf, no subdivision attempt.
        if self.items.is_empty() {
            self.nodes.push(root);
            self.leaves.push(NodeId::new(0));
            return Ok(());
        }

        for (index, item) in self.items.iter().enumerate() {
            if policy.intersects(item, &self.bound) {
                root.push_item(index);
            }
        }
        self.nodes.push(root);

        if let Err(err) = self.subdivide(policy, options) {
            self.nodes.clear();
            self.leaves.clear();
            return Err(err);
        }

        for index in 0..self.nodes.len() {
            if self.nodes[index].is_leaf() {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                let id = NodeId::new(index as u32);
                self.leaves.push(id);
            }
        }
        Ok(())
    }

    /// Work-queue subdivision pass over the arena, starting at the root.
    ///
    /// A FIFO queue gives root-first, breadth-first arena creation order and
    /// keeps the policy's termination contract visible in one loop condition.
    fn subdivide<P: Policy<B, T>>(
        &mut self,
        policy: &P,
        options: BuildOptions,
    ) -> Result<(), BuildError> {
        let combinations = self.combinations();
        let strict = options.flags.contains(BuildFlags::STRICT_UNRESOLVED);
        let mut queue = VecDeque::new();
        queue.push_back(NodeId::new(0));
        let mut hits = Vec::with_capacity(combinations);

        while let Some(id) = queue.pop_front() {
            if !policy.should_subdivide(&self.nodes[id.idx()]) {
                continue;
            }
            let depth = self.nodes[id.idx()].depth();
            if let Some(limit) = options.max_depth {
                if depth >= limit {
                    return Err(BuildError::DepthLimitExceeded { depth });
                }
            }

            let child_bounds: Vec<B> = (0..combinations)
                .map(|child| policy.subdivide_bound(self.nodes[id.idx()].bound(), child))
                .collect();

            // Register the children in the arena before routing items into them.
            let first = self.nodes.len();
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            let child_ids: Vec<NodeId> = (0..combinations)
                .map(|child| NodeId::new((first + child) as u32))
                .collect();
            for bound in &child_bounds {
                self.nodes.push(Node::new(bound.clone(), depth + 1));
            }

            // Stable snapshot of the item list; the arena is mutated below.
            let item_indices = self.nodes[id.idx()].items().to_vec();
            for index in item_indices {
                hits.clear();
                if policy.resolve_intersections(&child_bounds, &self.items[index], &mut hits) {
                    // An item may straddle a boundary and land in several
                    // children; it is duplicated by index, never clipped.
                    for &hit in &hits {
                        self.nodes[child_ids[hit].idx()].push_item(index);
                    }
                } else if strict {
                    return Err(BuildError::UnresolvedIntersection { node: id, item: index });
                } else {
                    debug!("item {index} unresolved at node {id:?}, dropped from subtree");
                }
            }

            trace!("subdivided node {id:?} at depth {depth} into {combinations} children");
            self.nodes[id.idx()].set_children(child_ids.clone());
            queue.extend(child_ids);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::FnPolicy;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Closed interval on the number line; synthetic 1-D bound for tests.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Span {
        lo: f64,
        hi: f64,
    }

    impl Span {
        const fn new(lo: f64, hi: f64) -> Self {
            Self { lo, hi }
        }

        fn contains(&self, p: f64) -> bool {
            p >= self.lo && p <= self.hi
        }

        fn halves(&self) -> [Self; 2] {
            let mid = 0.5 * (self.lo + self.hi);
            [Self::new(self.lo, mid), Self::new(mid, self.hi)]
        }
    }

    /// Binary split of a span, point items, multi-hit on the shared midpoint.
    struct SpanPolicy {
        max_items: usize,
        max_depth: usize,
    }

    impl Policy<Span, f64> for SpanPolicy {
        fn intersects(&self, item: &f64, bound: &Span) -> bool {
            bound.contains(*item)
        }

        fn should_subdivide(&self, node: &Node<Span>) -> bool {
            node.items().len() > self.max_items && node.depth() < self.max_depth
        }

        fn subdivide_bound(&self, bound: &Span, child: usize) -> Span {
            bound.halves()[child]
        }

        fn resolve_intersections(
            &self,
            child_bounds: &[Span],
            item: &f64,
            hits: &mut Vec<usize>,
        ) -> bool {
            for (child, bound) in child_bounds.iter().enumerate() {
                if bound.contains(*item) {
                    hits.push(child);
                }
            }
            !hits.is_empty()
        }
    }

    fn span_tree(items: impl IntoIterator<Item = f64>) -> Tree<Span, f64> {
        Tree::new(Span::new(0.0, 8.0), items, 1)
    }

    #[test]
    fn empty_items_root_is_sole_leaf() {
        let mut tree = span_tree([]);
        tree.build(&SpanPolicy {
            max_items: 0,
            max_depth: 8,
        })
        .unwrap();
        assert_eq!(tree.nodes().len(), 1, "only the root node");
        assert_eq!(tree.leaves(), &[NodeId::new(0)]);
        assert!(tree.node(NodeId::new(0)).is_leaf());
        assert!(tree.node(NodeId::new(0)).items().is_empty());
    }

    #[test]
    fn root_filters_items_outside_bound() {
        let mut tree = span_tree([1.0, 100.0, 7.0]);
        tree.build(&SpanPolicy {
            max_items: 8,
            max_depth: 8,
        })
        .unwrap();
        // Item 1 (100.0) is outside the root span and never enters the tree.
        assert_eq!(tree.node(NodeId::new(0)).items(), &[0, 2]);
    }

    #[test]
    fn subdivision_routes_items_to_halves() {
        let mut tree = span_tree([1.0, 7.0]);
        tree.build(&SpanPolicy {
            max_items: 1,
            max_depth: 8,
        })
        .unwrap();
        assert_eq!(tree.nodes().len(), 3);
        let root = tree.node(NodeId::new(0));
        assert_eq!(root.children().len(), tree.combinations());
        assert_eq!(tree.node(root.children()[0]).items(), &[0]);
        assert_eq!(tree.node(root.children()[1]).items(), &[1]);
        assert_eq!(tree.leaves(), &[NodeId::new(1), NodeId::new(2)]);
    }

    #[test]
    fn straddling_item_lands_in_both_children() {
        // 4.0 sits exactly on the midpoint of [0, 8]; closed intervals on
        // both sides, so both children report a hit.
        let mut tree = span_tree([1.0, 4.0]);
        tree.build(&SpanPolicy {
            max_items: 1,
            max_depth: 1,
        })
        .unwrap();
        let root = tree.node(NodeId::new(0));
        assert_eq!(tree.node(root.children()[0]).items(), &[0, 1]);
        assert_eq!(tree.node(root.children()[1]).items(), &[1]);
    }

    #[test]
    fn failed_resolution_drops_item_below_root() {
        let policy = FnPolicy::new(
            |p: &f64, b: &Span| b.contains(*p),
            |node: &Node<Span>| node.depth() < 2,
            |b: &Span, child| b.halves()[child],
            |_: &[Span], _: &f64, _: &mut Vec<usize>| false,
        );
        let mut tree = span_tree([1.0, 5.0]);
        tree.build(&policy).unwrap();
        // Root keeps its assignment; every descendant list is empty.
        assert_eq!(tree.node(NodeId::new(0)).items(), &[0, 1]);
        for node in &tree.nodes()[1..] {
            assert!(node.items().is_empty(), "dropped items must not reappear");
        }
    }

    #[test]
    fn strict_mode_reports_unresolved_intersection() {
        let policy = FnPolicy::new(
            |p: &f64, b: &Span| b.contains(*p),
            |node: &Node<Span>| node.depth() < 1,
            |b: &Span, child| b.halves()[child],
            |_: &[Span], _: &f64, _: &mut Vec<usize>| false,
        );
        let mut tree = span_tree([3.0]);
        let err = tree.build_with(&policy, BuildOptions::strict()).unwrap_err();
        assert_eq!(
            err,
            BuildError::UnresolvedIntersection {
                node: NodeId::new(0),
                item: 0
            }
        );
        // No partial tree survives a failed build.
        assert!(tree.nodes().is_empty());
        assert!(tree.leaves().is_empty());
        assert_eq!(tree.items().len(), 1, "items are kept on error");
    }

    #[test]
    fn depth_guard_converts_runaway_policy_into_error() {
        // Never terminates on its own; the guard must stop it.
        let policy = FnPolicy::new(
            |p: &f64, b: &Span| b.contains(*p),
            |_: &Node<Span>| true,
            |b: &Span, child| b.halves()[child],
            |bounds: &[Span], p: &f64, hits: &mut Vec<usize>| {
                hits.extend(
                    bounds
                        .iter()
                        .enumerate()
                        .filter(|(_, b)| b.contains(*p))
                        .map(|(child, _)| child),
                );
                !hits.is_empty()
            },
        );
        let mut tree = span_tree([1.0]);
        let err = tree
            .build_with(&policy, BuildOptions::with_max_depth(3))
            .unwrap_err();
        assert_eq!(err, BuildError::DepthLimitExceeded { depth: 3 });
        assert!(tree.nodes().is_empty());
    }

    #[test]
    fn every_root_item_reaches_a_leaf() {
        let mut tree = span_tree([0.5, 1.5, 2.5, 3.5, 5.5, 6.5, 7.5]);
        tree.build(&SpanPolicy {
            max_items: 1,
            max_depth: 8,
        })
        .unwrap();
        for index in tree.node(NodeId::new(0)).items().to_vec() {
            let reached = tree
                .leaves()
                .iter()
                .any(|&leaf| tree.node(leaf).items().contains(&index));
            assert!(reached, "item {index} must appear in at least one leaf");
        }
    }

    #[test]
    fn children_count_is_zero_or_combinations() {
        let mut tree = span_tree([0.5, 1.5, 2.5, 3.5, 7.5]);
        tree.build(&SpanPolicy {
            max_items: 1,
            max_depth: 4,
        })
        .unwrap();
        for node in tree.nodes() {
            let n = node.children().len();
            assert!(
                n == 0 || n == tree.combinations(),
                "partial subdivision is not allowed"
            );
        }
    }

    #[test]
    fn child_bounds_derive_from_parent_bound() {
        let policy = SpanPolicy {
            max_items: 1,
            max_depth: 8,
        };
        let mut tree = span_tree([0.5, 3.5, 6.5, 7.5]);
        tree.build(&policy).unwrap();
        // Checking each parent-child edge verifies the fold of
        // subdivide_bound along every root-to-leaf path.
        for node in tree.nodes() {
            for (child, &id) in node.children().iter().enumerate() {
                assert_eq!(
                    *tree.node(id).bound(),
                    policy.subdivide_bound(node.bound(), child)
                );
                assert_eq!(tree.node(id).depth(), node.depth() + 1);
            }
        }
    }

    #[test]
    fn rebuild_is_deterministic() {
        let policy = SpanPolicy {
            max_items: 1,
            max_depth: 6,
        };
        let mut tree = span_tree([0.25, 1.0, 2.0, 4.0, 6.0, 7.75]);
        tree.build(&policy).unwrap();
        let nodes: Vec<_> = tree.nodes().to_vec();
        let leaves: Vec<_> = tree.leaves().to_vec();
        tree.build(&policy).unwrap();
        assert_eq!(tree.nodes(), &nodes[..]);
        assert_eq!(tree.leaves(), &leaves[..]);
    }

    #[test]
    fn add_appends_without_touching_built_structure() {
        let policy = SpanPolicy {
            max_items: 1,
            max_depth: 6,
        };
        let mut tree = span_tree([1.0, 7.0]);
        tree.build(&policy).unwrap();
        let leaves_before = tree.leaves().to_vec();

        tree.add(2.0);
        assert_eq!(tree.items().len(), 3);
        // Stale until rebuilt: the new item index appears in no node.
        assert_eq!(tree.leaves(), &leaves_before[..]);
        assert!(tree.nodes().iter().all(|n| !n.items().contains(&2)));

        tree.build(&policy).unwrap();
        let reached = tree
            .leaves()
            .iter()
            .any(|&leaf| tree.node(leaf).items().contains(&2));
        assert!(reached, "rebuild must pick up the appended item");
    }

    #[test]
    fn clear_empties_everything_together() {
        let mut tree = span_tree([1.0, 7.0]);
        tree.build(&SpanPolicy {
            max_items: 1,
            max_depth: 4,
        })
        .unwrap();
        tree.clear();
        assert!(tree.items().is_empty());
        assert!(tree.nodes().is_empty());
        assert!(tree.leaves().is_empty());
    }

    #[test]
    fn combinations_doubles_per_dimension() {
        let t2: Tree<Span, f64> = Tree::new(Span::new(0.0, 1.0), [], 2);
        let t3: Tree<Span, f64> = Tree::new(Span::new(0.0, 1.0), [], 3);
        assert_eq!(t2.combinations(), 4);
        assert_eq!(t3.combinations(), 8);
    }

    #[test]
    fn leaves_follow_arena_order() {
        let mut tree = span_tree(vec![0.5, 1.5, 6.5, 7.5]);
        tree.build(&SpanPolicy {
            max_items: 1,
            max_depth: 4,
        })
        .unwrap();
        let mut sorted = tree.leaves().to_vec();
        sorted.sort();
        assert_eq!(tree.leaves(), &sorted[..], "leaf view is in arena order");
    }
}
