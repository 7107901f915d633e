// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree policy over [`Aabb3`].

use alloc::vec::Vec;

use parcel_tree::{Node, Policy};

use crate::aabb3::Aabb3;

/// Items an [`OctreePolicy`] can place: anything with a conservative
/// axis-aligned 3D region. Points report a degenerate box.
pub trait Region3 {
    /// Axis-aligned region of this item.
    fn region(&self) -> Aabb3;
}

impl Region3 for [f64; 3] {
    fn region(&self) -> Aabb3 {
        Aabb3::new(*self, *self)
    }
}

impl Region3 for Aabb3 {
    fn region(&self) -> Aabb3 {
        *self
    }
}

/// Equal-octant subdivision policy for 3D trees (`dimensions = 3`).
///
/// The 3D counterpart of [`QuadtreePolicy`](crate::QuadtreePolicy): splits
/// while a node holds more than `max_items` items and sits above `max_depth`,
/// with the same boundary-inclusive multi-hit tie policy.
#[derive(Clone, Copy, Debug)]
pub struct OctreePolicy {
    /// A node holding more than this many items subdivides.
    pub max_items: usize,
    /// Nodes at this depth never subdivide (root = 0).
    pub max_depth: usize,
}

impl OctreePolicy {
    /// Policy splitting nodes with more than `max_items` items down to
    /// `max_depth` levels.
    pub const fn new(max_items: usize, max_depth: usize) -> Self {
        Self {
            max_items,
            max_depth,
        }
    }
}

impl<T: Region3> Policy<Aabb3, T> for OctreePolicy {
    fn intersects(&self, item: &T, bound: &Aabb3) -> bool {
        item.region().intersects(bound)
    }

    fn should_subdivide(&self, node: &Node<Aabb3>) -> bool {
        node.items().len() > self.max_items && node.depth() < self.max_depth
    }

    fn subdivide_bound(&self, bound: &Aabb3, child: usize) -> Aabb3 {
        bound.octant(child)
    }

    fn resolve_intersections(
        &self,
        child_bounds: &[Aabb3],
        item: &T,
        hits: &mut Vec<usize>,
    ) -> bool {
        let region = item.region();
        for (child, bound) in child_bounds.iter().enumerate() {
            if region.intersects(bound) {
                hits.push(child);
            }
        }
        !hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use parcel_tree::Tree;

    #[test]
    fn eight_corner_points_one_per_octant() {
        let mut points = Vec::new();
        for octant in 0..8_usize {
            points.push([
                if octant & 0b001 == 0 { 1.0 } else { 9.0 },
                if octant & 0b010 == 0 { 1.0 } else { 9.0 },
                if octant & 0b100 == 0 { 1.0 } else { 9.0 },
            ]);
        }
        let policy = OctreePolicy::new(1, 2);
        let mut tree = Tree::new(Aabb3::new([0.0; 3], [10.0; 3]), points, 3);
        tree.build(&policy).unwrap();

        let root = &tree.nodes()[0];
        assert_eq!(root.children().len(), 8);
        for (octant, &child) in root.children().iter().enumerate() {
            assert_eq!(
                tree.node(child).items(),
                &[octant],
                "one point per octant, in child-bit order"
            );
        }
        assert_eq!(tree.leaves().len(), 8);
    }

    #[test]
    fn box_spanning_midplane_hits_both_octant_rows() {
        let policy = OctreePolicy::new(0, 1);
        let items = [Aabb3::new([4.0, 1.0, 1.0], [6.0, 2.0, 2.0])];
        let mut tree = Tree::new(Aabb3::new([0.0; 3], [10.0; 3]), items, 3);
        tree.build(&policy).unwrap();

        let root = &tree.nodes()[0];
        let holders: Vec<usize> = root
            .children()
            .iter()
            .enumerate()
            .filter(|&(_, &child)| tree.node(child).items().contains(&0))
            .map(|(octant, _)| octant)
            .collect();
        // Straddles x only; stays in the low y/z octants 0 (-x) and 1 (+x).
        assert_eq!(holders, [0, 1]);
    }
}
