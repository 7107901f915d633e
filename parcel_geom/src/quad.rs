// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree policy over `kurbo::Rect`.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use parcel_tree::{Node, Policy};

/// Items a [`QuadtreePolicy`] can place: anything with a conservative
/// axis-aligned 2D region. Points report a degenerate rect.
pub trait Region2 {
    /// Axis-aligned region of this item.
    fn region(&self) -> Rect;
}

impl Region2 for Point {
    fn region(&self) -> Rect {
        Rect::new(self.x, self.y, self.x, self.y)
    }
}

impl Region2 for Rect {
    fn region(&self) -> Rect {
        *self
    }
}

/// Boundary-inclusive overlap, so degenerate (point) rects still intersect
/// and an item exactly on a subdivision boundary hits every touching child.
fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Quadrant of `bound` selected by `child`: bit 0 picks the right half,
/// bit 1 the bottom half (y-down, as in kurbo).
fn quadrant(bound: &Rect, child: usize) -> Rect {
    let mid_x = 0.5 * (bound.x0 + bound.x1);
    let mid_y = 0.5 * (bound.y0 + bound.y1);
    let (x0, x1) = if child & 0b01 == 0 {
        (bound.x0, mid_x)
    } else {
        (mid_x, bound.x1)
    };
    let (y0, y1) = if child & 0b10 == 0 {
        (bound.y0, mid_y)
    } else {
        (mid_y, bound.y1)
    };
    Rect::new(x0, y0, x1, y1)
}

/// Equal-quadrant subdivision policy for 2D trees (`dimensions = 2`).
///
/// Splits while a node holds more than `max_items` items and sits above
/// `max_depth`, which keeps the
/// [`should_subdivide`](Policy::should_subdivide) termination contract
/// satisfied for any input.
///
/// Tie policy: overlap tests are boundary inclusive, so an item exactly on a
/// shared edge or corner is assigned to every touching quadrant.
#[derive(Clone, Copy, Debug)]
pub struct QuadtreePolicy {
    /// A node holding more than this many items subdivides.
    pub max_items: usize,
    /// Nodes at this depth never subdivide (root = 0).
    pub max_depth: usize,
}

impl QuadtreePolicy {
    /// Policy splitting nodes with more than `max_items` items down to
    /// `max_depth` levels.
    pub const fn new(max_items: usize, max_depth: usize) -> Self {
        Self {
            max_items,
            max_depth,
        }
    }
}

impl<T: Region2> Policy<Rect, T> for QuadtreePolicy {
    fn intersects(&self, item: &T, bound: &Rect) -> bool {
        overlaps(&item.region(), bound)
    }

    fn should_subdivide(&self, node: &Node<Rect>) -> bool {
        node.items().len() > self.max_items && node.depth() < self.max_depth
    }

    fn subdivide_bound(&self, bound: &Rect, child: usize) -> Rect {
        quadrant(bound, child)
    }

    fn resolve_intersections(&self, child_bounds: &[Rect], item: &T, hits: &mut Vec<usize>) -> bool {
        let region = item.region();
        for (child, bound) in child_bounds.iter().enumerate() {
            if overlaps(&region, bound) {
                hits.push(child);
            }
        }
        !hits.is_empty()
    }
}
