// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal 3D axis-aligned box. Kurbo is 2D-only, so the octree policy
//! carries its own box type rather than pulling in a 3D geometry crate.

/// Axis-aligned bounding box in 3D, closed on all faces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: [f64; 3],
    /// Maximum corner.
    pub max: [f64; 3],
}

impl Aabb3 {
    /// Create a box from min/max corners.
    pub const fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// The center point.
    pub fn center(&self) -> [f64; 3] {
        [
            0.5 * (self.min[0] + self.max[0]),
            0.5 * (self.min[1] + self.max[1]),
            0.5 * (self.min[2] + self.max[2]),
        ]
    }

    /// Whether this box contains the point (boundary inclusive).
    pub fn contains(&self, p: [f64; 3]) -> bool {
        (0..3).all(|axis| p[axis] >= self.min[axis] && p[axis] <= self.max[axis])
    }

    /// Whether two boxes overlap (boundary touches count).
    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.min[axis] <= other.max[axis] && other.min[axis] <= self.max[axis])
    }

    /// The octant of this box selected by `child`.
    ///
    /// Bit 0 selects the upper x half, bit 1 the upper y half, bit 2 the
    /// upper z half.
    pub fn octant(&self, child: usize) -> Self {
        let mid = self.center();
        let mut min = self.min;
        let mut max = mid;
        for axis in 0..3 {
            if child & (1 << axis) != 0 {
                min[axis] = mid[axis];
                max[axis] = self.max[axis];
            }
        }
        Self { min, max }
    }
}
