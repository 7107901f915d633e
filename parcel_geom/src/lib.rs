// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=parcel_geom --heading-base-level=0

//! Parcel Geom: ready-made kurbo-native policies for [`parcel_tree`].
//!
//! The tree core is geometry-agnostic; this crate supplies the two policies
//! most callers want:
//!
//! - [`QuadtreePolicy`]: 2D, equal quadrants over [`kurbo::Rect`], for items
//!   implementing [`Region2`] (implemented for [`kurbo::Point`] and
//!   [`kurbo::Rect`]).
//! - [`OctreePolicy`]: 3D, equal octants over [`Aabb3`], for items
//!   implementing [`Region3`] (implemented for `[f64; 3]` points and
//!   [`Aabb3`]).
//!
//! Both split while a node holds more than `max_items` items and its depth is
//! below `max_depth`, and both use boundary-inclusive overlap: an item
//! exactly on a shared subdivision boundary is assigned to every touching
//! child rather than to one designated winner.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use parcel_geom::QuadtreePolicy;
//! use parcel_tree::Tree;
//!
//! let points = [
//!     Point::new(10.0, 10.0),
//!     Point::new(90.0, 10.0),
//!     Point::new(10.0, 90.0),
//!     Point::new(90.0, 90.0),
//! ];
//! let mut tree = Tree::new(Rect::new(0.0, 0.0, 100.0, 100.0), points, 2);
//! tree.build(&QuadtreePolicy::new(1, 3)).unwrap();
//!
//! // One corner point per quadrant leaf.
//! assert_eq!(tree.leaves().len(), 4);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `std` feature (default)
//! or `libm` to select Kurbo's float backend.

#![no_std]

extern crate alloc;

pub mod aabb3;
pub mod oct;
pub mod quad;

pub use aabb3::Aabb3;
pub use oct::{OctreePolicy, Region3};
pub use quad::{QuadtreePolicy, Region2};
