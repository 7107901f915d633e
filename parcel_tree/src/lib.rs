// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=parcel_tree --heading-base-level=0

//! Parcel Tree: a generic N-dimensional spatial partitioning tree.
//!
//! Parcel Tree is a reusable building block for spatial bucketing: level
//! geometry partitioning, occlusion/collision grouping, render-surface
//! batching, or any workload that wants "which bounded items overlap this
//! region" answered per leaf.
//!
//! - Recursively subdivides a root bound into `2^D` children per node,
//!   assigning items (by index) to every region they intersect.
//! - Geometry is fully pluggable: a four-operation [`Policy`] supplies
//!   intersection tests, the termination predicate, child-bound computation,
//!   and multi-child assignment. The same algorithm serves quadtrees (D = 2),
//!   octrees (D = 3), and anything else.
//! - Nodes live in a single arena owned by the tree and reference children by
//!   [`NodeId`], never by pointer; [`Tree::leaves`] is the derived query view.
//!
//! It is generic over the bound type `B` and item type `T` and does not
//! depend on any geometry crate. Ready-made kurbo-native policies live in the
//! `parcel_geom` crate.
//!
//! # Example
//!
//! ```rust
//! use parcel_tree::{FnPolicy, Node, Tree};
//!
//! // A 1-D tree over (lo, hi) intervals, splitting while a node holds more
//! // than one point and is fewer than 4 levels deep.
//! let contains = |b: &(f64, f64), p: f64| p >= b.0 && p <= b.1;
//! let policy = FnPolicy::new(
//!     move |p: &f64, b: &(f64, f64)| contains(b, *p),
//!     |node: &Node<(f64, f64)>| node.items().len() > 1 && node.depth() < 4,
//!     |b: &(f64, f64), child| {
//!         let mid = 0.5 * (b.0 + b.1);
//!         if child == 0 { (b.0, mid) } else { (mid, b.1) }
//!     },
//!     move |bounds: &[(f64, f64)], p: &f64, hits: &mut Vec<usize>| {
//!         for (child, b) in bounds.iter().enumerate() {
//!             if contains(b, *p) {
//!                 hits.push(child);
//!             }
//!         }
//!         !hits.is_empty()
//!     },
//! );
//!
//! let mut tree = Tree::new((0.0, 16.0), [1.0, 2.0, 9.0, 15.0], 1);
//! tree.build(&policy).unwrap();
//!
//! // Query the leaf view.
//! for &leaf in tree.leaves() {
//!     let node = tree.node(leaf);
//!     println!("{:?} holds items {:?}", node.bound(), node.items());
//! }
//! ```
//!
//! # Model
//!
//! The tree owns an exclusive copy of the item sequence and refers to items by
//! integer index everywhere else. [`Tree::build`] seeds the root with every
//! item intersecting the root bound, then subdivides nodes while the policy's
//! [`should_subdivide`](Policy::should_subdivide) allows, routing each item
//! into every child it intersects via
//! [`resolve_intersections`](Policy::resolve_intersections). Items straddling
//! a boundary are duplicated by index across children, never clipped; items
//! the policy cannot resolve are dropped from the subtree (or reported, in
//! strict mode). Finally the leaf view is recomputed: ids of every childless
//! node in arena order.
//!
//! [`Tree::add`] only appends to the item sequence; the built structure is
//! stale until the next build. [`Tree::clear`] empties items, nodes, and
//! leaves together.
//!
//! # Choosing build options
//!
//! - Default: silent drop of unresolved items, no depth guard. Matches the
//!   historical behavior; the build cannot fail.
//! - [`BuildOptions::strict`]: surface unresolved items as
//!   [`BuildError::UnresolvedIntersection`] for auditing.
//! - [`BuildOptions::with_max_depth`]: bound runaway policies with
//!   [`BuildError::DepthLimitExceeded`] instead of unbounded recursion.
//!
//! # Concurrency
//!
//! Builds are single-threaded and synchronous. Distinct trees share no state
//! and may be built on separate threads; a single tree must be externally
//! serialized. Policies must not mutate state shared across concurrent
//! builds.
//!
//! This crate is `no_std` and uses `alloc`. It emits `log` records during
//! builds but installs no logger.

#![no_std]

extern crate alloc;

pub mod error;
pub mod node;
pub mod policy;
pub mod tree;
pub mod types;

pub use error::BuildError;
pub use node::Node;
pub use policy::{FnPolicy, Policy};
pub use tree::Tree;
pub use types::{BuildFlags, BuildOptions, NodeId};
