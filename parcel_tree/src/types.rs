// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree: node identifiers and build options.

/// Identifier for a node in a tree's arena.
///
/// This is a small, copyable handle: an index into [`Tree::nodes`](crate::Tree::nodes).
/// The arena is rebuilt wholesale by every [`Tree::build`](crate::Tree::build), so a
/// `NodeId` is only meaningful against the build that produced it; handles from a
/// previous build may point at a different node (or out of bounds) after a rebuild.
///
/// Index `0` is always the root of a built tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// The arena index this handle refers to.
    pub const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Flags controlling build behavior.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BuildFlags: u8 {
        /// Treat a failed intersection resolution as an error
        /// ([`BuildError::UnresolvedIntersection`](crate::BuildError::UnresolvedIntersection))
        /// instead of silently dropping the item from the subtree.
        const STRICT_UNRESOLVED = 0b0000_0001;
    }
}

/// Options for [`Tree::build_with`](crate::Tree::build_with).
///
/// The default matches the historical behavior: unresolved items are dropped
/// silently and subdivision depth is bounded only by the policy's
/// [`should_subdivide`](crate::Policy::should_subdivide) contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Behavior flags; see [`BuildFlags`].
    pub flags: BuildFlags,
    /// Maximum node depth (root = 0) the build may reach.
    ///
    /// A node at this depth whose policy still wants to subdivide aborts the
    /// build with [`BuildError::DepthLimitExceeded`](crate::BuildError::DepthLimitExceeded).
    /// `None` disables the guard.
    pub max_depth: Option<usize>,
}

impl BuildOptions {
    /// Options with strict unresolved-intersection reporting enabled.
    pub const fn strict() -> Self {
        Self {
            flags: BuildFlags::STRICT_UNRESOLVED,
            max_depth: None,
        }
    }

    /// Options with a depth guard at `max_depth`.
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            flags: BuildFlags::empty(),
            max_depth: Some(max_depth),
        }
    }
}
