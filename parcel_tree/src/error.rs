// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build errors.

use thiserror::Error;

use crate::types::NodeId;

/// Errors reported by [`Tree::build_with`](crate::Tree::build_with).
///
/// Both variants are opt-in: the default [`BuildOptions`](crate::BuildOptions)
/// drop unresolved items silently and leave depth unguarded, in which case
/// `build` cannot fail. On error the tree is left cleared (no nodes, no
/// leaves; items are kept), never partially built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The policy found no usable child intersection for an item while
    /// [`BuildFlags::STRICT_UNRESOLVED`](crate::BuildFlags::STRICT_UNRESOLVED)
    /// was set.
    #[error("no usable child intersection for item {item} at node {node:?}")]
    UnresolvedIntersection {
        /// Node being subdivided when resolution failed.
        node: NodeId,
        /// Index of the unresolved item in the tree's item sequence.
        item: usize,
    },

    /// A node at [`BuildOptions::max_depth`](crate::BuildOptions::max_depth)
    /// still wanted to subdivide.
    #[error("subdivision requested past the depth limit ({depth})")]
    DepthLimitExceeded {
        /// Depth of the offending node.
        depth: usize,
    },
}
