// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena node: one region of space and the item indices assigned to it.

use alloc::vec::Vec;

use crate::types::NodeId;

/// One node of a [`Tree`](crate::Tree).
///
/// A node owns a region of space (`bound`), the indices of the tree items
/// assigned to that region, and, if it has been subdivided, the arena ids of
/// its children. A node with no children is a leaf.
///
/// Items are referenced by index into [`Tree::items`](crate::Tree::items),
/// never by copy; an item straddling a subdivision boundary is referenced by
/// several sibling nodes at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<B> {
    bound: B,
    depth: usize,
    items: Vec<usize>,
    children: Vec<NodeId>,
}

impl<B> Node<B> {
    pub(crate) fn new(bound: B, depth: usize) -> Self {
        Self {
            bound,
            depth,
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The region owned by this node.
    pub fn bound(&self) -> &B {
        &self.bound
    }

    /// Depth of this node below the root (root = 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Indices into the tree's item sequence, in insertion order.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Child node ids: empty for a leaf, otherwise exactly
    /// [`combinations`](crate::Tree::combinations) entries in child-index order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node is a leaf (has no children).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_item(&mut self, index: usize) {
        self.items.push(index);
    }

    pub(crate) fn set_children(&mut self, children: Vec<NodeId>) {
        debug_assert!(self.children.is_empty(), "node subdivided twice");
        self.children = children;
    }
}
