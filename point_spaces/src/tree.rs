// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node arena shared by the quadtree and k-d tree, and read-only traversal.
//!
//! Nodes live in a flat arena and refer to their children by index. The
//! children of a node are stored contiguously, so a node only records the
//! index of its first child; the arity (4 for quadtrees, 2 for k-d trees) is
//! fixed by the tree type. There are no parent links: every traversal runs
//! top-down with an explicit stack.
//!
//! Use [`NodeRef`] (from `QuadSpace::root` or `KdSpace::root`) to inspect
//! node bounds and structure, for example when drawing a tree.

use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::types::{Axis, Entry, circle_overlaps_rect};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const ROOT: Self = Self(0);

    const fn get(self) -> usize {
        self.0
    }

    pub(crate) const fn child(self, offset: usize) -> Self {
        Self(self.0 + offset)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) bound: Rect,
    pub(crate) depth: u32,
    /// Buffered entries; empty once the node has been split.
    pub(crate) entries: Vec<Entry>,
    pub(crate) first_child: Option<NodeIdx>,
    /// Split plane of an internal k-d node.
    pub(crate) split: Option<(Axis, f64)>,
}

impl Node {
    fn leaf(bound: Rect, depth: u32) -> Self {
        Self {
            bound,
            depth,
            entries: Vec::new(),
            first_child: None,
            split: None,
        }
    }
}

/// Arena of nodes with `N` children per internal node.
#[derive(Clone, Debug)]
pub(crate) struct Arena<const N: usize> {
    nodes: Vec<Node>,
}

impl<const N: usize> Arena<N> {
    pub(crate) fn new(bound: Rect) -> Self {
        Self {
            nodes: vec![Node::leaf(bound, 0)],
        }
    }

    /// Drop every node but a fresh, empty root.
    pub(crate) fn reset(&mut self) {
        let bound = self.nodes[NodeIdx::ROOT.get()].bound;
        self.nodes.clear();
        self.nodes.push(Node::leaf(bound, 0));
    }

    pub(crate) fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.get()]
    }

    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut Node {
        &mut self.nodes[idx.get()]
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.first_child.is_none()).count()
    }

    pub(crate) fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Walk from the root to a leaf, choosing the child index with `pick`.
    pub(crate) fn descend(&self, mut pick: impl FnMut(&Node) -> usize) -> NodeIdx {
        let mut idx = NodeIdx::ROOT;
        while let Some(first) = self.node(idx).first_child {
            let offset = pick(self.node(idx));
            debug_assert!(offset < N, "child offset out of range");
            idx = first.child(offset);
        }
        idx
    }

    /// Turn leaf `idx` into an internal node with empty children bounded by `bounds`.
    ///
    /// Returns the first child. The caller redistributes the parent's entries.
    pub(crate) fn subdivide(&mut self, idx: NodeIdx, bounds: [Rect; N]) -> NodeIdx {
        debug_assert!(
            self.node(idx).first_child.is_none(),
            "only leaves can be subdivided"
        );
        let first = NodeIdx(self.nodes.len());
        let depth = self.node(idx).depth + 1;
        self.nodes.extend(bounds.into_iter().map(|b| Node::leaf(b, depth)));
        self.node_mut(idx).first_child = Some(first);
        first
    }

    /// Entries of every node the circle can reach, or of every node when `circle` is `None`.
    pub(crate) fn candidates(&self, circle: Option<(Point, f64)>) -> Candidates<'_, N> {
        Candidates {
            arena: self,
            stack: vec![NodeIdx::ROOT],
            current: core::slice::Iter::default(),
            circle,
        }
    }

    pub(crate) fn root(&self) -> NodeRef<'_> {
        NodeRef {
            nodes: &self.nodes,
            idx: NodeIdx::ROOT.get(),
            arity: N,
        }
    }
}

/// Lazy pruned walk over a tree's buffered entries.
///
/// Children are pushed in reverse so they pop in order, making the walk a
/// pre-order traversal.
#[derive(Debug)]
pub(crate) struct Candidates<'a, const N: usize> {
    arena: &'a Arena<N>,
    stack: Vec<NodeIdx>,
    current: core::slice::Iter<'a, Entry>,
    circle: Option<(Point, f64)>,
}

impl<const N: usize> Iterator for Candidates<'_, N> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some(e) = self.current.next() {
                return Some(*e);
            }
            let idx = self.stack.pop()?;
            let node = self.arena.node(idx);
            self.current = node.entries.iter();
            if let Some(first) = node.first_child {
                for offset in (0..N).rev() {
                    let child = first.child(offset);
                    let reachable = self.circle.is_none_or(|(center, radius)| {
                        circle_overlaps_rect(center, radius, self.arena.node(child).bound)
                    });
                    if reachable {
                        self.stack.push(child);
                    }
                }
            }
        }
    }
}

/// Read-only view of one tree node.
#[derive(Copy, Clone)]
pub struct NodeRef<'a> {
    nodes: &'a [Node],
    idx: usize,
    arity: usize,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        &self.nodes[self.idx]
    }

    /// Region covered by this node.
    pub fn bound(&self) -> Rect {
        self.node().bound
    }

    /// Depth below the root (the root is at depth 0).
    pub fn depth(&self) -> u32 {
        self.node().depth
    }

    /// Entries buffered in this node. Empty for internal nodes.
    pub fn entries(&self) -> &'a [Entry] {
        &self.node().entries
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().first_child.is_none()
    }

    /// Split axis and coordinate, for internal k-d nodes.
    pub fn split(&self) -> Option<(Axis, f64)> {
        self.node().split
    }

    /// Direct children, in storage order. Empty for leaves.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let nodes = self.nodes;
        let arity = self.arity;
        let range = match self.node().first_child {
            Some(first) => first.get()..first.get() + arity,
            None => 0..0,
        };
        range.map(move |idx| NodeRef { nodes, idx, arity })
    }

    /// This node and all of its descendants, in pre-order.
    pub fn descendants(&self) -> Nodes<'a> {
        Nodes { stack: vec![*self] }
    }
}

impl Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("bound", &self.bound())
            .field("depth", &self.depth())
            .field("entries", &self.entries().len())
            .field("is_leaf", &self.is_leaf())
            .finish_non_exhaustive()
    }
}

/// Pre-order iterator over tree nodes.
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        let node = self.stack.pop()?;
        let len = self.stack.len();
        self.stack.extend(node.children());
        self.stack[len..].reverse();
        Some(node)
    }
}
