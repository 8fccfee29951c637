// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive quadtree space with eager splitting on insert.

use core::fmt::Debug;

use kurbo::Rect;

use crate::error::{Error, Result};
use crate::space::{Entries, SpatialIndex};
use crate::tree::{Arena, NodeIdx, NodeRef, Nodes};
use crate::types::{Entry, contains_closed, is_valid_bounds, quadrant_index, quadrants};

/// Adaptive quadtree over fixed world bounds.
///
/// An insert descends to the leaf whose quadrant holds the point and appends
/// there. When that leaf then holds more than `max_entries_per_node` entries
/// and sits above `max_depth`, it splits into four equal quadrants and hands
/// its entries down. The tree is query-ready after every insert, so
/// [`finalize`](SpatialIndex::finalize) does nothing.
///
/// Points outside the bounds are accepted and routed by the same midpoint
/// comparisons, which keeps them in the nearest quadrant; queries near such
/// points may miss them because pruning trusts the node bounds.
#[derive(Clone)]
pub struct QuadSpace {
    arena: Arena<4>,
    bounds: Rect,
    max_entries_per_node: usize,
    max_depth: u32,
    len: usize,
}

impl QuadSpace {
    /// Create an empty quadtree covering `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `max_entries_per_node` is
    /// zero, or if `bounds` is not finite or has a negative extent.
    pub fn new(bounds: Rect, max_entries_per_node: usize, max_depth: u32) -> Result<Self> {
        if max_entries_per_node == 0 {
            return Err(Error::invalid("max_entries_per_node", "must be at least 1"));
        }
        if !is_valid_bounds(bounds) {
            return Err(Error::invalid(
                "bounds",
                "must be finite with non-negative width and height",
            ));
        }
        Ok(Self {
            arena: Arena::new(bounds),
            bounds,
            max_entries_per_node,
            max_depth,
            len: 0,
        })
    }

    /// World bounds fixed at construction.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Leaf capacity before a split is attempted.
    pub fn max_entries_per_node(&self) -> usize {
        self.max_entries_per_node
    }

    /// Depth at which leaves stop splitting.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The root node, for read-only inspection.
    pub fn root(&self) -> NodeRef<'_> {
        self.arena.root()
    }

    /// Every node in pre-order.
    pub fn nodes(&self) -> Nodes<'_> {
        self.arena.root().descendants()
    }

    fn split(&mut self, leaf: NodeIdx) {
        let bound = self.arena.node(leaf).bound;
        let first = self.arena.subdivide(leaf, quadrants(bound));
        let entries = core::mem::take(&mut self.arena.node_mut(leaf).entries);
        log::trace!(
            "splitting quad leaf at depth {} with {} entries",
            self.arena.node(leaf).depth,
            entries.len()
        );
        for e in entries {
            let child = first.child(quadrant_index(bound, e.position));
            self.arena.node_mut(child).entries.push(e);
        }
    }
}

impl Debug for QuadSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadSpace")
            .field("bounds", &self.bounds)
            .field("max_entries_per_node", &self.max_entries_per_node)
            .field("max_depth", &self.max_depth)
            .field("len", &self.len)
            .field("nodes", &self.arena.node_count())
            .finish_non_exhaustive()
    }
}

impl SpatialIndex for QuadSpace {
    fn insert(&mut self, entry: Entry) {
        if !contains_closed(self.bounds, entry.position) {
            log::trace!(
                "entry {} at {:?} lies outside quadtree bounds {:?}",
                entry.id,
                entry.position,
                self.bounds
            );
        }
        let leaf = self
            .arena
            .descend(|node| quadrant_index(node.bound, entry.position));
        let node = self.arena.node_mut(leaf);
        node.entries.push(entry);
        if node.entries.len() > self.max_entries_per_node && node.depth < self.max_depth {
            self.split(leaf);
        }
        self.len += 1;
    }

    fn finalize(&mut self) {}

    fn clear(&mut self) {
        if self.len > 0 {
            log::debug!(
                "clearing quadtree with {} entries in {} nodes",
                self.len,
                self.arena.node_count()
            );
        }
        self.arena.reset();
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn all(&self) -> Entries<'_> {
        Box::new(self.arena.candidates(None))
    }

    fn find_in_range_approx(&self, entry: &Entry, radius: f64) -> Entries<'_> {
        let Entry { id, position } = *entry;
        Box::new(
            self.arena
                .candidates(Some((position, radius)))
                .filter(move |e| e.id != id),
        )
    }
}
