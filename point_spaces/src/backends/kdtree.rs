// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive k-d tree space, bulk-built by median splits at finalize.

use core::fmt::Debug;

use kurbo::Rect;

use crate::error::{Error, Result};
use crate::space::{Entries, SpatialIndex};
use crate::tree::{Arena, NodeIdx, NodeRef, Nodes};
use crate::types::{Axis, Entry, contains_closed, is_valid_bounds};

/// Binary space partition built in one pass at [`finalize`](SpatialIndex::finalize).
///
/// Inserts only buffer entries in the root. `finalize` then repeatedly takes
/// a node holding more than `max_entries_per_node` entries, sorts them along
/// the longer side of its bound (`x` on ties), and splits at the median: the
/// lower child gets the first `n / 2` entries and the split coordinate is
/// the last of those. Child bounds meet exactly at that coordinate. There is
/// no depth limit; every split halves the node, so the build terminates.
///
/// Inserts after a build are routed down the split planes into a leaf; a
/// further `finalize` splits any leaf that has grown past capacity.
#[derive(Clone)]
pub struct KdSpace {
    arena: Arena<2>,
    bounds: Rect,
    max_entries_per_node: usize,
    len: usize,
    built: bool,
}

impl KdSpace {
    /// Create an empty k-d tree covering `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `max_entries_per_node` is
    /// zero, or if `bounds` is not finite or has a negative extent.
    pub fn new(bounds: Rect, max_entries_per_node: usize) -> Result<Self> {
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
            len: 0,
            built: false,
        })
    }

    /// World bounds fixed at construction.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Leaf capacity.
    pub fn max_entries_per_node(&self) -> usize {
        self.max_entries_per_node
    }

    /// Whether `finalize` has run since construction or the last `clear`.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The root node, for read-only inspection.
    pub fn root(&self) -> NodeRef<'_> {
        self.arena.root()
    }

    /// Every node in pre-order.
    pub fn nodes(&self) -> Nodes<'_> {
        self.arena.root().descendants()
    }

    /// Median-split `idx` and return its two children.
    fn split(&mut self, idx: NodeIdx) -> Option<NodeIdx> {
        let node = self.arena.node_mut(idx);
        let bound = node.bound;
        let axis = Axis::longer(bound);
        let mut lower = core::mem::take(&mut node.entries);
        lower.sort_by(|a, b| axis.of(a.position).total_cmp(&axis.of(b.position)));
        let upper = lower.split_off(lower.len() / 2);
        let Some(at) = lower.last().map(|e| axis.of(e.position)) else {
            // Fewer than two entries; nothing to split.
            self.arena.node_mut(idx).entries = upper;
            return None;
        };
        let (lo, hi) = axis.split(bound, at);
        let first = self.arena.subdivide(idx, [lo, hi]);
        self.arena.node_mut(idx).split = Some((axis, at));
        self.arena.node_mut(first).entries = lower;
        self.arena.node_mut(first.child(1)).entries = upper;
        Some(first)
    }
}

impl Debug for KdSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdSpace")
            .field("bounds", &self.bounds)
            .field("max_entries_per_node", &self.max_entries_per_node)
            .field("len", &self.len)
            .field("built", &self.built)
            .field("nodes", &self.arena.node_count())
            .finish_non_exhaustive()
    }
}

impl SpatialIndex for KdSpace {
    fn insert(&mut self, entry: Entry) {
        if !contains_closed(self.bounds, entry.position) {
            log::trace!(
                "entry {} at {:?} lies outside k-d tree bounds {:?}",
                entry.id,
                entry.position,
                self.bounds
            );
        }
        let leaf = self.arena.descend(|node| match node.split {
            Some((axis, at)) => usize::from(axis.of(entry.position) > at),
            None => 0,
        });
        self.arena.node_mut(leaf).entries.push(entry);
        self.len += 1;
    }

    fn finalize(&mut self) {
        let mut splits = 0_usize;
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(idx) = stack.pop() {
            let node = self.arena.node(idx);
            if let Some(first) = node.first_child {
                stack.extend([first.child(1), first]);
                continue;
            }
            if node.entries.len() <= self.max_entries_per_node {
                continue;
            }
            if let Some(first) = self.split(idx) {
                splits += 1;
                stack.extend([first.child(1), first]);
            }
        }
        self.built = true;
        if splits > 0 {
            log::debug!(
                "built k-d tree over {} entries: {} nodes, {} leaves, depth {}",
                self.len,
                self.arena.node_count(),
                self.arena.leaf_count(),
                self.arena.max_depth()
            );
        }
    }

    fn clear(&mut self) {
        if self.len > 0 {
            log::debug!(
                "clearing k-d tree with {} entries in {} nodes",
                self.len,
                self.arena.node_count()
            );
        }
        self.arena.reset();
        self.len = 0;
        self.built = false;
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
