// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scan space. Small and simple; the baseline every other space is checked against.

use core::fmt::Debug;

use crate::space::{Entries, SpatialIndex};
use crate::types::Entry;

/// Unsorted list with linear-scan queries.
///
/// Queries cost O(n) regardless of radius. Good for tiny sets, or radii so
/// large that any pruning would visit everything anyway.
#[derive(Clone, Default)]
pub struct BruteSpace {
    entries: Vec<Entry>,
}

impl BruteSpace {
    /// Create an empty space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty space with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }
}

impl Debug for BruteSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BruteSpace")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl SpatialIndex for BruteSpace {
    fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
    fn finalize(&mut self) {}
    fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("clearing brute space with {} entries", self.entries.len());
        }
        self.entries.clear();
    }
    fn len(&self) -> usize {
        self.entries.len()
    }
    fn all(&self) -> Entries<'_> {
        Box::new(self.entries.iter().copied())
    }
    fn find_in_range_approx(&self, entry: &Entry, _radius: f64) -> Entries<'_> {
        let id = entry.id;
        Box::new(self.entries.iter().filter(move |e| e.id != id).copied())
    }
}
