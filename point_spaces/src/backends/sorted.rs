// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-sorted scan space: entries sorted by `x`, queried by binary search.

use core::fmt::Debug;

use crate::space::{Entries, SpatialIndex};
use crate::types::Entry;

/// List sorted by the `x` coordinate at [`finalize`](SpatialIndex::finalize).
///
/// A query binary-searches the query's `x`, then walks outward in both
/// directions until the `x` gap exceeds the radius. Only `x` is pruned, so
/// [`find_in_range_approx`](SpatialIndex::find_in_range_approx) returns the
/// whole vertical slab `|dx| <= radius`.
///
/// Querying before `finalize` breaks the binary search precondition and gives
/// unspecified results.
#[derive(Clone, Default)]
pub struct SortSpace {
    entries: Vec<Entry>,
    sorted: bool,
}

impl SortSpace {
    /// Create an empty space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty space with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            sorted: false,
        }
    }

    /// Whether entries are currently in `x` order (no inserts since the last finalize).
    pub fn is_sorted(&self) -> bool {
        self.sorted || self.entries.is_empty()
    }
}

impl Debug for SortSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortSpace")
            .field("len", &self.entries.len())
            .field("sorted", &self.is_sorted())
            .finish_non_exhaustive()
    }
}

impl SpatialIndex for SortSpace {
    fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.sorted = false;
    }

    fn finalize(&mut self) {
        if self.is_sorted() {
            return;
        }
        // Stable, so equal `x` keeps insertion order.
        self.entries.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        self.sorted = true;
        log::debug!("sorted {} entries by x", self.entries.len());
    }

    fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("clearing sort space with {} entries", self.entries.len());
        }
        self.entries.clear();
        self.sorted = true;
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn all(&self) -> Entries<'_> {
        Box::new(self.entries.iter().copied())
    }

    fn find_in_range_approx(&self, entry: &Entry, radius: f64) -> Entries<'_> {
        let Entry { id, position: q } = *entry;
        let start = self.entries.partition_point(|e| e.position.x < q.x);
        let (left, right) = self.entries.split_at(start);
        let right = right
            .iter()
            .take_while(move |e| e.position.x - q.x <= radius);
        let left = left
            .iter()
            .rev()
            .take_while(move |e| q.x - e.position.x <= radius);
        Box::new(right.chain(left).filter(move |e| e.id != id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(it: Entries<'_>) -> Vec<u32> {
        let mut v: Vec<_> = it.map(|e| e.id).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn finalize_sorts_by_x() {
        let mut s = SortSpace::new();
        for (i, x) in (0_u32..).zip([3.0, -1.0, 2.0, 0.5]) {
            s.insert(Entry::from_xy(i, x, 0.0));
        }
        assert!(!s.is_sorted());
        s.finalize();
        assert!(s.is_sorted());
        let xs: Vec<_> = s.all().map(|e| e.position.x).collect();
        assert_eq!(xs, vec![-1.0, 0.5, 2.0, 3.0]);
    }

    #[test]
    fn approx_keeps_the_whole_slab() {
        let mut s = SortSpace::new();
        s.insert(Entry::from_xy(0, 0.0, 0.0));
        s.insert(Entry::from_xy(1, 0.05, 50.0));
        s.insert(Entry::from_xy(2, -0.05, 0.0));
        s.insert(Entry::from_xy(3, 0.2, 0.0));
        s.insert(Entry::from_xy(4, -0.2, 0.0));
        s.finalize();
        let q = Entry::from_xy(0, 0.0, 0.0);
        assert_eq!(ids(s.find_in_range_approx(&q, 0.1)), vec![1, 2]);
        assert_eq!(ids(s.find_in_range(&q, 0.1)), vec![2]);
    }

    #[test]
    fn query_between_entries_scans_both_ways() {
        let mut s = SortSpace::new();
        s.insert(Entry::from_xy(1, 1.0, 0.0));
        s.insert(Entry::from_xy(2, 2.0, 0.0));
        s.insert(Entry::from_xy(3, 3.0, 0.0));
        s.finalize();
        // Query id not stored; x falls between entries 1 and 2.
        let q = Entry::from_xy(9, 1.6, 0.0);
        assert_eq!(ids(s.find_in_range(&q, 0.7)), vec![1, 2]);
        assert_eq!(ids(s.find_in_range(&q, 10.0)), vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_x_values_are_all_found() {
        let mut s = SortSpace::new();
        for i in 0..6 {
            s.insert(Entry::from_xy(i, 1.0, f64::from(i) * 0.01));
        }
        s.finalize();
        let q = Entry::from_xy(0, 1.0, 0.0);
        assert_eq!(ids(s.find_in_range(&q, 0.035)), vec![1, 2, 3]);
    }
}
