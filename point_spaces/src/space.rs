// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability trait shared by every space.

use crate::types::{Entry, within_radius};

/// Boxed lazy sequence of entries borrowed from a space.
pub type Entries<'a> = Box<dyn Iterator<Item = Entry> + 'a>;

/// A 2D point container answering radius queries.
///
/// Every space follows the same lifecycle: [`insert`](Self::insert) entries,
/// call [`finalize`](Self::finalize) once, then run any number of queries.
/// [`clear`](Self::clear) returns the space to its freshly constructed state
/// with the same configuration.
///
/// Queries never mutate the space, so iterators may be dropped at any point.
/// Querying before `finalize` is a precondition violation: results are
/// unspecified (but never a panic).
pub trait SpatialIndex {
    /// Add an entry. Duplicate ids are kept and returned independently.
    fn insert(&mut self, entry: Entry);

    /// Build any derived structure so the space is ready for queries.
    ///
    /// Calling it again without intervening inserts changes nothing.
    fn finalize(&mut self);

    /// Drop every entry and derived structure, keeping the configuration.
    fn clear(&mut self);

    /// Number of entries inserted since construction or the last [`clear`](Self::clear).
    fn len(&self) -> usize;

    /// Whether the space holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every entry exactly once, in a structure-defined order.
    fn all(&self) -> Entries<'_>;

    /// A superset of [`find_in_range`](Self::find_in_range).
    ///
    /// Every entry within `radius` of `entry.position` is yielded and `entry`
    /// itself (by id) never is, but candidates are not distance-filtered.
    /// Useful for callers that compute the distance anyway.
    fn find_in_range_approx(&self, entry: &Entry, radius: f64) -> Entries<'_>;

    /// Entries with a different id strictly closer than `radius` to `entry`.
    fn find_in_range(&self, entry: &Entry, radius: f64) -> Entries<'_> {
        let center = entry.position;
        Box::new(
            self.find_in_range_approx(entry, radius)
                .filter(move |other| within_radius(center, other.position, radius)),
        )
    }

    /// Insert every entry of `entries`.
    fn extend_entries<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = Entry>,
        Self: Sized,
    {
        for entry in entries {
            self.insert(entry);
        }
    }
}

impl<S: SpatialIndex + ?Sized> SpatialIndex for Box<S> {
    fn insert(&mut self, entry: Entry) {
        (**self).insert(entry);
    }
    fn finalize(&mut self) {
        (**self).finalize();
    }
    fn clear(&mut self) {
        (**self).clear();
    }
    fn len(&self) -> usize {
        (**self).len()
    }
    fn all(&self) -> Entries<'_> {
        (**self).all()
    }
    fn find_in_range_approx(&self, entry: &Entry, radius: f64) -> Entries<'_> {
        (**self).find_in_range_approx(entry, radius)
    }
    fn find_in_range(&self, entry: &Entry, radius: f64) -> Entries<'_> {
        (**self).find_in_range(entry, radius)
    }
}
