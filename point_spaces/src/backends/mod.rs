// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Space implementations for different indexing strategies.
//!
//! - `brute`: unsorted list with linear scans (small, simple).
//! - `sorted`: list sorted by `x`, binary search plus a bounded two-way scan.
//! - `hash`: uniform grid hashing points into fixed-size cells.
//! - `quadtree`: four-way subdivision, split eagerly on insert.
//! - `kdtree`: two-way median subdivision, built once at finalize.
//!
//! Pruning note
//! ------------
//! Grid cells and tree nodes are pruned with the same circle/box test: clamp
//! the query center into the box and compare the squared distance to the
//! clamped point against `radius²`. Anything that survives pruning is yielded
//! by `find_in_range_approx` unfiltered; `find_in_range` then keeps only
//! entries strictly closer than `radius`. The sorted space prunes on `x`
//! alone, so its approximate results are the whole vertical slab.

pub mod brute;
pub mod hash;
pub mod kdtree;
pub mod quadtree;
pub mod sorted;

pub use brute::BruteSpace;
pub use hash::HashSpace;
pub use kdtree::KdSpace;
pub use quadtree::QuadSpace;
pub use sorted::SortSpace;
