// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point Spaces: interchangeable 2D point indexes for radius queries.
//!
//! Point Spaces is a small family of containers over [`Entry`] values (an id
//! plus a position) that all answer the same question: which entries lie
//! within radius `r` of entry `e`?
//!
//! - Insert entries, [`finalize`](SpatialIndex::finalize) once, then query as often as needed.
//! - Query exactly with [`find_in_range`](SpatialIndex::find_in_range), or get a cheap superset
//!   with [`find_in_range_approx`](SpatialIndex::find_in_range_approx) when you compute
//!   distances yourself anyway.
//! - [`clear`](SpatialIndex::clear) and rebuild with the same configuration.
//!
//! Every space implements [`SpatialIndex`], so you can swap the strategy without API churn,
//! either statically or at runtime through [`SpaceConfig::build`].
//!
//! # Example
//!
//! ```rust
//! use point_spaces::{Entry, HashSpace, SpatialIndex};
//!
//! let mut space = HashSpace::new(0.05).unwrap();
//! space.insert(Entry::from_xy(1, 0.0, 0.0));
//! space.insert(Entry::from_xy(2, 0.01, 0.0));
//! space.insert(Entry::from_xy(3, 0.1, 0.0));
//! space.insert(Entry::from_xy(4, 0.0, 0.2));
//! space.finalize();
//!
//! let me = Entry::from_xy(1, 0.0, 0.0);
//! let mut near: Vec<_> = space.find_in_range(&me, 0.12).map(|e| e.id).collect();
//! near.sort_unstable();
//! assert_eq!(near, [2, 3]);
//! ```
//!
//! Picking a strategy at runtime:
//!
//! ```rust
//! use point_spaces::{Entry, SpaceKind, SpatialIndex};
//!
//! for kind in SpaceKind::ALL {
//!     let mut space = kind.default_config().build().unwrap();
//!     space.extend_entries((0..100).map(|i| Entry::from_xy(i, f64::from(i) * 0.01, 0.0)));
//!     space.finalize();
//!     assert_eq!(space.len(), 100);
//! }
//! ```
//!
//! ## Choosing a space
//!
//! - [`BruteSpace`]: linear scans. Good for very small sets, or radii that cover most points.
//! - [`SortSpace`]: sorted by `x` at finalize; a query binary-searches and scans the slab
//!   `|dx| <= r`. Cheap to build, good when points spread mostly along `x`.
//! - [`HashSpace`]: uniform grid. Great locality and O(1) inserts; set the resolution close to
//!   the typical query radius.
//! - [`QuadSpace`]: adaptive quadtree over fixed bounds, split eagerly on insert. Handles
//!   clustered data without tuning a cell size.
//! - [`KdSpace`]: k-d tree built by median splits at finalize. Balanced regardless of
//!   distribution; best when the whole set is known before querying.
//!
//! Trees expose a read-only [`NodeRef`] traversal (`root()`, `nodes()`) for inspecting node
//! bounds, for example to draw them.
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite, and radii non-negative. Distances are compared squared;
//! a match must be strictly closer than the radius. Points outside a tree's bounds are kept,
//! but queries near them may miss them.
//!
//! ### Logging
//!
//! Builds, splits and clears are reported through the [`log`] facade at `debug` and `trace`
//! level. No logger is installed by this crate.

pub mod backends;
pub mod config;
pub mod error;
pub mod space;
pub mod tree;
pub mod types;


pub use backends::{BruteSpace, HashSpace, KdSpace, QuadSpace, SortSpace};
pub use config::{
    DEFAULT_BOUNDS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ENTRIES_PER_NODE, DEFAULT_RESOLUTION,
    SpaceConfig, SpaceKind,
};
pub use error::{Error, Result};
pub use space::{Entries, SpatialIndex};
pub use tree::{NodeRef, Nodes};
pub use types::{Axis, Entry};
