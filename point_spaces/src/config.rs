// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime selection of a space behind the [`SpatialIndex`] trait.

use core::fmt;

use kurbo::Rect;

use crate::backends::{BruteSpace, HashSpace, KdSpace, QuadSpace, SortSpace};
use crate::error::Result;
use crate::space::SpatialIndex;

/// Default grid cell size, tuned for radii around `0.02..0.12` in the unit disk.
pub const DEFAULT_RESOLUTION: f64 = 0.05;

/// Default leaf capacity for both trees.
pub const DEFAULT_MAX_ENTRIES_PER_NODE: usize = 8;

/// Default quadtree depth limit.
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Default tree bounds: the square enclosing the unit disk.
pub const DEFAULT_BOUNDS: Rect = Rect::new(-1.0, -1.0, 1.0, 1.0);

/// The five space strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpaceKind {
    /// [`BruteSpace`]
    Brute,
    /// [`SortSpace`]
    Sort,
    /// [`HashSpace`]
    Hash,
    /// [`QuadSpace`]
    Quad,
    /// [`KdSpace`]
    Kd,
}

impl SpaceKind {
    /// Every kind, cheapest build first.
    pub const ALL: [Self; 5] = [Self::Brute, Self::Sort, Self::Hash, Self::Quad, Self::Kd];

    /// Short lowercase name, suitable for labels and benchmark ids.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brute => "brute",
            Self::Sort => "sort",
            Self::Hash => "hash",
            Self::Quad => "quad",
            Self::Kd => "kd",
        }
    }

    /// Configuration with the crate defaults for this kind.
    pub const fn default_config(self) -> SpaceConfig {
        match self {
            Self::Brute => SpaceConfig::Brute,
            Self::Sort => SpaceConfig::Sort,
            Self::Hash => SpaceConfig::Hash {
                resolution: DEFAULT_RESOLUTION,
            },
            Self::Quad => SpaceConfig::Quad {
                bounds: DEFAULT_BOUNDS,
                max_entries_per_node: DEFAULT_MAX_ENTRIES_PER_NODE,
                max_depth: DEFAULT_MAX_DEPTH,
            },
            Self::Kd => SpaceConfig::Kd {
                bounds: DEFAULT_BOUNDS,
                max_entries_per_node: DEFAULT_MAX_ENTRIES_PER_NODE,
            },
        }
    }
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declarative description of a space, validated by [`SpaceConfig::build`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpaceConfig {
    /// Linear scan.
    Brute,
    /// Sorted by `x`.
    Sort,
    /// Uniform grid.
    Hash {
        /// Cell side length.
        resolution: f64,
    },
    /// Adaptive quadtree.
    Quad {
        /// World bounds.
        bounds: Rect,
        /// Leaf capacity before splitting.
        max_entries_per_node: usize,
        /// Depth limit.
        max_depth: u32,
    },
    /// Adaptive k-d tree.
    Kd {
        /// World bounds.
        bounds: Rect,
        /// Leaf capacity.
        max_entries_per_node: usize,
    },
}

impl SpaceConfig {
    /// Which strategy this configures.
    pub const fn kind(&self) -> SpaceKind {
        match self {
            Self::Brute => SpaceKind::Brute,
            Self::Sort => SpaceKind::Sort,
            Self::Hash { .. } => SpaceKind::Hash,
            Self::Quad { .. } => SpaceKind::Quad,
            Self::Kd { .. } => SpaceKind::Kd,
        }
    }

    /// Construct the configured space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// when a parameter is rejected by the space's constructor.
    pub fn build(&self) -> Result<Box<dyn SpatialIndex>> {
        Ok(match *self {
            Self::Brute => Box::new(BruteSpace::new()),
            Self::Sort => Box::new(SortSpace::new()),
            Self::Hash { resolution } => Box::new(HashSpace::new(resolution)?),
            Self::Quad {
                bounds,
                max_entries_per_node,
                max_depth,
            } => Box::new(QuadSpace::new(bounds, max_entries_per_node, max_depth)?),
            Self::Kd {
                bounds,
                max_entries_per_node,
            } => Box::new(KdSpace::new(bounds, max_entries_per_node)?),
        })
    }
}

impl From<SpaceKind> for SpaceConfig {
    fn from(kind: SpaceKind) -> Self {
        kind.default_config()
    }
}
