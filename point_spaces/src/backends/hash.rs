// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid space. Hashes each entry into a fixed-size square cell.

use core::fmt::Debug;
use std::collections::HashMap;

use kurbo::{Point, Rect};

use crate::error::{Error, Result};
use crate::space::{Entries, SpatialIndex};
use crate::types::{Entry, circle_overlaps_rect};

/// Integer cell coordinate.
pub type Cell = (i64, i64);

/// Uniform grid space.
///
/// Entry `p` lives in cell `(floor(p.x / resolution), floor(p.y / resolution))`.
/// Only occupied cells are stored. A query visits the square of cells around
/// the query's cell that can reach the radius, skipping any cell whose box
/// the search circle does not touch.
///
/// Choose a resolution close to the typical query radius: much finer visits
/// many empty cells, much coarser yields large unfiltered buckets.
#[derive(Clone)]
pub struct HashSpace {
    resolution: f64,
    cells: HashMap<Cell, Vec<Entry>>,
    len: usize,
}

impl HashSpace {
    /// Create a grid with square cells of side `resolution`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `resolution` is not finite
    /// or not greater than zero.
    pub fn new(resolution: f64) -> Result<Self> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(Error::invalid(
                "resolution",
                "must be finite and greater than zero",
            ));
        }
        Ok(Self {
            resolution,
            cells: HashMap::new(),
            len: 0,
        })
    }

    /// Side length of a cell.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cell holding `p`.
    #[inline]
    pub fn cell_of(&self, p: Point) -> Cell {
        (
            floor_to_i64(p.x / self.resolution),
            floor_to_i64(p.y / self.resolution),
        )
    }

    /// World-space box of `cell`. Saturated cells extend to infinity.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        cell_rect(self.resolution, cell)
    }

    /// Entries stored in `cell`, empty if the cell is unoccupied.
    pub fn bucket(&self, cell: Cell) -> &[Entry] {
        self.cells.get(&cell).map_or(&[], Vec::as_slice)
    }

    /// Half-width, in cells, of the window a query of `radius` must visit.
    fn reach(&self, radius: f64) -> i64 {
        floor_to_i64(radius / self.resolution).saturating_add(1)
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Cell coordinates saturate for points far outside any practical grid."
)]
fn floor_to_i64(v: f64) -> i64 {
    v.floor() as i64
}

fn cell_rect(resolution: f64, (x, y): Cell) -> Rect {
    let (x0, x1) = cell_span(resolution, x);
    let (y0, y1) = cell_span(resolution, y);
    Rect::new(x0, y0, x1, y1)
}

/// Extent of one cell along an axis.
///
/// The saturated cells at `i64::MIN` and `i64::MAX` hold every coordinate
/// beyond them, so their outer edge is unbounded.
fn cell_span(resolution: f64, c: i64) -> (f64, f64) {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Cell coordinates come from f64 division, so they fit back into f64."
    )]
    let lo = c as f64 * resolution;
    match c {
        i64::MIN => (f64::NEG_INFINITY, lo + resolution),
        i64::MAX => (lo, f64::INFINITY),
        _ => (lo, lo + resolution),
    }
}

impl Debug for HashSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashSpace")
            .field("resolution", &self.resolution)
            .field("len", &self.len)
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}

impl SpatialIndex for HashSpace {
    fn insert(&mut self, entry: Entry) {
        let cell = self.cell_of(entry.position);
        self.cells
            .entry(cell)
            .or_insert_with(|| {
                log::trace!("new grid bucket at {cell:?}");
                Vec::new()
            })
            .push(entry);
        self.len += 1;
    }

    fn finalize(&mut self) {}

    fn clear(&mut self) {
        if self.len > 0 {
            log::debug!(
                "clearing hash space with {} entries in {} cells",
                self.len,
                self.cells.len()
            );
        }
        self.cells.clear();
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn all(&self) -> Entries<'_> {
        Box::new(self.cells.values().flatten().copied())
    }

    fn find_in_range_approx(&self, entry: &Entry, radius: f64) -> Entries<'_> {
        let Entry { id, position: q } = *entry;
        let resolution = self.resolution;
        let (cx, cy) = self.cell_of(q);
        let d = self.reach(radius);
        let touches =
            move |cell: &Cell| circle_overlaps_rect(q, radius, cell_rect(resolution, *cell));

        let side = d.saturating_mul(2).saturating_add(1);
        let window = u64::try_from(side.saturating_mul(side)).unwrap_or(u64::MAX);
        if window > self.cells.len() as u64 {
            // The window has more cells than are occupied; walk the occupied ones.
            let reach = d.unsigned_abs();
            let in_window =
                move |&(x, y): &Cell| x.abs_diff(cx) <= reach && y.abs_diff(cy) <= reach;
            return Box::new(
                self.cells
                    .iter()
                    .filter(move |(cell, _)| in_window(*cell) && touches(*cell))
                    .flat_map(|(_, bucket)| bucket.iter())
                    .filter(move |e| e.id != id)
                    .copied(),
            );
        }

        let (x0, x1) = (cx.saturating_sub(d), cx.saturating_add(d));
        let window = (cy.saturating_sub(d)..=cy.saturating_add(d))
            .flat_map(move |y| (x0..=x1).map(move |x| (x, y)));
        Box::new(
            window
                .filter(touches)
                .filter_map(move |cell| self.cells.get(&cell))
                .flatten()
                .filter(move |e| e.id != id)
                .copied(),
        )
    }
}
