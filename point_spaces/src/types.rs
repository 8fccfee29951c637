// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive types and the circle/box overlap helpers shared by every space.

use kurbo::{Point, Rect};

/// A point entry stored in a space.
///
/// Identity is the `id`, not the position: two entries at the same position
/// with different ids are distinct, and a query never returns an entry whose
/// id equals the query entry's id.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry {
    /// Caller-chosen identifier. Not required to be unique.
    pub id: u32,
    /// Position in world space.
    pub position: Point,
}

impl Entry {
    /// Create a new entry.
    pub const fn new(id: u32, position: Point) -> Self {
        Self { id, position }
    }

    /// Create a new entry from raw coordinates.
    pub const fn from_xy(id: u32, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// Split axis of a k-d node, also used to pick coordinates by axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Coordinate of `p` along this axis.
    #[inline]
    pub fn of(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// The longer axis of `rect`. Square boxes split along `X`.
    #[inline]
    pub fn longer(rect: Rect) -> Self {
        if rect.width() >= rect.height() {
            Self::X
        } else {
            Self::Y
        }
    }

    /// Split `rect` at coordinate `at` along this axis into (lower, upper).
    ///
    /// The two halves always share the split line, so their extents sum to
    /// the parent's extent along the axis.
    pub fn split(self, rect: Rect, at: f64) -> (Rect, Rect) {
        match self {
            Self::X => (
                Rect::new(rect.x0, rect.y0, at, rect.y1),
                Rect::new(at, rect.y0, rect.x1, rect.y1),
            ),
            Self::Y => (
                Rect::new(rect.x0, rect.y0, rect.x1, at),
                Rect::new(rect.x0, at, rect.x1, rect.y1),
            ),
        }
    }
}

/// Squared distance from `p` to the closest point of `rect` (zero inside).
///
/// Inverted boxes do not panic; the clamp simply favors the max edge.
#[inline]
pub fn distance_squared_to_rect(p: Point, rect: Rect) -> f64 {
    let cx = p.x.max(rect.x0).min(rect.x1);
    let cy = p.y.max(rect.y0).min(rect.y1);
    (p - Point::new(cx, cy)).hypot2()
}

/// Whether a circle touches an axis-aligned box.
#[inline]
pub fn circle_overlaps_rect(center: Point, radius: f64, rect: Rect) -> bool {
    distance_squared_to_rect(center, rect) <= radius * radius
}

/// Whether `a` and `b` are strictly closer than `radius`.
#[inline]
pub fn within_radius(a: Point, b: Point, radius: f64) -> bool {
    (a - b).hypot2() < radius * radius
}

/// Index of the quadrant of `rect` that holds `p`.
///
/// Quadrants are numbered `[north-west, north-east, south-west, south-east]`.
/// Points on a midpoint go east and south.
#[inline]
pub fn quadrant_index(rect: Rect, p: Point) -> usize {
    let mid = rect.center();
    let east = usize::from(p.x >= mid.x);
    let south = usize::from(p.y >= mid.y);
    east | (south << 1)
}

/// The four equal quarters of `rect`, ordered as [`quadrant_index`] numbers them.
pub fn quadrants(rect: Rect) -> [Rect; 4] {
    let mid = rect.center();
    [
        Rect::new(rect.x0, rect.y0, mid.x, mid.y),
        Rect::new(mid.x, rect.y0, rect.x1, mid.y),
        Rect::new(rect.x0, mid.y, mid.x, rect.y1),
        Rect::new(mid.x, mid.y, rect.x1, rect.y1),
    ]
}

/// Whether `rect` is usable as the world bounds of a tree.
pub(crate) fn is_valid_bounds(rect: Rect) -> bool {
    rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite()
        && rect.width() >= 0.0
        && rect.height() >= 0.0
}

/// Closed containment test, unlike [`Rect::contains`] which excludes the max edges.
#[inline]
pub(crate) fn contains_closed(rect: Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_rect_is_zero_inside() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(distance_squared_to_rect(Point::new(1.0, 1.5), r), 0.0);
        assert_eq!(distance_squared_to_rect(Point::new(3.0, 1.0), r), 1.0);
        assert_eq!(distance_squared_to_rect(Point::new(5.0, 6.0), r), 9.0 + 16.0);
    }

    #[test]
    fn inverted_rect_does_not_panic() {
        let r = Rect::new(2.0, 2.0, 0.0, 0.0);
        let d = distance_squared_to_rect(Point::new(1.0, 1.0), r);
        assert!(d.is_finite(), "clamping an inverted box must stay finite");
    }

    #[test]
    fn circle_touching_corner_overlaps() {
        let r = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert!(circle_overlaps_rect(Point::ORIGIN, 2.0_f64.sqrt(), r));
        assert!(!circle_overlaps_rect(Point::ORIGIN, 1.4, r));
    }

    #[test]
    fn within_radius_is_strict() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.5, 0.0);
        assert!(within_radius(a, b, 0.51));
        assert!(!within_radius(a, b, 0.5));
    }

    #[test]
    fn quadrants_line_up_with_index() {
        let r = Rect::new(-1.0, -1.0, 1.0, 1.0);
        let qs = quadrants(r);
        for p in [
            Point::new(-0.5, -0.5),
            Point::new(0.5, -0.5),
            Point::new(-0.5, 0.5),
            Point::new(0.5, 0.5),
            Point::new(0.0, 0.0),
        ] {
            let q = qs[quadrant_index(r, p)];
            assert!(contains_closed(q, p), "{p:?} should land in {q:?}");
        }
        let area: f64 = qs.iter().map(|q| q.area()).sum();
        assert_eq!(area, r.area());
    }

    #[test]
    fn axis_split_partitions_extent() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(Axis::longer(r), Axis::X);
        let (lo, hi) = Axis::X.split(r, 1.5);
        assert_eq!(lo.width() + hi.width(), r.width());
        assert_eq!(Axis::longer(Rect::new(0.0, 0.0, 2.0, 2.0)), Axis::X);
        assert_eq!(Axis::longer(Rect::new(0.0, 0.0, 1.0, 2.0)), Axis::Y);
        let (lo, hi) = Axis::Y.split(r, 0.5);
        assert_eq!(lo.height() + hi.height(), r.height());
    }
}
