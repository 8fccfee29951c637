// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius queries across every space.
//!
//! Build each space over the same points, query one of them, and check that
//! every strategy returns the same neighbors.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p point_spaces_demos --example radius_query`

use kurbo::Point;
use point_spaces::{Entry, SpaceKind, SpatialIndex};

fn main() {
    env_logger::init();

    // A spiral of points inside the unit disk.
    let entries: Vec<_> = (0..500_u32)
        .map(|i| {
            let t = f64::from(i) / 500.0;
            let theta = t * 40.0;
            Entry::new(i, Point::new(t * theta.cos(), t * theta.sin()))
        })
        .collect();
    let me = entries[250];

    let mut reference: Option<Vec<u32>> = None;
    for kind in SpaceKind::ALL {
        let mut space = kind
            .default_config()
            .build()
            .expect("default configurations are valid");
        space.extend_entries(entries.iter().copied());
        space.finalize();

        let approx = space.find_in_range_approx(&me, 0.05).count();
        let mut near: Vec<_> = space.find_in_range(&me, 0.05).map(|e| e.id).collect();
        near.sort_unstable();
        log::info!("{kind}: {approx} candidates, {} neighbors", near.len());
        println!("{kind:>5}: {} neighbors of #{} {:?}", near.len(), me.id, near);

        match &reference {
            None => reference = Some(near),
            Some(expected) => assert_eq!(&near, expected, "{kind} disagrees"),
        }
    }
}
