// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspecting tree nodes.
//!
//! Build a quadtree and a k-d tree over clustered points, then walk their
//! nodes to print bounds, depths and leaf occupancy.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p point_spaces_demos --example tree_structure`

use kurbo::Rect;
use point_spaces::{Entry, KdSpace, NodeRef, QuadSpace, SpatialIndex};

fn print_node(node: NodeRef<'_>) {
    let indent = "  ".repeat(node.depth() as usize);
    let Rect { x0, y0, x1, y1 } = node.bound();
    match node.split() {
        Some((axis, at)) => println!(
            "{indent}[{x0:+.3}, {y0:+.3}]..[{x1:+.3}, {y1:+.3}] split {axis:?} at {at:+.3}"
        ),
        None if node.is_leaf() => println!(
            "{indent}[{x0:+.3}, {y0:+.3}]..[{x1:+.3}, {y1:+.3}] leaf, {} entries",
            node.entries().len()
        ),
        None => println!("{indent}[{x0:+.3}, {y0:+.3}]..[{x1:+.3}, {y1:+.3}]"),
    }
    for child in node.children() {
        print_node(child);
    }
}

fn main() {
    env_logger::init();

    let bounds = Rect::new(-1.0, -1.0, 1.0, 1.0);
    // Dense corner plus a sparse diagonal.
    let mut entries = Vec::new();
    for i in 0..40_u32 {
        let f = f64::from(i);
        let (col, row) = (f % 7.0, (f / 7.0).floor());
        entries.push(Entry::from_xy(i, -0.9 + col * 0.02, -0.9 + row * 0.02));
    }
    for i in 0..10_u32 {
        let f = f64::from(i) * 0.18 - 0.8;
        entries.push(Entry::from_xy(100 + i, f, f));
    }

    let mut quad = QuadSpace::new(bounds, 4, 6).expect("valid quadtree configuration");
    quad.extend_entries(entries.iter().copied());
    quad.finalize();
    println!("quadtree: {} nodes", quad.nodes().count());
    print_node(quad.root());

    let mut kd = KdSpace::new(bounds, 4).expect("valid k-d tree configuration");
    kd.extend_entries(entries.iter().copied());
    kd.finalize();
    println!();
    println!("k-d tree: {} nodes", kd.nodes().count());
    print_node(kd.root());

    let leaves = kd.nodes().filter(NodeRef::is_leaf).count();
    log::info!("k-d tree has {leaves} leaves for {} entries", kd.len());
}
