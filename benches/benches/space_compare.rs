// Copyright 2025 the Point Spaces Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use point_spaces::{Entry, SpaceConfig, SpaceKind, SpatialIndex};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Uniform points in the unit disk.
fn gen_unit_disk(count: u32, seed: u64) -> Vec<Entry> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|id| {
            let r = rng.next_f64().sqrt();
            let theta = rng.next_f64() * core::f64::consts::TAU;
            Entry::from_xy(id, r * theta.cos(), r * theta.sin())
        })
        .collect()
}

/// Two tight blobs, the shape that hurts a uniform grid and favors the trees.
fn gen_clustered(count: u32, seed: u64) -> Vec<Entry> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|id| {
            let (cx, cy) = if id % 2 == 0 { (-0.6, -0.6) } else { (0.5, 0.4) };
            let dx = (rng.next_f64() - 0.5) * 0.1;
            let dy = (rng.next_f64() - 0.5) * 0.1;
            Entry::from_xy(id, cx + dx, cy + dy)
        })
        .collect()
}

fn build(kind: SpaceKind, entries: &[Entry]) -> Box<dyn SpatialIndex> {
    let mut space = SpaceConfig::from(kind)
        .build()
        .expect("default configurations are valid");
    space.extend_entries(entries.iter().copied());
    space.finalize();
    space
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000u32, 10_000] {
        let entries = gen_unit_disk(n, 0xFACE_FEED_CAFE_BABE);
        group.throughput(Throughput::Elements(u64::from(n)));
        for kind in SpaceKind::ALL {
            group.bench_function(format!("{kind}_n{n}"), |b| {
                b.iter_batched(
                    || SpaceConfig::from(kind).build().unwrap(),
                    |mut space| {
                        space.extend_entries(entries.iter().copied());
                        space.finalize();
                        black_box(space.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let entries = gen_unit_disk(10_000, 0x5EED_0001);
    let probes: Vec<_> = entries.iter().step_by(100).copied().collect();
    group.throughput(Throughput::Elements(probes.len() as u64));
    for kind in SpaceKind::ALL {
        let space = build(kind, &entries);
        for radius in [0.02, 0.12] {
            group.bench_function(format!("{kind}_r{radius}"), |b| {
                b.iter(|| {
                    let hits: usize = probes
                        .iter()
                        .map(|q| space.find_in_range(q, radius).count())
                        .sum();
                    black_box(hits);
                })
            });
        }
    }
    group.finish();
}

fn bench_query_approx(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_approx");
    let entries = gen_unit_disk(10_000, 0x5EED_0001);
    let probes: Vec<_> = entries.iter().step_by(100).copied().collect();
    group.throughput(Throughput::Elements(probes.len() as u64));
    for kind in SpaceKind::ALL {
        let space = build(kind, &entries);
        group.bench_function(format!("{kind}_r0.12"), |b| {
            b.iter(|| {
                let hits: usize = probes
                    .iter()
                    .map(|q| space.find_in_range_approx(q, 0.12).count())
                    .sum();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustered");
    let entries = gen_clustered(10_000, 0xDEAD_BEEF_0BAD_F00D);
    let probes: Vec<_> = entries.iter().step_by(100).copied().collect();
    for kind in SpaceKind::ALL {
        group.bench_function(format!("{kind}_build_query_r0.02"), |b| {
            b.iter(|| {
                let space = build(kind, &entries);
                let hits: usize = probes
                    .iter()
                    .map(|q| space.find_in_range(q, 0.02).count())
                    .sum();
                black_box(hits);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_query,
    bench_query_approx,
    bench_clustered,
);
criterion_main!(benches);
