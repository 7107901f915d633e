// Copyright 2025 the Parcel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use parcel_geom::{Aabb3, OctreePolicy, QuadtreePolicy};
use parcel_tree::Tree;

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
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gen_points_2d(n: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0x5eed_1234);
    (0..n)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn gen_points_3d(n: usize, extent: f64) -> Vec<[f64; 3]> {
    let mut rng = Rng::new(0x5eed_5678);
    (0..n)
        .map(|_| {
            [
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                rng.next_f64() * extent,
            ]
        })
        .collect()
}

fn bench_quadtree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &n in &[1_000_usize, 10_000, 100_000] {
        let points = gen_points_2d(n, 1024.0);
        let policy = QuadtreePolicy::new(8, 10);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("points_{n}"), |b| {
            b.iter_batched(
                || Tree::new(Rect::new(0.0, 0.0, 1024.0, 1024.0), points.clone(), 2),
                |mut tree| {
                    tree.build(black_box(&policy)).unwrap();
                    black_box(tree.leaves().len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_octree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_build");
    for &n in &[1_000_usize, 10_000] {
        let points = gen_points_3d(n, 1024.0);
        let policy = OctreePolicy::new(8, 8);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("points_{n}"), |b| {
            b.iter_batched(
                || Tree::new(Aabb3::new([0.0; 3], [1024.0; 3]), points.clone(), 3),
                |mut tree| {
                    tree.build(black_box(&policy)).unwrap();
                    black_box(tree.leaves().len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_build, bench_octree_build);
criterion_main!(benches);
