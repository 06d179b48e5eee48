mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::UVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sow::prelude::{audit_conflicts, Grid};

fn random_grid(side: u32, kinds: usize, fill: f32, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(side, side);
    for y in 0..side {
        for x in 0..side {
            if rng.random::<f32>() < fill {
                let k = format!("k{}", (rng.random::<u32>() as usize) % kinds);
                grid.set(UVec2::new(x, y), Some(&k));
            }
        }
    }
    grid
}

fn audit_grid_size_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit/grid_size");
    let catalog = common::synthetic_catalog(12, 0.6, 0xCAFEBABE);

    for &side in &[10u32, 40, 160] {
        let grid = random_grid(side, 12, 0.8, 0x12345678);
        group.throughput(common::elements_throughput(grid.occupied_count()));

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| black_box(audit_conflicts(&grid, &catalog)));
        });
    }

    group.finish();
}

fn audit_kind_count_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit/kind_count");

    for &kinds in &[4usize, 16, 64] {
        let catalog = common::synthetic_catalog(kinds, 0.6, 0x87654321);
        let grid = random_grid(60, kinds, 0.9, 0x0);
        group.throughput(common::elements_throughput(kinds * kinds / 2));

        group.bench_with_input(BenchmarkId::from_parameter(kinds), &kinds, |b, _| {
            b.iter(|| black_box(audit_conflicts(&grid, &catalog)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = audit_grid_size_benches,
              audit_kind_count_benches
}
criterion_main!(benches);
