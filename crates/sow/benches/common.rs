#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sow::prelude::{Catalog, CompanionMatrix, CompanionRelationship, PlantSpec};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

const FOOTPRINTS: [f32; 6] = [0.25, 0.5, 1.0, 2.0, 4.0, 9.0];

/// Catalog of `count` synthetic kinds (`k0`, `k1`, ...) with random footprints and a random
/// companion relationship for roughly `density` of all pairs.
pub fn synthetic_catalog(count: usize, density: f32, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let plants: Vec<(String, PlantSpec)> = (0..count)
        .map(|i| {
            let footprint = FOOTPRINTS[(rng.random::<u32>() as usize) % FOOTPRINTS.len()];
            let spec = PlantSpec::new(
                format!("Kind {i}"),
                "synthetic",
                footprint,
                1.0 + rng.random::<f32>() * 9.0,
                "lbs",
                30 + rng.random::<u32>() % 90,
            );
            (format!("k{i}"), spec)
        })
        .collect();

    let mut companions = CompanionMatrix::new();
    for a in 0..count {
        for b in (a + 1)..count {
            if rng.random::<f32>() < density {
                let r = CompanionRelationship::ALL
                    [(rng.random::<u32>() as usize) % CompanionRelationship::ALL.len()];
                companions.insert(format!("k{a}"), format!("k{b}"), r);
            }
        }
    }

    Catalog::try_new(plants, companions, Vec::new()).expect("synthetic catalog is valid")
}

/// `n` kind ids drawn from a catalog built by [`synthetic_catalog`].
pub fn random_kinds(catalog_size: usize, n: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| format!("k{}", (rng.random::<u32>() as usize) % catalog_size.max(1)))
        .collect()
}
