//! Seeded graph generators for the MST property suites.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Weight};

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay small; cycle-scan acceptance is quadratic in them.
const DENSE_MAX_VERTICES: usize = 24;

/// Draws a distribution, biased towards ties, and a seed.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    let distribution = prop_oneof![
        2 => Just(WeightDistribution::Distinct),
        3 => Just(WeightDistribution::ManyTies),
        2 => Just(WeightDistribution::Sparse),
        1 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
        1 => Just(WeightDistribution::Signed),
    ];
    (distribution, any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Tiny graphs small enough to enumerate every edge subset.
pub(super) fn tiny_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (1_usize..=6).prop_flat_map(|vertex_count| {
        proptest::collection::vec(
            (0..vertex_count, 0..vertex_count, -4_i64..8),
            0..=10,
        )
        .prop_map(move |triples| MstFixture {
            vertex_count,
            edges: triples.into_iter().map(Edge::from).collect(),
            distribution: WeightDistribution::ManyTies,
        })
    })
}

pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Distinct => generate_distinct(rng),
        WeightDistribution::ManyTies => generate_ties(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let probability = rng.gen_range(0.7..=0.95);
            let edges = random_pairs(vertex_count, 0, probability, rng, |rng| {
                rng.gen_range(1..=1_000)
            });
            fixture(vertex_count, edges, distribution)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Signed => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.2..=0.6);
            let edges = random_pairs(vertex_count, 0, probability, rng, |rng| {
                match rng.gen_range(0..10) {
                    0 => Weight::MIN,
                    1 => Weight::MAX,
                    _ => rng.gen_range(-500..=500),
                }
            });
            fixture(vertex_count, edges, distribution)
        }
    }
}

fn fixture(vertex_count: usize, edges: Vec<Edge>, distribution: WeightDistribution) -> MstFixture {
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Offers every pair `offset + i < offset + j` with the given probability.
fn random_pairs(
    vertex_count: usize,
    offset: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for low in 0..vertex_count {
        for high in (low + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(Edge::new(offset + low, offset + high, w));
            }
        }
    }
    edges
}

fn generate_distinct(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.2..=0.6);
    let mut next: Weight = 0;
    let mut edges = random_pairs(vertex_count, 0, probability, rng, |rng| {
        next += rng.gen_range(1..=5);
        next
    });
    shuffle(&mut edges, rng);
    fixture(vertex_count, edges, WeightDistribution::Distinct)
}

fn generate_ties(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.3..=0.7);
    let pool: Vec<Weight> = (0..rng.gen_range(1..=3))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let edges = random_pairs(vertex_count, 0, probability, rng, |rng| {
        pool[rng.gen_range(0..pool.len())]
    });
    fixture(vertex_count, edges, WeightDistribution::ManyTies)
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(1..=100)))
        .collect();

    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        edges.push(Edge::new(source, target, rng.gen_range(1..=100)));
    }
    fixture(vertex_count, edges, WeightDistribution::Sparse)
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..rng.gen_range(2..=5) {
        let size = rng.gen_range(1..=10);
        let probability = rng.gen_range(0.3..=0.8);
        edges.extend(random_pairs(size, offset, probability, rng, |rng| {
            rng.gen_range(1..=50)
        }));
        offset += size;
    }
    fixture(offset, edges, WeightDistribution::Disconnected)
}

fn shuffle<T>(values: &mut [T], rng: &mut SmallRng) {
    for high in (1..values.len()).rev() {
        values.swap(high, rng.gen_range(0..=high));
    }
}
