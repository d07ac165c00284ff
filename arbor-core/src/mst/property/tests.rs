//! Proptest and rstest runners for the MST properties, plus oracle sanity
//! checks.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::graph::Edge;
use crate::test_utils::suite_proptest_config;

use super::determinism::run_determinism_property;
use super::equivalence::{run_exhaustive_property, run_oracle_equivalence_property};
use super::oracle::{OracleForest, cut_scan, exhaustive_minimum};
use super::strategies::{generate_fixture, mst_fixture_strategy, tiny_fixture_strategy};
use super::structural::run_structural_invariants_property;
use super::types::WeightDistribution;

/// Expands a property runner into one rstest case per distribution and seed.
macro_rules! parameterised_property_test {
    ($test_name:ident, $runner:path) => {
        #[rstest::rstest]
        #[case::distinct_7(WeightDistribution::Distinct, 7)]
        #[case::distinct_2024(WeightDistribution::Distinct, 2024)]
        #[case::ties_7(WeightDistribution::ManyTies, 7)]
        #[case::ties_2024(WeightDistribution::ManyTies, 2024)]
        #[case::ties_31337(WeightDistribution::ManyTies, 31337)]
        #[case::sparse_7(WeightDistribution::Sparse, 7)]
        #[case::sparse_2024(WeightDistribution::Sparse, 2024)]
        #[case::dense_7(WeightDistribution::Dense, 7)]
        #[case::disconnected_7(WeightDistribution::Disconnected, 7)]
        #[case::disconnected_2024(WeightDistribution::Disconnected, 2024)]
        #[case::signed_7(WeightDistribution::Signed, 7)]
        fn $test_name(#[case] distribution: WeightDistribution, #[case] seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(distribution, &mut rng);
            if let Err(err) = $runner(&fixture) {
                panic!("{}: {err}", stringify!($runner));
            }
        }
    };
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn mst_oracle_equivalence(fixture in mst_fixture_strategy()) {
        run_oracle_equivalence_property(&fixture)?;
    }

    #[test]
    fn mst_structural_invariants(fixture in mst_fixture_strategy()) {
        run_structural_invariants_property(&fixture)?;
    }

    #[test]
    fn mst_determinism(fixture in mst_fixture_strategy()) {
        run_determinism_property(&fixture)?;
    }

    #[test]
    fn mst_matches_exhaustive_search(fixture in tiny_fixture_strategy()) {
        run_exhaustive_property(&fixture)?;
    }
}

parameterised_property_test!(oracle_equivalence_rstest, run_oracle_equivalence_property);
parameterised_property_test!(structural_invariants_rstest, run_structural_invariants_property);
parameterised_property_test!(determinism_rstest, run_determinism_property);

fn edges(triples: &[(usize, usize, i64)]) -> Vec<Edge> {
    triples.iter().copied().map(Edge::from).collect()
}

fn forest(total_weight: i128, edge_count: usize, component_count: usize) -> OracleForest {
    OracleForest {
        total_weight,
        edge_count,
        component_count,
    }
}

#[test]
fn cut_scan_square() {
    let square = edges(&[(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)]);
    assert_eq!(cut_scan(4, &square), forest(6, 3, 1));
}

#[test]
fn cut_scan_ignores_duplicates_and_loops() {
    let noisy = edges(&[(0, 1, 9), (1, 0, 2), (1, 1, -50), (1, 2, 3)]);
    assert_eq!(cut_scan(3, &noisy), forest(5, 2, 1));
}

#[test]
fn cut_scan_counts_isolated_vertices() {
    let pair = edges(&[(0, 1, 1), (2, 3, 2)]);
    assert_eq!(cut_scan(5, &pair), forest(3, 2, 3));
    assert_eq!(cut_scan(0, &[]), forest(0, 0, 0));
}

#[test]
fn exhaustive_search_prefers_spanning_over_light() {
    let triangle = edges(&[(0, 1, 5), (1, 2, 6), (0, 2, 7)]);
    assert_eq!(exhaustive_minimum(3, &triangle), forest(11, 2, 1));
}

#[test]
fn exhaustive_search_handles_negative_weights() {
    let triangle = edges(&[(0, 1, -5), (1, 2, 3), (0, 2, -1)]);
    assert_eq!(exhaustive_minimum(3, &triangle), forest(-6, 2, 1));
}
