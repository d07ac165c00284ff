//! Every solver matches the reference oracles on weight and shape.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::oracle::{OracleForest, cut_scan, exhaustive_minimum};
use super::types::{MstFixture, all_solvers};

/// Compares every solver with the cut-scanning oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph()?;
    let expected = cut_scan(fixture.vertex_count, &fixture.edges);
    check_solvers(fixture, &graph, expected)
}

/// Compares every solver with exhaustive search; `fixture` must be tiny.
pub(super) fn run_exhaustive_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph()?;
    let deduplicated: Vec<_> = graph.edges().copied().collect();
    let expected = exhaustive_minimum(fixture.vertex_count, &deduplicated);
    check_solvers(fixture, &graph, expected)
}

fn check_solvers(
    fixture: &MstFixture,
    graph: &crate::graph::WeightedGraph,
    expected: OracleForest,
) -> TestCaseResult {
    for solver in all_solvers() {
        let forest = solver.run(graph);
        let actual = OracleForest {
            total_weight: forest.total_weight(),
            edge_count: forest.len(),
            component_count: forest.component_count(),
        };
        if actual != expected {
            return Err(TestCaseError::fail(format!(
                "{solver:?} disagrees with oracle: got {actual:?}, expected {expected:?} ({})",
                fixture.describe()
            )));
        }
    }
    Ok(())
}
