//! Reruns and alternative acceptance strategies give identical edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::disjoint_set::ForestPolicy;
use crate::graph::Edge;
use crate::mst::{EdgeAcceptance, kruskal_mst_with};

use super::types::{MstFixture, all_solvers};

/// Number of reruns per solver.
const REPETITIONS: usize = 3;

fn oriented(edges: &[Edge]) -> Vec<(usize, usize, i64)> {
    edges
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.weight()))
        .collect()
}

pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph()?;

    for solver in all_solvers() {
        let baseline = oriented(solver.run(&graph).edges());
        for run in 1..REPETITIONS {
            let again = oriented(solver.run(&graph).edges());
            if again != baseline {
                return Err(TestCaseError::fail(format!(
                    "{solver:?} run {run} differs from first run ({})",
                    fixture.describe()
                )));
            }
        }
    }

    let reference = oriented(
        kruskal_mst_with(graph.clone(), EdgeAcceptance::DisjointSet, ForestPolicy::SizeHalving)
            .edges(),
    );
    for (acceptance, policy) in [
        (EdgeAcceptance::DisjointSet, ForestPolicy::RankSplitting),
        (EdgeAcceptance::PathSearch, ForestPolicy::default()),
        (EdgeAcceptance::CycleScan, ForestPolicy::default()),
    ] {
        let edges = oriented(kruskal_mst_with(graph.clone(), acceptance, policy).edges());
        if edges != reference {
            return Err(TestCaseError::fail(format!(
                "{} / {} accepted different edges ({})",
                acceptance.as_str(),
                policy.as_str(),
                fixture.describe()
            )));
        }
    }
    Ok(())
}
