//! Fixture and configuration types shared by the property suites.

use crate::disjoint_set::ForestPolicy;
use crate::graph::{Edge, WeightedGraph};
use crate::heap::Arity;
use crate::mst::EdgeAcceptance;

/// Shape of the generated weights and topology.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Distinct weights, so the minimum tree is unique.
    Distinct,
    /// Weights drawn from a pool of one to three values.
    ManyTies,
    /// A random spanning path plus roughly `n / 2` to `n` extra edges,
    /// including reversed duplicates and self-loops.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// Two to five components with no edges between them.
    Disconnected,
    /// Weights spanning zero, including extreme values.
    Signed,
}

/// Raw input for one property case.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges as generated, before deduplication.
    pub edges: Vec<Edge>,
    /// Distribution that produced the edges.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the graph; generated endpoints are always in range.
    pub(super) fn graph(&self) -> Result<WeightedGraph, proptest::test_runner::TestCaseError> {
        WeightedGraph::new(self.vertex_count, self.edges.iter().copied()).map_err(|err| {
            proptest::test_runner::TestCaseError::fail(format!(
                "fixture graph rejected: {err} ({})",
                self.describe()
            ))
        })
    }

    /// One-line context for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}

/// A named way of computing a spanning forest.
#[derive(Clone, Copy, Debug)]
pub(super) enum Solver {
    Kruskal(EdgeAcceptance, ForestPolicy),
    Prim(Arity),
}

/// Every Kruskal configuration and a spread of Prim arities.
pub(super) fn all_solvers() -> Vec<Solver> {
    let mut solvers = vec![
        Solver::Kruskal(EdgeAcceptance::DisjointSet, ForestPolicy::SizeHalving),
        Solver::Kruskal(EdgeAcceptance::DisjointSet, ForestPolicy::RankSplitting),
        Solver::Kruskal(EdgeAcceptance::PathSearch, ForestPolicy::default()),
        Solver::Kruskal(EdgeAcceptance::CycleScan, ForestPolicy::default()),
    ];
    solvers.extend(
        [2, 3, 4, 8]
            .into_iter()
            .filter_map(|arity| Arity::new(arity).ok())
            .map(Solver::Prim),
    );
    solvers
}

impl Solver {
    /// Runs the solver on a copy of `graph`.
    pub(super) fn run(self, graph: &WeightedGraph) -> crate::mst::SpanningForest {
        match self {
            Self::Kruskal(acceptance, policy) => {
                crate::mst::kruskal_mst_with(graph.clone(), acceptance, policy)
            }
            Self::Prim(arity) => crate::mst::prim_forest(graph.clone(), arity),
        }
    }
}
