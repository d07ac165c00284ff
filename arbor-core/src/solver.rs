//! Validated MST configuration and its entry point.

use tracing::{info, instrument};

use crate::builder::Algorithm;
use crate::disjoint_set::ForestPolicy;
use crate::graph::WeightedGraph;
use crate::heap::Arity;
use crate::mst::{EdgeAcceptance, SpanningForest, kruskal_mst_with, prim_forest};

/// Runs the configured MST algorithm.
///
/// Create one with [`crate::SolverBuilder`].
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, SolverBuilder, WeightedGraph};
///
/// let solver = SolverBuilder::new()
///     .with_algorithm(Algorithm::Prim)
///     .with_heap_arity(2)
///     .build()?;
/// let graph = WeightedGraph::new(3, [(0, 1, 2), (1, 2, 2), (0, 2, 1)])?;
/// let forest = solver.solve(graph);
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Solver {
    algorithm: Algorithm,
    acceptance: EdgeAcceptance,
    forest_policy: ForestPolicy,
    heap_arity: Arity,
}

impl Solver {
    pub(crate) fn new(
        algorithm: Algorithm,
        acceptance: EdgeAcceptance,
        forest_policy: ForestPolicy,
        heap_arity: Arity,
    ) -> Self {
        Self {
            algorithm,
            acceptance,
            forest_policy,
            heap_arity,
        }
    }

    /// Returns the algorithm family.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns Kruskal's acceptance strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn acceptance(&self) -> EdgeAcceptance { self.acceptance }

    /// Returns Kruskal's union-find policy.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest_policy(&self) -> ForestPolicy { self.forest_policy }

    /// Returns Prim's heap arity.
    #[must_use]
    #[rustfmt::skip]
    pub fn heap_arity(&self) -> Arity { self.heap_arity }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// Settings that do not apply to the chosen algorithm are ignored.
    #[must_use]
    #[instrument(
        name = "mst.solve",
        skip_all,
        fields(
            algorithm = self.algorithm.as_str(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
        ),
    )]
    pub fn solve(&self, graph: WeightedGraph) -> SpanningForest {
        let forest = match self.algorithm {
            Algorithm::Kruskal => kruskal_mst_with(graph, self.acceptance, self.forest_policy),
            Algorithm::Prim => prim_forest(graph, self.heap_arity),
        };
        info!(
            edges = forest.len(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            "spanning forest computed"
        );
        forest
    }
}
