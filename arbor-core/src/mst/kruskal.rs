//! Kruskal's algorithm with pluggable edge acceptance.

use tracing::{debug, instrument};

use crate::cycle::CycleOracle;
use crate::disjoint_set::{
    DisjointSetForest, ForestPolicy, ForestStrategy, RankSplitting, SizeHalving,
};
use crate::graph::{Edge, WeightedGraph};

use super::SpanningForest;

/// How Kruskal decides that an edge joins two different trees.
///
/// Every strategy accepts exactly the same edges; they differ only in cost.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeAcceptance {
    /// Union-find over the vertices, near O(1) per edge.
    #[default]
    DisjointSet,
    /// Depth-first search between the endpoints in the partial tree, O(n) per
    /// edge.
    PathSearch,
    /// Tentatively insert the edge and scan the partial tree for a cycle,
    /// O(n) per edge.
    CycleScan,
}

impl EdgeAcceptance {
    /// Returns a stable name for logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DisjointSet => "disjoint-set",
            Self::PathSearch => "path-search",
            Self::CycleScan => "cycle-scan",
        }
    }
}

/// Computes a minimum spanning forest with a union-find forest.
///
/// Edges are visited by non-decreasing weight; equal weights keep the graph's
/// insertion order, so the result is deterministic.
///
/// # Examples
/// ```
/// use arbor_core::{WeightedGraph, kruskal_mst};
///
/// let graph = WeightedGraph::new(
///     4,
///     [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)],
/// )?;
/// let forest = kruskal_mst(graph);
/// assert_eq!(forest.len(), 3);
/// assert_eq!(forest.total_weight(), 6);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
pub fn kruskal_mst(graph: WeightedGraph) -> SpanningForest {
    kruskal_mst_with(graph, EdgeAcceptance::default(), ForestPolicy::default())
}

/// Computes a minimum spanning forest with the chosen acceptance strategy.
///
/// `policy` only applies to [`EdgeAcceptance::DisjointSet`].
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip_all,
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        acceptance = acceptance.as_str(),
        policy = policy.as_str(),
    ),
)]
pub fn kruskal_mst_with(
    graph: WeightedGraph,
    acceptance: EdgeAcceptance,
    policy: ForestPolicy,
) -> SpanningForest {
    let vertex_count = graph.vertex_count();
    let sorted = graph.sorted_edges();
    let edges = match (acceptance, policy) {
        (EdgeAcceptance::DisjointSet, ForestPolicy::SizeHalving) => {
            accept_by_forest::<SizeHalving>(vertex_count, sorted)
        }
        (EdgeAcceptance::DisjointSet, ForestPolicy::RankSplitting) => {
            accept_by_forest::<RankSplitting>(vertex_count, sorted)
        }
        (EdgeAcceptance::PathSearch, _) => accept_by_path_search(vertex_count, sorted),
        (EdgeAcceptance::CycleScan, _) => accept_by_cycle_scan(vertex_count, sorted),
    };

    let forest = SpanningForest::new(vertex_count, edges);
    debug!(
        accepted = forest.len(),
        components = forest.component_count(),
        "kruskal forest complete"
    );
    forest
}

fn tree_edge_limit(vertex_count: usize) -> usize {
    vertex_count.saturating_sub(1)
}

fn accept_by_forest<P: ForestStrategy>(vertex_count: usize, sorted: Vec<Edge>) -> Vec<Edge> {
    let limit = tree_edge_limit(vertex_count);
    let mut forest = DisjointSetForest::<P>::new(vertex_count);
    let mut accepted = Vec::with_capacity(limit);

    for edge in sorted {
        if accepted.len() == limit {
            break;
        }
        if forest.union(edge.source(), edge.target()) {
            accepted.push(edge);
        }
    }
    accepted
}

fn accept_by_path_search(vertex_count: usize, sorted: Vec<Edge>) -> Vec<Edge> {
    let limit = tree_edge_limit(vertex_count);
    let mut tree = WeightedGraph::with_vertices(vertex_count);
    let mut accepted = Vec::with_capacity(limit);

    for edge in sorted {
        if accepted.len() == limit {
            break;
        }
        if CycleOracle::new(&tree).are_connected(edge.source(), edge.target()) {
            continue;
        }
        if matches!(tree.add_edge(edge), Ok(true)) {
            accepted.push(edge);
        }
    }
    accepted
}

fn accept_by_cycle_scan(vertex_count: usize, sorted: Vec<Edge>) -> Vec<Edge> {
    let limit = tree_edge_limit(vertex_count);
    let mut tree = WeightedGraph::with_vertices(vertex_count);
    let mut accepted = Vec::with_capacity(limit);

    for edge in sorted {
        if accepted.len() == limit {
            break;
        }
        if !matches!(tree.add_edge(edge), Ok(true)) {
            continue;
        }
        if CycleOracle::new(&tree).has_cycle() {
            tree.remove_edge(edge.source(), edge.target());
        } else {
            accepted.push(edge);
        }
    }
    accepted
}
