//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first and the remaining edges are drawn uniformly between vertex pairs.

use arbor_core::{Edge, Weight, WeightedGraph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The weight range was empty.
    #[error("maximum weight must be at least 1, got {max_weight}")]
    EmptyWeightRange {
        /// Requested maximum weight.
        max_weight: Weight,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Average number of incident edges per vertex, before deduplication.
    pub average_degree: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected weighted graph from `config`.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] or
/// [`SyntheticError::EmptyWeightRange`] for unusable parameters.
///
/// # Examples
///
/// ```
/// use arbor_benches::source::{SyntheticGraphConfig, generate_graph};
/// use arbor_core::kruskal_mst;
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 50,
///     average_degree: 4,
///     max_weight: 100,
///     seed: 42,
/// };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 50);
/// assert!(kruskal_mst(graph).is_tree());
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<WeightedGraph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices.into());
    }
    if config.max_weight < 1 {
        return Err(SyntheticError::EmptyWeightRange {
            max_weight: config.max_weight,
        }
        .into());
    }

    let n = config.vertex_count;
    let target_edges = n.saturating_mul(config.average_degree) / 2;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity(target_edges.max(n - 1));

    for vertex in 1..n {
        let parent = rng.gen_range(0..vertex);
        edges.push(Edge::new(parent, vertex, rng.gen_range(1..=config.max_weight)));
    }
    for _ in (n - 1)..target_edges {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);
        edges.push(Edge::new(source, target, rng.gen_range(1..=config.max_weight)));
    }

    Ok(WeightedGraph::new(n, edges)?)
}
