//! Minimum spanning tree engine for dense, integer-indexed undirected graphs.
//!
//! The crate provides two algorithm families over a shared
//! [`WeightedGraph`]:
//!
//! - [`kruskal_mst`] visits edges by weight and accepts those joining two
//!   different trees, using a [`DisjointSetForest`] or a traversal-based
//!   [`CycleOracle`] strategy.
//! - [`prim_mst`] grows trees vertex by vertex with an
//!   [`IndexedPriorityQueue`] supporting decrease-key.
//!
//! Disconnected inputs produce spanning forests rather than errors. The
//! library performs no I/O and installs no `tracing` subscriber.
//!
//! # Examples
//! ```
//! use arbor_core::{Arity, WeightedGraph, kruskal_mst, prim_forest};
//!
//! let edges = [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)];
//! let kruskal = kruskal_mst(WeightedGraph::new(4, edges)?);
//! let prim = prim_forest(WeightedGraph::new(4, edges)?, Arity::default());
//! assert_eq!(kruskal.total_weight(), 6);
//! assert_eq!(prim.total_weight(), 6);
//! # Ok::<(), arbor_core::GraphError>(())
//! ```

mod builder;
mod cycle;
mod disjoint_set;
mod error;
mod graph;
mod heap;
mod mst;
mod solver;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{Algorithm, SolverBuilder},
    cycle::CycleOracle,
    disjoint_set::{DisjointSetForest, ForestPolicy, ForestStrategy, RankSplitting, SizeHalving},
    error::{ConfigError, ConfigErrorCode, GraphError, GraphErrorCode, HeapError, HeapErrorCode},
    graph::{Edge, EdgeKey, Weight, WeightedGraph},
    heap::{
        Arity, HeapOrder, IndexedPriorityQueue, KaryHeap, MaxFirst, MinFirst, NoTracking,
        SlotTracker,
    },
    mst::{
        EdgeAcceptance, SpanningForest, kruskal_mst, kruskal_mst_with, prim_forest, prim_mst,
        prim_mst_with_arity, sum_weights,
    },
    solver::Solver,
};
