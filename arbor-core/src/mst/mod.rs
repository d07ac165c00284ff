//! Minimum spanning tree construction.
//!
//! Two algorithm families are provided:
//!
//! - [`kruskal_mst`] sorts edges by weight and accepts each edge whose
//!   endpoints are not yet connected. Connectivity is decided by a
//!   [`crate::DisjointSetForest`] by default, or by one of the traversal-based
//!   [`EdgeAcceptance`] strategies.
//! - [`prim_mst`] grows a tree from vertex 0 with an
//!   [`crate::IndexedPriorityQueue`], lowering neighbour keys as cheaper
//!   attaching edges are found.
//!
//! Disconnected graphs are not an error: both algorithms return a spanning
//! forest. [`SpanningForest::into_tree`] rejects such results for callers that
//! need a single tree.

mod kruskal;
mod prim;

use crate::error::GraphError;
use crate::graph::Edge;

pub use self::kruskal::{EdgeAcceptance, kruskal_mst, kruskal_mst_with};
pub use self::prim::{prim_forest, prim_mst, prim_mst_with_arity};

/// Edges of a minimum spanning forest together with its shape.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// `edges` must be acyclic over `vertex_count` vertices.
    pub(crate) fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        let component_count = vertex_count.saturating_sub(edges.len());
        Self {
            edges,
            vertex_count,
            component_count,
        }
    }

    /// Returns the forest edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the forest and returns its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge> { self.edges }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the forest has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees, counting isolated vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the edge weights.
    #[must_use]
    pub fn total_weight(&self) -> i128 {
        sum_weights(&self.edges)
    }

    /// Returns the edges only if they form one spanning tree.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when the forest covers no vertices
    /// and [`GraphError::DisconnectedGraph`] when it has several components.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{GraphError, WeightedGraph, kruskal_mst};
    ///
    /// let graph = WeightedGraph::new(4, [(0, 1, 1), (2, 3, 1)])?;
    /// let err = kruskal_mst(graph).into_tree().unwrap_err();
    /// assert_eq!(err, GraphError::DisconnectedGraph { components: 2 });
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn into_tree(self) -> Result<Vec<Edge>, GraphError> {
        match self.component_count {
            0 => Err(GraphError::EmptyGraph),
            1 => Ok(self.edges),
            components => Err(GraphError::DisconnectedGraph { components }),
        }
    }
}

impl IntoIterator for SpanningForest {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Returns the algebraic sum of the edge weights.
///
/// Accumulates in `i128` so no realistic edge count can overflow.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, sum_weights};
///
/// let edges = [Edge::new(0, 1, -2), Edge::new(1, 2, 5)];
/// assert_eq!(sum_weights(&edges), 3);
/// assert_eq!(sum_weights(&[]), 0);
/// ```
#[must_use]
pub fn sum_weights<'a, I>(edges: I) -> i128
where
    I: IntoIterator<Item = &'a Edge>,
{
    edges
        .into_iter()
        .map(|edge| i128::from(edge.weight()))
        .sum()
}

#[cfg(test)]
mod property;
