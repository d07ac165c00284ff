//! Dense, integer-indexed undirected weighted graphs.
//!
//! Vertices are the ids `0..vertex_count`. Each vertex owns an insertion-ordered
//! neighbour map, and the graph keeps one deduplicated, insertion-ordered edge
//! collection keyed by the unordered endpoint pair. When the same pair is seen
//! more than once only the lightest weight is kept, in the slot of the first
//! occurrence. Self-loops are dropped on insertion.

mod edge;

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::GraphError;

pub use self::edge::{Edge, EdgeKey, Weight};

/// Undirected weighted graph with symmetric adjacency maps.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, WeightedGraph};
///
/// let graph = WeightedGraph::new(3, [(0, 1, 4), (1, 0, 2), (1, 2, 5)])?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight(0, 1), Some(2));
/// assert!(graph.has_edge(2, 1));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    adjacency: Vec<IndexMap<usize, Weight>>,
    edges: IndexMap<EdgeKey, Edge>,
}

impl WeightedGraph {
    /// Builds a graph with `vertex_count` vertices from an edge list in
    /// O(n + m).
    ///
    /// Duplicate unordered pairs keep the minimum weight; self-loops are
    /// ignored.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] when the adjacency table
    /// cannot be allocated and [`GraphError::InvalidVertex`] when an endpoint
    /// is `>= vertex_count`.
    pub fn new<I, E>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let edges = edges.into_iter();
        let mut graph = Self::try_with_vertices(vertex_count)?;
        graph.edges.reserve(edges.size_hint().0);

        let mut ignored = 0_usize;
        for edge in edges {
            let edge = edge.into();
            if edge.is_self_loop() {
                graph.validate(edge.source())?;
                ignored += 1;
                continue;
            }
            graph.add_edge(edge)?;
        }

        debug!(
            vertices = vertex_count,
            edges = graph.edge_count(),
            self_loops_ignored = ignored,
            "graph constructed"
        );
        Ok(graph)
    }

    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// # Panics
    /// Panics if the adjacency table cannot be allocated. Use
    /// [`Self::try_with_vertices`] for untrusted counts.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::WeightedGraph;
    ///
    /// let graph = WeightedGraph::with_vertices(4);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![IndexMap::new(); vertex_count],
            edges: IndexMap::new(),
        }
    }

    /// Creates a graph with `vertex_count` isolated vertices, reporting an
    /// allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] when the adjacency table cannot
    /// be reserved.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{GraphError, WeightedGraph};
    ///
    /// assert_eq!(WeightedGraph::try_with_vertices(2)?.vertex_count(), 2);
    /// assert!(matches!(
    ///     WeightedGraph::try_with_vertices(usize::MAX),
    ///     Err(GraphError::TooManyVertices { .. })
    /// ));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn try_with_vertices(vertex_count: usize) -> Result<Self, GraphError> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooManyVertices { vertex_count })?;
        adjacency.resize_with(vertex_count, IndexMap::new);
        Ok(Self {
            adjacency,
            edges: IndexMap::new(),
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of stored (deduplicated) edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when `vertex` is a valid id for this graph.
    #[must_use]
    pub fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Iterates the stored edges in insertion order. O(1) to obtain.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// Returns a copy of the edges sorted with `compare`.
    ///
    /// The sort is stable: edges that compare equal keep their insertion
    /// order.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::WeightedGraph;
    ///
    /// let graph = WeightedGraph::new(3, [(0, 1, 5), (1, 2, 1), (0, 2, 5)])?;
    /// let sorted = graph.sorted_edges_by(|a, b| a.weight().cmp(&b.weight()));
    /// let keys: Vec<_> = sorted.iter().map(|e| (e.source(), e.target())).collect();
    /// assert_eq!(keys, vec![(1, 2), (0, 1), (0, 2)]);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn sorted_edges_by<F>(&self, compare: F) -> Vec<Edge>
    where
        F: FnMut(&Edge, &Edge) -> Ordering,
    {
        let mut sorted: Vec<Edge> = self.edges.values().copied().collect();
        sorted.sort_by(compare);
        sorted
    }

    /// Returns the edges sorted by non-decreasing weight, ties in insertion
    /// order.
    #[must_use]
    pub fn sorted_edges(&self) -> Vec<Edge> {
        self.sorted_edges_by(|left, right| left.weight().cmp(&right.weight()))
    }

    /// Returns `true` if an edge joins `left` and `right` (in either order).
    #[must_use]
    pub fn has_edge(&self, left: usize, right: usize) -> bool {
        self.edges.contains_key(&EdgeKey::new(left, right))
    }

    /// Returns the stored weight between `left` and `right`, if any.
    #[must_use]
    pub fn weight(&self, left: usize, right: usize) -> Option<Weight> {
        self.edges
            .get(&EdgeKey::new(left, right))
            .map(Edge::weight)
    }

    /// Iterates the neighbours of `vertex` with the connecting weight.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] when `vertex` is not in the graph.
    pub fn adjacent(
        &self,
        vertex: usize,
    ) -> Result<impl ExactSizeIterator<Item = (usize, Weight)> + '_, GraphError> {
        self.adjacency
            .get(vertex)
            .map(|neighbours| neighbours.iter().map(|(&other, &weight)| (other, weight)))
            .ok_or(GraphError::NotFound { vertex })
    }

    /// Returns the number of neighbours of `vertex`, or `None` if unknown.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        self.adjacency.get(vertex).map(IndexMap::len)
    }

    /// Inserts an undirected edge in O(1) amortized time.
    ///
    /// Returns `true` when the graph changed: either the pair was new, or it
    /// replaced a heavier edge between the same vertices. Self-loops are
    /// ignored and return `false`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when an endpoint is outside the
    /// graph.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool, GraphError> {
        self.validate(edge.source())?;
        self.validate(edge.target())?;
        if edge.is_self_loop() {
            return Ok(false);
        }

        let key = edge.key();
        match self.edges.get_mut(&key) {
            Some(existing) if edge.weight() < existing.weight() => *existing = edge,
            Some(_) => return Ok(false),
            None => {
                self.edges.insert(key, edge);
            }
        }
        self.link(edge.source(), edge.target(), edge.weight());
        Ok(true)
    }

    /// Removes the edge between `left` and `right` in O(1) amortized time.
    ///
    /// Removal does not preserve the insertion order of the remaining edges.
    pub fn remove_edge(&mut self, left: usize, right: usize) -> Option<Edge> {
        let removed = self.edges.swap_remove(&EdgeKey::new(left, right))?;
        if let Some(neighbours) = self.adjacency.get_mut(left) {
            neighbours.swap_remove(&right);
        }
        if let Some(neighbours) = self.adjacency.get_mut(right) {
            neighbours.swap_remove(&left);
        }
        Some(removed)
    }

    /// Consumes the graph and returns its edges in storage order.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges.into_values().collect()
    }

    fn link(&mut self, left: usize, right: usize, weight: Weight) {
        if let Some(neighbours) = self.adjacency.get_mut(left) {
            neighbours.insert(right, weight);
        }
        if let Some(neighbours) = self.adjacency.get_mut(right) {
            neighbours.insert(left, weight);
        }
    }

    fn validate(&self, vertex: usize) -> Result<(), GraphError> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
