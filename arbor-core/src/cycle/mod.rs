//! Depth-first connectivity and cycle checks over a [`WeightedGraph`].
//!
//! This is the slow alternative to [`crate::DisjointSetForest`] for deciding
//! whether an edge would close a cycle: every query is O(n + m). Both
//! traversals use an explicit stack so skewed trees cannot exhaust the call
//! stack.

use crate::graph::WeightedGraph;

/// Read-only traversal helper over a borrowed graph.
///
/// # Examples
/// ```
/// use arbor_core::{CycleOracle, WeightedGraph};
///
/// let graph = WeightedGraph::new(4, [(0, 1, 1), (1, 2, 1)])?;
/// let oracle = CycleOracle::new(&graph);
/// assert!(oracle.are_connected(0, 2));
/// assert!(!oracle.are_connected(0, 3));
/// assert!(!oracle.has_cycle());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CycleOracle<'graph> {
    graph: &'graph WeightedGraph,
}

impl<'graph> CycleOracle<'graph> {
    /// Wraps `graph` for traversal queries.
    #[must_use]
    pub const fn new(graph: &'graph WeightedGraph) -> Self {
        Self { graph }
    }

    /// Returns `true` if a path joins `source` and `target`.
    ///
    /// Ids outside the graph are never connected to anything except
    /// themselves.
    #[must_use]
    pub fn are_connected(&self, source: usize, target: usize) -> bool {
        if source == target {
            return true;
        }
        if !self.graph.has_vertex(source) || !self.graph.has_vertex(target) {
            return false;
        }

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut stack = vec![source];
        visited[source] = true;

        while let Some(current) = stack.pop() {
            if current == target || self.graph.has_edge(current, target) {
                return true;
            }
            let Ok(neighbours) = self.graph.adjacent(current) else {
                continue;
            };
            for (next, _) in neighbours {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        false
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Each undiscovered vertex seeds a traversal that remembers the vertex
    /// it was reached from; meeting an already discovered vertex other than
    /// that parent means two distinct paths lead to it.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        let vertex_count = self.graph.vertex_count();
        let mut visited = vec![false; vertex_count];

        for start in 0..vertex_count {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut stack: Vec<(usize, Option<usize>)> = vec![(start, None)];

            while let Some((current, parent)) = stack.pop() {
                let Ok(neighbours) = self.graph.adjacent(current) else {
                    continue;
                };
                for (next, _) in neighbours {
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, Some(current)));
                    } else if Some(next) != parent {
                        return true;
                    }
                }
            }
        }
        false
    }
}
