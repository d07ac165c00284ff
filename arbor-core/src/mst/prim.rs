//! Prim's algorithm over an indexed k-ary heap.

use tracing::{debug, instrument};

use crate::graph::{Edge, Weight, WeightedGraph};
use crate::heap::{Arity, IndexedPriorityQueue, MinFirst};

use super::SpanningForest;

/// Cheapest known cost of attaching a vertex to the tree.
///
/// `Finite` is declared first so every finite key orders below `Infinite`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Priority {
    Finite(Weight),
    Infinite,
}

/// Computes a minimum spanning forest rooted at vertex 0 with a 4-ary heap.
///
/// Slot `v` of the result holds the edge that attached `v`, or `None` when
/// `v` is the root of its component.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, WeightedGraph, prim_mst};
///
/// let graph = WeightedGraph::new(3, [(0, 1, 4), (1, 2, 1), (0, 2, 3)])?;
/// let slots = prim_mst(graph);
/// assert_eq!(slots[0], None);
/// assert_eq!(slots[1], Some(Edge::new(2, 1, 1)));
/// assert_eq!(slots[2], Some(Edge::new(0, 2, 3)));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
pub fn prim_mst(graph: WeightedGraph) -> Vec<Option<Edge>> {
    prim_mst_with_arity(graph, Arity::default())
}

/// Computes Prim's attaching-edge slots with a heap of the given arity.
#[must_use]
#[instrument(
    name = "mst.prim",
    skip_all,
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        arity = arity.get(),
    ),
)]
pub fn prim_mst_with_arity(graph: WeightedGraph, arity: Arity) -> Vec<Option<Edge>> {
    let vertex_count = graph.vertex_count();
    let mut attached: Vec<Option<Edge>> = vec![None; vertex_count];
    if vertex_count == 0 {
        return attached;
    }

    let mut keys = vec![Priority::Infinite; vertex_count];
    keys[0] = Priority::Finite(0);
    let mut queue = IndexedPriorityQueue::from_heap_ordered_dense(keys, arity, MinFirst);

    while let Some((_, vertex)) = queue.pop() {
        let Ok(neighbours) = graph.adjacent(vertex) else {
            continue;
        };
        for (neighbour, weight) in neighbours {
            let improves = queue
                .key_at(&neighbour)
                .is_some_and(|&current| Priority::Finite(weight) < current);
            if improves && queue.update_key(Priority::Finite(weight), neighbour).is_ok() {
                attached[neighbour] = Some(Edge::new(vertex, neighbour, weight));
            }
        }
    }

    debug!(
        attached = attached.iter().flatten().count(),
        components = attached.iter().filter(|slot| slot.is_none()).count(),
        "prim forest complete"
    );
    attached
}

/// Runs Prim with the given arity and collects the attaching edges.
///
/// # Examples
/// ```
/// use arbor_core::{Arity, WeightedGraph, prim_forest};
///
/// let graph = WeightedGraph::new(4, [(0, 1, 1), (2, 3, 1)])?;
/// let forest = prim_forest(graph, Arity::BINARY);
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest.component_count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
pub fn prim_forest(graph: WeightedGraph, arity: Arity) -> SpanningForest {
    let vertex_count = graph.vertex_count();
    let edges = prim_mst_with_arity(graph, arity)
        .into_iter()
        .flatten()
        .collect();
    SpanningForest::new(vertex_count, edges)
}
