//! Shape checks on every solver's output.
//!
//! - Edges exist in the graph with their stored weight.
//! - No unordered pair appears twice.
//! - The edges are acyclic and number `n - c`.
//! - Prim's slot `v` holds an edge ending at `v`, and exactly one slot per
//!   component is empty.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::{Edge, WeightedGraph};
use crate::heap::Arity;
use crate::mst::prim_mst_with_arity;

use super::oracle::{cut_scan, is_acyclic};
use super::types::{MstFixture, all_solvers};

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph()?;
    let components = cut_scan(fixture.vertex_count, &fixture.edges).component_count;

    for solver in all_solvers() {
        let forest = solver.run(&graph);
        let context = || format!("{solver:?}, {}", fixture.describe());
        validate_edges_exist(&graph, forest.edges()).map_err(|msg| fail(&msg, &context()))?;
        validate_unique_pairs(forest.edges()).map_err(|msg| fail(&msg, &context()))?;
        if !is_acyclic(graph.vertex_count(), forest.edges()) {
            return Err(fail("forest contains a cycle", &context()));
        }
        let expected = graph.vertex_count().saturating_sub(components);
        if forest.len() != expected {
            return Err(fail(
                &format!("{} edges, expected n - c = {expected}", forest.len()),
                &context(),
            ));
        }
    }

    validate_prim_slots(&graph, components).map_err(|msg| fail(&msg, &fixture.describe()))
}

fn fail(message: &str, context: &str) -> TestCaseError {
    TestCaseError::fail(format!("{message} ({context})"))
}

fn validate_edges_exist(graph: &WeightedGraph, edges: &[Edge]) -> Result<(), String> {
    for edge in edges {
        let stored = graph.weight(edge.source(), edge.target());
        if stored != Some(edge.weight()) {
            return Err(format!("edge {edge:?} not in graph (stored {stored:?})"));
        }
    }
    Ok(())
}

fn validate_unique_pairs(edges: &[Edge]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(edges.len());
    for edge in edges {
        if !seen.insert(edge.key()) {
            return Err(format!("pair {:?} appears twice", edge.key()));
        }
    }
    Ok(())
}

fn validate_prim_slots(graph: &WeightedGraph, components: usize) -> Result<(), String> {
    let slots = prim_mst_with_arity(graph.clone(), Arity::default());
    if slots.len() != graph.vertex_count() {
        return Err(format!(
            "{} slots for {} vertices",
            slots.len(),
            graph.vertex_count()
        ));
    }
    for (vertex, slot) in slots.iter().enumerate() {
        if let Some(edge) = slot.filter(|edge| edge.target() != vertex) {
            return Err(format!("slot {vertex} holds {edge:?}"));
        }
    }
    let roots = slots.iter().filter(|slot| slot.is_none()).count();
    if roots != components {
        return Err(format!("{roots} empty slots for {components} components"));
    }
    Ok(())
}
