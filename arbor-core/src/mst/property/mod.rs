//! Property-based tests for Kruskal and Prim.
//!
//! Every acceptance strategy, forest policy and heap arity is checked against
//! an independent cut-scanning oracle, against exhaustive search on tiny
//! graphs, for forest shape, and for run-to-run determinism.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod tests;
mod types;
