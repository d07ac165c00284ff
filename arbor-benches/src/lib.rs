//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks comparing Kruskal's acceptance strategies with Prim
//! at several heap arities.

pub mod error;
pub mod params;
pub mod source;
