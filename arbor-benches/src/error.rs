//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the benchmark entry
//! points panic once with the rendered error.

use arbor_core::{ConfigError, GraphError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph parameters were rejected.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated edges did not fit the graph.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Solver configuration was rejected.
    #[error("solver configuration failed: {0}")]
    Config(#[from] ConfigError),
}
