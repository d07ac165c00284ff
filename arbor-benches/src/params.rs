//! Benchmark parameter types.

use std::fmt;

/// Parameters for one MST benchmark input.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Average number of edges per vertex.
    pub average_degree: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.vertex_count, self.average_degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_dimensions() {
        let params = MstBenchParams {
            vertex_count: 1_000,
            average_degree: 8,
        };
        assert_eq!(params.to_string(), "n=1000,deg=8");
    }
}
