//! Command-line interface for computing minimum spanning trees.
//!
//! The single `run` command reads a graph from a file or stdin, solves it
//! with the selected algorithm and prints the total weight, optionally
//! followed by the tree edges.

mod commands;

pub use commands::{
    AcceptanceArg, AlgorithmArg, Cli, CliError, Command, ExecutionSummary, ForestPolicyArg,
    RunCommand, render_summary, run_cli, run_cli_with_stdin,
};
