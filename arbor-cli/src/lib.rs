//! Support library for the `arbor` binary.
//!
//! Exposes argument parsing, graph ingestion and logging so tests and
//! doctests can drive the command pipeline without spawning a process.

pub mod cli;
pub mod input;
pub mod logging;
