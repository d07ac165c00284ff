//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use arbor_core::{
    Algorithm, ConfigError, EdgeAcceptance, ForestPolicy, SolverBuilder, SpanningForest,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::input::{InputError, read_graph};

const DEFAULT_HEAP_ARITY: usize = 4;
const STDIN_LABEL: &str = "<stdin>";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Compute minimum spanning trees of weighted graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve a graph and print the total weight of its spanning forest.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph file in `n m` + `u v w` format; stdin is read when omitted.
    pub path: Option<PathBuf>,

    /// Algorithm family.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Kruskal)]
    pub algorithm: AlgorithmArg,

    /// How Kruskal decides whether an edge joins two trees.
    #[arg(long, value_enum, default_value_t = AcceptanceArg::DisjointSet)]
    pub acceptance: AcceptanceArg,

    /// Union-find policy used by disjoint-set acceptance.
    #[arg(long = "forest-policy", value_enum, default_value_t = ForestPolicyArg::SizeHalving)]
    pub forest_policy: ForestPolicyArg,

    /// Branching factor of Prim's heap.
    #[arg(
        long,
        default_value_t = DEFAULT_HEAP_ARITY,
        value_parser = clap::value_parser!(usize),
    )]
    pub arity: usize,

    /// Print the tree edges after the total weight.
    #[arg(long)]
    pub edges: bool,
}

/// Algorithm names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Sort edges, keep those joining different trees.
    Kruskal,
    /// Grow trees with an indexed k-ary heap.
    Prim,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Kruskal => Self::Kruskal,
            AlgorithmArg::Prim => Self::Prim,
        }
    }
}

/// Kruskal acceptance strategies accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AcceptanceArg {
    /// Union-find.
    DisjointSet,
    /// Depth-first search over the partial forest.
    PathSearch,
    /// Insert, scan for a cycle, roll back.
    CycleScan,
}

impl From<AcceptanceArg> for EdgeAcceptance {
    fn from(value: AcceptanceArg) -> Self {
        match value {
            AcceptanceArg::DisjointSet => Self::DisjointSet,
            AcceptanceArg::PathSearch => Self::PathSearch,
            AcceptanceArg::CycleScan => Self::CycleScan,
        }
    }
}

/// Union-find policies accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForestPolicyArg {
    /// Union by size with path halving.
    SizeHalving,
    /// Union by rank with path splitting.
    RankSplitting,
}

impl From<ForestPolicyArg> for ForestPolicy {
    fn from(value: ForestPolicyArg) -> Self {
        match value {
            ForestPolicyArg::SizeHalving => Self::SizeHalving,
            ForestPolicyArg::RankSplitting => Self::RankSplitting,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph text was unreadable or malformed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The solver options were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Returns a stable, machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Input(err) => err.code(),
            Self::Config(err) => err.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// File path of the graph, or `<stdin>`.
    pub source: String,
    /// Algorithm that produced the forest.
    pub algorithm: Algorithm,
    /// Minimum spanning forest in 0-based vertex ids.
    pub forest: SpanningForest,
    /// Whether [`render_summary`] lists the edges.
    pub show_edges: bool,
}

/// Executes the CLI command represented by `cli`, reading stdin when no path
/// is given.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or configuration fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, run_cli};
/// # use clap::Parser;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n1 2 4\n2 3 1\n1 3 2\n")?;
/// let path = file.path().to_string_lossy().into_owned();
/// let cli = Cli::try_parse_from(["arbor", "run", path.as_str(), "--algorithm", "prim"])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    run_cli_with_stdin(cli, io::stdin().lock())
}

/// Executes `cli`, reading the graph from `stdin` when no path is given.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or configuration fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli, stdin),
    fields(command = field::Empty),
)]
pub fn run_cli_with_stdin(cli: Cli, stdin: impl Read) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run, stdin)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, stdin),
    fields(source = field::Empty, algorithm = field::Empty),
)]
pub(super) fn run_command(
    command: RunCommand,
    stdin: impl Read,
) -> Result<ExecutionSummary, CliError> {
    let algorithm = Algorithm::from(command.algorithm);
    let solver = SolverBuilder::new()
        .with_algorithm(algorithm)
        .with_acceptance(command.acceptance.into())
        .with_forest_policy(command.forest_policy.into())
        .with_heap_arity(command.arity)
        .build()?;

    let span = Span::current();
    span.record("algorithm", field::display(algorithm.as_str()));

    let (source, graph) = match command.path {
        Some(path) => {
            let reader = open_graph_reader(&path)?;
            (path.display().to_string(), read_graph(reader)?)
        }
        None => (STDIN_LABEL.to_owned(), read_graph(stdin)?),
    };
    span.record("source", field::display(&source));

    let forest = solver.solve(graph);
    info!(
        source = source.as_str(),
        edges = forest.len(),
        total_weight = forest.total_weight(),
        "command completed"
    );
    Ok(ExecutionSummary {
        source,
        algorithm,
        forest,
        show_edges: command.edges,
    })
}

#[instrument(name = "cli.open_graph_reader", err, fields(path = field::Empty))]
pub(super) fn open_graph_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `summary` to `writer`: the total weight, then one 1-based
/// `u v w` line per edge when edges were requested.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, render_summary};
/// # use arbor_core::{Algorithm, WeightedGraph, kruskal_mst};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = WeightedGraph::new(3, [(0, 1, 5), (1, 2, -2)])?;
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     algorithm: Algorithm::Kruskal,
///     forest: kruskal_mst(graph),
///     show_edges: true,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "3\n2 3 -2\n1 2 5\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", summary.forest.total_weight())?;
    if summary.show_edges {
        for edge in summary.forest.edges() {
            writeln!(
                writer,
                "{} {} {}",
                edge.source() + 1,
                edge.target() + 1,
                edge.weight()
            )?;
        }
    }
    Ok(())
}
