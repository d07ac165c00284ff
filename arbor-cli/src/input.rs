//! Text graph format.
//!
//! The input is a whitespace-separated token stream: the vertex count `n`,
//! the edge count `m`, then `m` triples `u v w`. Vertex labels are 1-based
//! and are shifted to the 0-based ids used by [`arbor_core`]. Line breaks
//! carry no meaning and tokens after the last declared triple are ignored.

use std::io::{self, Read};
use std::str::FromStr;

use arbor_core::{Edge, GraphError, Weight, WeightedGraph};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while reading the text graph format.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// The underlying reader failed or produced invalid UTF-8.
    #[error("failed to read graph input: {source}")]
    Io {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A token could not be parsed as the expected number.
    #[error("token {position} (`{token}`) is not a valid {expected}")]
    InvalidToken {
        /// 1-based token position in the stream.
        position: usize,
        /// The offending token.
        token: String,
        /// What the token should have been.
        expected: &'static str,
    },
    /// A vertex label was zero; labels start at 1.
    #[error("token {position} is vertex label 0, but labels start at 1")]
    ZeroLabel {
        /// 1-based token position in the stream.
        position: usize,
    },
    /// The stream ended before the header or all declared edges were read.
    #[error("input ended after {found} of {declared} edges")]
    Truncated {
        /// Edge count declared in the header.
        declared: usize,
        /// Complete triples actually read.
        found: usize,
    },
    /// The header was missing or incomplete.
    #[error("input must start with the vertex and edge counts")]
    MissingHeader,
    /// The edges did not fit the declared vertex count.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl InputError {
    /// Returns a stable, machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "INPUT_IO",
            Self::InvalidToken { .. } => "INPUT_INVALID_TOKEN",
            Self::ZeroLabel { .. } => "INPUT_ZERO_LABEL",
            Self::Truncated { .. } => "INPUT_TRUNCATED",
            Self::MissingHeader => "INPUT_MISSING_HEADER",
            Self::Graph(error) => error.code().as_str(),
        }
    }
}

/// Reads a graph in the text format from `reader`.
///
/// # Errors
/// Returns [`InputError`] when reading fails or the text is malformed.
///
/// # Examples
/// ```
/// use arbor_cli::input::read_graph;
///
/// let graph = read_graph("3 2\n1 2 5\n2 3 -1\n".as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.weight(1, 2), Some(-1));
/// # Ok::<(), arbor_cli::input::InputError>(())
/// ```
#[instrument(name = "cli.read_graph", err, skip(reader))]
pub fn read_graph(mut reader: impl Read) -> Result<WeightedGraph, InputError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| InputError::Io { source })?;
    parse_graph(&text)
}

/// Parses a graph from text already in memory.
///
/// # Errors
/// Returns [`InputError`] when the text is malformed.
pub fn parse_graph(text: &str) -> Result<WeightedGraph, InputError> {
    let mut tokens = Tokens::new(text);
    let vertex_count: usize = tokens.next_number("vertex count")?.ok_or(InputError::MissingHeader)?;
    let declared: usize = tokens.next_number("edge count")?.ok_or(InputError::MissingHeader)?;

    let mut edges = Vec::new();
    for found in 0..declared {
        let truncated = InputError::Truncated { declared, found };
        let Some(source) = tokens.next_label()? else {
            return Err(truncated);
        };
        let Some(target) = tokens.next_label()? else {
            return Err(truncated);
        };
        let Some(weight) = tokens.next_number::<Weight>("weight")? else {
            return Err(truncated);
        };
        edges.push(Edge::new(source, target, weight));
    }

    let graph = WeightedGraph::new(vertex_count, edges)?;
    debug!(
        vertices = graph.vertex_count(),
        declared_edges = declared,
        stored_edges = graph.edge_count(),
        "graph parsed"
    );
    Ok(graph)
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_number<T: FromStr>(&mut self, expected: &'static str) -> Result<Option<T>, InputError> {
        let Some(token) = self.inner.next() else {
            return Ok(None);
        };
        self.position += 1;
        token
            .parse()
            .map(Some)
            .map_err(|_| InputError::InvalidToken {
                position: self.position,
                token: token.to_owned(),
                expected,
            })
    }

    /// Reads a 1-based label and returns the 0-based vertex id.
    fn next_label(&mut self) -> Result<Option<usize>, InputError> {
        let Some(token) = self.inner.next() else {
            return Ok(None);
        };
        self.position += 1;
        match token.parse::<usize>() {
            Ok(0) => Err(InputError::ZeroLabel {
                position: self.position,
            }),
            Ok(label) => Ok(Some(label - 1)),
            Err(_) => Err(InputError::InvalidToken {
                position: self.position,
                token: token.to_owned(),
                expected: "vertex label",
            }),
        }
    }
}
