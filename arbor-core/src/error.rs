//! Error types for the Arbor core library.
//!
//! Every public error enum carries a stable, machine-readable code so callers
//! can log or match failures without depending on message text.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building or querying a [`crate::WeightedGraph`], or
/// while insisting that a [`crate::SpanningForest`] is a single tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex id outside `[0, vertex_count)`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Adjacency was requested for a vertex the graph does not contain.
    #[error("vertex {vertex} is not present in the graph")]
    NotFound {
        /// The requested vertex id.
        vertex: usize,
    },
    /// The adjacency table for the requested vertex count could not be
    /// allocated.
    #[error("cannot allocate adjacency for {vertex_count} vertices")]
    TooManyVertices {
        /// The requested vertex count.
        vertex_count: usize,
    },
    /// The graph has no vertices, so no spanning tree exists.
    #[error("graph has no vertices")]
    EmptyGraph,
    /// The spanning forest covers more than one connected component.
    #[error("graph is disconnected: spanning forest has {components} components")]
    DisconnectedGraph {
        /// Number of trees in the forest.
        components: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex id outside the graph.
        InvalidVertex => InvalidVertex { .. } => "INVALID_VERTEX",
        /// Adjacency was requested for an unknown vertex.
        NotFound => NotFound { .. } => "VERTEX_NOT_FOUND",
        /// The vertex count exceeds what can be allocated.
        TooManyVertices => TooManyVertices { .. } => "TOO_MANY_VERTICES",
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "EMPTY_GRAPH",
        /// The spanning forest has more than one component.
        DisconnectedGraph => DisconnectedGraph { .. } => "DISCONNECTED_GRAPH",
    }
}

/// An error produced by [`crate::KaryHeap`] and
/// [`crate::IndexedPriorityQueue`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// Heaps need at least two children per node.
    #[error("heap arity must be at least 2 (got {got})")]
    InvalidArity {
        /// The rejected arity.
        got: usize,
    },
    /// Keys and items passed to a constructor had different lengths.
    #[error("{keys} keys were supplied for {items} items")]
    LengthMismatch {
        /// Number of keys supplied.
        keys: usize,
        /// Number of items supplied.
        items: usize,
    },
    /// An item was inserted while already queued.
    #[error("item is already present in the priority queue")]
    DuplicateItem,
    /// A key update referenced an item that is not queued.
    #[error("item is not present in the priority queue")]
    UnknownItem,
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// Heaps need at least two children per node.
        InvalidArity => InvalidArity { .. } => "HEAP_INVALID_ARITY",
        /// Keys and items had different lengths.
        LengthMismatch => LengthMismatch { .. } => "HEAP_LENGTH_MISMATCH",
        /// The item is already queued.
        DuplicateItem => DuplicateItem => "HEAP_DUPLICATE_ITEM",
        /// The item is not queued.
        UnknownItem => UnknownItem => "HEAP_UNKNOWN_ITEM",
    }
}

/// Error returned when a [`crate::SolverBuilder`] configuration is invalid.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    /// The configured heap arity is unusable.
    #[error("invalid heap arity: {source}")]
    InvalidArity {
        /// Underlying heap validation failure.
        #[source]
        source: HeapError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConfigError`] variants.
    enum ConfigErrorCode for ConfigError {
        /// The configured heap arity is unusable.
        InvalidArity => InvalidArity { .. } => "CONFIG_INVALID_ARITY",
    }
}

impl ConfigError {
    /// Retrieve the inner [`HeapErrorCode`] when the failure came from heap validation.
    #[must_use]
    pub const fn heap_code(&self) -> Option<HeapErrorCode> {
        match self {
            Self::InvalidArity { source } => Some(source.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(GraphError::InvalidVertex { vertex: 4, vertex_count: 4 }, "INVALID_VERTEX")]
    #[case(GraphError::NotFound { vertex: 9 }, "VERTEX_NOT_FOUND")]
    #[case(GraphError::TooManyVertices { vertex_count: usize::MAX }, "TOO_MANY_VERTICES")]
    #[case(GraphError::EmptyGraph, "EMPTY_GRAPH")]
    #[case(GraphError::DisconnectedGraph { components: 2 }, "DISCONNECTED_GRAPH")]
    fn graph_error_codes_are_stable(#[case] error: GraphError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
    }

    #[test]
    fn config_error_exposes_heap_code() {
        let error = ConfigError::InvalidArity {
            source: HeapError::InvalidArity { got: 1 },
        };
        assert_eq!(error.code(), ConfigErrorCode::InvalidArity);
        assert_eq!(error.heap_code(), Some(HeapErrorCode::InvalidArity));
        assert_eq!(
            error.to_string(),
            "invalid heap arity: heap arity must be at least 2 (got 1)"
        );
    }
}
