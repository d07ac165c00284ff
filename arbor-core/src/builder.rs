//! Configuration surface for [`Solver`].
//!
//! Options are collected unvalidated and checked once in
//! [`SolverBuilder::build`].

use crate::disjoint_set::ForestPolicy;
use crate::error::ConfigError;
use crate::heap::Arity;
use crate::mst::EdgeAcceptance;
use crate::solver::Solver;

/// Algorithm family used by a [`Solver`].
///
/// # Examples
/// ```
/// use arbor_core::Algorithm;
///
/// assert_eq!(Algorithm::default(), Algorithm::Kruskal);
/// assert_eq!(Algorithm::Prim.as_str(), "prim");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Sort edges and accept those joining different trees.
    #[default]
    Kruskal,
    /// Grow trees from the lowest vertex id with an indexed heap.
    Prim,
}

impl Algorithm {
    /// Returns a stable name for logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

/// Configures and constructs [`Solver`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, EdgeAcceptance, SolverBuilder};
///
/// let solver = SolverBuilder::new()
///     .with_algorithm(Algorithm::Kruskal)
///     .with_acceptance(EdgeAcceptance::PathSearch)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(solver.acceptance(), EdgeAcceptance::PathSearch);
/// assert_eq!(solver.heap_arity().get(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct SolverBuilder {
    algorithm: Algorithm,
    acceptance: EdgeAcceptance,
    forest_policy: ForestPolicy,
    heap_arity: usize,
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            acceptance: EdgeAcceptance::default(),
            forest_policy: ForestPolicy::default(),
            heap_arity: Arity::default().get(),
        }
    }
}

impl SolverBuilder {
    /// Creates a builder with Kruskal, union-find acceptance, size/halving
    /// forests and a 4-ary heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the algorithm family.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Selects how Kruskal tests connectivity.
    #[must_use]
    pub fn with_acceptance(mut self, acceptance: EdgeAcceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Selects the union-find balancing and compression policy.
    #[must_use]
    pub fn with_forest_policy(mut self, policy: ForestPolicy) -> Self {
        self.forest_policy = policy;
        self
    }

    /// Sets the arity of Prim's heap. Validated by [`Self::build`].
    #[must_use]
    pub fn with_heap_arity(mut self, arity: usize) -> Self {
        self.heap_arity = arity;
        self
    }

    /// Returns the configured algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the configured, not yet validated, heap arity.
    #[must_use]
    #[rustfmt::skip]
    pub fn heap_arity(&self) -> usize { self.heap_arity }

    /// Validates the configuration and constructs a [`Solver`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidArity`] when the heap arity is below 2.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{ConfigErrorCode, SolverBuilder};
    ///
    /// let err = SolverBuilder::new().with_heap_arity(1).build().unwrap_err();
    /// assert_eq!(err.code(), ConfigErrorCode::InvalidArity);
    /// ```
    pub fn build(self) -> Result<Solver, ConfigError> {
        let heap_arity =
            Arity::new(self.heap_arity).map_err(|source| ConfigError::InvalidArity { source })?;
        Ok(Solver::new(
            self.algorithm,
            self.acceptance,
            self.forest_policy,
            heap_arity,
        ))
    }
}
