//! Undirected weighted edges and their order-insensitive identity.

use std::hash::{Hash, Hasher};

/// Edge weight. Signed so negative weights are accepted.
pub type Weight = i64;

/// Unordered endpoint pair identifying an undirected edge.
///
/// The constructor canonicalises the pair so that `low <= high`.
///
/// # Examples
/// ```
/// use arbor_core::EdgeKey;
///
/// assert_eq!(EdgeKey::new(3, 1), EdgeKey::new(1, 3));
/// assert_eq!(EdgeKey::new(3, 1).low(), 1);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeKey {
    low: usize,
    high: usize,
}

impl EdgeKey {
    /// Creates the canonical key for the pair `(left, right)`.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        if left <= right {
            Self {
                low: left,
                high: right,
            }
        } else {
            Self {
                low: right,
                high: left,
            }
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn low(&self) -> usize { self.low }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn high(&self) -> usize { self.high }
}

/// An undirected weighted edge.
///
/// The endpoints keep the orientation they were created with, which Prim
/// uses to record which tree vertex attached `target`. Equality and hashing
/// ignore that orientation.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// assert_eq!(Edge::new(0, 1, 7), Edge::new(1, 0, 7));
/// assert_ne!(Edge::new(0, 1, 7), Edge::new(0, 1, 8));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint the edge was created from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the endpoint the edge was created towards.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the order-insensitive identity of the edge.
    #[must_use]
    pub const fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source, self.target)
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.weight == other.weight
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.weight.hash(state);
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}
