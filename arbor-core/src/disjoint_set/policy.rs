//! Link and compression policies for [`super::DisjointSetForest`].
//!
//! Both policies give amortised inverse-Ackermann `find`/`union`. They differ
//! only in what the per-root measure counts and in how a `find` rewrites the
//! path it walks.

/// Strategy used by a [`super::DisjointSetForest`] to link roots and compress
/// paths.
pub trait ForestStrategy {
    /// Measure assigned to a singleton set.
    const SINGLETON_MEASURE: usize;

    /// Returns the root of `node`, shortening the walked path.
    fn find(parents: &mut [usize], node: usize) -> usize;

    /// Links two distinct roots and returns the surviving one.
    ///
    /// Only the survivor's measure is updated.
    fn link(parents: &mut [usize], measures: &mut [usize], left: usize, right: usize) -> usize;
}

/// Union by size with path halving.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SizeHalving;

impl ForestStrategy for SizeHalving {
    const SINGLETON_MEASURE: usize = 1;

    fn find(parents: &mut [usize], mut node: usize) -> usize {
        while parents[node] != node {
            let grandparent = parents[parents[node]];
            parents[node] = grandparent;
            node = grandparent;
        }
        node
    }

    fn link(parents: &mut [usize], measures: &mut [usize], left: usize, right: usize) -> usize {
        let (root, child) = if measures[left] >= measures[right] {
            (left, right)
        } else {
            (right, left)
        };
        parents[child] = root;
        measures[root] = measures[root].saturating_add(measures[child]);
        root
    }
}

/// Union by rank with path splitting.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RankSplitting;

impl ForestStrategy for RankSplitting {
    const SINGLETON_MEASURE: usize = 0;

    fn find(parents: &mut [usize], mut node: usize) -> usize {
        while parents[node] != node {
            let parent = parents[node];
            parents[node] = parents[parent];
            node = parent;
        }
        node
    }

    fn link(parents: &mut [usize], measures: &mut [usize], left: usize, right: usize) -> usize {
        let left_rank = measures[left];
        let right_rank = measures[right];
        let (root, child) = if left_rank >= right_rank {
            (left, right)
        } else {
            (right, left)
        };
        parents[child] = root;
        if left_rank == right_rank {
            measures[root] = left_rank.saturating_add(1);
        }
        root
    }
}

/// Runtime selector for the forest strategy used by Kruskal.
///
/// # Examples
/// ```
/// use arbor_core::ForestPolicy;
///
/// assert_eq!(ForestPolicy::default(), ForestPolicy::SizeHalving);
/// assert_eq!(ForestPolicy::RankSplitting.as_str(), "rank-splitting");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ForestPolicy {
    /// Union by size, path halving.
    #[default]
    SizeHalving,
    /// Union by rank, path splitting.
    RankSplitting,
}

impl ForestPolicy {
    /// Returns a stable name for logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SizeHalving => "size-halving",
            Self::RankSplitting => "rank-splitting",
        }
    }
}
