//! Disjoint-set (union-find) forest used by Kruskal's algorithm.
//!
//! Elements are the dense ids `0..len`. The link/compression behaviour is a
//! type parameter so Kruskal can be monomorphised for either policy without
//! dynamic dispatch.

mod policy;

use std::marker::PhantomData;

pub use self::policy::{ForestPolicy, ForestStrategy, RankSplitting, SizeHalving};

/// Union-find over `0..len` with a pluggable [`ForestStrategy`].
///
/// # Examples
/// ```
/// use arbor_core::{DisjointSetForest, RankSplitting};
///
/// let mut forest = DisjointSetForest::<RankSplitting>::new(4);
/// assert!(forest.union(0, 1));
/// assert!(forest.union(2, 3));
/// assert!(!forest.are_connected(1, 2));
/// assert!(forest.union(1, 3));
/// assert!(forest.are_connected(0, 2));
/// assert_eq!(forest.component_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest<P = SizeHalving> {
    parents: Vec<usize>,
    measures: Vec<usize>,
    components: usize,
    policy: PhantomData<P>,
}

impl<P: ForestStrategy> DisjointSetForest<P> {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            measures: vec![P::SINGLETON_MEASURE; len],
            components: len,
            policy: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` when the forest has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the canonical root of `element`, compressing its path.
    ///
    /// # Panics
    /// Panics if `element >= self.len()`.
    pub fn find(&mut self, element: usize) -> usize {
        P::find(&mut self.parents, element)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two different sets were merged and `false` when
    /// the elements were already connected.
    ///
    /// # Panics
    /// Panics if either element is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        P::link(&mut self.parents, &mut self.measures, left_root, right_root);
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Panics
    /// Panics if either element is `>= self.len()`.
    pub fn are_connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}
