//! K-ary heaps.
//!
//! [`KaryHeap`] is a plain array-backed heap whose ordering is supplied by a
//! [`HeapOrder`]. Every slot move can be reported to a [`SlotTracker`], which
//! is how [`IndexedPriorityQueue`] keeps its item-to-slot map synchronised
//! for decrease-key.
//!
//! Node `i` has parent `(i - 1) / K` and children `K * i + 1 ..= K * i + K`.
//! A larger arity makes the tree shallower, so sifting up touches
//! `log_K n` levels, while sifting down compares up to `K` children per
//! level.

mod indexed;

use std::cmp::min;

use crate::error::HeapError;

pub use self::indexed::IndexedPriorityQueue;

/// Number of children per heap node. Always at least 2.
///
/// # Examples
/// ```
/// use arbor_core::Arity;
///
/// assert_eq!(Arity::default().get(), 4);
/// assert_eq!(Arity::new(2)?, Arity::BINARY);
/// assert!(Arity::new(1).is_err());
/// # Ok::<(), arbor_core::HeapError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arity(usize);

impl Arity {
    /// Binary heap arity.
    pub const BINARY: Self = Self(2);

    /// Validates `arity`.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] when `arity < 2`.
    pub const fn new(arity: usize) -> Result<Self, HeapError> {
        if arity < 2 {
            return Err(HeapError::InvalidArity { got: arity });
        }
        Ok(Self(arity))
    }

    /// Returns the arity as a plain integer.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

impl Default for Arity {
    fn default() -> Self {
        Self(4)
    }
}

/// Decides which of two values sits closer to the heap root.
pub trait HeapOrder<T: ?Sized> {
    /// Returns `true` when `first` must be above `second`.
    fn precedes(&self, first: &T, second: &T) -> bool;
}

/// Smallest value on top.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> HeapOrder<T> for MinFirst {
    fn precedes(&self, first: &T, second: &T) -> bool {
        first < second
    }
}

/// Largest value on top.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> HeapOrder<T> for MaxFirst {
    fn precedes(&self, first: &T, second: &T) -> bool {
        first > second
    }
}

impl<T: ?Sized, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, first: &T, second: &T) -> bool {
        self(first, second)
    }
}

/// Observer notified whenever a heap value lands in a slot.
pub trait SlotTracker<T> {
    /// `value` now lives at `slot`.
    fn placed(&mut self, value: &T, slot: usize);
}

/// Tracker that ignores slot moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTracking;

impl<T> SlotTracker<T> for NoTracking {
    fn placed(&mut self, _value: &T, _slot: usize) {}
}

/// Array-backed k-ary heap.
///
/// # Examples
/// ```
/// use arbor_core::{Arity, KaryHeap, MaxFirst};
///
/// let mut heap = KaryHeap::new(vec![3, 9, 1, 7], Arity::new(3)?, MaxFirst);
/// heap.push(8);
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.pop(), Some(8));
/// assert_eq!(heap.peek(), Some(&7));
/// # Ok::<(), arbor_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct KaryHeap<T, O> {
    nodes: Vec<T>,
    arity: Arity,
    order: O,
}

impl<T, O: HeapOrder<T>> KaryHeap<T, O> {
    /// Builds a heap from arbitrary values in O(n).
    #[must_use]
    pub fn new(values: Vec<T>, arity: Arity, order: O) -> Self {
        let mut heap = Self {
            nodes: values,
            arity,
            order,
        };
        heap.rebuild(&mut NoTracking);
        heap
    }

    /// Wraps values that already satisfy heap order, in O(1).
    ///
    /// The caller vouches for the ordering; debug builds verify it.
    #[must_use]
    pub fn from_heap_ordered(values: Vec<T>, arity: Arity, order: O) -> Self {
        let heap = Self {
            nodes: values,
            arity,
            order,
        };
        debug_assert!(heap.is_heap(), "values must already be heap-ordered");
        heap
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the heap holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the configured arity.
    #[must_use]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Returns the top value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Inserts a value in O(log_K n).
    pub fn push(&mut self, value: T) {
        self.push_tracked(value, &mut NoTracking);
    }

    /// Removes and returns the top value in O(K log_K n).
    pub fn pop(&mut self) -> Option<T> {
        self.pop_tracked(&mut NoTracking)
    }

    /// Returns `true` when every node precedes-or-ties its children.
    #[must_use]
    pub fn is_heap(&self) -> bool {
        (1..self.nodes.len()).all(|slot| {
            let parent = (slot - 1) / self.arity.get();
            !self.order.precedes(&self.nodes[slot], &self.nodes[parent])
        })
    }

    /// Consumes the heap, returning values in slot order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.nodes
    }

    pub(crate) fn order(&self) -> &O {
        &self.order
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&T> {
        self.nodes.get(slot)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.nodes.get_mut(slot)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.nodes.iter().enumerate()
    }

    pub(crate) fn rebuild<S: SlotTracker<T>>(&mut self, tracker: &mut S) {
        let len = self.nodes.len();
        if len < 2 {
            return;
        }
        let last_parent = (len - 2) / self.arity.get();
        for slot in (0..=last_parent).rev() {
            self.sift_down(slot, tracker);
        }
    }

    /// Inserts a value, reporting every slot it and its displaced ancestors
    /// land in.
    pub fn push_tracked<S: SlotTracker<T>>(&mut self, value: T, tracker: &mut S) {
        let slot = self.nodes.len();
        self.nodes.push(value);
        tracker.placed(&self.nodes[slot], slot);
        self.sift_up(slot, tracker);
    }

    /// Removes the top value, reporting every slot move made while
    /// restoring order. The removed value is not reported.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Arity, KaryHeap, MinFirst, SlotTracker};
    ///
    /// struct Moves(Vec<(char, usize)>);
    ///
    /// impl SlotTracker<char> for Moves {
    ///     fn placed(&mut self, value: &char, slot: usize) {
    ///         self.0.push((*value, slot));
    ///     }
    /// }
    ///
    /// let mut heap = KaryHeap::new(vec!['a', 'b', 'c'], Arity::BINARY, MinFirst);
    /// let mut moves = Moves(Vec::new());
    /// assert_eq!(heap.pop_tracked(&mut moves), Some('a'));
    /// assert_eq!(moves.0, vec![('c', 0), ('b', 0), ('c', 1)]);
    /// ```
    pub fn pop_tracked<S: SlotTracker<T>>(&mut self, tracker: &mut S) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }
        let top = self.nodes.swap_remove(0);
        if let Some(moved) = self.nodes.first() {
            tracker.placed(moved, 0);
            self.sift_down(0, tracker);
        }
        Some(top)
    }

    /// Moves the value at `slot` towards the root; returns its final slot.
    pub(crate) fn sift_up<S: SlotTracker<T>>(&mut self, mut slot: usize, tracker: &mut S) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / self.arity.get();
            if !self.order.precedes(&self.nodes[slot], &self.nodes[parent]) {
                break;
            }
            self.swap(slot, parent, tracker);
            slot = parent;
        }
        slot
    }

    /// Moves the value at `slot` towards the leaves; returns its final slot.
    pub(crate) fn sift_down<S: SlotTracker<T>>(
        &mut self,
        mut slot: usize,
        tracker: &mut S,
    ) -> usize {
        let len = self.nodes.len();
        let arity = self.arity.get();
        loop {
            let Some(first_child) = slot
                .checked_mul(arity)
                .and_then(|base| base.checked_add(1))
                .filter(|&child| child < len)
            else {
                break;
            };
            let end = min(first_child.saturating_add(arity), len);

            let mut best = slot;
            for child in first_child..end {
                if self.order.precedes(&self.nodes[child], &self.nodes[best]) {
                    best = child;
                }
            }
            if best == slot {
                break;
            }
            self.swap(slot, best, tracker);
            slot = best;
        }
        slot
    }

    fn swap<S: SlotTracker<T>>(&mut self, first: usize, second: usize, tracker: &mut S) {
        self.nodes.swap(first, second);
        tracker.placed(&self.nodes[first], first);
        tracker.placed(&self.nodes[second], second);
    }
}
