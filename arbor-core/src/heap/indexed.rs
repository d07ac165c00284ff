//! Indexed priority queue with decrease-key on top of [`KaryHeap`].

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::HeapError;

use super::{Arity, HeapOrder, KaryHeap, MinFirst, SlotTracker};

#[derive(Clone, Debug)]
struct Entry<K, I> {
    key: K,
    item: I,
}

#[derive(Clone, Debug)]
struct ByKey<O>(O);

impl<K, I, O: HeapOrder<K>> HeapOrder<Entry<K, I>> for ByKey<O> {
    fn precedes(&self, first: &Entry<K, I>, second: &Entry<K, I>) -> bool {
        self.0.precedes(&first.key, &second.key)
    }
}

impl<K, I: Clone + Eq + Hash> SlotTracker<Entry<K, I>> for HashMap<I, usize> {
    fn placed(&mut self, value: &Entry<K, I>, slot: usize) {
        self.insert(value.item.clone(), slot);
    }
}

/// Priority queue keyed by item, supporting `update_key` in O(log_K n).
///
/// Each item appears at most once. The queue keeps an item-to-slot index that
/// is updated in lockstep with every heap swap, so an item's key can be read
/// or changed without searching.
///
/// # Examples
/// ```
/// use arbor_core::{Arity, IndexedPriorityQueue, MinFirst};
///
/// let mut queue =
///     IndexedPriorityQueue::new(vec![5, 3, 8], vec!['a', 'b', 'c'], Arity::BINARY, MinFirst)?;
/// assert_eq!(queue.top(), Some((&3, &'b')));
///
/// queue.update_key(1, 'c')?;
/// assert_eq!(queue.pop(), Some((1, 'c')));
/// assert!(!queue.contains(&'c'));
/// assert_eq!(queue.key_at(&'a'), Some(&5));
/// # Ok::<(), arbor_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedPriorityQueue<K, I, O = MinFirst> {
    heap: KaryHeap<Entry<K, I>, ByKey<O>>,
    slots: HashMap<I, usize>,
}

impl<K, I, O> IndexedPriorityQueue<K, I, O>
where
    I: Clone + Eq + Hash,
    O: HeapOrder<K>,
{
    /// Builds a queue from parallel `keys` and `items` in O(n).
    ///
    /// # Errors
    /// Returns [`HeapError::LengthMismatch`] when the vectors differ in length
    /// and [`HeapError::DuplicateItem`] when an item repeats.
    pub fn new(keys: Vec<K>, items: Vec<I>, arity: Arity, order: O) -> Result<Self, HeapError> {
        let entries = zip_entries(keys, items)?;
        Self::index(KaryHeap::new(entries, arity, ByKey(order)))
    }

    /// Builds a queue whose `keys` are already in heap order for `arity`.
    ///
    /// Skips the O(n) heap construction; only the index is built. Debug
    /// builds verify the ordering.
    ///
    /// # Errors
    /// Returns [`HeapError::LengthMismatch`] when the vectors differ in length
    /// and [`HeapError::DuplicateItem`] when an item repeats.
    pub fn from_heap_ordered(
        keys: Vec<K>,
        items: Vec<I>,
        arity: Arity,
        order: O,
    ) -> Result<Self, HeapError> {
        let entries = zip_entries(keys, items)?;
        Self::index(KaryHeap::from_heap_ordered(entries, arity, ByKey(order)))
    }

    fn index(heap: KaryHeap<Entry<K, I>, ByKey<O>>) -> Result<Self, HeapError> {
        let mut slots = HashMap::with_capacity(heap.len());
        for (slot, entry) in heap.values() {
            if slots.insert(entry.item.clone(), slot).is_some() {
                return Err(HeapError::DuplicateItem);
            }
        }
        Ok(Self { heap, slots })
    }

    /// Returns the number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the heap arity.
    #[must_use]
    pub fn arity(&self) -> Arity {
        self.heap.arity()
    }

    /// Returns the extreme key and its item without removing them.
    #[must_use]
    pub fn top(&self) -> Option<(&K, &I)> {
        self.heap.peek().map(|entry| (&entry.key, &entry.item))
    }

    /// Removes and returns the extreme key and its item.
    pub fn pop(&mut self) -> Option<(K, I)> {
        let entry = self.heap.pop_tracked(&mut self.slots)?;
        self.slots.remove(&entry.item);
        Some((entry.key, entry.item))
    }

    /// Queues `item` with `key`.
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateItem`] when `item` is already queued.
    pub fn push(&mut self, key: K, item: I) -> Result<(), HeapError> {
        if self.slots.contains_key(&item) {
            return Err(HeapError::DuplicateItem);
        }
        self.heap.push_tracked(Entry { key, item }, &mut self.slots);
        Ok(())
    }

    /// Replaces the key of `item` and restores heap order.
    ///
    /// The item moves towards the root when the new key precedes the old one
    /// and towards the leaves when it follows it.
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownItem`] when `item` is not queued.
    pub fn update_key(&mut self, key: K, item: I) -> Result<(), HeapError> {
        let slot = *self.slots.get(&item).ok_or(HeapError::UnknownItem)?;
        let entry = self.heap.get(slot).ok_or(HeapError::UnknownItem)?;
        let order = &self.heap.order().0;
        let rises = order.precedes(&key, &entry.key);
        let sinks = order.precedes(&entry.key, &key);

        if let Some(entry) = self.heap.get_mut(slot) {
            entry.key = key;
        }
        if rises {
            self.heap.sift_up(slot, &mut self.slots);
        } else if sinks {
            self.heap.sift_down(slot, &mut self.slots);
        }
        Ok(())
    }

    /// Returns `true` when `item` is queued.
    #[must_use]
    pub fn contains(&self, item: &I) -> bool {
        self.slots.contains_key(item)
    }

    /// Returns the current key of `item`, if queued.
    #[must_use]
    pub fn key_at(&self, item: &I) -> Option<&K> {
        let slot = *self.slots.get(item)?;
        self.heap.get(slot).map(|entry| &entry.key)
    }

    #[cfg(test)]
    pub(crate) fn index_is_consistent(&self) -> bool {
        self.slots.len() == self.heap.len()
            && self
                .heap
                .values()
                .all(|(slot, entry)| self.slots.get(&entry.item) == Some(&slot))
            && self.heap.is_heap()
    }
}

impl<K, O: HeapOrder<K>> IndexedPriorityQueue<K, usize, O> {
    /// Queues items `0..keys.len()`, item `i` keyed by `keys[i]`, when `keys`
    /// already satisfy heap order.
    pub(crate) fn from_heap_ordered_dense(keys: Vec<K>, arity: Arity, order: O) -> Self {
        let entries = keys
            .into_iter()
            .enumerate()
            .map(|(item, key)| Entry { key, item })
            .collect();
        let heap = KaryHeap::from_heap_ordered(entries, arity, ByKey(order));
        let slots = (0..heap.len()).map(|item| (item, item)).collect();
        Self { heap, slots }
    }
}

fn zip_entries<K, I>(keys: Vec<K>, items: Vec<I>) -> Result<Vec<Entry<K, I>>, HeapError> {
    if keys.len() != items.len() {
        return Err(HeapError::LengthMismatch {
            keys: keys.len(),
            items: items.len(),
        });
    }
    Ok(keys
        .into_iter()
        .zip(items)
        .map(|(key, item)| Entry { key, item })
        .collect())
}
