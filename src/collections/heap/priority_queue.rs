//! `PriorityQueue`: queue vocabulary over [`MinHeap`].

use super::min_heap::MinHeap;
use crate::error::HeapEmpty;

/// A min-priority queue: `dequeue` always returns the smallest priority.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, V> {
    heap: MinHeap<P, V>,
}

impl<P: PartialOrd, V> PriorityQueue<P, V> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self { heap: MinHeap::new() }
    }

    /// Returns `true` if the queue holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds `value` with the given `priority`.
    #[inline]
    pub fn enqueue(&mut self, priority: P, value: V) {
        self.heap.add(priority, value);
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// # Errors
    /// Returns [`HeapEmpty`] when the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<(P, V), HeapEmpty> {
        self.heap.remove_min()
    }

    /// Returns the next entry `dequeue` would yield.
    #[inline]
    pub fn peek(&self) -> Option<(&P, &V)> {
        self.heap.peek_min()
    }
}

impl<P: PartialOrd, V> Default for PriorityQueue<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PartialOrd, V> From<MinHeap<P, V>> for PriorityQueue<P, V> {
    fn from(heap: MinHeap<P, V>) -> Self {
        Self { heap }
    }
}
