//! `MinHeap`: an array-backed binary min-heap over `(priority, value)` pairs.
//!
//! Children of slot `i` live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`.
//! All comparisons are strict: equal priorities never swap, so the relative
//! order in which equal-priority entries come out is unspecified.

use core::fmt;

use crate::error::HeapEmpty;

/// A single heap slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapEntry<P, V> {
    /// Ordering key; smaller comes out first.
    pub priority: P,
    /// Payload carried alongside the priority.
    pub value: V,
}

impl<P, V> HeapEntry<P, V> {
    #[inline]
    fn into_pair(self) -> (P, V) {
        (self.priority, self.value)
    }
}

/// A binary heap that always yields the entry with the smallest priority.
///
/// Priorities need only `PartialOrd`; payloads are never compared.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add` | \(O(\log n)\) |
/// | `remove_min` | \(O(\log n)\) |
/// | `peek_min` | \(O(1)\) |
#[derive(Clone)]
pub struct MinHeap<P, V> {
    data: Vec<HeapEntry<P, V>>,
}

impl<P: PartialOrd, V> MinHeap<P, V> {
    /// Creates an empty heap.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts `value` with the given `priority`.
    pub fn add(&mut self, priority: P, value: V) {
        self.data.push(HeapEntry { priority, value });
        self.percolate_up(self.data.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// # Errors
    /// Returns [`HeapEmpty`] if the heap is empty; nothing is modified.
    pub fn remove_min(&mut self) -> Result<(P, V), HeapEmpty> {
        if self.data.len() <= 1 {
            return self.data.pop().map(HeapEntry::into_pair).ok_or(HeapEmpty);
        }

        // Move the last entry into the root slot and take the old root out.
        let min = self.data.swap_remove(0);
        if self.data.len() > 1 {
            self.percolate_down(0);
        }
        Ok(min.into_pair())
    }

    /// Returns the entry with the smallest priority without removing it.
    pub fn peek_min(&self) -> Option<(&P, &V)> {
        self.data.first().map(|e| (&e.priority, &e.value))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the entries in storage order (not priority order).
    pub fn iter(&self) -> core::slice::Iter<'_, HeapEntry<P, V>> {
        self.data.iter()
    }

    fn percolate_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(node, parent);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn percolate_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // Ties between siblings go left.
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };

            if self.less(child, node) {
                self.data.swap(node, child);
                node = child;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.data[a].priority < self.data[b].priority
    }
}

impl<P: PartialOrd, V> Default for MinHeap<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PartialOrd, V> Extend<(P, V)> for MinHeap<P, V> {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.add(priority, value);
        }
    }
}

impl<P: PartialOrd, V> FromIterator<(P, V)> for MinHeap<P, V> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<P: fmt::Debug, V> fmt::Debug for MinHeap<P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.data.len())
            .field("min", &self.data.first().map(|e| &e.priority))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heap<P: PartialOrd, V>(heap: &MinHeap<P, V>) -> bool {
        (1..heap.data.len()).all(|i| heap.data[(i - 1) / 2].priority <= heap.data[i].priority)
    }

    #[test]
    fn heap_basic() {
        let mut heap = MinHeap::new();
        heap.add(5, "e");
        heap.add(1, "a");
        heap.add(3, "c");
        heap.add(10, "j");

        assert_eq!(heap.peek_min(), Some((&1, &"a")));
        assert_eq!(heap.remove_min(), Ok((1, "a")));
        assert_eq!(heap.remove_min(), Ok((3, "c")));
        assert_eq!(heap.remove_min(), Ok((5, "e")));
        assert_eq!(heap.remove_min(), Ok((10, "j")));
        assert_eq!(heap.remove_min(), Err(HeapEmpty));
        assert!(heap.is_empty());
    }

    #[test]
    fn heap_order() {
        let data = vec![7, 1, 10, 5, 2, 8, 3, 7, 0, 4];
        let mut heap: MinHeap<_, ()> = data.iter().map(|&p| (p, ())).collect();
        assert!(is_heap(&heap));

        let mut result = Vec::new();
        while let Ok((p, ())) = heap.remove_min() {
            assert!(is_heap(&heap));
            result.push(p);
        }

        let mut expected = data;
        expected.sort_unstable();
        assert_eq!(result, expected);
    }

    #[test]
    fn heap_accepts_float_priorities() {
        let mut heap = MinHeap::new();
        heap.add(2.5, 'b');
        heap.add(-1.0, 'a');
        heap.add(9.75, 'c');
        assert_eq!(heap.remove_min(), Ok((-1.0, 'a')));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn equal_priorities_all_come_out() {
        let mut heap = MinHeap::new();
        for v in ["p", "q", "r", "s"] {
            heap.add(1, v);
        }
        heap.add(0, "first");

        assert_eq!(heap.remove_min(), Ok((0, "first")));
        let mut rest: Vec<_> = (0..4).filter_map(|_| heap.remove_min().ok()).map(|(_, v)| v).collect();
        rest.sort_unstable();
        assert_eq!(rest, vec!["p", "q", "r", "s"]);
    }

    #[test]
    fn iter_walks_storage_with_min_first() {
        let heap: MinHeap<_, _> = [(4, 'd'), (2, 'b'), (9, 'i'), (1, 'a')].into_iter().collect();
        let entries: Vec<_> = heap.iter().collect();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], &HeapEntry { priority: 1, value: 'a' });
        let mut values: Vec<char> = heap.iter().map(|e| e.value).collect();
        values.sort_unstable();
        assert_eq!(values, vec!['a', 'b', 'd', 'i']);
    }

    #[test]
    fn empty_remove_leaves_heap_usable() {
        let mut heap: MinHeap<u32, u32> = MinHeap::with_capacity(4);
        assert_eq!(heap.remove_min(), Err(HeapEmpty));
        heap.add(3, 30);
        assert_eq!(heap.remove_min(), Ok((3, 30)));
    }
}
