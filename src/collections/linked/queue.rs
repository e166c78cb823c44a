//! `LinkedQueue`: a FIFO queue over a singly linked chain.
//!
//! Nodes are leaked boxes linked by raw pointers: the queue owns the chain
//! through `head` and keeps a second pointer to the last node so that
//! `enqueue` is O(1) without walking the chain. No `Box` stays alive while
//! a node is linked, so the tail pointer is never invalidated by a move.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | \(O(1)\) |
//! | `dequeue` | \(O(1)\) |
//! | `front` | \(O(1)\) |
//! | `len` / `is_empty` | \(O(1)\) |

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::node::fmt_chain;
use crate::error::QueueEmpty;

type RawLink<T> = Option<NonNull<QueueNode<T>>>;

struct QueueNode<T> {
    value: T,
    next: RawLink<T>,
}

/// A first-in first-out queue backed by a singly linked list.
pub struct LinkedQueue<T> {
    head: RawLink<T>,
    /// Last node of the chain starting at `head`; `None` iff the queue is empty.
    tail: RawLink<T>,
    len: usize,
    _owns: PhantomData<Box<QueueNode<T>>>,
}

// SAFETY: every node is reachable from `head` exactly once and freed only by
// the queue, so the queue owns its `T`s exactly like a `Box` chain would.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
// SAFETY: shared access only reads through the node pointers.
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends `value` at the tail.
    pub fn enqueue(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(QueueNode { value, next: None })));
        match self.tail {
            // SAFETY: `tail` was leaked by an earlier `enqueue` and has not been
            // reclaimed, since `dequeue` clears `tail` when it frees the last node.
            // `&mut self` rules out any live borrow into the chain.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the value at the head.
    ///
    /// # Errors
    /// Returns [`QueueEmpty`] if there is nothing to dequeue; the queue is left untouched.
    pub fn dequeue(&mut self) -> Result<T, QueueEmpty> {
        let head = self.head.ok_or(QueueEmpty)?;
        // SAFETY: `head` came from `Box::leak` in `enqueue` and is unlinked
        // here, so it is reclaimed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            // The removed node was also the tail.
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns the value at the head without removing it.
    ///
    /// # Errors
    /// Returns [`QueueEmpty`] if the queue is empty.
    pub fn front(&self) -> Result<&T, QueueEmpty> {
        // SAFETY: a linked node stays allocated while the queue is borrowed.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value }).ok_or(QueueEmpty)
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            current: self.head,
            remaining: self.len,
            _queue: PhantomData,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.dequeue().is_ok() {}
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Borrowing iterator over a [`LinkedQueue`], head first.
pub struct QueueIter<'a, T> {
    current: RawLink<T>,
    remaining: usize,
    _queue: PhantomData<&'a T>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        // SAFETY: the queue is borrowed for `'a`, so no node is freed or
        // written through while this iterator lives.
        let node = unsafe { &*node.as_ptr() };
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> {}

impl<T> FusedIterator for QueueIter<'_, T> {}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = QueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_chain(f, "QUEUE", self.iter())
    }
}
