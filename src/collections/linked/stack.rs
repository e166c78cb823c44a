//! `LinkedStack`: a LIFO stack over a singly linked chain.
//!
//! Push and pop both work at the head, so the chain needs no tail pointer
//! and the implementation is entirely safe.

use core::fmt;

use super::node::{fmt_chain, unlink_all, Iter, Link, LinkedNode};
use crate::error::StackEmpty;

/// A last-in first-out stack backed by a singly linked list.
pub struct LinkedStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Returns the number of stacked elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Pushes `value` on top.
    pub fn push(&mut self, value: T) {
        let mut node = LinkedNode::new(value);
        node.next = self.top.take();
        self.top = Some(node);
        self.len += 1;
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    /// Returns [`StackEmpty`] if there is nothing to pop; the stack is left untouched.
    pub fn pop(&mut self) -> Result<T, StackEmpty> {
        let mut node = self.top.take().ok_or(StackEmpty)?;
        self.top = node.next.take();
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    /// Returns [`StackEmpty`] if the stack is empty.
    pub fn top(&self) -> Result<&T, StackEmpty> {
        self.top.as_deref().map(LinkedNode::value).ok_or(StackEmpty)
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.top.as_deref(),
            remaining: self.len,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        unlink_all(self.top.take());
        self.len = 0;
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        unlink_all(self.top.take());
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_chain(f, "STACK", self.iter())
    }
}
