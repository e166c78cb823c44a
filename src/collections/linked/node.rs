//! The boxed singly linked cell behind [`LinkedStack`](super::LinkedStack),
//! plus the chain formatting shared with [`LinkedQueue`](super::LinkedQueue).

/// Owning link to the next cell in a chain.
pub(crate) type Link<T> = Option<Box<LinkedNode<T>>>;

/// A heap-allocated cell holding a value and ownership of its successor.
///
/// Ownership only flows forward: a node owns `next`, nothing points back.
#[derive(Debug)]
pub struct LinkedNode<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> LinkedNode<T> {
    /// Creates a detached node.
    #[inline]
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the successor, if any.
    #[inline]
    pub fn next(&self) -> Option<&LinkedNode<T>> {
        self.next.as_deref()
    }
}

/// Drops a chain front to back without recursing through nested boxes.
pub(crate) fn unlink_all<T>(mut head: Link<T>) {
    while let Some(mut node) = head {
        head = node.next.take();
    }
}

/// Borrowing iterator over a chain of nodes.
pub struct Iter<'a, T> {
    pub(crate) current: Option<&'a LinkedNode<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next();
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

/// Writes `PREFIX [a -> b -> c]`.
pub(crate) fn fmt_chain<'a, T: core::fmt::Display + 'a>(
    f: &mut core::fmt::Formatter<'_>,
    prefix: &str,
    iter: impl IntoIterator<Item = &'a T>,
) -> core::fmt::Result {
    write!(f, "{prefix} [")?;
    for (i, value) in iter.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" -> ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}
