//! Linked-list backed linear collections.
//!
//! Both structures own a forward-only chain of nodes and are used as
//! traversal frontiers by [`DirectedGraph`](crate::DirectedGraph). The stack
//! links boxed [`LinkedNode`]s; the queue links leaked nodes through raw
//! pointers so it can also hold a tail pointer.

pub mod node;
pub mod queue;
pub mod stack;

pub use node::{Iter, LinkedNode};
pub use queue::{LinkedQueue, QueueIter};
pub use stack::LinkedStack;
