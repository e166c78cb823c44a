//! Linear and priority-ordered collections.
//!
//! Collections are organized by data structure type:
//! - `linked`: singly linked FIFO queue and LIFO stack
//! - `heap`: array-backed min-heap and the priority queue over it

pub mod heap;
pub mod linked;

// Re-export commonly used types from submodules
pub use heap::{HeapEntry, MinHeap, PriorityQueue};
pub use linked::{LinkedNode, LinkedQueue, LinkedStack, QueueIter};
