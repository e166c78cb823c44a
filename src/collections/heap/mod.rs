//! Priority-ordered collections.
//!
//! [`MinHeap`] is the storage; [`PriorityQueue`] is a thin adapter exposing
//! enqueue/dequeue semantics for priority-driven graph processing.

pub mod min_heap;
pub mod priority_queue;

pub use min_heap::{HeapEntry, MinHeap};
pub use priority_queue::PriorityQueue;
