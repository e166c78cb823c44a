//! Error types for the linear collections and the directed graph.
//!
//! Every failure is reported before the structure is touched, so an `Err`
//! always leaves the receiver exactly as it was.

use thiserror::Error;

/// Returned when dequeuing from (or peeking into) an empty [`LinkedQueue`](crate::LinkedQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is empty")]
pub struct QueueEmpty;

/// Returned when popping from (or peeking into) an empty [`LinkedStack`](crate::LinkedStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stack is empty")]
pub struct StackEmpty;

/// Returned when removing the minimum of an empty [`MinHeap`](crate::MinHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("heap is empty")]
pub struct HeapEmpty;

/// Failures raised by [`DirectedGraph`](crate::DirectedGraph) operations.
///
/// Adding an edge that already exists is not an error; it is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<K> {
    /// The vertex is not part of the graph.
    #[error("vertex {0:?} does not exist in the graph")]
    VertexNotFound(K),
    /// There is no edge `from -> to`.
    #[error("edge {from:?} -> {to:?} does not exist in the graph")]
    EdgeNotFound {
        /// Tail of the missing edge.
        from: K,
        /// Head of the missing edge.
        to: K,
    },
    /// The graph is weighted and the edge was added without a weight.
    #[error("edge {from:?} -> {to:?} needs a weight in a weighted graph")]
    MissingWeight {
        /// Tail of the rejected edge.
        from: K,
        /// Head of the rejected edge.
        to: K,
    },
}
