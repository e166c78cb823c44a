//! # `digraph` - Directed Graphs on Hand-Rolled Linear Structures
//!
//! A directed graph with adjacency-map storage and reachability search,
//! built on its own linked queue, linked stack and binary min-heap.
//!
//! ## Key Features
//!
//! - **Adjacency maps**: O(1) expected edge checks, O(out-degree) neighbor walks
//! - **Optional weights**: weighted mode is fixed at construction and enforced on every edge
//! - **Iterative traversals**: depth-first on a [`LinkedStack`], breadth-first on a
//!   [`LinkedQueue`]; no recursion, so deep graphs cannot overflow the call stack
//! - **Priority ordering**: [`MinHeap`] and [`PriorityQueue`] for priority-driven processing
//!
//! ## Architecture
//!
//! 1. **Linear collections** (`collections::linked`):
//!    - [`LinkedNode`] box chains owned front to back; the queue links raw nodes
//!    - [`LinkedQueue`] (FIFO, head + tail) and [`LinkedStack`] (LIFO, head only)
//!
//! 2. **Priority collections** (`collections::heap`):
//!    - [`MinHeap`] stores `(priority, value)` pairs in a `Vec` with implicit
//!      `2i + 1` / `2i + 2` children
//!    - [`PriorityQueue`] adapts it to enqueue/dequeue
//!
//! 3. **Graph** (`graph`):
//!    - [`DirectedGraph`] maps each key to a [`Vertex`] holding its payload
//!      and outbound adjacency map
//!    - traversals allocate a fresh frontier and visited set per call
//!
//! ## Heap tie-breaking
//!
//! The heap compares priorities strictly. Entries with equal priority never
//! swap, so the order in which they leave the heap is unspecified.
//!
//! ## Example
//!
//! ```rust
//! use digraph::DirectedGraph;
//!
//! let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
//! graph.add_vertex("a", 1);
//! graph.add_vertex("b", 2);
//! graph.add_vertex("c", 3);
//! graph.add_edge(&"a", &"b", None)?;
//! graph.add_edge(&"b", &"c", None)?;
//!
//! assert!(graph.depth_first_search(&"a", &"c")?);
//! assert!(!graph.depth_first_search(&"c", &"a")?);
//!
//! let search = graph.breadth_first_search(&"b", Some(&"a"))?;
//! assert_eq!(search.found, Some(false));
//! assert_eq!(search.len(), 2);
//! # Ok::<(), digraph::GraphError<&str>>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{HeapEntry, LinkedNode, LinkedQueue, LinkedStack, MinHeap, PriorityQueue};
pub use error::{GraphError, HeapEmpty, QueueEmpty, StackEmpty};
pub use graph::{Bfs, Dfs, DirectedGraph, GraphOptions, Reachability, Vertex};

// Empty-collection errors are markers and must stay zero-sized.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<QueueEmpty>() == 0);
    assert!(mem::size_of::<StackEmpty>() == 0);
    assert!(mem::size_of::<HeapEmpty>() == 0);

    // The frontiers hold one owning pointer plus bookkeeping.
    assert!(mem::size_of::<LinkedStack<u64>>() == mem::size_of::<usize>() * 2);
    assert!(mem::size_of::<LinkedQueue<u64>>() == mem::size_of::<usize>() * 3);
};
