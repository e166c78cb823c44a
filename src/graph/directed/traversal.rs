//! Reachability traversals for [`DirectedGraph`].
//!
//! Both walks are iterative: depth-first runs on a [`LinkedStack`] frontier,
//! breadth-first on a [`LinkedQueue`]. Frontier and visited set are created
//! per call and never shared. Edge weights play no part.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::trace;

use super::DirectedGraph;
use crate::collections::{LinkedQueue, LinkedStack};
use crate::error::GraphError;

/// Depth-first iterator over the vertices reachable from a source.
///
/// Every neighbor is pushed, visited or not; the visited check happens on
/// pop. Siblings therefore come out in reverse adjacency-map order.
pub struct Dfs<'a, K, V, W> {
    graph: &'a DirectedGraph<K, V, W>,
    stack: LinkedStack<&'a K>,
    visited: HashSet<&'a K>,
}

impl<'a, K: Eq + Hash, V, W> Dfs<'a, K, V, W> {
    /// Number of vertices yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if `id` has already been yielded.
    pub fn is_visited(&self, id: &K) -> bool {
        self.visited.contains(id)
    }
}

impl<'a, K: Eq + Hash, V, W> Iterator for Dfs<'a, K, V, W> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Ok(id) = self.stack.pop() {
            if !self.visited.insert(id) {
                continue;
            }
            if let Some(vertex) = graph.vertices.get(id) {
                for neighbor in vertex.adjacent.keys() {
                    self.stack.push(neighbor);
                }
            }
            return Some(id);
        }
        None
    }
}

/// Breadth-first iterator over the vertices reachable from a source.
///
/// A vertex is marked visited when it is dequeued; neighbors already marked
/// are not enqueued again. A vertex enqueued twice before its first dequeue
/// is skipped the second time, so each vertex is yielded at most once.
pub struct Bfs<'a, K, V, W> {
    graph: &'a DirectedGraph<K, V, W>,
    queue: LinkedQueue<&'a K>,
    visited: HashSet<&'a K>,
}

impl<'a, K: Eq + Hash, V, W> Bfs<'a, K, V, W> {
    /// Number of vertices yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if `id` has already been yielded.
    pub fn is_visited(&self, id: &K) -> bool {
        self.visited.contains(id)
    }
}

impl<'a, K: Eq + Hash, V, W> Iterator for Bfs<'a, K, V, W> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Ok(id) = self.queue.dequeue() {
            if !self.visited.insert(id) {
                continue;
            }
            if let Some(vertex) = graph.vertices.get(id) {
                for neighbor in vertex.adjacent.keys() {
                    if !self.visited.contains(neighbor) {
                        self.queue.enqueue(neighbor);
                    }
                }
            }
            return Some(id);
        }
        None
    }
}

/// Outcome of [`DirectedGraph::breadth_first_search`].
#[derive(Debug, Clone)]
pub struct Reachability<'a, K> {
    /// Whether the target was reached; `None` when no target was given.
    pub found: Option<bool>,
    /// Every vertex reachable from the source, the source included.
    pub reachable: HashSet<&'a K>,
}

impl<K: Eq + Hash> Reachability<'_, K> {
    /// Returns `true` if `id` is reachable from the source.
    pub fn contains(&self, id: &K) -> bool {
        self.reachable.contains(id)
    }

    /// Number of reachable vertices.
    pub fn len(&self) -> usize {
        self.reachable.len()
    }

    /// Always `false` for a successful search: the source reaches itself.
    pub fn is_empty(&self) -> bool {
        self.reachable.is_empty()
    }
}

impl<K: Eq + Hash + Clone, V, W> DirectedGraph<K, V, W> {
    /// Returns the graph's own copy of `id`, so traversals never borrow the caller's key.
    fn stored_key(&self, id: &K) -> Result<&K, GraphError<K>> {
        self.vertices
            .get_key_value(id)
            .map(|(key, _)| key)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }

    /// Starts a depth-first walk at `source`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `source` is not in the graph.
    pub fn dfs(&self, source: &K) -> Result<Dfs<'_, K, V, W>, GraphError<K>> {
        let start = self.stored_key(source)?;
        let mut stack = LinkedStack::new();
        stack.push(start);
        Ok(Dfs {
            graph: self,
            stack,
            visited: HashSet::new(),
        })
    }

    /// Starts a breadth-first walk at `source`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `source` is not in the graph.
    pub fn bfs(&self, source: &K) -> Result<Bfs<'_, K, V, W>, GraphError<K>> {
        let start = self.stored_key(source)?;
        let mut queue = LinkedQueue::new();
        queue.enqueue(start);
        Ok(Bfs {
            graph: self,
            queue,
            visited: HashSet::new(),
        })
    }

    /// Returns `true` if `target` can be reached from `source` along directed edges.
    ///
    /// Stops as soon as the target is popped. A missing `target` is unreachable.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `source` is not in the graph.
    pub fn depth_first_search(&self, source: &K, target: &K) -> Result<bool, GraphError<K>> {
        let mut walk = self.dfs(source)?;
        let found = walk.any(|id| id == target);
        trace!(visited = walk.visited_count(), found, "depth-first search finished");
        Ok(found)
    }

    /// Collects every vertex reachable from `source`, and whether `target` is among them.
    ///
    /// The walk always runs to completion, so `reachable` is complete even
    /// when the target is found early.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `source` is not in the graph.
    pub fn breadth_first_search(
        &self,
        source: &K,
        target: Option<&K>,
    ) -> Result<Reachability<'_, K>, GraphError<K>> {
        let reachable: HashSet<&K> = self.bfs(source)?.collect();
        let found = target.map(|t| reachable.contains(t));
        trace!(reachable = reachable.len(), ?found, "breadth-first search finished");
        Ok(Reachability { found, reachable })
    }
}
