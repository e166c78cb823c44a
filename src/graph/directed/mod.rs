//! A dynamic directed graph keyed by caller-supplied vertex ids.
//!
//! Each vertex owns an adjacency map from neighbor key to an optional edge
//! weight. Edges are therefore stored once, on their tail vertex, and refer to
//! their head by key only.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) expected | Replacing a value keeps its edges |
//! | `remove_vertex` | \(O(n)\) | Purges inbound edges from every vertex |
//! | `add_edge` / `remove_edge` | \(O(1)\) expected | |
//! | `edge_exists` / `vertex_exists` | \(O(1)\) expected | |
//! | `get_adjacent_vertices` | \(O(\text{out-degree})\) | Map order, not stable |
//! | `in_degree` | \(O(n)\) | Scans all adjacency maps |

mod traversal;
mod vertex;


use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::GraphError;
use crate::graph::options::GraphOptions;

pub use traversal::{Bfs, Dfs, Reachability};
pub use vertex::Vertex;

/// A directed graph with optional edge weights.
///
/// Whether edges carry weights is fixed at construction: a weighted graph
/// rejects edges without a weight, an unweighted graph discards any weight it
/// is given.
#[derive(Debug, Clone)]
pub struct DirectedGraph<K, V, W = i64> {
    vertices: HashMap<K, Vertex<K, V, W>>,
    options: GraphOptions,
}

impl<K: Eq + Hash + Clone, V, W> DirectedGraph<K, V, W> {
    /// Creates an empty unweighted graph.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::new())
    }

    /// Creates an empty weighted graph.
    pub fn new_weighted() -> Self {
        Self::with_options(GraphOptions::new().weighted(true))
    }

    /// Creates an empty graph configured by `options`.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            vertices: HashMap::with_capacity(options.capacity),
            options,
        }
    }

    /// Returns the options the graph was built with.
    #[inline]
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Returns `true` if edges carry weights.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// Inserts a vertex, or replaces the value of an existing one.
    ///
    /// Replacing a value leaves the vertex's outbound edges as they were.
    pub fn add_vertex(&mut self, id: K, value: V) {
        match self.vertices.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.get_mut().value = value;
                trace!("vertex value replaced");
            }
            Entry::Vacant(slot) => {
                slot.insert(Vertex::new(value));
                debug!(vertices = self.vertices.len(), "vertex added");
            }
        }
    }

    /// Removes a vertex together with every edge pointing at it, returning its value.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is not in the graph.
    pub fn remove_vertex(&mut self, id: &K) -> Result<V, GraphError<K>> {
        let removed = self
            .vertices
            .remove(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))?;

        let mut purged = 0usize;
        for vertex in self.vertices.values_mut() {
            if vertex.adjacent.remove(id).is_some() {
                purged += 1;
            }
        }

        debug!(
            vertices = self.vertices.len(),
            outbound = removed.adjacent.len(),
            inbound = purged,
            "vertex removed"
        );
        Ok(removed.value)
    }

    /// Adds the edge `from -> to`.
    ///
    /// Returns `Ok(false)` without touching anything if the edge already
    /// exists. In an unweighted graph `weight` is ignored.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if either endpoint is missing.
    /// - [`GraphError::MissingWeight`] if the graph is weighted and `weight` is `None`.
    pub fn add_edge(&mut self, from: &K, to: &K, weight: Option<W>) -> Result<bool, GraphError<K>> {
        if !self.vertices.contains_key(to) {
            return Err(GraphError::VertexNotFound(to.clone()));
        }
        let weighted = self.options.weighted;
        let Some(vertex) = self.vertices.get_mut(from) else {
            return Err(GraphError::VertexNotFound(from.clone()));
        };

        if vertex.adjacent.contains_key(to) {
            return Ok(false);
        }

        let weight = if weighted {
            let weight = weight.ok_or_else(|| GraphError::MissingWeight {
                from: from.clone(),
                to: to.clone(),
            })?;
            Some(weight)
        } else {
            None
        };

        vertex.adjacent.insert(to.clone(), weight);
        trace!(out_degree = vertex.adjacent.len(), "edge added");
        Ok(true)
    }

    /// Removes the edge `from -> to`, returning its weight (always `None` when unweighted).
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if `from` is missing.
    /// - [`GraphError::EdgeNotFound`] if there is no such edge.
    pub fn remove_edge(&mut self, from: &K, to: &K) -> Result<Option<W>, GraphError<K>> {
        let vertex = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::VertexNotFound(from.clone()))?;

        let weight = vertex.adjacent.remove(to).ok_or_else(|| GraphError::EdgeNotFound {
            from: from.clone(),
            to: to.clone(),
        })?;
        trace!(out_degree = vertex.adjacent.len(), "edge removed");
        Ok(weight)
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn edge_exists(&self, from: &K, to: &K) -> bool {
        self.vertices.get(from).is_some_and(|v| v.has_edge_to(to))
    }

    /// Returns `true` if `id` is a vertex of the graph.
    #[inline]
    pub fn vertex_exists(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    /// Returns the ids of every vertex `id` has an edge to.
    ///
    /// The vector is empty when `id` has no outbound edges. Order follows the
    /// adjacency map and is not stable.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is not in the graph.
    pub fn get_adjacent_vertices(&self, id: &K) -> Result<Vec<K>, GraphError<K>> {
        Ok(self.neighbors(id)?.cloned().collect())
    }

    /// Borrowing form of [`get_adjacent_vertices`](Self::get_adjacent_vertices).
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is not in the graph.
    pub fn neighbors(&self, id: &K) -> Result<impl Iterator<Item = &K> + '_, GraphError<K>> {
        Ok(self.vertex(id)?.neighbors())
    }

    /// Returns the vertex stored under `id`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is not in the graph.
    pub fn vertex(&self, id: &K) -> Result<&Vertex<K, V, W>, GraphError<K>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }

    /// Returns the value held by `id`.
    pub fn vertex_value(&self, id: &K) -> Option<&V> {
        self.vertices.get(id).map(Vertex::value)
    }

    /// Returns the value held by `id` mutably.
    pub fn vertex_value_mut(&mut self, id: &K) -> Option<&mut V> {
        self.vertices.get_mut(id).map(|v| &mut v.value)
    }

    /// Returns the weight of `from -> to`; `None` if the edge is missing or the graph is unweighted.
    pub fn edge_weight(&self, from: &K, to: &K) -> Option<&W> {
        self.vertices.get(from)?.adjacent.get(to)?.as_ref()
    }

    /// Returns the number of outbound edges of `id`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is not in the graph.
    pub fn out_degree(&self, id: &K) -> Result<usize, GraphError<K>> {
        Ok(self.vertex(id)?.out_degree())
    }

    /// Returns the number of inbound edges of `id`. Scans every vertex.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is not in the graph.
    pub fn in_degree(&self, id: &K) -> Result<usize, GraphError<K>> {
        if !self.vertex_exists(id) {
            return Err(GraphError::VertexNotFound(id.clone()));
        }
        Ok(self.vertices.values().filter(|v| v.has_edge_to(id)).count())
    }

    /// Iterates over all vertex ids in map order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.keys()
    }

    /// Iterates over all edges as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, Option<&W>)> + '_ {
        self.vertices.iter().flat_map(|(from, vertex)| {
            vertex
                .adjacent
                .iter()
                .map(move |(to, weight)| (from, to, weight.as_ref()))
        })
    }
}

impl<K: Eq + Hash + Clone, V, W> Default for DirectedGraph<K, V, W> {
    fn default() -> Self {
        Self::new()
    }
}
