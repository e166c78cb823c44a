//! Per-vertex storage.

use std::collections::HashMap;
use std::hash::Hash;

/// A vertex payload and its outbound adjacency map.
///
/// The map goes from neighbor key to edge weight; the weight is `None` in
/// unweighted graphs. An edge `a -> b` lives only in `a`'s map.
#[derive(Debug, Clone)]
pub struct Vertex<K, V, W> {
    pub(crate) value: V,
    pub(crate) adjacent: HashMap<K, Option<W>>,
}

impl<K: Eq + Hash, V, W> Vertex<K, V, W> {
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            adjacent: HashMap::new(),
        }
    }

    /// Returns the payload.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Number of outbound edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Returns `true` if there is an edge from this vertex to `to`.
    #[inline]
    pub fn has_edge_to(&self, to: &K) -> bool {
        self.adjacent.contains_key(to)
    }

    /// Iterates over outbound neighbors in map order.
    pub fn neighbors(&self) -> impl Iterator<Item = &K> + '_ {
        self.adjacent.keys()
    }
}
