//! Construction-time configuration for [`DirectedGraph`](crate::DirectedGraph).

use serde::{Deserialize, Serialize};

/// Options fixed when a graph is built.
///
/// Deserializes from partial documents; missing fields fall back to
/// [`GraphOptions::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Every edge must carry a weight when `true`; weights are dropped when `false`.
    pub weighted: bool,
    /// Number of vertices to reserve room for up front.
    pub capacity: usize,
}

impl GraphOptions {
    /// Unweighted graph with no preallocation.
    pub const fn new() -> Self {
        Self {
            weighted: false,
            capacity: 0,
        }
    }

    /// Sets the weighted mode.
    #[must_use]
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Sets the vertex capacity hint.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
