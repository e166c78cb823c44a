//! Graph layouts and reachability traversals.
//!
//! - `directed`: adjacency-map directed graph with DFS/BFS
//! - `options`: construction-time configuration

pub mod directed;
pub mod options;

pub use directed::{Bfs, Dfs, DirectedGraph, Reachability, Vertex};
pub use options::GraphOptions;
