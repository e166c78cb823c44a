use digraph::{DirectedGraph, GraphError};
use std::collections::HashSet;

/// Two clusters:
/// a -> b, b -> c, c -> a, b -> d, d -> e, d -> f, e -> f
/// g -> h, h -> i, h -> j, i -> h
fn two_clusters() -> DirectedGraph<&'static str, u32> {
    let mut graph = DirectedGraph::new();
    for (i, id) in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"].into_iter().enumerate() {
        graph.add_vertex(id, u32::try_from(i).unwrap());
    }
    let edges = [
        ("a", "b"),
        ("b", "c"),
        ("c", "a"),
        ("b", "d"),
        ("d", "e"),
        ("d", "f"),
        ("e", "f"),
        ("g", "h"),
        ("h", "i"),
        ("h", "j"),
        ("i", "h"),
    ];
    for (from, to) in &edges {
        graph.add_edge(from, to, None).unwrap();
    }
    graph
}

fn set<'a>(ids: &[&'a str]) -> HashSet<&'a str> {
    ids.iter().copied().collect()
}

#[test]
fn bfs_from_i_stays_in_its_cluster() {
    let graph = two_clusters();
    let result = graph.breadth_first_search(&"i", None).unwrap();
    let reachable: HashSet<&str> = result.reachable.iter().map(|id| **id).collect();
    assert_eq!(reachable, set(&["i", "h", "j"]));
    assert_eq!(result.found, None);
}

#[test]
fn dfs_does_not_walk_edges_backwards() {
    let graph = two_clusters();
    assert_eq!(graph.depth_first_search(&"h", &"g"), Ok(false));
    assert_eq!(graph.depth_first_search(&"g", &"j"), Ok(true));
    assert_eq!(graph.depth_first_search(&"a", &"f"), Ok(true));
    assert_eq!(graph.depth_first_search(&"f", &"a"), Ok(false));
}

#[test]
fn bfs_from_a_covers_first_cluster() {
    let graph = two_clusters();
    let result = graph.breadth_first_search(&"a", Some(&"f")).unwrap();
    assert_eq!(result.found, Some(true));
    let reachable: HashSet<&str> = result.reachable.iter().map(|id| **id).collect();
    assert_eq!(reachable, set(&["a", "b", "c", "d", "e", "f"]));
}

#[test]
fn dfs_and_bfs_agree_on_every_pair() {
    let graph = two_clusters();
    let ids: Vec<&str> = graph.vertices().copied().collect();
    for source in &ids {
        for target in &ids {
            let dfs = graph.depth_first_search(source, target).unwrap();
            let bfs = graph.breadth_first_search(source, Some(target)).unwrap();
            assert_eq!(Some(dfs), bfs.found, "{source} -> {target}");
        }
    }
}

#[test]
fn removing_a_bridge_splits_reachability() {
    let mut graph = two_clusters();
    assert_eq!(graph.remove_vertex(&"d"), Ok(3));
    assert!(!graph.edge_exists(&"b", &"d"));
    assert_eq!(graph.depth_first_search(&"a", &"f"), Ok(false));
    assert_eq!(graph.depth_first_search(&"d", &"f"), Err(GraphError::VertexNotFound("d")));

    let result = graph.breadth_first_search(&"a", None).unwrap();
    assert_eq!(result.len(), 3);
}

#[test]
fn sink_vertex_reaches_only_itself() {
    let graph = two_clusters();
    let result = graph.breadth_first_search(&"f", None).unwrap();
    assert_eq!(result.len(), 1);
    assert!(result.contains(&"f"));
}

#[test]
fn deep_chain_does_not_overflow() {
    let mut graph: DirectedGraph<u32, ()> = DirectedGraph::new();
    let n = 100_000;
    for id in 0..n {
        graph.add_vertex(id, ());
    }
    for id in 1..n {
        graph.add_edge(&(id - 1), &id, None).unwrap();
    }

    assert_eq!(graph.depth_first_search(&0, &(n - 1)), Ok(true));
    assert_eq!(graph.breadth_first_search(&0, None).unwrap().len(), n as usize);
}
