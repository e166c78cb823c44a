//! Builds a small road network and asks reachability questions about it.
//!
//! Run with `RUST_LOG=digraph=trace cargo run --example traversal` to see
//! the library's tracing output.

use anyhow::{Context, Result};
use digraph::{DirectedGraph, GraphOptions, PriorityQueue};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options: GraphOptions = serde_json::from_str(r#"{ "weighted": true, "capacity": 8 }"#)
        .context("parsing graph options")?;
    let mut roads: DirectedGraph<&str, u32, u32> = DirectedGraph::with_options(options);

    for (town, population) in [("ash", 1200), ("birch", 800), ("cedar", 450), ("dale", 90)] {
        roads.add_vertex(town, population);
    }
    for (from, to, km) in [("ash", "birch", 12), ("birch", "cedar", 7), ("cedar", "ash", 21)] {
        roads.add_edge(&from, &to, Some(km))?;
    }

    let reach = roads.breadth_first_search(&"ash", Some(&"dale"))?;
    let mut towns: Vec<_> = reach.reachable.iter().copied().collect();
    towns.sort_unstable();
    println!("reachable from ash: {towns:?} (dale reached: {:?})", reach.found);
    println!("birch -> ash by road: {}", roads.depth_first_search(&"birch", &"ash")?);

    // Roads out of ash, shortest first.
    let mut nearest = PriorityQueue::new();
    for to in roads.neighbors(&"ash")? {
        let km = roads.edge_weight(&"ash", to).context("weighted edge without weight")?;
        nearest.enqueue(*km, *to);
    }
    while let Ok((km, town)) = nearest.dequeue() {
        println!("ash -> {town}: {km} km");
    }

    Ok(())
}
