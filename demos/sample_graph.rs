//! Builds a small weighted graph and prints the results of all algorithms.
//!
//! Run with `RUST_LOG=adjgraph=trace` to see the algorithms at work.

use adjgraph::{algo::ShortestPaths, bfs, dfs, dijkstra, kruskal, prim, Graph};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut graph = Graph::new(6);
    graph.extend_with_edges([
        (0, 1, 2),
        (0, 2, 4),
        (1, 3, 7),
        (1, 4, 1),
        (2, 5, 3),
        (3, 5, 1),
    ])?;

    println!("Original graph:");
    print!("{graph}");

    println!("\nBFS tree from 0:");
    print!("{}", bfs(&graph, 0)?);

    println!("\nDFS tree from 0:");
    print!("{}", dfs(&graph, 0)?);

    println!("\nDijkstra shortest path tree from 0:");
    print!("{}", dijkstra(&graph, 0)?);

    let shortest_paths = ShortestPaths::run(&graph, 0)?;
    for vertex in 0..graph.vertex_count() {
        match shortest_paths.dist(vertex) {
            Some(dist) => println!("  distance to {vertex}: {dist}"),
            None => println!("  distance to {vertex}: unreachable"),
        }
    }

    println!("\nPrim minimum spanning tree:");
    print!("{}", prim(&graph));

    println!("\nKruskal minimum spanning tree:");
    print!("{}", kruskal(&graph));

    Ok(())
}
