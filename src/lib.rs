//! Weighted graphs stored as adjacency lists, together with the classic
//! algorithms over them: breadth-first and depth-first traversal trees,
//! Dijkstra's shortest paths and minimum spanning trees by Prim and Kruskal.
//!
//! Every algorithm takes a [`Graph`] by reference and returns a new graph
//! with the same vertex count holding the result.
//!
//! ```
//! use adjgraph::{bfs, dijkstra, kruskal, Graph};
//!
//! let mut graph = Graph::new(4);
//! graph.extend_with_edges([(0, 1, 4), (1, 2, 1), (0, 2, 2), (2, 3, 7)]).unwrap();
//!
//! let tree = bfs(&graph, 0).unwrap();
//! assert_eq!(tree.entry_count(), 3);
//!
//! let paths = dijkstra(&graph, 0).unwrap();
//! assert!(paths.contains_edge(2, 1));
//!
//! let forest = kruskal(&graph);
//! assert_eq!(forest.undirected_edges().map(|edge| edge.weight).sum::<i64>(), 10);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub use crate::{
    algo::{dijkstra, kruskal, prim},
    core::{Edge, Neighbor, Weight, DEFAULT_WEIGHT},
    graph::Graph,
    visit::{bfs, dfs},
};
