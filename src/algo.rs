pub mod shortest_paths;
pub mod spanning_tree;

pub use shortest_paths::{dijkstra, ShortestPaths};
pub use spanning_tree::{kruskal, prim};

pub use crate::visit::{bfs, dfs};
