//! Find a [minimum spanning tree] of a graph.
//!
//! Both algorithms treat the graph as undirected and return an undirected
//! graph, adding every selected edge as two adjacency entries.
//!
//! * [`prim`] grows a single tree from vertex `0` and ignores everything not
//!   reachable from it.
//! * [`kruskal`] returns a minimum spanning forest, one tree per connected
//!   component.
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use adjgraph::{kruskal, prim, Graph};
//!
//! let mut graph = Graph::new(4);
//! graph
//!     .extend_with_edges([(0, 1, 4), (1, 2, 1), (2, 3, 2), (3, 0, 3), (0, 2, 5)])
//!     .unwrap();
//!
//! let weight = |tree: &Graph| tree.undirected_edges().map(|e| e.weight).sum::<i64>();
//!
//! assert_eq!(weight(&prim(&graph)), 6);
//! assert_eq!(weight(&kruskal(&graph)), 6);
//! ```

mod kruskal;
mod prim;

pub use kruskal::kruskal;
pub use prim::prim;
