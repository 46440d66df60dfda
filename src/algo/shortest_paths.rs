//! Find [single source shortest paths] and their distances in a graph.
//!
//! Dijkstra's algorithm is used, which requires edges to have nonnegative
//! weights. An edge with negative weight reached during the run is reported as
//! [`Error::NegativeWeight`].
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::ShortestPaths, Graph};
//!
//! let prague = 0;
//! let bratislava = 1;
//! let vienna = 2;
//! let munich = 3;
//! let nuremberg = 4;
//! let florence = 5;
//! let rome = 6;
//!
//! let mut graph = Graph::new(7);
//! graph
//!     .extend_with_edges([
//!         (prague, bratislava, 328),
//!         (prague, nuremberg, 297),
//!         (prague, vienna, 293),
//!         (bratislava, vienna, 79),
//!         (nuremberg, munich, 170),
//!         (vienna, munich, 402),
//!         (vienna, florence, 863),
//!         (munich, florence, 646),
//!         (florence, rome, 278),
//!     ])
//!     .unwrap();
//!
//! let shortest_paths = ShortestPaths::run(&graph, rome).unwrap();
//! let distance = shortest_paths[prague];
//! let path = shortest_paths.reconstruct(prague).collect::<Vec<_>>();
//!
//! assert_eq!(distance, 1391);
//! assert_eq!(path, vec![nuremberg, munich, florence, rome]);
//! ```

use std::ops::Index;

use thiserror::Error;

use crate::{
    core::{error::VertexOutOfRange, Weight},
    graph::Graph,
};

mod dijkstra;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    dist: Vec<Option<Weight>>,
    pred: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Runs Dijkstra's algorithm from `source`.
    pub fn run(graph: &Graph, source: usize) -> Result<Self, Error> {
        dijkstra::dijkstra(graph, source)
    }

    /// Source vertex where the search was started.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if the vertex is not reachable.
    pub fn dist(&self, to: usize) -> Option<Weight> {
        self.dist.get(to).copied().flatten()
    }

    /// Returns the predecessor of the vertex on its shortest path, or `None`
    /// for the source and unreachable vertices.
    pub fn pred(&self, vertex: usize) -> Option<usize> {
        self.pred.get(vertex).copied().flatten()
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order.
    ///
    /// The given vertex itself is not included. The iterator is empty if the
    /// vertex is not reachable.
    pub fn reconstruct(&self, to: usize) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Builds the shortest path tree.
    ///
    /// Every reachable vertex other than the source gets a directed edge from
    /// its predecessor. The weight of the edge is the difference of their
    /// distances, so summing the weights along a tree path yields the
    /// distance.
    pub fn tree(&self) -> Graph {
        let mut tree = Graph::new(self.dist.len());

        for (vertex, pred) in self.pred.iter().enumerate() {
            if let (Some(pred), Some(dist)) = (*pred, self.dist[vertex]) {
                let pred_dist = self.dist[pred].unwrap_or_default();
                tree.connect(pred, vertex, dist - pred_dist);
            }
        }

        tree
    }
}

/// Panics if the vertex is not reachable from the source.
impl Index<usize> for ShortestPaths {
    type Output = Weight;

    fn index(&self, index: usize) -> &Self::Output {
        self.dist[index].as_ref().unwrap()
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source vertex does not exist.
    #[error("{0}")]
    OutOfRange(#[from] VertexOutOfRange),

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: usize,
    pred: &'a [Option<usize>],
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(self.curr).copied().flatten()?;
        Some(self.curr)
    }
}

/// Builds the shortest path tree rooted at `start`.
///
/// See [`ShortestPaths::tree`] for the shape of the result.
pub fn dijkstra(graph: &Graph, start: usize) -> Result<Graph, Error> {
    ShortestPaths::run(graph, start).map(|shortest_paths| shortest_paths.tree())
}
