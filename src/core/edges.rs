use super::weight::{Weight, DEFAULT_WEIGHT};

/// An entry in the adjacency list of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub vertex: usize,
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(vertex: usize, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}

/// An edge described by both its endpoints.
///
/// Edges are not stored in the graph, only the adjacency entries are. This
/// type is produced when iterating over the edges of a graph and accepted by
/// [`Graph::extend_with_edges`](crate::Graph::extend_with_edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: usize, dst: usize, weight: Weight) -> Self {
        Self { src, dst, weight }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((src, dst): (usize, usize)) -> Self {
        Self::new(src, dst, DEFAULT_WEIGHT)
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((src, dst, weight): (usize, usize, Weight)) -> Self {
        Self::new(src, dst, weight)
    }
}
