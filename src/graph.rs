//! Adjacency-list graph with a fixed number of vertices.
//!
//! Vertices are indices in `[0, vertex_count)`. Every vertex owns a list of
//! [`Neighbor`] entries. An undirected edge is stored as two entries, one on
//! each side, while a directed edge is stored as a single entry on the source
//! side. Both kinds can be mixed in one graph.
//!
//! New entries are prepended, so iterating over the neighbors of a vertex
//! yields the most recently added ones first. Algorithms in this crate visit
//! neighbors in this order.
//!
//! # Examples
//!
//! ```
//! use adjgraph::Graph;
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 2).unwrap();
//! graph.add_directed_edge(1, 2, 5).unwrap();
//!
//! assert!(graph.contains_edge(1, 0));
//! assert!(!graph.contains_edge(2, 1));
//! assert_eq!(graph.entry_count(), 3);
//! ```

use std::{collections::VecDeque, fmt};

use crate::{
    core::{
        error::{EdgeNotFound, RemoveEdgeError, VertexOutOfRange},
        Edge, Neighbor, Weight,
    },
    infra::export::{AdjacencyList, Export},
};

/// Ordered sequence of adjacency entries of a single vertex.
pub type Adjacency = VecDeque<Neighbor>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    adjacency: Vec<Adjacency>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Adjacency::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of adjacency entries.
    ///
    /// An undirected edge contributes two entries, a directed edge one.
    pub fn entry_count(&self) -> usize {
        self.adjacency.iter().map(VecDeque::len).sum()
    }

    pub fn adjacency(&self) -> &[Adjacency] {
        &self.adjacency
    }

    /// Returns an iterator over the adjacency entries of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = &Neighbor> + '_ {
        self.adjacency[vertex].iter()
    }

    /// Returns the number of adjacency entries of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns `true` if `src` has an entry pointing to `dst`.
    pub fn contains_edge(&self, src: usize, dst: usize) -> bool {
        self.edge_weight(src, dst).is_some()
    }

    /// Returns the weight of the first entry in `src`'s list pointing to
    /// `dst`, if any.
    pub fn edge_weight(&self, src: usize, dst: usize) -> Option<Weight> {
        self.adjacency
            .get(src)?
            .iter()
            .find(|neighbor| neighbor.vertex == dst)
            .map(|neighbor| neighbor.weight)
    }

    /// Returns an iterator over all adjacency entries as edges, in vertex
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(src, list)| {
            list.iter()
                .map(move |neighbor| Edge::new(src, neighbor.vertex, neighbor.weight))
        })
    }

    /// Returns an iterator over entries with `src < dst`.
    ///
    /// For a graph built only from undirected edges, this yields every edge
    /// exactly once. Self-loops are never yielded.
    pub fn undirected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().filter(|edge| edge.src < edge.dst)
    }

    /// Adds an undirected edge as two adjacency entries.
    pub fn add_edge(
        &mut self,
        src: usize,
        dst: usize,
        weight: Weight,
    ) -> Result<(), VertexOutOfRange> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        self.connect_undirected(src, dst, weight);
        Ok(())
    }

    /// Adds a single adjacency entry from `src` to `dst`.
    pub fn add_directed_edge(
        &mut self,
        src: usize,
        dst: usize,
        weight: Weight,
    ) -> Result<(), VertexOutOfRange> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        self.connect(src, dst, weight);
        Ok(())
    }

    /// Adds undirected edges from an iterator.
    ///
    /// Accepts anything convertible to [`Edge`], including `(src, dst)` pairs
    /// which get the [default weight](crate::core::DEFAULT_WEIGHT). Stops at
    /// the first edge with an endpoint out of range; edges before it stay
    /// added.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), VertexOutOfRange>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for edge in edges {
            let Edge { src, dst, weight } = edge.into();
            self.add_edge(src, dst, weight)?;
        }

        Ok(())
    }

    /// Removes the edge between `src` and `dst` and returns its weight.
    ///
    /// The first entry for `dst` in `src`'s list is removed, and then the
    /// first entry for `src` in `dst`'s list, if there is one. Only `src`'s
    /// list decides whether the edge exists, so removing a directed edge
    /// succeeds even though there is no reverse entry to remove.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Result<Weight, RemoveEdgeError> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let weight = self
            .disconnect(src, dst)
            .ok_or(EdgeNotFound { src, dst })?;

        self.disconnect(dst, src);
        Ok(weight)
    }

    /// Prepends an entry without checking the endpoints.
    ///
    /// Algorithms use this to build result graphs from vertices taken from a
    /// graph of the same size.
    pub(crate) fn connect(&mut self, src: usize, dst: usize, weight: Weight) {
        self.adjacency[src].push_front(Neighbor::new(dst, weight));
    }

    pub(crate) fn connect_undirected(&mut self, src: usize, dst: usize, weight: Weight) {
        self.connect(src, dst, weight);
        self.connect(dst, src, weight);
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), VertexOutOfRange> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(VertexOutOfRange::new(vertex, self.vertex_count()))
        }
    }

    fn disconnect(&mut self, src: usize, dst: usize) -> Option<Weight> {
        let list = &mut self.adjacency[src];
        let index = list.iter().position(|neighbor| neighbor.vertex == dst)?;
        list.remove(index).map(|neighbor| neighbor.weight)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&AdjacencyList.to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::{proptest::graph_undirected, testing::check_consistency};

    use super::*;

    fn neighbors(graph: &Graph, vertex: usize) -> Vec<(usize, Weight)> {
        graph
            .neighbors(vertex)
            .map(|neighbor| (neighbor.vertex, neighbor.weight))
            .collect()
    }

    fn create_basic_graph() -> Graph {
        let mut graph = Graph::new(5);

        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(1, 2, 3).unwrap();
        graph.add_directed_edge(3, 4, 2).unwrap();

        graph
    }

    #[test]
    fn new_graph_is_empty() {
        let graph = Graph::new(4);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.entry_count(), 0);
        assert!(graph.adjacency().iter().all(VecDeque::is_empty));
    }

    #[test]
    fn add_edge_both_sides() {
        let graph = create_basic_graph();

        assert_eq!(neighbors(&graph, 0), vec![(1, 2)]);
        assert_eq!(neighbors(&graph, 1), vec![(2, 3), (0, 2)]);
        assert_eq!(neighbors(&graph, 2), vec![(1, 3)]);
    }

    #[test]
    fn add_directed_edge_one_side() {
        let graph = create_basic_graph();

        assert_eq!(neighbors(&graph, 3), vec![(4, 2)]);
        assert!(neighbors(&graph, 4).is_empty());
    }

    #[test]
    fn neighbors_most_recent_first() {
        let mut graph = Graph::new(4);
        graph.extend_with_edges([(0, 1), (0, 2), (0, 3)]).unwrap();

        assert_eq!(neighbors(&graph, 0), vec![(3, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn add_edge_out_of_range() {
        let mut graph = create_basic_graph();
        let before = graph.clone();

        assert_matches!(
            graph.add_edge(1, 9, 2),
            Err(VertexOutOfRange {
                vertex: 9,
                vertex_count: 5
            })
        );
        assert_matches!(graph.add_edge(5, 1, 2), Err(VertexOutOfRange { vertex: 5, .. }));
        assert_eq!(graph, before);
    }

    #[test]
    fn add_directed_edge_out_of_range() {
        let mut graph = create_basic_graph();

        assert_matches!(
            graph.add_directed_edge(1, 9, 2),
            Err(VertexOutOfRange { vertex: 9, .. })
        );
    }

    #[test]
    fn remove_edge_both_sides() {
        let mut graph = create_basic_graph();

        assert_eq!(graph.remove_edge(1, 2), Ok(3));
        assert!(!graph.contains_edge(1, 2));
        assert!(!graph.contains_edge(2, 1));
        assert_eq!(neighbors(&graph, 1), vec![(0, 2)]);
    }

    #[test]
    fn remove_edge_then_again() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 5).unwrap();
        graph.remove_edge(0, 1).unwrap();

        assert!(graph.adjacency()[0].is_empty());
        assert!(graph.adjacency()[1].is_empty());
        assert_matches!(
            graph.remove_edge(0, 1),
            Err(RemoveEdgeError::NotFound(EdgeNotFound { src: 0, dst: 1 }))
        );
    }

    #[test]
    fn remove_edge_not_found() {
        let mut graph = create_basic_graph();

        assert_matches!(graph.remove_edge(1, 4), Err(RemoveEdgeError::NotFound(_)));
    }

    #[test]
    fn remove_edge_out_of_range() {
        let mut graph = create_basic_graph();

        assert_matches!(
            graph.remove_edge(1, 9),
            Err(RemoveEdgeError::OutOfRange(VertexOutOfRange { vertex: 9, .. }))
        );
    }

    #[test]
    fn remove_directed_edge() {
        let mut graph = create_basic_graph();

        assert_eq!(graph.remove_edge(3, 4), Ok(2));
        assert!(!graph.contains_edge(3, 4));
    }

    #[test]
    fn remove_directed_edge_from_target_side() {
        let mut graph = create_basic_graph();

        // Existence is decided by the list of the first vertex only.
        assert_matches!(graph.remove_edge(4, 3), Err(RemoveEdgeError::NotFound(_)));
        assert!(graph.contains_edge(3, 4));
    }

    #[test]
    fn remove_edge_removes_reverse_directed_entry() {
        let mut graph = Graph::new(2);
        graph.add_directed_edge(0, 1, 4).unwrap();
        graph.add_directed_edge(1, 0, 7).unwrap();

        // Two independent directed edges are removed together, because the
        // reverse entry looks the same as the other half of an undirected edge.
        assert_eq!(graph.remove_edge(0, 1), Ok(4));
        assert_eq!(graph.entry_count(), 0);
    }

    #[test]
    fn remove_parallel_edge_once() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(0, 1, 2).unwrap();

        assert_eq!(graph.remove_edge(0, 1), Ok(2));
        assert_eq!(neighbors(&graph, 0), vec![(1, 1)]);
        assert_eq!(neighbors(&graph, 1), vec![(0, 1)]);
    }

    #[test]
    fn self_loop_entries() {
        let mut graph = Graph::new(1);
        graph.add_edge(0, 0, 3).unwrap();

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.undirected_edges().count(), 0);

        graph.remove_edge(0, 0).unwrap();
        assert_eq!(graph.degree(0), 0);
    }

    #[test]
    fn edges_iteration() {
        let graph = create_basic_graph();

        assert_eq!(graph.edges().count(), graph.entry_count());
        assert_eq!(
            graph.undirected_edges().collect::<Vec<_>>(),
            vec![Edge::new(0, 1, 2), Edge::new(1, 2, 3), Edge::new(3, 4, 2)]
        );
    }

    #[test]
    fn edge_weight_query() {
        let graph = create_basic_graph();

        assert_eq!(graph.edge_weight(2, 1), Some(3));
        assert_eq!(graph.edge_weight(4, 3), None);
        assert_eq!(graph.edge_weight(42, 0), None);
    }

    #[test]
    fn display_adjacency_list() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(1, 2, 3).unwrap();

        let output = graph.to_string();

        assert!(output.contains("0 ---> "));
        assert!(output.contains("1 ---> "));
        assert!(output.contains("(1, weight = 2)"));
        assert!(output.contains("(2, weight = 3)"));
    }

    proptest! {
        #[test]
        fn add_remove_inverse(graph in graph_undirected(8, 20), u in 0..8usize, v in 0..8usize, w in -5..50i64) {
            let n = graph.vertex_count();
            prop_assume!(n >= 2);

            let u = u % n;
            let v = (u + 1 + v % (n - 1)) % n;

            let mut modified = graph.clone();
            modified.add_edge(u, v, w).unwrap();
            prop_assert_eq!(modified.edge_weight(u, v), Some(w));
            prop_assert_eq!(modified.edge_weight(v, u), Some(w));

            modified.remove_edge(u, v).unwrap();
            prop_assert_eq!(modified, graph);
        }

        #[test]
        fn random_graph_consistent(graph in graph_undirected(16, 40)) {
            check_consistency(&graph).map_err(|error| TestCaseError::fail(error.to_string()))?;
        }
    }
}
