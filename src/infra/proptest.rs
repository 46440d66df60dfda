//! [Proptest](https://docs.rs/proptest) strategies generating random graphs.
//!
//! Weights are non-negative so that the generated graphs are valid inputs for
//! every algorithm, including Dijkstra's.

use proptest::{collection::vec, prelude::*};

use crate::{core::Weight, graph::Graph};

const MAX_WEIGHT: Weight = 100;

type RawEdges = Vec<(usize, usize, Weight)>;

fn raw_graph(
    max_vertex_count: usize,
    max_edge_count: usize,
) -> impl Strategy<Value = (usize, RawEdges)> {
    assert!(max_vertex_count > 0, "graph strategy needs at least one vertex");

    (1..=max_vertex_count).prop_flat_map(move |vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count, 0..=MAX_WEIGHT);
        (Just(vertex_count), vec(edge, 0..=max_edge_count))
    })
}

/// Generates graphs with `1..=max_vertex_count` vertices and up to
/// `max_edge_count` undirected edges. Self-loops and parallel edges may
/// appear.
pub fn graph_undirected(
    max_vertex_count: usize,
    max_edge_count: usize,
) -> impl Strategy<Value = Graph> {
    raw_graph(max_vertex_count, max_edge_count).prop_map(|(vertex_count, edges)| {
        let mut graph = Graph::new(vertex_count);

        for (src, dst, weight) in edges {
            graph.connect_undirected(src, dst, weight);
        }

        graph
    })
}

/// Same as [`graph_undirected`], but every edge is a single directed entry.
pub fn graph_directed(
    max_vertex_count: usize,
    max_edge_count: usize,
) -> impl Strategy<Value = Graph> {
    raw_graph(max_vertex_count, max_edge_count).prop_map(|(vertex_count, edges)| {
        let mut graph = Graph::new(vertex_count);

        for (src, dst, weight) in edges {
            graph.connect(src, dst, weight);
        }

        graph
    })
}
