use thiserror::Error;

use crate::{
    core::{Weight, DEFAULT_WEIGHT},
    graph::Graph,
};

pub fn create_complete(vertex_count: usize) -> Graph {
    let mut graph = Graph::new(vertex_count);

    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            graph.connect_undirected(u, v, DEFAULT_WEIGHT);
        }
    }

    graph
}

pub fn create_path(vertex_count: usize) -> Graph {
    let mut graph = Graph::new(vertex_count);

    for v in 1..vertex_count {
        graph.connect_undirected(v - 1, v, DEFAULT_WEIGHT);
    }

    graph
}

/// Sum of weights of entries with `src < dst`, that is, of all undirected
/// edges except self-loops.
pub fn total_weight(graph: &Graph) -> Weight {
    graph.undirected_edges().map(|edge| edge.weight).sum()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("entry {1} -> {2} points to a vertex out of range ({0} vertices)")]
    NeighborOutOfRange(usize, usize, usize),
    #[error("edges iterator count ({0}) is not equal to entry count ({1})")]
    EdgesEntryCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to entry count ({1})")]
    DegreeSumMismatch(usize, usize),
}

pub fn check_consistency(graph: &Graph) -> Result<(), ConsistencyCheckError> {
    let vertex_count = graph.vertex_count();
    let entry_count = graph.entry_count();

    if let Some(edge) = graph.edges().find(|edge| edge.dst >= vertex_count) {
        return Err(ConsistencyCheckError::NeighborOutOfRange(
            vertex_count,
            edge.src,
            edge.dst,
        ));
    }

    let edges_count = graph.edges().count();
    if edges_count != entry_count {
        return Err(ConsistencyCheckError::EdgesEntryCountMismatch(
            edges_count,
            entry_count,
        ));
    }

    let deg_sum = (0..vertex_count)
        .map(|vertex| graph.degree(vertex))
        .sum::<usize>();
    if deg_sum != entry_count {
        return Err(ConsistencyCheckError::DegreeSumMismatch(
            deg_sum,
            entry_count,
        ));
    }

    Ok(())
}
