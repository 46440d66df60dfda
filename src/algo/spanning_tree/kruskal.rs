use crate::{common::UnionFind, graph::Graph};

/// Builds a minimum spanning forest using [Kruskal's
/// algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm).
///
/// Every connected component gets its own minimum spanning tree, isolated
/// vertices stay isolated. Edges are collected as adjacency entries with
/// `src < dst`, which takes each undirected edge once. Directed entries
/// without a reverse counterpart are only considered when their source has
/// the lower index.
pub fn kruskal(graph: &Graph) -> Graph {
    let vertex_count = graph.vertex_count();
    let mut forest = Graph::new(vertex_count);

    let mut edges = graph.undirected_edges().collect::<Vec<_>>();
    edges.sort_by_key(|edge| edge.weight);

    let mut sets = UnionFind::new(vertex_count);

    for edge in edges {
        // Endpoints come from a graph with the same vertex count, so the only
        // possible outcome besides a merge is that they are already connected.
        if let Ok(true) = sets.unite(edge.src, edge.dst) {
            forest.connect_undirected(edge.src, edge.dst, edge.weight);
        }
    }

    tracing::debug!(edges = forest.entry_count() / 2, "kruskal finished");

    forest
}
