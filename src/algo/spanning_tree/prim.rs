use fixedbitset::FixedBitSet;

use crate::{
    common::{PriorityQueue, VisitSet},
    core::Weight,
    graph::Graph,
};

const ROOT: usize = 0;

/// Builds a minimum spanning tree of the component containing vertex `0`
/// using [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm).
///
/// Vertices not reachable from vertex `0` are isolated in the result. A graph
/// without vertices yields an empty graph.
pub fn prim(graph: &Graph) -> Graph {
    let vertex_count = graph.vertex_count();
    let mut tree = Graph::new(vertex_count);

    if vertex_count == 0 {
        return tree;
    }

    let mut visited = FixedBitSet::with_capacity(vertex_count);
    let mut key: Vec<Option<Weight>> = vec![None; vertex_count];
    let mut parent = vec![None; vertex_count];

    // Each adjacency entry causes at most one insertion, plus the root.
    let mut queue = PriorityQueue::with_capacity(graph.entry_count() + 1);

    key[ROOT] = Some(0);
    queue.insert(ROOT, 0);

    while let Some(vertex) = queue.extract_min() {
        if !visited.visit(vertex) {
            continue;
        }

        for neighbor in graph.neighbors(vertex) {
            let next = neighbor.vertex;

            if visited.is_visited(next) {
                continue;
            }

            if key[next].map_or(true, |curr_key| neighbor.weight < curr_key) {
                key[next] = Some(neighbor.weight);
                parent[next] = Some(vertex);
                queue.insert(next, neighbor.weight);
            }
        }
    }

    for (vertex, (parent, key)) in parent.iter().zip(key.iter()).enumerate() {
        if let (Some(parent), Some(weight)) = (*parent, *key) {
            tree.connect_undirected(parent, vertex, weight);
        }
    }

    tracing::debug!(
        reached = visited.visited_count(),
        edges = visited.visited_count() - 1,
        "prim finished"
    );

    tree
}
