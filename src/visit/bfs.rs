use fixedbitset::FixedBitSet;

use crate::{
    common::{Queue, VisitSet},
    core::error::VertexOutOfRange,
    graph::Graph,
};

/// Builds the breadth-first search tree rooted at `start`.
///
/// The returned graph has the same vertices as `graph` and a directed edge
/// from every discovered vertex's parent to it, with the weight of the edge it
/// was discovered through. Vertices unreachable from `start` stay isolated.
///
/// # Examples
///
/// ```
/// use adjgraph::{bfs, Graph};
///
/// let mut graph = Graph::new(4);
/// graph.extend_with_edges([(0, 1), (0, 2), (1, 3)]).unwrap();
///
/// let tree = bfs(&graph, 0).unwrap();
/// assert!(tree.contains_edge(0, 1));
/// assert!(tree.contains_edge(1, 3));
/// assert!(!tree.contains_edge(1, 0));
/// ```
pub fn bfs(graph: &Graph, start: usize) -> Result<Graph, VertexOutOfRange> {
    graph.check_vertex(start)?;

    let vertex_count = graph.vertex_count();
    let mut tree = Graph::new(vertex_count);
    let mut visited = FixedBitSet::with_capacity(vertex_count);
    let mut queue = Queue::with_capacity(vertex_count);

    visited.visit(start);
    queue
        .enqueue(start)
        .expect("queue capacity is at least one when start exists");

    while let Ok(current) = queue.dequeue() {
        for neighbor in graph.neighbors(current) {
            if visited.visit(neighbor.vertex) {
                tree.connect(current, neighbor.vertex, neighbor.weight);
                queue
                    .enqueue(neighbor.vertex)
                    .expect("every vertex is enqueued at most once");
            }
        }
    }

    tracing::debug!(start, reached = visited.visited_count(), "bfs finished");
    Ok(tree)
}
