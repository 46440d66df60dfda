use fixedbitset::FixedBitSet;

use crate::{
    common::{Stack, VisitSet},
    core::error::VertexOutOfRange,
    graph::Graph,
};

/// Builds the depth-first search tree rooted at `start`.
///
/// Vertices are marked as visited when they are pushed to the stack, so
/// every vertex is pushed at most once and gets its parent assigned at that
/// moment. The shape of the resulting tree is the same as in [`bfs`]: a
/// directed edge from parent to child with the weight of the traversed edge.
///
/// [`bfs`]: super::bfs
pub fn dfs(graph: &Graph, start: usize) -> Result<Graph, VertexOutOfRange> {
    graph.check_vertex(start)?;

    let vertex_count = graph.vertex_count();
    let mut tree = Graph::new(vertex_count);
    let mut visited = FixedBitSet::with_capacity(vertex_count);
    let mut stack = Stack::with_capacity(vertex_count);

    visited.visit(start);
    stack
        .push(start)
        .expect("stack capacity is at least one when start exists");

    while let Ok(current) = stack.pop() {
        for neighbor in graph.neighbors(current) {
            if visited.visit(neighbor.vertex) {
                tree.connect(current, neighbor.vertex, neighbor.weight);
                stack
                    .push(neighbor.vertex)
                    .expect("every vertex is pushed at most once");
            }
        }
    }

    tracing::debug!(start, reached = visited.visited_count(), "dfs finished");
    Ok(tree)
}
