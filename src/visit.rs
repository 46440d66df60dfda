//! Traversal trees.
//!
//! Both traversals return a new graph with the discovery edges, directed from
//! parent to child. The input graph is never modified.

mod bfs;
mod dfs;

pub use bfs::bfs;
pub use dfs::dfs;

#[cfg(test)]
mod tests {
    use fixedbitset::FixedBitSet;
    use proptest::prelude::*;

    use crate::{
        common::VisitSet,
        core::error::VertexOutOfRange,
        graph::Graph,
        infra::proptest::{graph_directed, graph_undirected},
    };

    use super::*;

    fn reachable(graph: &Graph, start: usize) -> FixedBitSet {
        let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
        let mut stack = vec![start];

        while let Some(vertex) = stack.pop() {
            if visited.visit(vertex) {
                stack.extend(graph.neighbors(vertex).map(|neighbor| neighbor.vertex));
            }
        }

        visited
    }

    fn assert_valid_tree(
        graph: &Graph,
        tree: &Graph,
        start: usize,
    ) -> Result<(), TestCaseError> {
        let reachable = reachable(graph, start);
        let mut in_degree = vec![0; graph.vertex_count()];

        for edge in tree.edges() {
            prop_assert!(reachable.is_visited(edge.src));
            prop_assert!(
                graph.contains_edge(edge.src, edge.dst),
                "tree edge {:?} is not in the graph",
                edge
            );
            in_degree[edge.dst] += 1;
        }

        for vertex in 0..graph.vertex_count() {
            let expected = usize::from(reachable.is_visited(vertex) && vertex != start);
            prop_assert_eq!(in_degree[vertex], expected, "vertex {}", vertex);
        }

        prop_assert_eq!(tree.entry_count(), reachable.visited_count() - 1);
        Ok(())
    }

    fn check_traversal<F>(graph: &Graph, start: usize, traversal: F) -> Result<(), TestCaseError>
    where
        F: Fn(&Graph, usize) -> Result<Graph, VertexOutOfRange>,
    {
        let start = start % graph.vertex_count();
        let tree = traversal(graph, start)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;
        assert_valid_tree(graph, &tree, start)
    }

    proptest! {
        #[test]
        fn bfs_tree_spans_reachable_undirected(graph in graph_undirected(16, 32), start: usize) {
            check_traversal(&graph, start, bfs)?;
        }

        #[test]
        fn bfs_tree_spans_reachable_directed(graph in graph_directed(16, 32), start: usize) {
            check_traversal(&graph, start, bfs)?;
        }

        #[test]
        fn dfs_tree_spans_reachable_undirected(graph in graph_undirected(16, 32), start: usize) {
            check_traversal(&graph, start, dfs)?;
        }

        #[test]
        fn dfs_tree_spans_reachable_directed(graph in graph_directed(16, 32), start: usize) {
            check_traversal(&graph, start, dfs)?;
        }
    }
}
