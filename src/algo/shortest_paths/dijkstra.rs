use fixedbitset::FixedBitSet;

use crate::{
    common::{PriorityQueue, VisitSet},
    core::Weight,
    graph::Graph,
};

use super::{Error, ShortestPaths};

pub fn dijkstra(graph: &Graph, source: usize) -> Result<ShortestPaths, Error> {
    graph.check_vertex(source)?;

    let vertex_count = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(vertex_count);
    let mut dist: Vec<Option<Weight>> = vec![None; vertex_count];
    let mut pred = vec![None; vertex_count];

    // Each adjacency entry causes at most one insertion, plus the source.
    let mut queue = PriorityQueue::with_capacity(graph.entry_count() + 1);

    dist[source] = Some(0);
    queue.insert(source, 0);

    while let Some(vertex) = queue.extract_min() {
        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if !visited.visit(vertex) {
            continue;
        }

        let Some(vertex_dist) = dist[vertex] else {
            continue;
        };

        for neighbor in graph.neighbors(vertex) {
            let next = neighbor.vertex;

            if visited.is_visited(next) {
                continue;
            }

            if neighbor.weight < 0 {
                return Err(Error::NegativeWeight);
            }

            let next_dist = vertex_dist.saturating_add(neighbor.weight);

            // Relaxation operation. A textbook version of the algorithm would
            // decrease the priority of `next`. Adding it as a new item leaves
            // stale duplicates in the queue which are skipped above.
            if dist[next].map_or(true, |curr_dist| next_dist < curr_dist) {
                dist[next] = Some(next_dist);
                pred[next] = Some(vertex);
                queue.insert(next, next_dist);

                tracing::trace!(from = vertex, to = next, dist = next_dist, "relaxed");
            }
        }
    }

    tracing::debug!(
        source,
        reached = visited.visited_count(),
        "shortest paths finished"
    );

    Ok(ShortestPaths { source, dist, pred })
}
