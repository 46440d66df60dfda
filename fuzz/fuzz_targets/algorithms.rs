#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    algo::ShortestPaths,
    bfs, dfs,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    kruskal, prim,
};

fuzz_target!(|ops: MutOpsSeq| {
    let graph = ops.replay(|_, _| {});
    let n = graph.vertex_count();

    for tree in [kruskal(&graph), prim(&graph)] {
        check_consistency(&tree).unwrap();
        assert_eq!(tree.vertex_count(), n);
        // A forest on n vertices has fewer than n edges.
        assert!(tree.entry_count() / 2 < n.max(1));
    }

    if n == 0 {
        return;
    }

    for tree in [bfs(&graph, 0).unwrap(), dfs(&graph, 0).unwrap()] {
        check_consistency(&tree).unwrap();
        assert!(tree.entry_count() < n);
    }

    // Weights may be negative, in which case the run is allowed to fail.
    if let Ok(shortest_paths) = ShortestPaths::run(&graph, 0) {
        assert_eq!(shortest_paths.dist(0), Some(0));
    }
});
