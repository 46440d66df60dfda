#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::infra::{arbitrary::MutOpsSeq, testing::check_consistency};

fuzz_target!(|ops: MutOpsSeq| {
    ops.replay(|graph, _| {
        check_consistency(graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    });
});
