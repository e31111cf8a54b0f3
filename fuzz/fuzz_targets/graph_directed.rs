#![no_main]

use libfuzzer_sys::fuzz_target;

use graphene::{
    core::marker::Directed,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<i8>| {
    let mut graph = Graph::<_, Directed>::new();

    for op in ops.clone() {
        op.apply(&mut graph);

        if let Err(error) = check_consistency(&graph) {
            // Print a reproducible sequence for the inline tests.
            ops.replay(&mut Graph::<_, Directed>::new());
            panic!("{error}");
        }
    }
});
