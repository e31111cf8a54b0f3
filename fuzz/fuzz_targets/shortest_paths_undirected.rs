#![no_main]

use libfuzzer_sys::fuzz_target;

use graphene::{core::marker::Undirected, Graph};

fuzz_target!(|input: (Graph<u8, Undirected>, u8)| {
    let (graph, source) = input;
    let weight = |x: &u8, y: &u8| x.abs_diff(*y) as u32;

    for path in graph.shortest_paths(&source, weight) {
        assert_eq!(path.first(), Some(&source));
        assert!(path.windows(2).all(|w| graph.adjacent(&w[0], &w[1])));

        let goal = path[path.len() - 1];
        assert_eq!(graph.shortest_path(&source, &goal, weight), path);
    }
});
