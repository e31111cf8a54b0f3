mod common;

use common::{graphene_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;
use graphene::core::marker::{Directed, Undirected};
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000, 4000], args = [0.01, 0.1])]
fn graphene_dijkstra_random_directed<const N: usize>(bencher: divan::Bencher, density: f32) {
    let network = graphene_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let length = |u: &u32, v: &u32| network.lengths[&(*u, *v)];
    // Generated edges always point to a smaller node.
    let start = N as u32 - 1;

    bencher.bench(|| network.graph.shortest_paths(&start, length));
}

#[divan::bench(consts = [100, 1000, 4000], args = [0.01, 0.1])]
fn graphene_dijkstra_random_undirected<const N: usize>(bencher: divan::Bencher, density: f32) {
    let network = graphene_random::<Undirected>(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let length = |u: &u32, v: &u32| network.lengths[&(*u, *v)];
    let goal = N as u32 - 1;

    bencher.bench(|| network.graph.shortest_path(&0, &goal, length));
}

#[divan::bench(consts = [100, 1000, 4000], args = [0.01, 0.1])]
fn petgraph_dijkstra_random_directed<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph =
        petgraph_random::<petgraph::Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(N - 1);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}
