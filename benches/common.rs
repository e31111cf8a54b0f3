#![allow(dead_code)]

use std::collections::HashMap;

use fastrand::Rng;
use graphene::{core::marker::EdgeType, Graph};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(node_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: node_bound,
            p,
        }
    }

    // Geometric skipping over the lower triangle of the adjacency matrix, so
    // that every pair is generated with probability `p`.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

/// Road-network-like input: the topology and a separate table of edge
/// lengths used by the weight function.
pub struct RandomNetwork<Ty: EdgeType> {
    pub graph: Graph<u32, Ty>,
    pub lengths: HashMap<(u32, u32), f32>,
}

pub fn graphene_random<Ty: EdgeType>(
    node_count: usize,
    density: f32,
    rng: &mut Rng,
) -> RandomNetwork<Ty> {
    let mut graph = Graph::new();
    let mut lengths = HashMap::new();

    graph.extend_with_nodes(0..node_count as u32);

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let (u, v) = (u as u32, v as u32);
        let length = rng.f32();

        graph.add_edge(u, v);
        lengths.insert((u, v), length);

        if !Ty::is_directed() {
            lengths.insert((v, u), length);
        }
    }

    RandomNetwork { graph, lengths }
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    node_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, f32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(node_count, 0);

    for i in 0..node_count {
        graph.add_node(i as u32);
    }

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    graph
}
