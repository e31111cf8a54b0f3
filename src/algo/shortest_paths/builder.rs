use std::marker::PhantomData;

use crate::{
    core::{
        marker::EdgeType,
        weight::{self, GetWeight, Weight},
    },
    graph::Graph,
};

use super::{dijkstra::dijkstra, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, T, Ty, W, F>
where
    Ty: EdgeType,
{
    graph: &'a Graph<T, Ty>,
    goal: Option<T>,
    edge_weight: F,
    ty: PhantomData<fn() -> W>,
}

impl<T, W> ShortestPaths<T, W> {
    /// Starts configuring a search on the graph. Unless
    /// [`edge_weight`](ShortestPathsBuilder::edge_weight) is given, every edge
    /// weighs one.
    pub fn on<Ty: EdgeType>(
        graph: &Graph<T, Ty>,
    ) -> ShortestPathsBuilder<'_, T, Ty, W, weight::Unit> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            edge_weight: weight::Unit,
            ty: PhantomData,
        }
    }
}

impl<'a, T, Ty, W, F> ShortestPathsBuilder<'a, T, Ty, W, F>
where
    Ty: EdgeType,
{
    /// Stops the search as soon as the path to the goal is known.
    pub fn goal(self, goal: T) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn edge_weight<F2>(self, edge_weight: F2) -> ShortestPathsBuilder<'a, T, Ty, W, F2>
    where
        F2: GetWeight<T, W>,
        W: Weight,
    {
        ShortestPathsBuilder {
            edge_weight,
            graph: self.graph,
            goal: self.goal,
            ty: PhantomData,
        }
    }

    // Using closures in `edge_weight` gives "type annotations needed" for the
    // closure arguments. This method that uses explicit Fn signature
    // circumvents the problem.
    pub fn edge_weight_fn<F2>(self, edge_weight: F2) -> ShortestPathsBuilder<'a, T, Ty, W, F2>
    where
        F2: Fn(&T, &T) -> W,
        W: Weight,
    {
        self.edge_weight(edge_weight)
    }

    pub fn run(self, source: T) -> Result<ShortestPaths<T, W>, Error>
    where
        T: Ord + Clone,
        F: GetWeight<T, W>,
        W: Weight,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            ..
        } = self;

        dijkstra(graph, source, goal, edge_weight)
    }
}
