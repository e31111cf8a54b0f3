//! Find [single source shortest paths] and single pair shortest paths in a
//! graph using [Dijkstra's algorithm].
//!
//! A graph does not store any edge weights. They are computed on demand by a
//! weight function given for each search, which is called for every traversed
//! edge `(from, to)`. The function does not need to be symmetric, even for
//! undirected graphs.
//!
//! The algorithm requires non-negative weights. Using an [unsigned
//! type](crate::core::weight::Weight::is_unsigned) like `u32` or
//! [`uf64`](crate::core::weight::uf64) guarantees that at compile time;
//! otherwise every weight is checked and a negative one makes the search fail
//! with [`Error::NegativeWeight`].
//!
//! Ties between paths of equal weight are broken deterministically: nodes are
//! expanded in ascending order when their distances are equal, neighbors are
//! visited in ascending order and a path found first is never replaced by
//! another path of equal weight.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use graphene::{algo::ShortestPaths, core::marker::Undirected, Graph};
//!
//! let roads = BTreeMap::from([
//!     (("Prague", "Bratislava"), 328u32),
//!     (("Prague", "Nuremberg"), 297),
//!     (("Prague", "Vienna"), 293),
//!     (("Bratislava", "Vienna"), 79),
//!     (("Nuremberg", "Munich"), 170),
//!     (("Vienna", "Munich"), 402),
//!     (("Vienna", "Florence"), 863),
//!     (("Munich", "Florence"), 646),
//!     (("Florence", "Rome"), 278),
//! ]);
//!
//! let graph: Graph<_, Undirected> = roads.keys().copied().collect();
//!
//! let km = |x: &&str, y: &&str| {
//!     roads
//!         .get(&(*x, *y))
//!         .or_else(|| roads.get(&(*y, *x)))
//!         .copied()
//!         .unwrap_or_default()
//! };
//!
//! let shortest_paths = ShortestPaths::on(&graph)
//!     .goal("Rome")
//!     .edge_weight_fn(km)
//!     .run("Prague")
//!     .unwrap();
//!
//! let distance = shortest_paths[&"Rome"];
//! let path = shortest_paths.path(&"Rome").unwrap().join(" - ");
//!
//! assert_eq!(distance, 1391);
//! assert_eq!(path, "Prague - Nuremberg - Munich - Florence - Rome");
//! ```

use std::{borrow::Borrow, collections::BTreeMap, ops::Index};

use thiserror::Error;

use crate::{
    core::{marker::EdgeType, weight::Weight},
    graph::Graph,
};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Sequence of nodes from the source to the destination, both inclusive.
pub type Path<T> = Vec<T>;

/// Shortest paths and their distances from a single source node.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<T, W> {
    source: T,
    dist: BTreeMap<T, W>,
    pred: BTreeMap<T, T>,
}

impl<T, W> ShortestPaths<T, W>
where
    T: Ord + Clone,
{
    /// Source node where the search was started.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the path distance between the source node and the given node,
    /// or `None` if it's not known.
    ///
    /// There are two causes why the distance between two nodes is not known:
    /// (1) the nodes are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before visiting the given
    /// node.
    pub fn dist<Q>(&self, to: &Q) -> Option<&W>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.dist.get(to)
    }

    /// Number of nodes with a known distance, including the source.
    pub fn reached_count(&self) -> usize {
        self.dist.len()
    }

    /// Returns an iterator over nodes on the path between the given node and
    /// the source node, in this order, excluding the given node itself.
    ///
    /// The iterator is empty if the path is not known or if `to` is the
    /// source.
    pub fn reconstruct(&self, to: T) -> PathReconstruction<'_, T> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the path from the source to the given node, both inclusive, or
    /// `None` if it's not known.
    pub fn path<Q>(&self, to: &Q) -> Option<Path<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (to, _) = self.dist.get_key_value(to)?;

        let mut path = vec![to.clone()];
        path.extend(self.reconstruct(to.clone()));
        path.reverse();

        Some(path)
    }

    /// Returns the paths to all nodes with a known distance, ordered by their
    /// destination. The source itself is included as a single-node path.
    pub fn paths(&self) -> Vec<Path<T>> {
        self.dist.keys().filter_map(|to| self.path(to)).collect()
    }
}

impl<T, W> Index<&T> for ShortestPaths<T, W>
where
    T: Ord + Clone,
{
    type Output = W;

    fn index(&self, index: &T) -> &Self::Output {
        self.dist(index).expect("distance to the node is not known")
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source node is not in the graph.
    #[error("source node does not exist")]
    SourceAbsent,

    /// The specified goal is not in the graph.
    #[error("goal node does not exist")]
    GoalAbsent,

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,

    /// Path weight exceeded the range of the weight type.
    #[error("path weight overflowed")]
    WeightOverflow,
}

/// Iterator over the nodes on the path from a node to the source node.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, T> {
    curr: T,
    pred: &'a BTreeMap<T, T>,
}

impl<'a, T: Ord + Clone> Iterator for PathReconstruction<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}

impl<T, Ty> Graph<T, Ty>
where
    T: Ord + Clone,
    Ty: EdgeType,
{
    /// Returns the shortest path from `from` to `to`, both inclusive.
    ///
    /// The path is empty if either node is absent, if `to` is not reachable
    /// from `from`, or if the search encountered a negative weight or a path
    /// weight overflow.
    pub fn shortest_path<W, F>(&self, from: &T, to: &T, edge_weight: F) -> Path<T>
    where
        W: Weight,
        F: Fn(&T, &T) -> W,
    {
        ShortestPaths::on(self)
            .goal(to.clone())
            .edge_weight_fn(edge_weight)
            .run(from.clone())
            .ok()
            .and_then(|paths| paths.path(to))
            .unwrap_or_default()
    }

    /// Returns the shortest paths from `from` to every reachable node, ordered
    /// by their destination. The source itself is included as a single-node
    /// path.
    ///
    /// The collection is empty if `from` is absent or if the search
    /// encountered a negative weight or a path weight overflow.
    pub fn shortest_paths<W, F>(&self, from: &T, edge_weight: F) -> Vec<Path<T>>
    where
        W: Weight,
        F: Fn(&T, &T) -> W,
    {
        ShortestPaths::on(self)
            .edge_weight_fn(edge_weight)
            .run(from.clone())
            .map(|paths| paths.paths())
            .unwrap_or_default()
    }
}
