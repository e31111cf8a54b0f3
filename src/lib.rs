//! Graph container keyed by arbitrary ordered node values, with
//! [Dijkstra](algo::shortest_paths) shortest paths computed over an edge
//! weight function supplied by the caller.
//!
//! ```
//! use graphene::Graph;
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 5);
//! graph.add_edge(1, 10);
//! graph.add_edge(10, 5);
//!
//! let path = graph.shortest_path(&1, &5, |x: &i32, y: &i32| (x - y).abs());
//! assert_eq!(path, vec![1, 2, 5]);
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;

pub use algo::ShortestPaths;
pub use graph::Graph;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        algo::ShortestPaths,
        core::{
            marker::{Directed, EdgeType, Undirected},
            weight::{GetWeight, Weight},
        },
        graph::Graph,
    };
}
