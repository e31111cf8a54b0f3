//! Graph store keyed by node values.
//!
//! Nodes are identified by the values themselves, there are no separate
//! ids. Adjacency is kept in ordered sets, so parallel edges collapse and the
//! iteration order over nodes and neighbors is ascending.

use std::{
    borrow::Borrow,
    collections::{btree_map, BTreeMap, BTreeSet},
    fmt,
    marker::PhantomData,
};

use crate::core::marker::{Directed, EdgeType, Undirected};

pub struct Graph<T, Ty: EdgeType = Directed> {
    adjacency: BTreeMap<T, BTreeSet<T>>,
    ty: PhantomData<Ty>,
}

impl<T, Ty: EdgeType> Graph<T, Ty> {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            ty: PhantomData,
        }
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored edges, i.e., the sum of all adjacency set sizes.
    ///
    /// In undirected graphs, every edge is stored in both of its endpoints
    /// and so it is counted twice. The exception is a self-loop, which is
    /// stored and counted once.
    pub fn size(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Iterator over nodes in ascending order.
    pub fn nodes(&self) -> btree_map::Keys<'_, T, BTreeSet<T>> {
        self.adjacency.keys()
    }
}

impl<T> Graph<T, Undirected> {
    pub fn new_undirected() -> Self {
        Self::new()
    }
}

impl<T> Graph<T, Directed> {
    pub fn new_directed() -> Self {
        Self::new()
    }
}

impl<T: Ord, Ty: EdgeType> Graph<T, Ty> {
    /// Adds the node if it is not present yet.
    pub fn add_node(&mut self, node: T) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds an edge from `tail` to `head`, inserting any endpoint which is
    /// not present yet. Adding an existing edge does nothing.
    pub fn add_edge(&mut self, tail: T, head: T)
    where
        T: Clone,
    {
        if Ty::is_directed() {
            self.adjacency.entry(head.clone()).or_default();
        } else {
            self.adjacency
                .entry(head.clone())
                .or_default()
                .insert(tail.clone());
        }

        self.adjacency.entry(tail).or_default().insert(head);
    }

    pub fn extend_with_nodes<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for node in iter {
            self.add_node(node);
        }
    }

    pub fn contains_node<Q>(&self, node: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.contains_key(node)
    }

    /// Number of neighbors of the node. Absent nodes have zero neighbors.
    pub fn node_degree<Q>(&self, node: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.get(node).map_or(0, BTreeSet::len)
    }

    /// Returns `true` if `y` is in the adjacency set of `x`.
    ///
    /// Only the set of `x` is inspected. For undirected graphs the answer is
    /// symmetric because the edges are stored in both endpoints.
    pub fn adjacent<Q>(&self, x: &Q, y: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency
            .get(x)
            .is_some_and(|neighbors| neighbors.contains(y))
    }

    /// Iterator over the neighbors of the node in ascending order. It is empty
    /// for absent nodes.
    pub fn neighbors<Q>(&self, node: &Q) -> impl Iterator<Item = &T> + '_
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.get(node).into_iter().flatten()
    }
}

impl<T, Ty: EdgeType> Default for Graph<T, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

// Implemented manually to not require the bounds on the edge type marker.
impl<T: Clone, Ty: EdgeType> Clone for Graph<T, Ty> {
    fn clone(&self) -> Self {
        Self {
            adjacency: self.adjacency.clone(),
            ty: PhantomData,
        }
    }
}

impl<T: PartialEq, Ty: EdgeType> PartialEq for Graph<T, Ty> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<T: Eq, Ty: EdgeType> Eq for Graph<T, Ty> {}

impl<T: fmt::Debug, Ty: EdgeType> fmt::Debug for Graph<T, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &Ty::is_directed())
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

impl<T: Ord + Clone, Ty: EdgeType> Extend<(T, T)> for Graph<T, Ty> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (tail, head) in iter {
            self.add_edge(tail, head);
        }
    }
}

impl<T: Ord + Clone, Ty: EdgeType> FromIterator<(T, T)> for Graph<T, Ty> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::infra::{
        proptest::{graph_directed, graph_undirected},
        testing::check_consistency,
    };

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn p(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    #[test]
    fn empty() {
        let graph = Graph::<i32>::new();

        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
        assert!(graph.is_directed());
    }

    #[test]
    fn add_edge_directed() {
        let mut graph = Graph::new_directed();
        graph.add_edge(1, 2);

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.order(), 2);
        assert!(graph.adjacent(&1, &2));
        assert!(!graph.adjacent(&2, &1));
    }

    #[test]
    fn add_edge_undirected() {
        let mut graph = Graph::new_undirected();
        graph.add_edge(1, 2);

        assert_eq!(graph.size(), 2);
        assert_eq!(graph.order(), 2);
        assert!(graph.adjacent(&1, &2));
        assert!(graph.adjacent(&2, &1));
    }

    #[test]
    fn add_node() {
        let mut graph = Graph::new_directed();
        graph.add_node(42);

        assert_eq!(graph.size(), 0);
        assert_eq!(graph.order(), 1);

        graph.add_node(0);
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.order(), 2);

        graph.add_edge(0, 42);
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.order(), 2);

        graph.add_node(42);
        assert_eq!(graph.node_degree(&0), 1);
    }

    #[test]
    fn complex_node() {
        let mut graph = Graph::new_directed();
        graph.add_node(p(-1, -1));
        graph.add_node(p(0, 0));
        graph.add_edge(p(0, 0), p(1, 1));

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.node_degree(&p(0, 0)), 1);
        assert_eq!(graph.node_degree(&p(1, 1)), 0);
        assert!(graph.adjacent(&p(0, 0), &p(1, 1)));
        assert!(!graph.adjacent(&p(1, 1), &p(0, 0)));
    }

    #[test]
    fn absent_node_queries() {
        let mut graph = Graph::new_undirected();
        graph.add_edge(1, 2);

        assert_eq!(graph.node_degree(&7), 0);
        assert!(!graph.adjacent(&7, &1));
        assert!(!graph.contains_node(&7));
        assert_eq!(graph.neighbors(&7).count(), 0);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut graph = Graph::new_undirected();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);

        assert_eq!(graph.size(), 2);
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.node_degree(&1), 1);
    }

    #[test]
    fn self_loop_undirected_counted_once() {
        let mut graph = Graph::new_undirected();
        graph.add_edge(3, 3);

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.order(), 1);
        assert!(graph.adjacent(&3, &3));
    }

    #[test]
    fn neighbors_ascending() {
        let graph: Graph<_, Undirected> = [(5, 3), (5, 9), (1, 5), (5, 7)].into_iter().collect();

        assert_eq!(graph.neighbors(&5).copied().collect::<Vec<_>>(), vec![1, 3, 7, 9]);
        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn borrowed_lookups() {
        let mut graph = Graph::new_directed();
        graph.add_edge(String::from("Prague"), String::from("Vienna"));

        assert!(graph.contains_node("Prague"));
        assert!(graph.adjacent("Prague", "Vienna"));
        assert_eq!(graph.node_degree("Vienna"), 0);
    }

    #[test]
    fn send_sync() {
        fn require_send_sync<G: Send + Sync>(_: &G) {}

        require_send_sync(&Graph::<u32, Undirected>::new());
    }

    proptest! {
        #[test]
        fn proptest_undirected_symmetric(graph in graph_undirected(0u8..24).max_size(48)) {
            for x in graph.nodes() {
                for y in graph.nodes() {
                    prop_assert_eq!(graph.adjacent(x, y), graph.adjacent(y, x));
                }
            }
            prop_assert!(check_consistency(&graph).is_ok());
        }

        #[test]
        fn proptest_directed_consistent(graph in graph_directed(0u8..24).max_size(48)) {
            prop_assert!(check_consistency(&graph).is_ok());
        }

        #[test]
        fn proptest_order_counts_distinct(
            nodes in proptest::collection::vec(0u16..64, 0..32),
            edges in proptest::collection::vec((0u16..64, 0u16..64), 0..64),
        ) {
            let mut graph = Graph::<_, Undirected>::new();
            graph.extend_with_nodes(nodes.iter().copied());
            graph.extend(edges.iter().copied());

            let distinct = nodes
                .iter()
                .copied()
                .chain(edges.iter().flat_map(|&(u, v)| [u, v]))
                .collect::<BTreeSet<_>>();

            prop_assert_eq!(graph.order(), distinct.len());
        }

        #[test]
        fn proptest_add_edge_idempotent(
            edges in proptest::collection::vec((0u16..32, 0u16..32), 0..64),
        ) {
            let once: Graph<_, Directed> = edges.iter().copied().collect();
            let twice: Graph<_, Directed> = edges.iter().chain(edges.iter()).copied().collect();

            prop_assert_eq!(once.order(), twice.order());
            prop_assert_eq!(once.size(), twice.size());
            prop_assert_eq!(once, twice);
        }
    }
}
