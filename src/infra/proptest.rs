use std::{fmt, marker::PhantomData};

use proptest::{
    collection,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::{
    core::marker::{Directed, EdgeType, Undirected},
    graph::Graph,
};

pub fn graph<S: Strategy, Ty: EdgeType>(node: S) -> GraphStrategy<S, Ty> {
    GraphStrategy::new(node)
}

pub fn graph_undirected<S: Strategy>(node: S) -> GraphStrategy<S, Undirected> {
    graph(node)
}

pub fn graph_directed<S: Strategy>(node: S) -> GraphStrategy<S, Directed> {
    graph(node)
}

pub struct GraphStrategy<S: Strategy, Ty: EdgeType> {
    node: S,
    ty: PhantomData<Ty>,
    params: StrategyParams,
}

// Ty is phantom data, we should not require Debug bound on it.
impl<S: Strategy, Ty: EdgeType> fmt::Debug for GraphStrategy<S, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("node", &self.node)
            .field("directed", &Ty::is_directed())
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<S: Strategy, Ty: EdgeType> GraphStrategy<S, Ty> {
    pub fn new(node: S) -> Self {
        Self::with_params(node, StrategyParams::default())
    }

    pub fn with_params(node: S, params: StrategyParams) -> Self {
        Self {
            node,
            ty: PhantomData,
            params,
        }
    }

    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(max_isolated, max_isolated: usize);
    delegate_builder_fn!(connected);
}

impl<S, Ty> Strategy for GraphStrategy<S, Ty>
where
    S: Strategy + Clone + 'static,
    S::Value: Ord + Clone,
    Ty: EdgeType,
{
    type Tree = Box<dyn ValueTree<Value = Self::Value>>;
    type Value = Graph<S::Value, Ty>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let StrategyParams {
            max_size,
            max_isolated,
            connected,
        } = self.params;

        (
            collection::vec((self.node.clone(), self.node.clone()), 0..=max_size),
            collection::vec(self.node.clone(), 0..=max_isolated),
        )
            .prop_map(move |(edges, isolated)| {
                let mut graph = Graph::<S::Value, Ty>::new();
                graph.extend(edges);
                graph.extend_with_nodes(isolated);

                if connected {
                    let nodes = graph.nodes().cloned().collect::<Vec<_>>();
                    graph.extend(nodes.windows(2).map(|w| (w[0].clone(), w[1].clone())));
                }

                graph
            })
            .boxed()
            .new_tree(runner)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    max_isolated: usize,
    connected: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            max_isolated: 4,
            connected: false,
        }
    }
}

impl StrategyParams {
    /// Maximum number of generated edges. Duplicates collapse, so the actual
    /// number might be lower.
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Maximum number of nodes added without any edge.
    pub fn max_isolated(self, max_isolated: usize) -> Self {
        Self {
            max_isolated,
            ..self
        }
    }

    /// Links the nodes in ascending order so that every node is reachable
    /// from the smallest one.
    pub fn connected(self) -> Self {
        Self {
            connected: true,
            ..self
        }
    }
}
