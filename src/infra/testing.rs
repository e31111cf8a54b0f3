use thiserror::Error;

use crate::{core::marker::EdgeType, graph::Graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsistencyCheckError {
    #[error("neighbor of node {0} (zero-based) is not a node of the graph")]
    NeighborAbsent(usize),
    #[error("edge from node {0} to node {1} (zero-based) has no reverse counterpart")]
    AsymmetricEdge(usize, usize),
    #[error("sum of degrees ({0}) is not equal to size ({1})")]
    DegreeSumSizeMismatch(usize, usize),
    #[error("size without self-loops ({0}) is odd in an undirected graph")]
    OddUndirectedSize(usize),
}

/// Checks the structural invariants of the graph: every neighbor is a node,
/// undirected edges are stored in both endpoints and the size agrees with
/// degrees.
pub fn check_consistency<T, Ty>(graph: &Graph<T, Ty>) -> Result<(), ConsistencyCheckError>
where
    T: Ord,
    Ty: EdgeType,
{
    let position = |node: &T| graph.nodes().position(|other| other == node);

    let mut deg_sum = 0;
    let mut loops = 0;

    for (i, x) in graph.nodes().enumerate() {
        deg_sum += graph.node_degree(x);

        for y in graph.neighbors(x) {
            let j = position(y).ok_or(ConsistencyCheckError::NeighborAbsent(i))?;

            if x == y {
                loops += 1;
            } else if !graph.is_directed() && !graph.adjacent(y, x) {
                return Err(ConsistencyCheckError::AsymmetricEdge(i, j));
            }
        }
    }

    let size = graph.size();

    if deg_sum != size {
        return Err(ConsistencyCheckError::DegreeSumSizeMismatch(deg_sum, size));
    }

    // Handshaking lemma. Self-loops are stored only once.
    if !graph.is_directed() && (size - loops) % 2 != 0 {
        return Err(ConsistencyCheckError::OddUndirectedSize(size - loops));
    }

    Ok(())
}
