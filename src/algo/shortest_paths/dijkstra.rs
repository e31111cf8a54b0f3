use std::{
    cmp::Reverse,
    collections::{btree_map::Entry, BTreeMap, BTreeSet, BinaryHeap},
};

use tracing::{debug, trace, warn};

use crate::{
    core::{
        marker::EdgeType,
        weight::{GetWeight, Weight},
    },
    graph::Graph,
};

use super::{Error, ShortestPaths};

pub fn dijkstra<T, Ty, W, F>(
    graph: &Graph<T, Ty>,
    source: T,
    goal: Option<T>,
    edge_weight: F,
) -> Result<ShortestPaths<T, W>, Error>
where
    T: Ord + Clone,
    Ty: EdgeType,
    W: Weight,
    F: GetWeight<T, W>,
{
    if !graph.contains_node(&source) {
        return Err(Error::SourceAbsent);
    }

    if let Some(ref goal) = goal {
        if !graph.contains_node(goal) {
            return Err(Error::GoalAbsent);
        }
    }

    debug!(
        order = graph.order(),
        directed = graph.is_directed(),
        has_goal = goal.is_some(),
        "running dijkstra"
    );

    // A constant weight is checked for negativity just once.
    let const_weight = edge_weight.get_const();
    let check_negative = match const_weight {
        Some(ref weight) if *weight < W::zero() => {
            warn!("constant edge weight is negative");
            return Err(Error::NegativeWeight);
        }
        Some(_) => false,
        None => !W::is_unsigned(),
    };

    let mut visited = BTreeSet::new();
    let mut dist = BTreeMap::new();
    let mut pred = BTreeMap::new();

    // The queue is ordered by the distance first and by the node second, so
    // that ties are always popped in ascending order of the nodes.
    let mut queue = BinaryHeap::new();

    dist.insert(source.clone(), W::zero());
    queue.push(Reverse((W::Ord::from(W::zero()), source.clone())));

    while let Some(Reverse((node_dist, node))) = queue.pop() {
        // This can happen due to duplication of nodes when doing relaxation
        // in our implementation.
        if visited.contains(&node) {
            continue;
        }

        if goal.as_ref() == Some(&node) {
            // Mark as visited, because below is a test that checks that goal
            // was visited.
            visited.insert(node);
            break;
        }

        let node_dist: W = node_dist.into();

        for next in graph.neighbors(&node) {
            if visited.contains(next) {
                continue;
            }

            let edge_dist = match const_weight {
                Some(ref weight) => weight.clone(),
                None => edge_weight.get(&node, next),
            };

            if check_negative && edge_dist < W::zero() {
                warn!(reached = dist.len(), "edge with negative weight encountered");
                return Err(Error::NegativeWeight);
            }

            let Some(next_dist) = node_dist.clone().checked_add(edge_dist) else {
                warn!(reached = dist.len(), "path weight overflowed");
                return Err(Error::WeightOverflow);
            };

            match dist.entry(next.clone()) {
                Entry::Occupied(mut curr_dist) => {
                    // Relaxation operation. Only a strictly better distance
                    // replaces the current one, so that the path discovered
                    // first wins a tie.
                    if next_dist < *curr_dist.get() {
                        curr_dist.insert(next_dist.clone());
                        // A textbook version of the algorithm would update the
                        // priority of `next`. Adding it as a new item causes
                        // duplicities which is unfortunate for dense graphs,
                        // but should be fine in practice.
                        queue.push(Reverse((next_dist.into(), next.clone())));
                        pred.insert(next.clone(), node.clone());
                        trace!(queued = queue.len(), "relaxed improved distance");
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist.clone());
                    queue.push(Reverse((next_dist.into(), next.clone())));
                    pred.insert(next.clone(), node.clone());
                    trace!(queued = queue.len(), "reached new node");
                }
            }
        }

        // The node is finished.
        visited.insert(node);
    }

    if let Some(ref goal) = goal {
        if !visited.contains(goal) {
            debug!(finished = visited.len(), "goal not reached");
            return Err(Error::GoalNotReached);
        }
    }

    debug!(
        finished = visited.len(),
        reached = dist.len(),
        "dijkstra finished"
    );

    Ok(ShortestPaths { source, dist, pred })
}
