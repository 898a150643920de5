use std::collections::BTreeSet;

use log::warn;

use crate::error::Error;
use crate::Result;

use super::{NodeId, SpanningEdge, SpanningTree, WeightedGraph};

/// Builds a minimum spanning tree with Prim's algorithm.
///
/// Grows the tree from the first node in graph iteration order: each round
/// scans all edges crossing from a visited node to an unvisited declared
/// node, takes the minimum weight (the first-encountered edge wins ties, in
/// the iteration order documented on `WeightedGraph`), and marks its target
/// visited. The result holds node count − 1 edges in the order they were
/// added. A disconnected graph stalls before the tree is complete and is
/// reported as an error instead of a partial tree.
pub fn prim_mst(graph: &WeightedGraph) -> Result<SpanningTree> {
    let start = graph.nodes().next().ok_or(Error::EmptyGraph)?;
    let mut visited: BTreeSet<NodeId> = BTreeSet::from([start.clone()]);
    let mut tree = SpanningTree::new();
    let node_count = graph.node_count();

    while tree.len() < node_count - 1 {
        let edge = select_minimum_crossing_edge(graph, &visited)
            .ok_or(Error::DisconnectedGraph(visited.len(), node_count))?;
        visited.insert(edge.to.clone());
        tree.push(edge);
    }

    Ok(tree)
}

fn select_minimum_crossing_edge(
    graph: &WeightedGraph,
    visited: &BTreeSet<NodeId>,
) -> Option<SpanningEdge> {
    let mut minimum: Option<SpanningEdge> = None;
    for from in visited.iter() {
        for (to, weight) in graph.neighbors(from) {
            if visited.contains(to) {
                continue;
            }
            if !graph.contains_node(to) {
                warn!("Skipping edge from '{}' to undeclared node '{}'", from, to);
                continue;
            }
            // Strict comparison keeps the first-encountered edge on ties.
            if minimum.as_ref().map_or(true, |edge| weight < edge.weight) {
                minimum = Some(SpanningEdge {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                });
            }
        }
    }
    minimum
}
