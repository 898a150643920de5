use std::collections::BTreeSet;

use log::warn;

use crate::error::Error;
use crate::Result;

use super::{DistanceMap, NodeId, WeightedGraph};

/// Computes the shortest distance from `source` to every node of the graph.
///
/// Standard unoptimized Dijkstra: every distance starts at `f64::INFINITY`
/// except the source, a linear scan repeatedly selects the unvisited node
/// with the smallest current distance (the first node in graph iteration
/// order wins ties), and all of its outgoing edges are relaxed. Unreachable
/// nodes stay at `f64::INFINITY` in the returned map. Negative edge weights
/// break the algorithm's correctness and are rejected up front.
pub fn dijkstra(graph: &WeightedGraph, source: &str) -> Result<DistanceMap> {
    if !graph.contains_node(source) {
        return Err(Error::UnknownNode(source.to_owned()));
    }
    reject_negative_weights(graph)?;

    let mut distances: DistanceMap = graph
        .nodes()
        .map(|node| (node.clone(), f64::INFINITY))
        .collect();
    distances.insert(source.to_owned(), 0.0);
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();

    while let Some(current) = select_closest_unvisited(&distances, &visited) {
        let current_distance = distances[&current];
        for (neighbor, weight) in graph.neighbors(&current) {
            if !distances.contains_key(neighbor) {
                warn!(
                    "Skipping edge from '{}' to undeclared node '{}'",
                    current, neighbor
                );
                continue;
            }
            let candidate = current_distance + weight;
            if candidate < distances[neighbor] {
                distances.insert(neighbor.clone(), candidate);
            }
        }
        visited.insert(current);
    }

    Ok(distances)
}

// Linear scan minimum selection. Strict comparison makes the first node in
// map order win ties; nodes still at infinity are unreachable and never
// selected, which terminates the loop on disconnected remainders.
fn select_closest_unvisited(distances: &DistanceMap, visited: &BTreeSet<NodeId>) -> Option<NodeId> {
    let mut closest: Option<(&NodeId, f64)> = None;
    for (node, &distance) in distances.iter() {
        if visited.contains(node) || distance == f64::INFINITY {
            continue;
        }
        if closest.map_or(true, |(_, closest_distance)| distance < closest_distance) {
            closest = Some((node, distance));
        }
    }
    closest.map(|(node, _)| node.clone())
}

fn reject_negative_weights(graph: &WeightedGraph) -> Result<()> {
    for (from, to, weight) in graph.edges() {
        if weight < 0.0 {
            return Err(Error::NegativeEdgeWeight(from.clone(), to.clone(), weight));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::dijkstra;
    use crate::error::Error;
    use crate::graph::WeightedGraph;

    fn line_graph() -> WeightedGraph {
        // A - B - C with weights 1 and 2
        let mut graph = WeightedGraph::new();
        graph.add_undirected_edge("A", "B", 1.0);
        graph.add_undirected_edge("B", "C", 2.0);
        graph
    }

    #[test]
    fn test_distances_along_a_line() {
        let distances = dijkstra(&line_graph(), "A").unwrap();
        assert_eq!(distances[&"A".to_owned()], 0.0);
        assert_eq!(distances[&"B".to_owned()], 1.0);
        assert_eq!(distances[&"C".to_owned()], 3.0);
    }

    #[test]
    fn test_source_distance_is_always_zero() {
        for source in ["A", "B", "C"] {
            let distances = dijkstra(&line_graph(), source).unwrap();
            assert_eq!(
                distances[&source.to_owned()],
                0.0,
                "Distance from {} to itself must be zero",
                source
            );
        }
    }

    #[test]
    fn test_shorter_detour_wins_over_direct_edge() {
        let mut graph = WeightedGraph::new();
        graph.add_undirected_edge("A", "C", 10.0);
        graph.add_undirected_edge("A", "B", 1.0);
        graph.add_undirected_edge("B", "C", 2.0);
        let distances = dijkstra(&graph, "A").unwrap();
        assert_eq!(distances[&"C".to_owned()], 3.0);
    }

    #[test]
    fn test_unreachable_nodes_stay_at_infinity() {
        let mut graph = line_graph();
        graph.add_node("D");
        let distances = dijkstra(&graph, "A").unwrap();
        assert_eq!(distances[&"D".to_owned()], f64::INFINITY);
        assert_eq!(distances.len(), 4, "Map must cover every node");
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let result = dijkstra(&line_graph(), "X");
        assert_eq!(result, Err(Error::UnknownNode("X".to_owned())));
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut graph = line_graph();
        graph.add_edge("C", "A", -1.0);
        let result = dijkstra(&graph, "A");
        assert_eq!(
            result,
            Err(Error::NegativeEdgeWeight(
                "C".to_owned(),
                "A".to_owned(),
                -1.0
            ))
        );
    }

    #[test]
    fn test_edge_to_undeclared_node_is_skipped() {
        let mut graph = line_graph();
        graph.add_edge("C", "Ghost", 1.0);
        let distances = dijkstra(&graph, "A").unwrap();
        assert!(!distances.contains_key(&"Ghost".to_owned()));
    }

    #[test]
    fn test_single_node_graph() {
        let mut graph = WeightedGraph::new();
        graph.add_node("A");
        let distances = dijkstra(&graph, "A").unwrap();
        assert_eq!(distances.len(), 1);
        assert_eq!(distances[&"A".to_owned()], 0.0);
    }
}
