use std::collections::BTreeMap;

use serde::Deserialize;

pub mod shortest_path;
pub mod spanning_tree;

pub use shortest_path::dijkstra;
pub use spanning_tree::prim_mst;

pub type NodeId = String;
pub type Weight = f64;

/// Shortest known distance from the source per node. Unreachable nodes carry
/// `f64::INFINITY`.
pub type DistanceMap = BTreeMap<NodeId, f64>;

/// One edge of a spanning tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// Ordered sequence of spanning edges, node count − 1 of them for a
/// connected graph.
pub type SpanningTree = Vec<SpanningEdge>;

/// Weighted adjacency: node id to neighbor id to edge weight.
///
/// The adjacency is directed; undirected use is achieved by supplying
/// symmetric entries (`add_undirected_edge` does so). Nodes iterate in
/// lexicographic id order, which is the documented deterministic tie-break
/// order for both graph algorithms. Deserializes from the JSON object form
/// `{"A":{"B":1.0},...}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct WeightedGraph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, Weight>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Declares a node without edges. Existing adjacency is kept.
    pub fn add_node(&mut self, id: &str) {
        self.adjacency.entry(id.to_owned()).or_default();
    }

    /// Adds a directed edge. The origin is declared as a node; the target is
    /// not, matching the textual input form where a target may name a node
    /// that never appears as a key.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) {
        self.adjacency
            .entry(from.to_owned())
            .or_default()
            .insert(to.to_owned(), weight);
    }

    /// Adds symmetric edges in both directions, declaring both endpoints.
    pub fn add_undirected_edge(&mut self, first: &str, second: &str, weight: Weight) {
        self.add_edge(first, second, weight);
        self.add_edge(second, first, weight);
    }

    /// Node ids in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Outgoing edges of a node in lexicographic target order; empty if the
    /// node is unknown.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&NodeId, Weight)> {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(|(neighbor, weight)| (neighbor, *weight))
    }

    /// All directed edges as (from, to, weight) triples.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, Weight)> {
        self.adjacency.iter().flat_map(|(from, neighbors)| {
            neighbors
                .iter()
                .map(move |(to, weight)| (from, to, *weight))
        })
    }
}
