use log::{debug, info};

pub use cli::CLIParser;
pub use huffman::Compression;

use graph::{DistanceMap, SpanningTree, WeightedGraph};

mod cli;
pub mod error;
pub mod graph;
pub mod huffman;
mod logger;
pub mod sorting;

pub type Result<T> = std::result::Result<T, error::Error>;

/// One parsed user action, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Compress { text: String },
    Sort { values: Vec<f64> },
    ShortestPath { graph: WeightedGraph, source: String },
    MinimumSpanningTree { graph: WeightedGraph },
}

/// Huffman-encodes `text` and returns the bit string together with the code
/// table it was produced from.
pub fn compress(text: &str) -> Result<Compression> {
    let frequencies = huffman::build_frequency_table(text);
    let root = huffman::build_code_tree(&frequencies)?;
    debug!("Code tree for {} distinct symbols:\n{}", frequencies.len(), root);
    let code_table = huffman::generate_code_table(&root);
    let encoded = huffman::encode(text, &code_table)?;
    info!(
        "Compressed {} symbols into {} bits",
        text.chars().count(),
        encoded.len()
    );
    Ok(Compression {
        encoded,
        code_table,
    })
}

/// Sorts a sequence of numbers ascending.
pub fn sort_values(values: &[f64]) -> Vec<f64> {
    sorting::quicksort(values)
}

/// Computes the shortest distance from `source` to every node of the graph.
pub fn shortest_path(graph: &WeightedGraph, source: &str) -> Result<DistanceMap> {
    graph::dijkstra(graph, source)
}

/// Builds a minimum spanning tree of a connected graph.
pub fn minimum_spanning_tree(graph: &WeightedGraph) -> Result<SpanningTree> {
    graph::prim_mst(graph)
}

/// Runs one operation and renders its result as a printable report.
pub fn run(operation: &Operation) -> Result<String> {
    match operation {
        Operation::Compress { text } => {
            let compression = compress(text)?;
            Ok(render_compression(&compression))
        }
        Operation::Sort { values } => Ok(render_sorted(&sort_values(values))),
        Operation::ShortestPath { graph, source } => {
            let distances = shortest_path(graph, source)?;
            Ok(render_distances(&distances))
        }
        Operation::MinimumSpanningTree { graph } => {
            let tree = minimum_spanning_tree(graph)?;
            Ok(render_spanning_tree(&tree))
        }
    }
}

fn render_compression(compression: &Compression) -> String {
    let mut report = String::from("Code table:\n");
    for (symbol, code) in compression.code_table.iter() {
        report.push_str(&format!("  '{}': {}\n", symbol, code));
    }
    report.push_str(&format!("Encoded: {}", compression.encoded));
    report
}

fn render_sorted(values: &[f64]) -> String {
    let rendered: Vec<String> = values.iter().map(f64::to_string).collect();
    format!("Sorted: {}", rendered.join(" "))
}

fn render_distances(distances: &DistanceMap) -> String {
    let mut report = String::from("Distances from source:\n");
    for (node, &distance) in distances.iter() {
        if distance == f64::INFINITY {
            report.push_str(&format!("  {}: unreachable\n", node));
        } else {
            report.push_str(&format!("  {}: {}\n", node, distance));
        }
    }
    report.pop();
    report
}

fn render_spanning_tree(tree: &SpanningTree) -> String {
    let mut report = String::from("Minimum spanning tree:\n");
    for edge in tree.iter() {
        report.push_str(&format!("  {} -- {} ({})\n", edge.from, edge.to, edge.weight));
    }
    let total_weight: f64 = tree.iter().map(|edge| edge.weight).sum();
    report.push_str(&format!("Total weight: {}", total_weight));
    report
}
