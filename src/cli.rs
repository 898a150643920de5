use std::ffi::OsString;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches, Command,
};

use crate::graph::WeightedGraph;
use crate::Operation;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_subcommands(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Operation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_operation(&matches)
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .subcommand_required(true)
            .arg_required_else_help(true)
    }

    fn register_subcommands(command: Command) -> Command {
        command
            .subcommand(Self::create_compress_command())
            .subcommand(Self::create_sort_command())
            .subcommand(Self::create_shortest_path_command())
            .subcommand(Self::create_minimum_spanning_tree_command())
    }

    fn create_compress_command() -> Command {
        Command::new("compress")
            .about("Huffman-encode a text and print the code table")
            .arg(Self::create_text_argument())
    }

    fn create_sort_command() -> Command {
        Command::new("sort")
            .about("Quicksort a sequence of numbers")
            .arg(Self::create_values_argument())
    }

    fn create_shortest_path_command() -> Command {
        Command::new("shortest-path")
            .about("Shortest distances from a source node (Dijkstra)")
            .arg(Self::create_graph_argument())
            .arg(Self::create_source_argument())
    }

    fn create_minimum_spanning_tree_command() -> Command {
        Command::new("minimum-spanning-tree")
            .about("Minimum spanning tree of a connected graph (Prim)")
            .arg(Self::create_graph_argument())
    }

    fn create_text_argument() -> Arg {
        Arg::new("text").help("Text to encode").required(true)
    }

    fn create_values_argument() -> Arg {
        Arg::new("values")
            .help("Space separated numeric values, e.g. \"3 1 2\"")
            .value_parser(parse_values)
            .required(true)
    }

    fn create_graph_argument() -> Arg {
        Arg::new("graph")
            .help("Graph as JSON object, e.g. {\"A\":{\"B\":1},\"B\":{\"A\":1}}")
            .value_parser(parse_graph)
            .required(true)
    }

    fn create_source_argument() -> Arg {
        Arg::new("source")
            .help("Source node identifier")
            .required(true)
    }

    fn extract_operation(matches: &ArgMatches) -> Operation {
        match matches.subcommand() {
            Some(("compress", submatches)) => Operation::Compress {
                text: Self::extract_text_argument(submatches),
            },
            Some(("sort", submatches)) => Operation::Sort {
                values: Self::extract_values_argument(submatches),
            },
            Some(("shortest-path", submatches)) => Operation::ShortestPath {
                graph: Self::extract_graph_argument(submatches),
                source: Self::extract_source_argument(submatches),
            },
            Some(("minimum-spanning-tree", submatches)) => Operation::MinimumSpanningTree {
                graph: Self::extract_graph_argument(submatches),
            },
            _ => unreachable!("Subcommand is required"),
        }
    }

    fn extract_text_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("text")
            .expect("Required argument text not provided")
            .clone()
    }

    fn extract_values_argument(matches: &ArgMatches) -> Vec<f64> {
        matches
            .get_one::<Vec<f64>>("values")
            .expect("Required argument values not provided")
            .clone()
    }

    fn extract_graph_argument(matches: &ArgMatches) -> WeightedGraph {
        matches
            .get_one::<WeightedGraph>("graph")
            .expect("Required argument graph not provided")
            .clone()
    }

    fn extract_source_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("source")
            .expect("Required argument source not provided")
            .clone()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_values(raw: &str) -> Result<Vec<f64>, String> {
    raw.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|e| format!("'{}' is not a number: {}", token, e))
        })
        .collect()
}

fn parse_graph(raw: &str) -> Result<WeightedGraph, String> {
    serde_json::from_str(raw).map_err(|e| format!("Graph is not a valid JSON object: {}", e))
}
