use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    EmptyInput,
    UnknownSymbol(char),
    InvalidBit(char),
    TruncatedBitSequence,
    UnknownNode(String),
    NegativeEdgeWeight(String, String, f64),
    EmptyGraph,
    DisconnectedGraph(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Input contains no symbols to build a code tree from")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol '{}' not present in the code table", symbol)
            }
            Self::InvalidBit(character) => {
                write!(
                    f,
                    "Character '{}' does not continue any code word of the tree",
                    character
                )
            }
            Self::TruncatedBitSequence => {
                write!(f, "Bit sequence ended in the middle of a code word")
            }
            Self::UnknownNode(node) => {
                write!(f, "Source node '{}' is not a node of the graph", node)
            }
            Self::NegativeEdgeWeight(from, to, weight) => {
                write!(
                    f,
                    "Edge from '{}' to '{}' has negative weight {}",
                    from, to, weight
                )
            }
            Self::EmptyGraph => {
                write!(f, "Graph contains no nodes")
            }
            Self::DisconnectedGraph(reached, total) => {
                write!(
                    f,
                    "Graph is not connected. Only {} of {} nodes are reachable.",
                    reached, total
                )
            }
        }
    }
}

impl std::error::Error for Error {}
