use std::collections::HashMap;

pub mod code;
pub mod tree;

pub use code::{encode, generate_code_table, CodeTable};
pub use tree::{build_code_tree, CodeTreeNode};

/// A single character of the input text.
pub type Symbol = char;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: u32,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: u32) -> Self {
        SymbolFrequency { symbol, frequency }
    }
}

/// Output of the compress operation: the encoded bit string together with
/// the code table it was produced from.
#[derive(Debug, Clone, PartialEq)]
pub struct Compression {
    pub encoded: String,
    pub code_table: CodeTable,
}

/// Counts how often each symbol occurs in `text`.
///
/// Entries are ordered by the first appearance of their symbol. Tree
/// construction breaks frequency ties in this order, so the same text always
/// yields the same tree shape.
pub fn build_frequency_table(text: &str) -> Vec<SymbolFrequency> {
    let mut entries: Vec<SymbolFrequency> = Vec::new();
    let mut entry_indices: HashMap<Symbol, usize> = HashMap::new();
    for symbol in text.chars() {
        match entry_indices.get(&symbol) {
            Some(&index) => entries[index].frequency += 1,
            None => {
                entry_indices.insert(symbol, entries.len());
                entries.push(SymbolFrequency::new(symbol, 1));
            }
        }
    }
    entries
}
